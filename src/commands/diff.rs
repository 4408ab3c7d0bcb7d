//! Main diff command

use crate::collector::collect;
use crate::report::Reporter;
use crate::store::{DiffKind, DiffStore};
use crate::types::{DriftError, Side};
use crate::Config;
use std::path::Path;

/// Where debug mode persists the raw side tables
const TABLE_DUMP_FILE: &str = "treedrift-tables.json";

/// Run one comparison: collect both sides, load them, report.
///
/// Sides are collected sequentially, A fully before B. The traversals are
/// independent so this could run them in parallel, but output depends only
/// on the store's path ordering, so nothing would change except wall time.
pub fn run(config: Config) -> Result<(), DriftError> {
    let mut store = DiffStore::new();
    store.load(Side::A, collect(&config.source_a)?)?;
    store.load(Side::B, collect(&config.source_b)?)?;

    let reporter = Reporter::new(config.quiet, config.debug);

    // Fixed category order: path-level diff, then ownership, access, size.
    if !config.suppress_paths {
        reporter.export("only a", "< ", &store.only(Side::A)?);
        reporter.export("only b", "> ", &store.only(Side::B)?);
        reporter.export("common", "= ", &store.common()?);
    }
    if !config.suppress_owner {
        reporter.export("diff owner", "<o> ", &store.differing(DiffKind::Owner)?);
    }
    if !config.suppress_perms {
        reporter.export("diff perm", "<p> ", &store.differing(DiffKind::Permissions)?);
    }
    if !config.suppress_size {
        reporter.export("diff size", "<s> ", &store.differing(DiffKind::Size)?);
    }

    if config.debug {
        persist_tables(&store, Path::new(TABLE_DUMP_FILE))?;
        eprintln!("Raw metadata tables written to {}", TABLE_DUMP_FILE);
    }

    Ok(())
}

/// Write both raw side tables as pretty JSON for manual follow-up queries.
fn persist_tables(store: &DiffStore, path: &Path) -> Result<(), DriftError> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &store.export_tables())
        .map_err(|e| DriftError::Io(e.into()))?;
    Ok(())
}
