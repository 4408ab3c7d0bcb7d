//! Configuration management

use crate::types::{DriftError, SourceSpec};
use clap::Parser;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "treedrift",
    version,
    about = "Audit ownership, permission and size drift between two directory trees"
)]
pub struct Cli {
    /// Debug only: preview results and persist the raw metadata tables
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Quiet output: bare paths, no headers, no markers
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Suppress path diffs (only-A, only-B, common)
    #[arg(short = '1')]
    pub no_path_diff: bool,

    /// Suppress ownership diffs (user, group)
    #[arg(short = '2')]
    pub no_owner_diff: bool,

    /// Suppress access diffs (rwx for users, groups and others)
    #[arg(short = '3')]
    pub no_perm_diff: bool,

    /// Suppress file size diffs
    #[arg(short = '4')]
    pub no_size_diff: bool,

    /// Local or remote path (user@host:path)
    pub path1: String,

    /// Local or remote path (user@host:path)
    pub path2: String,
}

/// Validated configuration for one comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Side A source
    pub source_a: SourceSpec,

    /// Side B source
    pub source_b: SourceSpec,

    /// Preview results and persist raw tables instead of full listings
    pub debug: bool,

    /// Bare paths only
    pub quiet: bool,

    /// Suppress the path-level diff block (only-A, only-B, common)
    pub suppress_paths: bool,

    /// Suppress the ownership diff block
    pub suppress_owner: bool,

    /// Suppress the permission diff block
    pub suppress_perms: bool,

    /// Suppress the size diff block
    pub suppress_size: bool,
}

impl TryFrom<Cli> for Config {
    type Error = DriftError;

    /// Validate both positionals up front, before any collection starts.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let source_a = SourceSpec::parse(&cli.path1)?;
        let source_b = SourceSpec::parse(&cli.path2)?;

        Ok(Self {
            source_a,
            source_b,
            debug: cli.debug,
            quiet: cli.quiet,
            suppress_paths: cli.no_path_diff,
            suppress_owner: cli.no_owner_diff,
            suppress_perms: cli.no_perm_diff,
            suppress_size: cli.no_size_diff,
        })
    }
}
