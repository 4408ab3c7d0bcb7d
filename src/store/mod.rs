//! Comparison store
//!
//! Two path-keyed tables (sides A and B) plus the set queries the reporter
//! runs against them. Tables are ordered maps, so every query result comes
//! back path-sorted and the report is deterministic regardless of traversal
//! order.

use crate::types::{DriftError, MetaEntry, Side};
use std::collections::BTreeMap;

/// Which attribute comparison a [`DiffStore::differing`] query applies to
/// each path present on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// Owner user, permission bits, size, or type code differ
    Any,

    /// Owner user or group differ
    Owner,

    /// Permission bits differ
    Permissions,

    /// Size differs
    Size,
}

impl DiffKind {
    /// Compare the A-side and B-side records for one path.
    ///
    /// The size predicate really does compare sizes here. The tool this
    /// replaces compared permission bits in its size query; that was a
    /// defect, not intent, and is fixed rather than reproduced.
    pub fn differs(self, a: &MetaEntry, b: &MetaEntry) -> bool {
        match self {
            DiffKind::Any => {
                a.mode != b.mode || a.size != b.size || a.file_type != b.file_type || a.user != b.user
            }
            DiffKind::Owner => a.user != b.user || a.group != b.group,
            DiffKind::Permissions => a.mode != b.mode,
            DiffKind::Size => a.size != b.size,
        }
    }
}

type SideTable = BTreeMap<String, MetaEntry>;

/// In-memory relational store for one comparison run.
///
/// Lifecycle: [`load`](DiffStore::load) each side exactly once, then query.
/// Queries are pure reads and recompute their result every call; nothing
/// mutates the tables after load.
#[derive(Debug, Default)]
pub struct DiffStore {
    table_a: Option<SideTable>,
    table_b: Option<SideTable>,
}

impl DiffStore {
    /// Create a store with no sides loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize an entry stream into the table for `side`.
    ///
    /// Consumes the stream exactly once. The first stream error aborts the
    /// load and is returned as-is, so a traversal failure or malformed
    /// record is never papered over with a partial table. Loading a side
    /// that is already loaded is rejected.
    ///
    /// Returns the number of entries loaded.
    pub fn load<I>(&mut self, side: Side, entries: I) -> Result<usize, DriftError>
    where
        I: IntoIterator<Item = Result<MetaEntry, DriftError>>,
    {
        if self.slot(side).is_some() {
            return Err(DriftError::SideAlreadyLoaded(side));
        }

        let mut table = SideTable::new();
        for entry in entries {
            let entry = entry?;
            table.insert(entry.path.clone(), entry);
        }

        let count = table.len();
        *self.slot_mut(side) = Some(table);
        Ok(count)
    }

    fn slot(&self, side: Side) -> &Option<SideTable> {
        match side {
            Side::A => &self.table_a,
            Side::B => &self.table_b,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<SideTable> {
        match side {
            Side::A => &mut self.table_a,
            Side::B => &mut self.table_b,
        }
    }

    fn table(&self, side: Side) -> Result<&SideTable, DriftError> {
        self.slot(side).as_ref().ok_or(DriftError::SideNotLoaded(side))
    }

    /// Paths present on `side` but absent from the other side, path-sorted.
    pub fn only(&self, side: Side) -> Result<Vec<String>, DriftError> {
        let ours = self.table(side)?;
        let theirs = self.table(side.other())?;

        Ok(ours
            .keys()
            .filter(|path| !theirs.contains_key(*path))
            .cloned()
            .collect())
    }

    /// Paths present on both sides, path-sorted.
    pub fn common(&self) -> Result<Vec<String>, DriftError> {
        self.matching(|_, _| true)
    }

    /// Paths present on both sides whose paired records differ under
    /// `kind`, path-sorted.
    pub fn differing(&self, kind: DiffKind) -> Result<Vec<String>, DriftError> {
        self.matching(|a, b| kind.differs(a, b))
    }

    fn matching<F>(&self, predicate: F) -> Result<Vec<String>, DriftError>
    where
        F: Fn(&MetaEntry, &MetaEntry) -> bool,
    {
        let table_a = self.table(Side::A)?;
        let table_b = self.table(Side::B)?;

        Ok(table_a
            .iter()
            .filter_map(|(path, a)| {
                table_b
                    .get(path)
                    .filter(|b| predicate(a, b))
                    .map(|_| path.clone())
            })
            .collect())
    }

    /// Both raw tables as JSON, for the debug dump. Unloaded sides render
    /// as null.
    pub fn export_tables(&self) -> serde_json::Value {
        serde_json::json!({
            "A": self.table_a,
            "B": self.table_b,
        })
    }
}
