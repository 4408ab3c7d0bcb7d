//! MetaEntry - One filesystem object's metadata as reported by the traversal

use super::DriftError;
use serde::{Deserialize, Serialize};

/// Number of tab-separated fields in a traversal record
const FIELD_COUNT: usize = 6;

/// Metadata for a single filesystem object, relative to its traversal root.
///
/// Every field is kept as text exactly as the traversal reported it. The
/// comparison engine only ever tests fields for equality, so parsing sizes
/// or modes into numbers would add failure cases without adding precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaEntry {
    /// Relative path from the traversal root (the join key between sides)
    pub path: String,

    /// Single-character type code (`f` file, `d` directory, `l` symlink, ...)
    pub file_type: String,

    /// Owning user name
    pub user: String,

    /// Owning group name
    pub group: String,

    /// Permission bits, octal-like text (e.g. "644", "2755")
    pub mode: String,

    /// Size in bytes, kept as text
    pub size: String,
}

impl MetaEntry {
    /// Parse one tab-separated traversal line into a MetaEntry.
    ///
    /// The line must split into exactly six fields in the order
    /// `path, type, user, group, mode, size`. Anything else is a fatal
    /// [`DriftError::MalformedRecord`] carrying the offending line, so a
    /// truncated or garbled traversal never silently produces a bogus entry.
    pub fn parse_record(line: &str) -> Result<Self, DriftError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(DriftError::MalformedRecord {
                line: line.to_string(),
                fields: fields.len(),
            });
        }

        Ok(Self {
            path: fields[0].to_string(),
            file_type: fields[1].to_string(),
            user: fields[2].to_string(),
            group: fields[3].to_string(),
            mode: fields[4].to_string(),
            size: fields[5].to_string(),
        })
    }
}
