//! Core types for treedrift

pub mod entry;
pub mod error;
pub mod source;

pub use entry::MetaEntry;
pub use error::DriftError;
pub use source::SourceSpec;

use std::fmt;

/// Label for one of the two trees being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The opposite side
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}
