//! Command implementations

pub mod diff;
