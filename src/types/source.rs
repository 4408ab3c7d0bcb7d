//! SourceSpec - Where a side's metadata comes from

use super::DriftError;
use camino::Utf8PathBuf;
use std::fmt;

/// A validated source specifier: a local directory, or a `user@host:path`
/// target to traverse over ssh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    /// An existing local path
    Local(Utf8PathBuf),

    /// A remote tree: `target` is the `user@host` part handed to ssh,
    /// `path` the directory on that host
    Remote { target: String, path: String },
}

impl SourceSpec {
    /// Parse and validate a raw CLI positional.
    ///
    /// A specifier is remote when it looks like `user@host:path`: it must
    /// contain both `@` and `:`, must not start with `@`, and must be longer
    /// than three characters. The check is purely syntactic; no connection
    /// to the host is attempted here. Anything that fails the remote shape
    /// is treated as a local path and must exist on this machine.
    pub fn parse(raw: &str) -> Result<Self, DriftError> {
        if Self::looks_remote(raw) {
            // Split at the first ':' only, so paths containing ':' survive.
            let (target, path) = match raw.split_once(':') {
                Some(parts) => parts,
                None => unreachable!("looks_remote guarantees a ':'"),
            };
            return Ok(SourceSpec::Remote {
                target: target.to_string(),
                path: path.to_string(),
            });
        }

        let path = Utf8PathBuf::from(raw);
        if path.as_std_path().exists() {
            Ok(SourceSpec::Local(path))
        } else {
            Err(DriftError::InvalidSource(raw.to_string()))
        }
    }

    fn looks_remote(raw: &str) -> bool {
        raw.contains('@') && raw.contains(':') && !raw.starts_with('@') && raw.len() > 3
    }

    /// True for the `user@host:path` form
    pub fn is_remote(&self) -> bool {
        matches!(self, SourceSpec::Remote { .. })
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Local(path) => write!(f, "{}", path),
            SourceSpec::Remote { target, path } => write!(f, "{}:{}", target, path),
        }
    }
}
