//! Metadata collection
//!
//! Each side's listing comes from an external traversal process: plain
//! `find` for a local root, `find` executed over ssh for a remote one.
//! The process's stdout is consumed line by line, so a side can be loaded
//! into the store without ever materializing the full text in memory.

use crate::types::{DriftError, MetaEntry, SourceSpec};
use std::io::{BufRead, BufReader, Lines};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Printf format handed to `find`: the six tab-separated fields, with %P
/// making every path relative to the traversal root.
const PRINTF_FORMAT: &str = r"%P\t%y\t%u\t%g\t%m\t%s\n";

/// Start the traversal for a source and return the record stream.
pub fn collect(source: &SourceSpec) -> Result<MetaStream, DriftError> {
    let command = traversal_command(source);
    MetaStream::spawn(command)
}

/// Build the external traversal command for a source.
///
/// Local roots run `find ROOT -xdev` directly, with stderr discarded so
/// permission-denied noise does not pollute the report. Remote roots run
/// the same `find` on the far host through ssh, with the stderr redirect
/// folded into the remote command line; ssh's own diagnostics stay on our
/// stderr so connection failures remain visible.
fn traversal_command(source: &SourceSpec) -> Command {
    match source {
        SourceSpec::Local(root) => {
            let mut command = Command::new("find");
            command
                .arg(root.as_str())
                .arg("-xdev")
                .arg("-printf")
                .arg(PRINTF_FORMAT)
                .stderr(Stdio::null());
            command
        }
        SourceSpec::Remote { target, path } => {
            let mut command = Command::new("ssh");
            command.arg(target).arg(format!(
                "find {} -xdev -printf '{}' 2>/dev/null",
                path, PRINTF_FORMAT
            ));
            command
        }
    }
}

fn render_command(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();
    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}

/// Lazy, single-pass stream of [`MetaEntry`] records from a traversal
/// process.
///
/// The very first output line is always discarded: `%P` prints the root
/// itself as an empty relative path, and the root entry is by contract
/// never part of a side's collection.
///
/// When stdout is exhausted the child is reaped; a non-zero exit status
/// becomes a final [`DriftError::Traversal`] item, so records yielded
/// before the failure are preserved but the failure itself is never
/// swallowed.
pub struct MetaStream {
    command: String,
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
    skipped_root: bool,
    finished: bool,
}

impl MetaStream {
    fn spawn(mut command: Command) -> Result<Self, DriftError> {
        let rendered = render_command(&command);
        let mut child = command.stdout(Stdio::piped()).spawn()?;
        let stdout = child.stdout.take().ok_or_else(|| {
            std::io::Error::other(format!("no stdout pipe for: {}", rendered))
        })?;

        Ok(Self {
            command: rendered,
            child,
            lines: BufReader::new(stdout).lines(),
            skipped_root: false,
            finished: false,
        })
    }

    /// Reap the child and turn a non-zero exit into an error.
    fn finish(&mut self) -> Option<Result<MetaEntry, DriftError>> {
        self.finished = true;
        match self.child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Err(DriftError::Traversal {
                command: self.command.clone(),
                status: status.to_string(),
            })),
            Err(e) => Some(Err(e.into())),
        }
    }
}

impl Iterator for MetaStream {
    type Item = Result<MetaEntry, DriftError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.skipped_root {
            self.skipped_root = true;
            match self.lines.next() {
                Some(Ok(_root_line)) => {}
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
                // No output at all; fall through and report the exit status.
                None => return self.finish(),
            }
        }

        match self.lines.next() {
            Some(Ok(line)) => Some(MetaEntry::parse_record(&line)),
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e.into()))
            }
            None => self.finish(),
        }
    }
}

impl Drop for MetaStream {
    fn drop(&mut self) {
        // If the consumer bailed early the child may still be running.
        if !self.finished {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}
