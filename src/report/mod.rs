//! Result reporting
//!
//! Each query result is emitted as one labeled block. Normal mode prints a
//! header plus one marker-prefixed path per line; quiet mode prints bare
//! paths only; debug mode prints a truncated preview for interactive
//! inspection instead of the full listing.

use console::style;

/// How many paths a debug preview shows per category
const PREVIEW_LEN: usize = 3;

/// Formats and prints query results according to the output mode.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
    debug: bool,
}

impl Reporter {
    pub fn new(quiet: bool, debug: bool) -> Self {
        Self { quiet, debug }
    }

    /// Emit one category block to stdout.
    pub fn export(&self, label: &str, marker: &str, paths: &[String]) {
        let rendered = self.render(label, marker, paths);
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
    }

    fn render(&self, label: &str, marker: &str, paths: &[String]) -> String {
        if self.debug {
            return render_preview(label, paths);
        }
        if self.quiet {
            return paths.join("\n");
        }

        let mut lines = vec![style(label).bold().to_string()];
        lines.extend(paths.iter().map(|path| format!("{}{}", marker, path)));
        lines.join("\n")
    }
}

fn render_preview(label: &str, paths: &[String]) -> String {
    let mut lines = vec![format!("{} ({} paths)", style(label).bold(), paths.len())];
    lines.extend(paths.iter().take(PREVIEW_LEN).map(|path| format!("  {}", path)));
    if paths.len() > PREVIEW_LEN {
        lines.push(format!("  ... {} more", paths.len() - PREVIEW_LEN));
    }
    lines.join("\n")
}
