//! Terminal reporting for docnav commands.

use std::path::Path;

use console::{Style, Term};
use docnav_site::BrokenLink;

/// Writes check results to stderr, colored when the terminal supports it.
pub(crate) struct Output {
    term: Term,
    label: Style,
    location: Style,
    ok: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().dim(),
            location: Style::new().cyan(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }

    /// Same as [`Output::new`] with colors switched off.
    #[cfg(test)]
    fn plain() -> Self {
        let mut output = Self::new();
        for style in [
            &mut output.label,
            &mut output.location,
            &mut output.ok,
            &mut output.warn,
            &mut output.fail,
        ] {
            *style = style.clone().force_styling(false);
        }
        output
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print an input file or directory (`Descriptor: site.toml`).
    pub(crate) fn source(&self, label: &str, path: &Path) {
        self.line(&self.format_source(label, path));
    }

    fn format_source(&self, label: &str, path: &Path) -> String {
        format!("{} {}", self.label.apply_to(format!("{label}:")), path.display())
    }

    /// Print one unresolved link.
    pub(crate) fn broken_link(&self, link: &BrokenLink) {
        self.line(&self.format_broken_link(link));
    }

    fn format_broken_link(&self, link: &BrokenLink) -> String {
        format!(
            "{} {} \"{}\" -> {}",
            self.warn.apply_to("broken"),
            self.location.apply_to(&link.location),
            link.text,
            link.link
        )
    }

    /// Print how many broken links `links.ignore` suppressed.
    pub(crate) fn ignored(&self, count: usize) {
        if count > 0 {
            self.line(
                &self
                    .label
                    .apply_to(format!("{count} broken link(s) ignored by config"))
                    .to_string(),
            );
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.ok.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warn.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.fail.apply_to(msg).to_string());
    }
}
