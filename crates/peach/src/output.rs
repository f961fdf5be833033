//! Colored terminal output utilities.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status messages go to stderr; command results go to stdout so they can be
/// piped.
pub(crate) struct Output {
    term: Term,
    out: Term,
    yellow: Style,
    red: Style,
    green: Style,
    cyan_bold: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            out: Term::stdout(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            green: Style::new().green(),
            cyan_bold: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a result line to stdout.
    pub(crate) fn result(&self, line: &str) {
        let _ = self.out.write_line(line);
    }

    /// Print a highlighted result line (cyan bold) to stdout.
    pub(crate) fn heading(&self, line: &str) {
        let _ = self
            .out
            .write_line(&self.cyan_bold.apply_to(line).to_string());
    }

    /// Print a secondary result line (dim) to stdout.
    pub(crate) fn detail(&self, line: &str) {
        let _ = self.out.write_line(&self.dim.apply_to(line).to_string());
    }
}
