//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, HookstrapTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status lines go to stdout; warnings and errors go to stderr so scripted
/// callers can separate the report from the noise.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    theme: HookstrapTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            HookstrapTheme::new()
        } else {
            HookstrapTheme::plain()
        };

        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_warnings() {
            writeln!(self.stderr, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "  {}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn is_interactive(&self) -> bool {
        self.stdout.is_term()
    }
}
