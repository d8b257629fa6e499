//! Console output
//!
//! Every per-file decision ends up as one line on stdout. Lines are built as
//! plain strings first; colour is only added around the leading marker when
//! stdout is a terminal, so the visible text never changes.

use crate::i18n::Strings;
use crossterm::{
    ExecutableCommand,
    style::{Color, Print, Stylize, style},
};
use std::io::{IsTerminal, stdout};
use std::path::Path;

/// Console theme colors
pub struct CliTheme;

impl CliTheme {
    /// Success color (green)
    pub const SUCCESS: Color = Color::Green;
    /// Warning color (yellow)
    pub const WARNING: Color = Color::Yellow;
    /// Error color (red)
    pub const ERROR: Color = Color::Red;
    /// Accent color (cyan)
    pub const ACCENT: Color = Color::Cyan;
}

/// `[Dry Run] note.txt → /out/2020/Jänner/note.txt`
pub fn dry_run_line(file_name: &str, destination: &Path) -> String {
    format!(
        "{} {} → {}",
        Strings::dry_run_marker(),
        file_name,
        destination.display()
    )
}

/// `Moved: note.txt → 2020/Jänner`
pub fn moved_line(file_name: &str, year: i32, month: &str) -> String {
    format!("{} {} → {}/{}", Strings::moved(), file_name, year, month)
}

/// `Failed to move: <detail>`
pub fn failure_line(label: &str, detail: &str) -> String {
    format!("{} {}", label, detail)
}

/// Print a planned move
pub fn print_dry_run(file_name: &str, destination: &Path) {
    print_marked(Strings::dry_run_marker(), CliTheme::ACCENT, &dry_run_line(file_name, destination));
}

/// Print a completed move
pub fn print_moved(file_name: &str, year: i32, month: &str) {
    print_marked(Strings::moved(), CliTheme::SUCCESS, &moved_line(file_name, year, month));
}

/// Print a per-file failure
pub fn print_failure(label: &str, detail: &str) {
    print_marked(label, CliTheme::ERROR, &failure_line(label, detail));
}

/// Print a standalone error message
pub fn print_error(msg: &str) {
    print_marked(msg, CliTheme::ERROR, msg);
}

/// Print a warning about a file that was still handled
pub fn print_warning(label: &str, detail: &str) {
    print_marked(label, CliTheme::WARNING, &failure_line(label, detail));
}

/// Print a line, colouring `marker` when the line starts with it and stdout
/// is a terminal
fn print_marked(marker: &str, color: Color, line: &str) {
    let mut out = stdout();
    match line.strip_prefix(marker) {
        Some(rest) if out.is_terminal() => {
            let _ = out.execute(Print(style(marker).with(color).bold()));
            let _ = out.execute(Print(format!("{}\n", rest)));
        }
        _ => {
            let _ = out.execute(Print(format!("{}\n", line)));
        }
    }
}
