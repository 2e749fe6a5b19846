//! Color and width helpers for catalogue output.

use owo_colors::{colors::css, OwoColorize};

/// Whether stdout accepts ANSI colors.
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Current terminal width in columns, when detectable.
pub fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(w, _)| w.0)
}

/// Styling applied to user-facing strings.
///
/// Every method degrades to the plain string when stdout has no color
/// support, so output stays pipe- and CI-friendly.
pub trait Colorize {
    /// Confirmation of a completed action (green).
    fn success(&self) -> String;
    /// A validation or submission failure (red).
    fn error(&self) -> String;
    /// The marketplace brand accent (orange).
    fn accent(&self) -> String;
    /// Secondary detail, de-emphasized.
    fn dim(&self) -> String;
}

impl Colorize for str {
    fn success(&self) -> String {
        paint(self, |s| s.fg::<css::Green>().to_string())
    }

    fn error(&self) -> String {
        paint(self, |s| s.fg::<css::Tomato>().to_string())
    }

    fn accent(&self) -> String {
        paint(self, |s| s.fg::<css::Orange>().to_string())
    }

    fn dim(&self) -> String {
        paint(self, |s| s.dimmed().to_string())
    }
}

fn paint(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
