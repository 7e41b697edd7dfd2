//! Line formatting with color markup.
//!
//! A formatted line is a template with `%c` style tokens plus the styles
//! that fill them. Colorized output swaps each token for an ANSI sequence;
//! plain output deletes every token.

use once_cell::sync::Lazy;
use regex::Regex;

use super::level::LogLevel;

/// Matches style tokens, case-insensitively.
static STYLE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)%c").expect("Invalid style token pattern"));

const ANSI_RESET: &str = "\x1b[0m";

/// A foreground color, optionally bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: u8,
    pub bold: bool,
}

impl Style {
    pub fn new(color: u8, bold: bool) -> Self {
        Self { color, bold }
    }

    /// ANSI escape sequence selecting this style from a reset state.
    pub fn ansi(&self) -> String {
        format!("\x1b[{};{}m", if self.bold { 1 } else { 0 }, self.color)
    }
}

/// A line template and the styles for its tokens, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    pub template: String,
    pub styles: Vec<Style>,
}

impl FormattedMessage {
    /// `%c{namespace} [{LEVEL}] | %c{message}`: bold header, plain body,
    /// both in the level's color.
    pub fn for_level(namespace: &str, level: LogLevel, message: &str) -> Self {
        let color = level.color_code();
        Self {
            template: format!("%c{} [{}] | %c{}", namespace, level.label(), message),
            styles: vec![Style::new(color, true), Style::new(color, false)],
        }
    }

    pub fn render(&self, colorize: bool) -> String {
        if colorize {
            self.colorized()
        } else {
            self.plain()
        }
    }

    /// Every token removed.
    pub fn plain(&self) -> String {
        strip_markup(&self.template)
    }

    /// Tokens replaced by their styles; surplus tokens are dropped.
    pub fn colorized(&self) -> String {
        let mut styles = self.styles.iter();
        let mut out = STYLE_TOKEN
            .replace_all(&self.template, |_: &regex::Captures<'_>| {
                styles.next().map(Style::ansi).unwrap_or_default()
            })
            .into_owned();
        out.push_str(ANSI_RESET);
        out
    }
}

/// Remove every `%c` token from `text`.
pub fn strip_markup(text: &str) -> String {
    STYLE_TOKEN.replace_all(text, "").into_owned()
}
