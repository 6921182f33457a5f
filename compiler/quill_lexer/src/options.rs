//! Scanner configuration.

use quill_lexer_core::LineConfig;

/// Dialect switches for one scanner.
///
/// Plain `Copy` data: changing options means building a new value and
/// binding it with [`Scanner::set_options`](crate::Scanner::set_options).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Deepest ATX heading level (1..=6).
    pub max_heading_level: u8,
    /// `$` inline math and `$$` math blocks.
    pub math: bool,
    /// `<scheme:...>` and `<user@host>` autolinks.
    pub autolinks: bool,
    /// `~~` strikethrough delimiters.
    pub strikethrough: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            max_heading_level: 6,
            math: true,
            autolinks: true,
            strikethrough: true,
        }
    }
}

impl ScanOptions {
    /// Plain CommonMark: no math, autolinks or strikethrough.
    pub fn commonmark() -> Self {
        ScanOptions {
            math: false,
            autolinks: false,
            strikethrough: false,
            ..ScanOptions::default()
        }
    }

    /// Set the deepest heading level, clamped to 1..=6.
    #[must_use]
    pub fn with_max_heading_level(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    #[must_use]
    pub fn with_math(mut self, enabled: bool) -> Self {
        self.math = enabled;
        self
    }

    #[must_use]
    pub fn with_autolinks(mut self, enabled: bool) -> Self {
        self.autolinks = enabled;
        self
    }

    #[must_use]
    pub fn with_strikethrough(mut self, enabled: bool) -> Self {
        self.strikethrough = enabled;
        self
    }

    /// Settings for the line classifier.
    pub(crate) fn line_config(self) -> LineConfig {
        LineConfig {
            max_heading_level: self.max_heading_level.clamp(1, 6),
            math_blocks: self.math,
        }
    }
}
