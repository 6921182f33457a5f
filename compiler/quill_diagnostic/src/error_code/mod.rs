use std::fmt;

/// Error codes for all scanner diagnostics.
///
/// Format: M#### where the first digit indicates the area:
/// - M0xxx: malformed markup the scanner recovered from
/// - M9xxx: internal scanner errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Markup Errors (M0xxx)
    /// Unterminated HTML comment
    M0001,
    /// Unterminated CDATA section
    M0002,
    /// Unterminated processing instruction
    M0003,
    /// Unterminated declaration or DOCTYPE
    M0004,
    /// Unterminated HTML tag
    M0005,
    /// Attribute `=` without a value
    M0006,
    /// Unterminated quoted attribute value
    M0007,
    /// Invalid content inside an HTML tag
    M0008,
    /// Invalid or unknown character reference
    M0009,

    // Internal Errors (M9xxx)
    /// Scanner failed to advance
    M9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 10] = [
        ErrorCode::M0001,
        ErrorCode::M0002,
        ErrorCode::M0003,
        ErrorCode::M0004,
        ErrorCode::M0005,
        ErrorCode::M0006,
        ErrorCode::M0007,
        ErrorCode::M0008,
        ErrorCode::M0009,
        ErrorCode::M9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "M0001",
            ErrorCode::M0002 => "M0002",
            ErrorCode::M0003 => "M0003",
            ErrorCode::M0004 => "M0004",
            ErrorCode::M0005 => "M0005",
            ErrorCode::M0006 => "M0006",
            ErrorCode::M0007 => "M0007",
            ErrorCode::M0008 => "M0008",
            ErrorCode::M0009 => "M0009",
            ErrorCode::M9001 => "M9001",
        }
    }

    /// One-line human description.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::M0001 => "unterminated HTML comment",
            ErrorCode::M0002 => "unterminated CDATA section",
            ErrorCode::M0003 => "unterminated processing instruction",
            ErrorCode::M0004 => "unterminated declaration",
            ErrorCode::M0005 => "unterminated HTML tag",
            ErrorCode::M0006 => "attribute `=` is not followed by a value",
            ErrorCode::M0007 => "unterminated quoted attribute value",
            ErrorCode::M0008 => "invalid content inside an HTML tag",
            ErrorCode::M0009 => "invalid character reference",
            ErrorCode::M9001 => "scanner failed to advance",
        }
    }

    /// Check if this is an internal scanner error.
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("M9")
    }

    /// Check if this diagnostic only flags suspicious input.
    ///
    /// An invalid character reference loses nothing: the `&` and the
    /// following text are still emitted.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::M0009)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
