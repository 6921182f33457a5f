//! Token kind codes.

use std::fmt;

/// Kind of the token the scanner last produced.
///
/// All values fit in a single `u8`, with categories arranged in contiguous
/// ranges:
///
/// | Range | Category |
/// |-------|----------|
/// | 0-3   | Special and trivia |
/// | 4-10  | Block structure |
/// | 11-22 | Inline delimiters and text |
/// | 23-36 | HTML |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    // === Special and trivia (0-3) ===
    EndOfFile = 0,
    #[default]
    Unknown = 1,
    NewLineTrivia = 2,
    WhitespaceTrivia = 3,

    // === Block structure (4-10) ===
    HashToken = 4,
    ThematicBreak = 5,
    CodeFence = 6,
    ListMarkerUnordered = 7,
    ListMarkerOrdered = 8,
    MathBlockDelimiter = 9,
    HardLineBreak = 10,

    // === Inline (11-22) ===
    StringLiteral = 11,
    AsteriskToken = 12,
    AsteriskAsterisk = 13,
    UnderscoreToken = 14,
    UnderscoreUnderscore = 15,
    BacktickToken = 16,
    InlineCodeDelimiter = 17,
    TildeTilde = 18,
    MathInlineDelimiter = 19,
    OpenBracketToken = 20,
    CloseBracketToken = 21,
    ExclamationOpenBracket = 22,

    // === HTML (23-36) ===
    HtmlTagOpenName = 23,
    HtmlTagCloseName = 24,
    HtmlAttributeName = 25,
    HtmlAttributeValue = 26,
    EqualsToken = 27,
    GreaterThanToken = 28,
    SlashGreaterThanToken = 29,
    AmpersandToken = 30,
    HtmlEntity = 31,
    HtmlComment = 32,
    HtmlCdata = 33,
    HtmlProcessingInstruction = 34,
    HtmlDoctype = 35,
    Autolink = 36,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 37] = [
        TokenKind::EndOfFile,
        TokenKind::Unknown,
        TokenKind::NewLineTrivia,
        TokenKind::WhitespaceTrivia,
        TokenKind::HashToken,
        TokenKind::ThematicBreak,
        TokenKind::CodeFence,
        TokenKind::ListMarkerUnordered,
        TokenKind::ListMarkerOrdered,
        TokenKind::MathBlockDelimiter,
        TokenKind::HardLineBreak,
        TokenKind::StringLiteral,
        TokenKind::AsteriskToken,
        TokenKind::AsteriskAsterisk,
        TokenKind::UnderscoreToken,
        TokenKind::UnderscoreUnderscore,
        TokenKind::BacktickToken,
        TokenKind::InlineCodeDelimiter,
        TokenKind::TildeTilde,
        TokenKind::MathInlineDelimiter,
        TokenKind::OpenBracketToken,
        TokenKind::CloseBracketToken,
        TokenKind::ExclamationOpenBracket,
        TokenKind::HtmlTagOpenName,
        TokenKind::HtmlTagCloseName,
        TokenKind::HtmlAttributeName,
        TokenKind::HtmlAttributeValue,
        TokenKind::EqualsToken,
        TokenKind::GreaterThanToken,
        TokenKind::SlashGreaterThanToken,
        TokenKind::AmpersandToken,
        TokenKind::HtmlEntity,
        TokenKind::HtmlComment,
        TokenKind::HtmlCdata,
        TokenKind::HtmlProcessingInstruction,
        TokenKind::HtmlDoctype,
        TokenKind::Autolink,
    ];

    /// Trivia tokens carry layout only: line breaks and whitespace.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::NewLineTrivia | TokenKind::WhitespaceTrivia)
    }

    /// Tokens that may carry `CAN_OPEN` / `CAN_CLOSE`.
    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(
            self,
            TokenKind::AsteriskToken
                | TokenKind::AsteriskAsterisk
                | TokenKind::UnderscoreToken
                | TokenKind::UnderscoreUnderscore
                | TokenKind::BacktickToken
                | TokenKind::InlineCodeDelimiter
                | TokenKind::TildeTilde
                | TokenKind::MathInlineDelimiter
        )
    }

    /// Name used in debug output and test expectations.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::Unknown => "Unknown",
            TokenKind::NewLineTrivia => "NewLineTrivia",
            TokenKind::WhitespaceTrivia => "WhitespaceTrivia",
            TokenKind::HashToken => "HashToken",
            TokenKind::ThematicBreak => "ThematicBreak",
            TokenKind::CodeFence => "CodeFence",
            TokenKind::ListMarkerUnordered => "ListMarkerUnordered",
            TokenKind::ListMarkerOrdered => "ListMarkerOrdered",
            TokenKind::MathBlockDelimiter => "MathBlockDelimiter",
            TokenKind::HardLineBreak => "HardLineBreak",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::AsteriskToken => "AsteriskToken",
            TokenKind::AsteriskAsterisk => "AsteriskAsterisk",
            TokenKind::UnderscoreToken => "UnderscoreToken",
            TokenKind::UnderscoreUnderscore => "UnderscoreUnderscore",
            TokenKind::BacktickToken => "BacktickToken",
            TokenKind::InlineCodeDelimiter => "InlineCodeDelimiter",
            TokenKind::TildeTilde => "TildeTilde",
            TokenKind::MathInlineDelimiter => "MathInlineDelimiter",
            TokenKind::OpenBracketToken => "OpenBracketToken",
            TokenKind::CloseBracketToken => "CloseBracketToken",
            TokenKind::ExclamationOpenBracket => "ExclamationOpenBracket",
            TokenKind::HtmlTagOpenName => "HtmlTagOpenName",
            TokenKind::HtmlTagCloseName => "HtmlTagCloseName",
            TokenKind::HtmlAttributeName => "HtmlAttributeName",
            TokenKind::HtmlAttributeValue => "HtmlAttributeValue",
            TokenKind::EqualsToken => "EqualsToken",
            TokenKind::GreaterThanToken => "GreaterThanToken",
            TokenKind::SlashGreaterThanToken => "SlashGreaterThanToken",
            TokenKind::AmpersandToken => "AmpersandToken",
            TokenKind::HtmlEntity => "HtmlEntity",
            TokenKind::HtmlComment => "HtmlComment",
            TokenKind::HtmlCdata => "HtmlCdata",
            TokenKind::HtmlProcessingInstruction => "HtmlProcessingInstruction",
            TokenKind::HtmlDoctype => "HtmlDoctype",
            TokenKind::Autolink => "Autolink",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
