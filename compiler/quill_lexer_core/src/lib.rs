//! Quill lexer core - stateless building blocks for the markdown scanner.
//!
//! Everything here is a pure function of the bytes it is given:
//! - [`SourceBuffer`]: reusable owned text plus the scanned sub-range
//! - [`Cursor`]: bounded byte cursor with memchr-backed searches
//! - [`char_class`]: whitespace, punctuation and name-byte predicates
//! - [`classify_line`]: one-pass structural classification of a line
//! - [`flanking`] and [`DollarPlan`]: delimiter rules
//! - [`match_entity`] and [`decode_attribute_value`]: HTML text decoding

pub mod char_class;
mod cursor;
mod delimiter;
mod entity;
mod line_class;
mod source_buffer;

pub use char_class::CharClass;
pub use cursor::Cursor;
pub use delimiter::{flanking, DollarPlan, Flanking};
pub use entity::{collapse_whitespace, decode_attribute_value, match_entity, EntityMatch};
pub use line_class::{classify_line, LineConfig, LineFlags, LineInfo};
pub use source_buffer::{LineBreaks, SourceBuffer};
