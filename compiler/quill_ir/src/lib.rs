//! Quill IR - token model for the markdown scanner.
//!
//! This crate contains the data shared between the scanner and whatever
//! consumes its output:
//! - Spans for source locations
//! - Token kinds (one byte each)
//! - Token flags and the rollback-kind sub-field
//! - Owned token snapshots
//!
//! # Design Philosophy
//!
//! - **Flat Tokens**: the scanner emits a flat stream, never a tree
//! - **Packed Flags**: every per-token bit lives in one `u32`
//! - **Byte Offsets**: all positions are UTF-8 byte offsets into the bound text

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::{RollbackKind, Token, TokenFlags, TokenKind};
