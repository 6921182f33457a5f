//! Per-token flag bits and the rollback-kind sub-field.

use bitflags::bitflags;

bitflags! {
    /// Flags describing the token the scanner last produced.
    ///
    /// Bits 4-5 form a two-bit sub-field holding a [`RollbackKind`]; it is
    /// only meaningful when `CAN_ROLLBACK_HERE` is set. Use
    /// [`TokenFlags::rollback_kind`] and [`TokenFlags::with_rollback`]
    /// instead of touching those bits directly.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TokenFlags: u32 {
        // === Layout (bits 0-2) ===
        /// A line break separates this token from the previous non-trivia token.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// Only indentation trivia precedes this token on its line.
        const AT_LINE_START = 1 << 1;
        /// Token belongs to a whitespace-only or empty line.
        const IS_BLANK_LINE = 1 << 2;

        // === Incremental restart (bits 3-5) ===
        /// `full_start` of this token is a safe restart point.
        const CAN_ROLLBACK_HERE = 1 << 3;
        /// Two-bit mask over the encoded [`RollbackKind`].
        const ROLLBACK_KIND = 0b11 << 4;

        // === Delimiters (bits 6-7) ===
        /// Delimiter run is left-flanking.
        const CAN_OPEN = 1 << 6;
        /// Delimiter run is right-flanking.
        const CAN_CLOSE = 1 << 7;

        // === Recovery (bits 8-9) ===
        /// Construct ended at a fallback point without its terminator.
        const UNTERMINATED = 1 << 8;
        /// A diagnostic was recorded while producing this token.
        const HAS_SCAN_ERROR = 1 << 9;
    }
}

impl Default for TokenFlags {
    fn default() -> Self {
        TokenFlags::empty()
    }
}

impl TokenFlags {
    const ROLLBACK_SHIFT: u32 = 4;

    /// The recorded restart context, if this token is a restart point.
    #[inline]
    pub const fn rollback_kind(self) -> Option<RollbackKind> {
        if !self.contains(TokenFlags::CAN_ROLLBACK_HERE) {
            return None;
        }
        let bits = (self.bits() & TokenFlags::ROLLBACK_KIND.bits()) >> Self::ROLLBACK_SHIFT;
        Some(RollbackKind::from_bits(bits))
    }

    /// Mark this token as a restart point of the given kind.
    #[inline]
    #[must_use]
    pub const fn with_rollback(self, kind: RollbackKind) -> Self {
        let cleared = self.bits() & !TokenFlags::ROLLBACK_KIND.bits();
        TokenFlags::from_bits_retain(
            cleared | TokenFlags::CAN_ROLLBACK_HERE.bits() | ((kind as u32) << Self::ROLLBACK_SHIFT),
        )
    }

    /// Both flanking flags at once.
    #[inline]
    pub const fn flanking(can_open: bool, can_close: bool) -> Self {
        let mut bits = 0;
        if can_open {
            bits |= TokenFlags::CAN_OPEN.bits();
        }
        if can_close {
            bits |= TokenFlags::CAN_CLOSE.bits();
        }
        TokenFlags::from_bits_retain(bits)
    }
}

/// Scanner context recorded at a restart point.
///
/// Passed back to `rollback` so the scanner can restore the context flags
/// that cannot be recomputed from the position alone.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RollbackKind {
    /// Start of the scanned range.
    #[default]
    DocumentStart = 0,
    /// Ordinary line start with no paragraph open.
    LineStart = 1,
    /// Line start while a paragraph is open (lazy continuation context).
    InParagraph = 2,
    /// Line start directly after a blank line.
    AfterBlankLine = 3,
}

impl RollbackKind {
    /// Decode the low two bits.
    #[inline]
    pub const fn from_bits(bits: u32) -> RollbackKind {
        match bits & 0b11 {
            0 => RollbackKind::DocumentStart,
            1 => RollbackKind::LineStart,
            2 => RollbackKind::InParagraph,
            _ => RollbackKind::AfterBlankLine,
        }
    }
}
