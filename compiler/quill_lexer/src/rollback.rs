//! Restarting the scanner from an earlier position.
//!
//! Tokens whose `full_start` is a line start reached in normal mode carry
//! `CAN_ROLLBACK_HERE` plus the [`RollbackKind`] describing the context at
//! that point. Rolling back there with the recorded kind reproduces the same
//! tokens the forward scan produced.

use quill_ir::{RollbackKind, TokenFlags, TokenKind};
use tracing::debug;

use crate::context::{ContextFlags, ScanMode};
use crate::{ScanError, Scanner};

impl Scanner {
    /// Restart scanning at `position` with the context `hint`.
    ///
    /// Diagnostics starting at or after `position` are dropped; rescanning
    /// reports them again.
    pub fn rollback(&mut self, position: usize, hint: RollbackKind) -> Result<(), ScanError> {
        let (start, end) = (self.source.start(), self.source.end());
        if position < start || position > end {
            return Err(ScanError::RollbackOutOfRange {
                position,
                start,
                end,
            });
        }
        if !self.source.is_char_boundary(position) {
            return Err(ScanError::RollbackNotCharBoundary { position });
        }
        self.diagnostics.discard_from(position);
        self.reset_to(position, hint);
        debug!(position, ?hint, line = self.line, "rollback");
        Ok(())
    }

    /// Reset every piece of per-position state for a restart at `position`.
    pub(crate) fn reset_to(&mut self, position: usize, hint: RollbackKind) {
        let range_start = self.source.start();
        let (line, line_start) = self.source.line_of(position);

        self.pos = position;
        self.line = line;
        self.last_line_start = line_start.max(range_start);
        self.column = position - self.last_line_start;

        self.context = ContextFlags::empty();
        if self.source.is_line_start(position) {
            self.context.insert(ContextFlags::AT_LINE_START);
            if position > range_start {
                self.context.insert(ContextFlags::PRECEDING_LINE_BREAK);
            }
        }
        if hint == RollbackKind::InParagraph {
            self.context.insert(ContextFlags::IN_PARAGRAPH);
        }
        self.prev_line_blank = hint == RollbackKind::AfterBlankLine;

        self.mode = ScanMode::Normal;
        self.line_state = None;
        self.list_marker_consumed = false;
        self.spans.clear();
        self.prev_token = TokenKind::Unknown;
        self.restart = None;

        self.token = TokenKind::Unknown;
        self.token_text.clear();
        self.token_flags = TokenFlags::empty();
        self.token_start = position;
        self.full_start = position;
        self.offset_next = position;
    }
}
