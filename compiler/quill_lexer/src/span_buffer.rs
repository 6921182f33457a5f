//! Accumulator for text runs that continue across lines.

/// Pending pieces of one cross-line `StringLiteral`.
///
/// Holds `(start, len)` pairs in source order. The backing vector is cleared
/// between tokens but never shrunk.
#[derive(Clone, Debug, Default)]
pub(crate) struct SpanBuffer {
    spans: Vec<(usize, usize)>,
    pending_start: Option<usize>,
}

impl SpanBuffer {
    /// Start accumulating a token that begins at `start`.
    pub(crate) fn begin(&mut self, start: usize) {
        self.spans.clear();
        self.pending_start = Some(start);
    }

    pub(crate) fn push(&mut self, start: usize, end: usize) {
        self.spans.push((start, end.saturating_sub(start)));
    }

    #[inline]
    pub(crate) fn is_active(&self) -> bool {
        self.pending_start.is_some()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[(usize, usize)] {
        &self.spans
    }

    /// Overall extent of the accumulated token: pending start to the end of
    /// the last piece.
    pub(crate) fn extent(&self) -> Option<(usize, usize)> {
        let start = self.pending_start?;
        let end = self.spans.last().map_or(start, |&(s, len)| s + len);
        Some((start, end))
    }

    /// Forget the pending token, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.spans.clear();
        self.pending_start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_pieces_in_order() {
        let mut buf = SpanBuffer::default();
        assert!(!buf.is_active());
        buf.begin(3);
        buf.push(3, 8);
        buf.push(9, 14);
        assert!(buf.is_active());
        assert_eq!(buf.as_slice(), &[(3, 5), (9, 5)]);
        assert_eq!(buf.extent(), Some((3, 14)));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = SpanBuffer::default();
        buf.begin(0);
        for i in 0..32 {
            buf.push(i * 2, i * 2 + 1);
        }
        let cap = buf.spans.capacity();
        buf.clear();
        assert!(!buf.is_active());
        assert!(buf.as_slice().is_empty());
        assert_eq!(buf.spans.capacity(), cap);
        assert_eq!(buf.extent(), None);
    }
}
