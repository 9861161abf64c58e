use std::ops::Range;

/// Half-open byte range `[start, end)` into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Borrows the bytes this span covers.
    ///
    /// # Panics
    ///
    /// Panics if the span does not lie within `document`.
    #[inline]
    pub fn slice<'a>(&self, document: &'a [u8]) -> &'a [u8] {
        &document[self.range()]
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_borrows_covered_bytes() {
        let doc = b"[ a ]\nx\n[ b ]\n";
        let span = Span::new(6, 8);
        assert_eq!(span.slice(doc), b"x\n");
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }

    #[test]
    fn empty_span_from_range() {
        let span: Span = (4..4).into();
        assert!(span.is_empty());
        assert_eq!(span.range(), 4..4);
    }
}
