//! In-memory directive lookup over a borrowed document.
//!
//! The locator never copies or rewrites the document. It decides section
//! boundaries with the comment-aware [`directive_name`] test and hands back
//! byte spans into the caller's buffer. A header line that fails to lex is
//! simply not a directive: it is neither a match nor a boundary.

use super::lexer::{self, directive_name, is_directive};
use crate::model::span::Span;
use std::borrow::Cow;

/// A located `[ name ]` section within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    document: &'a [u8],
    /// The header line itself, terminator included.
    pub header: Span,
    /// Raw bytes between the header and the next directive, `None` if empty.
    pub content: Option<Span>,
    /// Offset of the next directive header, or the document length.
    pub next_offset: usize,
}

impl<'a> Section<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Raw, unstripped content bytes.
    pub fn bytes(&self) -> Option<&'a [u8]> {
        self.content.map(|span| span.slice(self.document))
    }

    /// Raw content as text, replacing invalid UTF-8.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        self.bytes().map(String::from_utf8_lossy)
    }

    /// 1-based line number of the header within the document.
    pub fn header_line(&self) -> usize {
        line_number(self.document, self.header.start)
    }

    /// Comment-stripped, trimmed, non-blank content lines with their
    /// 1-based line numbers in the document.
    pub fn lines(&self) -> Vec<(usize, String)> {
        let Some(span) = self.content else {
            return Vec::new();
        };
        let first = line_number(self.document, span.start);
        Lines::new(&self.document[..span.end], span.start)
            .enumerate()
            .filter_map(|(i, raw)| {
                let text = raw.text();
                let trimmed = lexer::strip_comment(&text).trim();
                (!trimmed.is_empty()).then(|| (first + i, trimmed.to_string()))
            })
            .collect()
    }
}

/// Finds the first `[ name ]` section in `document`.
///
/// Returns `None` when no header matches `name`. A header followed
/// directly by another header (or by the end of the document) yields a
/// [`Section`] whose `content` is `None`.
pub fn find_section<'a>(document: &'a [u8], name: &str) -> Option<Section<'a>> {
    find_section_from(document, name, 0)
}

/// Like [`find_section`] but starts scanning at `offset`.
///
/// `offset` is expected to be a line start, such as the `next_offset`
/// of an earlier query.
pub fn find_section_from<'a>(document: &'a [u8], name: &str, offset: usize) -> Option<Section<'a>> {
    let header = Lines::new(document, offset)
        .find(|line| matches!(directive_name(&line.text()), Ok(found) if found == name))?;
    let section = section_after(document, header);
    tracing::trace!(
        name,
        header = section.header.start,
        next = section.next_offset,
        "located section"
    );
    Some(section)
}

/// Iterates over every well-formed section of `document` in order.
pub fn sections(document: &[u8]) -> Sections<'_> {
    Sections {
        document,
        offset: 0,
    }
}

pub struct Sections<'a> {
    document: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Sections<'a> {
    type Item = (String, Section<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let (name, header) = Lines::new(self.document, self.offset).find_map(|line| {
            directive_name(&line.text())
                .ok()
                .map(|name| (name.to_string(), line))
        })?;
        let section = section_after(self.document, header);
        self.offset = section.next_offset;
        Some((name, section))
    }
}

fn section_after<'a>(document: &'a [u8], header: RawLine<'a>) -> Section<'a> {
    let start = header.end;
    let end = Lines::new(document, start)
        .find(|line| is_directive(&line.text()))
        .map_or(document.len(), |line| line.start);

    Section {
        document,
        header: Span::new(header.start, header.end),
        content: (start < end).then(|| Span::new(start, end)),
        next_offset: end,
    }
}

/// 1-based line number of the line containing `offset`.
pub(crate) fn line_number(document: &[u8], offset: usize) -> usize {
    document[..offset.min(document.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// One line of a document, located by byte offsets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawLine<'a> {
    pub start: usize,
    /// Offset just past the terminator (or the document end).
    pub end: usize,
    pub bytes: &'a [u8],
}

impl<'a> RawLine<'a> {
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.bytes)
    }
}

pub(crate) struct Lines<'a> {
    document: &'a [u8],
    offset: usize,
}

impl<'a> Lines<'a> {
    pub fn new(document: &'a [u8], offset: usize) -> Self {
        Self { document, offset }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = RawLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.document.len() {
            return None;
        }
        let start = self.offset;
        let rest = &self.document[start..];
        let (bytes, end) = match rest.iter().position(|&b| b == b'\n') {
            Some(nl) => (&rest[..nl], start + nl + 1),
            None => (rest, self.document.len()),
        };
        self.offset = end;
        Some(RawLine { start, end, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE: &[u8] = b"[ foo ]\nfoo 1\nfoo 2\n[ bar ]\n[ baz ]\nbaz 3\n";

    #[test]
    fn finds_three_sections_with_exact_boundaries() {
        let foo = find_section(THREE, "foo").expect("foo present");
        assert_eq!(foo.bytes(), Some(&b"foo 1\nfoo 2\n"[..]));
        assert_eq!(foo.next_offset, 20);
        assert_eq!(&THREE[foo.next_offset..][..7], b"[ bar ]");

        let bar = find_section(THREE, "bar").expect("bar present");
        assert!(bar.is_empty());
        assert_eq!(bar.bytes(), None);
        assert_eq!(bar.next_offset, 28);
        assert_eq!(&THREE[bar.next_offset..][..7], b"[ baz ]");

        let baz = find_section(THREE, "baz").expect("baz present");
        assert_eq!(baz.bytes(), Some(&b"baz 3\n"[..]));
        assert_eq!(baz.next_offset, THREE.len());
    }

    #[test]
    fn missing_section_is_distinct_from_empty() {
        assert!(find_section(THREE, "qux").is_none());
        assert!(find_section(THREE, "bar").is_some());
        assert!(find_section(b"", "foo").is_none());
    }

    #[test]
    fn names_match_case_sensitively() {
        assert!(find_section(THREE, "FOO").is_none());
    }

    #[test]
    fn content_bytes_are_raw() {
        let doc = b"[ system ] ; title\n  Water box ; comment\n\n[ molecules ]\n";
        let section = find_section(doc, "system").unwrap();
        assert_eq!(section.text().as_deref(), Some("  Water box ; comment\n\n"));
        assert_eq!(section.lines(), vec![(2, "Water box".to_string())]);
        assert_eq!(section.header_line(), 1);
    }

    #[test]
    fn malformed_headers_are_neither_matches_nor_boundaries() {
        let doc = b"[ pair types ]\n[ foo ]\na\n[ ]\nb\n] c [\n[ d\n[ end ]\n";
        assert!(find_section(doc, "pair types").is_none());
        let foo = find_section(doc, "foo").unwrap();
        assert_eq!(foo.bytes(), Some(&b"a\n[ ]\nb\n] c [\n[ d\n"[..]));
    }

    #[test]
    fn commented_header_is_not_a_boundary() {
        let doc = b"[ foo ]\n; [ bar ]\nx\n";
        let foo = find_section(doc, "foo").unwrap();
        assert_eq!(foo.bytes(), Some(&b"; [ bar ]\nx\n"[..]));
        assert!(find_section(doc, "bar").is_none());
    }

    #[test]
    fn first_occurrence_wins_and_resume_finds_the_next() {
        let doc = b"[ atoms ]\n1\n[ bonds ]\n[ atoms ]\n2\n";
        let first = find_section(doc, "atoms").unwrap();
        assert_eq!(first.bytes(), Some(&b"1\n"[..]));

        let second = find_section_from(doc, "atoms", first.next_offset).unwrap();
        assert_eq!(second.bytes(), Some(&b"2\n"[..]));
        assert_eq!(second.header_line(), 4);
        assert!(find_section_from(doc, "atoms", second.next_offset).is_none());
    }

    #[test]
    fn header_at_end_without_newline() {
        let doc = b"a\n[ tail ]";
        let tail = find_section(doc, "tail").unwrap();
        assert!(tail.is_empty());
        assert_eq!(tail.next_offset, doc.len());
        assert_eq!(tail.header, Span::new(2, doc.len()));
    }

    #[test]
    fn last_line_without_newline_is_content() {
        let doc = b"[ system ]\nPOPC";
        let system = find_section(doc, "system").unwrap();
        assert_eq!(system.bytes(), Some(&b"POPC"[..]));
    }

    #[test]
    fn sections_iterates_in_document_order() {
        let names: Vec<_> = sections(THREE).map(|(name, _)| name).collect();
        assert_eq!(names, ["foo", "bar", "baz"]);

        let preamble = b"#define X\n[ a ]\n1\n[ b ]\n";
        let found: Vec<_> = sections(preamble)
            .map(|(name, s)| (name, s.header.start))
            .collect();
        assert_eq!(found, vec![("a".to_string(), 10), ("b".to_string(), 18)]);
    }
}
