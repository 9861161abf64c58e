//! Streaming directive lookup over a seekable, line-buffered reader.
//!
//! Used while a single file is still being read, before any flattening.
//! Boundary detection matches [`find_section`](super::find_section); the
//! difference is that accepted content lines are comment-stripped, trimmed
//! and copied out, and that the reader is left positioned on the first
//! byte of the next directive header so the next call continues from
//! there instead of rescanning from the top.

use super::error::Error;
use super::lexer::{directive_name, is_directive, strip_comment};
use std::io::{BufRead, Seek, SeekFrom};

/// Reads the `[ name ]` section starting at the reader's current position.
///
/// Returns `Ok(None)` if no matching header is found before the end of
/// the stream, in which case the reader is left at the end. Otherwise
/// returns the non-blank content lines, which may be empty.
pub fn find_section_streaming<R>(reader: &mut R, name: &str) -> Result<Option<Vec<String>>, Error>
where
    R: BufRead + Seek,
{
    let mut buf = Vec::new();
    let mut pos = reader.stream_position()?;

    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        pos += n as u64;
        if matches!(directive_name(&String::from_utf8_lossy(&buf)), Ok(found) if found == name) {
            break;
        }
    }

    let mut lines = Vec::new();
    loop {
        let line_start = pos;
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        pos += n as u64;

        let text = String::from_utf8_lossy(&buf);
        if is_directive(&text) {
            reader.seek(SeekFrom::Start(line_start))?;
            break;
        }
        let content = strip_comment(&text).trim();
        if !content.is_empty() {
            lines.push(content.to_string());
        }
    }

    tracing::trace!(name, lines = lines.len(), cursor = pos, "streamed section");
    Ok(Some(lines))
}
