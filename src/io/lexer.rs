//! Single-line lexical helpers for the topology format.
//!
//! Every helper strips the `;` comment first, so a delimiter or keyword
//! inside a comment is never seen. The fallible helpers return the
//! extracted text borrowed from the input line; the `is_*` forms are the
//! non-failing predicates used by the locator and the assembler.

use thiserror::Error;

const COMMENT: char = ';';
const INCLUDE_KEYWORD: &str = "#include";
const DEFINE_KEYWORD: &str = "#define";

/// Lexical failures raised by the single-line helpers.
///
/// These are recoverable: callers typically treat the offending line as
/// ordinary content and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("missing delimiter")]
    MissingDelimiter,

    #[error("directive name is empty")]
    EmptyName,

    #[error("directive name '{0}' contains whitespace")]
    InvalidName(String),

    #[error("line does not start with the '{0}' keyword")]
    MissingKeyword(&'static str),

    #[error("missing whitespace after the keyword")]
    MissingSeparator,

    #[error("include path is empty")]
    EmptyPath,

    #[error("include path '{0}' contains whitespace")]
    InvalidPath(String),

    #[error("define token is empty")]
    EmptyToken,

    #[error("define token '{0}' contains whitespace")]
    InvalidToken(String),
}

/// Truncates `line` at the first `;`.
#[inline]
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Extracts the name of a `[ name ]` directive header.
pub fn directive_name(line: &str) -> Result<&str, LexError> {
    let name = between(strip_comment(line), '[', ']')?.trim();
    if name.is_empty() {
        return Err(LexError::EmptyName);
    }
    if has_whitespace(name) {
        return Err(LexError::InvalidName(name.to_string()));
    }
    Ok(name)
}

#[inline]
pub fn is_directive(line: &str) -> bool {
    directive_name(line).is_ok()
}

/// Extracts the quoted path of an `#include "path"` line.
pub fn include_path(line: &str) -> Result<&str, LexError> {
    let rest = after_keyword(line, INCLUDE_KEYWORD)?;
    let path = between(rest, '"', '"')?.trim();
    if path.is_empty() {
        return Err(LexError::EmptyPath);
    }
    if has_whitespace(path) {
        return Err(LexError::InvalidPath(path.to_string()));
    }
    Ok(path)
}

#[inline]
pub fn is_include_path(line: &str) -> bool {
    include_path(line).is_ok()
}

/// Extracts the token of a `#define TOKEN` line.
pub fn define_token(line: &str) -> Result<&str, LexError> {
    let rest = after_keyword(line, DEFINE_KEYWORD)?;
    if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return Err(LexError::MissingSeparator);
    }
    let token = rest.trim();
    if token.is_empty() {
        return Err(LexError::EmptyToken);
    }
    if has_whitespace(token) {
        return Err(LexError::InvalidToken(token.to_string()));
    }
    Ok(token)
}

#[inline]
pub fn is_define_token(line: &str) -> bool {
    define_token(line).is_ok()
}

fn after_keyword<'a>(line: &'a str, keyword: &'static str) -> Result<&'a str, LexError> {
    strip_comment(line)
        .trim_start()
        .strip_prefix(keyword)
        .ok_or(LexError::MissingKeyword(keyword))
}

/// Text strictly between the first `open` and the next `close` after it.
///
/// For a single bracket pair the first `close` in the line must follow
/// the first `open`, otherwise the range is ill-formed.
fn between(text: &str, open: char, close: char) -> Result<&str, LexError> {
    let start = text.find(open).ok_or(LexError::MissingDelimiter)?;
    let end = if open == close {
        text[start + 1..]
            .find(close)
            .map(|i| start + 1 + i)
            .ok_or(LexError::MissingDelimiter)?
    } else {
        text.find(close).ok_or(LexError::MissingDelimiter)?
    };
    if end <= start {
        return Err(LexError::MissingDelimiter);
    }
    Ok(&text[start + 1..end])
}

#[inline]
fn has_whitespace(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_comment_truncates_at_first_semicolon() {
        assert_eq!(strip_comment("foo ; bar ; baz"), "foo ");
        assert_eq!(strip_comment("no comment"), "no comment");
        assert_eq!(strip_comment(";"), "");
    }

    #[test]
    fn strip_comment_is_idempotent() {
        for line in ["", "a", "a;b", ";;", "[ x ] ; y", "  ; only"] {
            let once = strip_comment(line);
            assert_eq!(strip_comment(once), once, "input: {line:?}");
        }
    }

    #[test]
    fn directive_name_ignores_whitespace_and_comments() {
        assert_eq!(directive_name("[ molecules ]"), Ok("molecules"));
        assert_eq!(directive_name("[molecules]"), Ok("molecules"));
        assert_eq!(directive_name("  [\tsystem  ]  "), Ok("system"));
        assert_eq!(directive_name("[ atoms ] ; trailing [ note ]"), Ok("atoms"));
        assert_eq!(directive_name("[ bonds ]\r"), Ok("bonds"));
    }

    #[test]
    fn directive_name_requires_both_delimiters() {
        assert_eq!(directive_name("molecules"), Err(LexError::MissingDelimiter));
        assert_eq!(directive_name("[ molecules"), Err(LexError::MissingDelimiter));
        assert_eq!(directive_name("molecules ]"), Err(LexError::MissingDelimiter));
        assert_eq!(directive_name("[ molecules ; ]"), Err(LexError::MissingDelimiter));
        assert_eq!(directive_name("; [ molecules ]"), Err(LexError::MissingDelimiter));
    }

    #[test]
    fn directive_name_rejects_reversed_delimiters() {
        assert_eq!(directive_name("] foo ["), Err(LexError::MissingDelimiter));
    }

    #[test]
    fn directive_name_rejects_empty_and_spaced_names() {
        assert_eq!(directive_name("[]"), Err(LexError::EmptyName));
        assert_eq!(directive_name("[    ]"), Err(LexError::EmptyName));
        assert_eq!(
            directive_name("[ pair types ]"),
            Err(LexError::InvalidName("pair types".into()))
        );
        assert!(!is_directive("[ pair types ]"));
        assert!(is_directive("[ pairtypes ]"));
    }

    #[test]
    fn include_path_extracts_quoted_path() {
        assert_eq!(include_path("#include \"forcefield.itp\""), Ok("forcefield.itp"));
        assert_eq!(
            include_path("  #include   \" amber/ions.itp \" ; ions"),
            Ok("amber/ions.itp")
        );
    }

    #[test]
    fn include_path_failures() {
        assert_eq!(
            include_path("include \"a.itp\""),
            Err(LexError::MissingKeyword("#include"))
        );
        assert_eq!(
            include_path("; #include \"a.itp\""),
            Err(LexError::MissingKeyword("#include"))
        );
        assert_eq!(include_path("#include <a.itp>"), Err(LexError::MissingDelimiter));
        assert_eq!(include_path("#include \"a.itp"), Err(LexError::MissingDelimiter));
        assert_eq!(include_path("#include \"a.itp;\""), Err(LexError::MissingDelimiter));
        assert_eq!(include_path("#include \"  \""), Err(LexError::EmptyPath));
        assert_eq!(
            include_path("#include \"my file.itp\""),
            Err(LexError::InvalidPath("my file.itp".into()))
        );
        assert!(!is_include_path("[ system ]"));
    }

    #[test]
    fn define_token_extracts_token() {
        assert_eq!(define_token("#define POSRES"), Ok("POSRES"));
        assert_eq!(define_token("  #define\tFLEXIBLE ; soft water"), Ok("FLEXIBLE"));
        assert!(is_define_token("#define POSRES"));
    }

    #[test]
    fn define_token_failures() {
        assert_eq!(
            define_token("#include \"a.itp\""),
            Err(LexError::MissingKeyword("#define"))
        );
        assert_eq!(define_token("#definePOSRES"), Err(LexError::MissingSeparator));
        assert_eq!(define_token("#define"), Err(LexError::MissingSeparator));
        assert_eq!(define_token("#define    "), Err(LexError::EmptyToken));
        assert_eq!(
            define_token("#define gb_1 0.1000"),
            Err(LexError::InvalidToken("gb_1 0.1000".into()))
        );
    }
}
