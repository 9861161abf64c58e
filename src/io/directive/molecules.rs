use crate::io::error::Error;
use crate::io::locator::find_section;
use crate::model::molecules::MoleculeTable;

pub const DIRECTIVE: &str = "molecules";

/// Reads the `[ molecules ]` section into an ordered name to count table.
///
/// A missing or empty section yields an empty table. Any malformed line
/// aborts the whole parse.
pub fn molecule_table(document: &[u8]) -> Result<MoleculeTable, Error> {
    let mut table = MoleculeTable::new();
    let Some(section) = find_section(document, DIRECTIVE) else {
        return Ok(table);
    };

    for (ln, line) in section.lines() {
        let (name, count) = parse_entry(&line, ln)?;
        table
            .insert(name, count)
            .map_err(|dup| Error::DuplicateMolecule { line: ln, name: dup.0 })?;
    }

    Ok(table)
}

fn parse_entry(line: &str, line_no: usize) -> Result<(&str, u64), Error> {
    let mut tokens = line.split_ascii_whitespace();

    let name = tokens
        .next()
        .ok_or_else(|| Error::parse(DIRECTIVE, line_no, "missing molecule name"))?;
    let count = tokens
        .next()
        .ok_or_else(|| Error::parse(DIRECTIVE, line_no, "missing molecule count"))?;
    if let Some(extra) = tokens.next() {
        return Err(Error::UnexpectedToken {
            line: line_no,
            token: extra.to_string(),
        });
    }

    let count = count
        .parse::<u64>()
        .map_err(|_| Error::parse(DIRECTIVE, line_no, format!("invalid molecule count '{count}'")))?;
    Ok((name, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_in_order() {
        let doc = b"[ molecules ]\nfoo 1\nbar 2\nbaz 3\n";
        let table = molecule_table(doc).unwrap();
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs, vec![("foo", 1), ("bar", 2), ("baz", 3)]);
    }

    #[test]
    fn third_token_is_rejected() {
        let doc = b"[ molecules ]\nfoo 1\nbar 2 bad\nbaz 3\n";
        let err = molecule_table(doc).unwrap_err();
        match err {
            Error::UnexpectedToken { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "bad");
            }
            other => panic!("expected UnexpectedToken, got {other:?}"),
        }
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let doc = b"[ molecules ]\n; name count\n\n  Protein_A   1 ; chain A\n\tSOL\t 4000\n";
        let table = molecule_table(doc).unwrap();
        assert_eq!(table.get("Protein_A"), Some(1));
        assert_eq!(table.get("SOL"), Some(4000));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_count_is_a_parse_error() {
        let err = molecule_table(b"[ molecules ]\nSOL\n").unwrap_err();
        assert!(matches!(err, Error::Parse { directive: "molecules", line: 2, .. }));
        assert_eq!(
            err.to_string(),
            "failed to parse [ molecules ] section: missing molecule count (at line 2)"
        );
    }

    #[test]
    fn non_numeric_or_negative_count_is_a_parse_error() {
        for bad in ["SOL many", "SOL -3", "SOL 1.5"] {
            let doc = format!("[ molecules ]\n{bad}\n");
            let err = molecule_table(doc.as_bytes()).unwrap_err();
            assert!(matches!(err, Error::Parse { line: 2, .. }), "{bad}: {err:?}");
        }
    }

    #[test]
    fn duplicate_name_aborts_the_table() {
        let doc = b"[ molecules ]\nSOL 10\nNA 2\nSOL 5\n";
        let err = molecule_table(doc).unwrap_err();
        match err {
            Error::DuplicateMolecule { line, name } => {
                assert_eq!(line, 4);
                assert_eq!(name, "SOL");
            }
            other => panic!("expected DuplicateMolecule, got {other:?}"),
        }
    }

    #[test]
    fn absent_or_empty_section_gives_empty_table() {
        assert!(molecule_table(b"[ system ]\nx\n").unwrap().is_empty());
        assert!(molecule_table(b"[ molecules ]\n[ system ]\n").unwrap().is_empty());
    }

    #[test]
    fn stops_at_next_directive() {
        let doc = b"[ molecules ]\nSOL 3\n[ intermolecular_interactions ]\nnot a molecule line\n";
        let table = molecule_table(doc).unwrap();
        assert_eq!(table.len(), 1);
    }
}
