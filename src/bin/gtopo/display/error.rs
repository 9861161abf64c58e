use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    use gmx_topo::io::Error as TopoError;

    if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
        return io_hints(io_err);
    }

    let Some(topo_err) = err.downcast_ref::<TopoError>() else {
        return Vec::new();
    };

    match topo_err {
        TopoError::Io { source } => io_hints(source),

        TopoError::Lex(lex) => vec![
            format!("A line could not be lexed: {lex}"),
            "Check bracket, quote and keyword spelling on directive lines".into(),
        ],

        TopoError::CyclicInclude { path, chain } => {
            let mut hints = vec![format!(
                "'{}' includes itself, directly or through other files",
                path.display()
            )];
            if let Some(outer) = chain.first() {
                hints.push(format!("Expansion started at '{}'", outer.display()));
            }
            hints.push("Guard repeated includes with #ifdef or remove the back-reference".into());
            hints
        }

        TopoError::IncludeDepthExceeded { limit, .. } => vec![
            format!("Includes are nested deeper than {limit} levels"),
            "Raise the limit with --max-depth or disable it with --no-depth-limit".into(),
        ],

        TopoError::Parse { directive, line, .. } => vec![
            format!("Inspect line {line} of the flattened topology ([ {directive} ] section)"),
            "Run `gtopo flatten` to see the flattened line numbering".into(),
        ],

        TopoError::UnexpectedToken { line, .. } => vec![
            format!("Molecule lines take exactly a name and a count (line {line})"),
            "Move trailing notes behind a ';' comment".into(),
        ],

        TopoError::DuplicateMolecule { name, .. } => vec![
            format!("Merge the '{name}' entries into a single count"),
            "Or give the second molecule type a distinct name".into(),
        ],
    }
}

fn io_hints(source: &std::io::Error) -> Vec<String> {
    use std::io::ErrorKind;

    let hints: &[&str] = match source.kind() {
        ErrorKind::NotFound => &[
            "File not found",
            "Include paths resolve against the root topology's directory",
        ],
        ErrorKind::PermissionDenied => &[
            "Permission denied accessing the file",
            "Check file permissions with `ls -la`",
        ],
        ErrorKind::BrokenPipe => &[
            "Broken pipe — output consumer terminated",
            "This may occur when piping to commands like `head`",
        ],
        _ => &["I/O operation failed", "Check file path, permissions, and disk space"],
    };
    hints.iter().map(|h| h.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gmx_topo::io::Error as TopoError;

    #[test]
    fn duplicate_molecule_hint_names_the_molecule() {
        let err = Error::new(TopoError::DuplicateMolecule {
            line: 7,
            name: "SOL".into(),
        });
        let hints = hints_for(&err);
        assert!(hints[0].contains("'SOL'"));
    }

    #[test]
    fn context_wrapped_io_error_still_gets_hints() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::new(TopoError::from(io_err)).context("Failed to flatten topol.top");
        let hints = hints_for(&err);
        assert_eq!(hints[0], "File not found");
    }

    #[test]
    fn unknown_errors_have_no_hints() {
        let err = anyhow::anyhow!("something else");
        assert!(hints_for(&err).is_empty());
    }
}
