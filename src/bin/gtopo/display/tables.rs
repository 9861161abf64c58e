use std::io::Write;

use gmx_topo::{MoleculeTable, Monolith, Topology};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_monolith_info(out: &mut impl Write, root: &str, monolith: &Monolith) {
    let rows = [
        ("Root", root.to_string()),
        ("Lines", monolith.line_count().to_string()),
        ("Bytes", monolith.len().to_string()),
        ("Sections", monolith.sections().count().to_string()),
    ];
    print_kv_table(out, "Monolith", &rows);
}

pub fn print_summary(out: &mut impl Write, topology: &Topology) {
    let title = if topology.has_title() {
        topology.title.lines().next().unwrap_or_default().to_string()
    } else {
        "(none)".to_string()
    };
    let defines = if topology.defines.is_empty() {
        "(none)".to_string()
    } else {
        topology.defines.join(" ")
    };
    let rows = [
        ("System", title),
        ("Molecule types", topology.molecule_count().to_string()),
        ("Molecules", topology.molecules.total().to_string()),
        ("Defines", defines),
    ];
    print_kv_table(out, "Topology Summary", &rows);
}

pub fn print_molecules(out: &mut impl Write, molecules: &MoleculeTable) {
    if molecules.is_empty() {
        return;
    }

    let total = molecules.total().max(1) as f64;
    let name_w = 16usize;
    let count_w = 10usize;
    let bar_w = 12usize;

    let _ = writeln!(out, "{}┌─ Molecules ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{}┬{}┬{}┐",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(bar_w + 9)
    );
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<w$} │",
        INDENT,
        "Name",
        "Count",
        "Share",
        w = bar_w + 7
    );
    let _ = writeln!(
        out,
        "{}├{}┼{}┼{}┤",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(bar_w + 9)
    );

    for (name, count) in molecules.iter() {
        let pct = count as f64 / total * 100.0;
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {} {:>5.1}% │",
            INDENT,
            truncate(name, name_w),
            count,
            make_bar(pct, bar_w),
            pct
        );
    }

    let _ = writeln!(
        out,
        "{}└{}┴{}┴{}┘",
        INDENT,
        "─".repeat(name_w + 2),
        "─".repeat(count_w + 2),
        "─".repeat(bar_w + 9)
    );
}

pub fn print_sections(out: &mut impl Write, monolith: &Monolith) {
    let bytes = monolith.as_bytes();
    let mut line = 1;
    let mut counted = 0;
    let rows: Vec<(String, String)> = monolith
        .sections()
        .map(|(name, section)| {
            let start = section.header.start;
            line += newlines(&bytes[counted..start]);
            counted = start;
            let lines = section.lines().len();
            (format!("[ {name} ]"), format!("line {line} · {lines}"))
        })
        .collect();
    print_kv_table(out, "Sections", &rows);
}

fn print_kv_table<K: AsRef<str>>(out: &mut impl Write, title: &str, rows: &[(K, String)]) {
    let key_w = 20usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(out, "{}┌─ {} ─┐", INDENT, truncate(title, SAFE_TABLE_WIDTH - 6));
    let _ = writeln!(out, "{}┌{k_line}┬{v_line}┐", INDENT);
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key.as_ref(), key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(out, "{}└{k_line}┴{v_line}┘", INDENT);
}

fn newlines(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_clamped_to_width() {
        assert_eq!(make_bar(50.0, 4), "██░░");
        assert_eq!(make_bar(0.0, 3), "░░░");
        assert_eq!(make_bar(150.0, 2), "██");
    }

    #[test]
    fn molecule_table_lists_every_entry() {
        let mut molecules = MoleculeTable::new();
        molecules.insert("POPC", 128).unwrap();
        molecules.insert("SOL", 4000).unwrap();

        let mut out = Vec::new();
        print_molecules(&mut out, &molecules);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("POPC"));
        assert!(text.contains("4000"));
    }

    #[test]
    fn sections_table_names_headers() {
        let monolith = Monolith::from(b"[ system ]\nx\n[ molecules ]\nSOL 1\n".to_vec());
        let mut out = Vec::new();
        print_sections(&mut out, &monolith);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[ system ]"));
        assert!(text.contains("line 3 · 1"));
    }

    #[test]
    fn sections_table_counts_lines_across_sections() {
        let monolith = Monolith::from(
            b"[ defaults ]\n1 2\n[ atomtypes ]\na\nb\nc\n[ system ]\nx\n[ molecules ]\nSOL 1\n".to_vec(),
        );
        let mut out = Vec::new();
        print_sections(&mut out, &monolith);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("line 1 · 1"));
        assert!(text.contains("line 3 · 3"));
        assert!(text.contains("line 7 · 1"));
        assert!(text.contains("line 9 · 1"));
    }
}
