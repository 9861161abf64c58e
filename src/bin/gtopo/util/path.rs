use std::path::{Path, PathBuf};

/// Splits a root topology path into the include base directory and the
/// file name to open inside it.
pub fn split_root(root: &Path) -> (PathBuf, PathBuf) {
    let base = match root.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = root
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| root.to_path_buf());
    (base, file)
}
