use crate::io::locator::find_section;

pub const DIRECTIVE: &str = "system";

/// Reads the `[ system ]` title, or an empty string if there is none.
pub fn system_title(document: &[u8]) -> String {
    find_section(document, DIRECTIVE)
        .and_then(|section| section.text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
