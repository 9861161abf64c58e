use super::molecules::MoleculeTable;

/// Typed data read from a flattened topology.
///
/// All values are owned copies; a `Topology` outlives the monolith
/// buffer it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    /// Trimmed content of the `[ system ]` section, empty if absent.
    pub title: String,
    /// Entries of the `[ molecules ]` section in file order.
    pub molecules: MoleculeTable,
    /// Tokens of `#define` lines, first occurrence order.
    pub defines: Vec<String>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn molecule_count(&self) -> usize {
        self.molecules.len()
    }

    #[inline]
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    #[inline]
    pub fn is_defined(&self, token: &str) -> bool {
        self.defines.iter().any(|d| d == token)
    }
}
