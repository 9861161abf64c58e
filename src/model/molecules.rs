use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("molecule '{0}' is already present in the table")]
pub struct DuplicateMoleculeError(pub String);

/// Ordered molecule name to instance count mapping.
///
/// Iteration follows insertion order. Keys are never overwritten:
/// [`insert`](Self::insert) fails when the name is already present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoleculeTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl MoleculeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` with `count`, or fails if `name` already exists.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        count: u64,
    ) -> Result<(), DuplicateMoleculeError> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(DuplicateMoleculeError(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, count));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all instance counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, count)| acc.saturating_add(*count))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}
