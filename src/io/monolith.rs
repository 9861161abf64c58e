//! Include expansion into a single flattened document.
//!
//! The assembler reads a root file line by line, drops comments and blank
//! lines, trims what is left and recursively splices the content of every
//! `#include "path"` line in its place. Include paths are resolved against
//! the same base directory as the root, not against the including file.
//!
//! Output is byte-exact: each kept line is copied verbatim (after the
//! comment cut and trim) and terminated by a single `\n`. Lines are lexed
//! through a lossy UTF-8 view like everywhere else in the crate, but the
//! original bytes are what gets written, so non-UTF-8 content passes
//! through untouched.

use super::directive;
use super::error::Error;
use super::lexer::include_path;
use super::locator::{self, Section};
use crate::model::{molecules::MoleculeTable, topology::Topology};
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Default nesting limit for `#include` expansion.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for [`Assembler`].
///
/// # Examples
///
/// ```
/// use gmx_topo::io::AssembleConfig;
///
/// let default = AssembleConfig::default();
/// assert_eq!(default.max_depth, Some(64));
///
/// let unbounded = AssembleConfig { max_depth: None };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleConfig {
    /// Maximum include nesting below the root file.
    ///
    /// `None` removes the limit; include cycles are still rejected.
    pub max_depth: Option<usize>,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

/// A fully flattened topology document.
///
/// Owns the bytes; lookups borrow from it and never copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Monolith {
    bytes: Vec<u8>,
}

impl Monolith {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of lines; every line of a monolith is newline-terminated.
    pub fn line_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b == b'\n').count()
    }

    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    pub fn section(&self, name: &str) -> Option<Section<'_>> {
        locator::find_section(&self.bytes, name)
    }

    pub fn sections(&self) -> locator::Sections<'_> {
        locator::sections(&self.bytes)
    }

    pub fn system_title(&self) -> String {
        directive::system_title(&self.bytes)
    }

    pub fn molecules(&self) -> Result<MoleculeTable, Error> {
        directive::molecule_table(&self.bytes)
    }

    pub fn defines(&self) -> Vec<String> {
        directive::defines(&self.bytes)
    }

    pub fn topology(&self) -> Result<Topology, Error> {
        directive::read_topology(&self.bytes)
    }
}

impl From<Vec<u8>> for Monolith {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for Monolith {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Monolith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}

/// Builder-style front end for include expansion.
///
/// # Examples
///
/// ```no_run
/// use gmx_topo::io::Assembler;
///
/// let monolith = Assembler::new("run/")
///     .max_depth(Some(8))
///     .assemble("topol.top")?;
/// println!("{}", monolith.system_title());
/// # Ok::<(), gmx_topo::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Assembler {
    base_dir: PathBuf,
    config: AssembleConfig,
}

impl Assembler {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            config: AssembleConfig::default(),
        }
    }

    pub fn config(mut self, config: AssembleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Flattens `root`, resolved against the base directory.
    pub fn assemble(&self, root: impl AsRef<Path>) -> Result<Monolith, Error> {
        let mut out = Vec::new();
        let mut chain = Vec::new();
        self.expand(root.as_ref(), &mut chain, &mut out)?;
        tracing::debug!(bytes = out.len(), "assembled monolith");
        Ok(Monolith { bytes: out })
    }

    fn expand(&self, relative: &Path, chain: &mut Vec<PathBuf>, out: &mut Vec<u8>) -> Result<(), Error> {
        let path = self.base_dir.join(relative);

        if let Some(limit) = self.config.max_depth {
            if chain.len() > limit {
                return Err(Error::IncludeDepthExceeded { path, limit });
            }
        }

        let canonical = path.canonicalize()?;
        if chain.contains(&canonical) {
            return Err(Error::CyclicInclude {
                path: canonical,
                chain: chain.clone(),
            });
        }

        let mut reader = BufReader::new(File::open(&canonical)?);
        tracing::debug!(path = %canonical.display(), depth = chain.len(), "expanding file");
        chain.push(canonical);

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let content = normalize(&buf);
            if content.is_empty() {
                continue;
            }

            let text = String::from_utf8_lossy(content);
            match include_path(&text) {
                Ok(included) => self.expand(Path::new(included), chain, out)?,
                Err(_) => {
                    out.extend_from_slice(content);
                    out.push(b'\n');
                }
            }
        }

        chain.pop();
        Ok(())
    }
}

/// Flattens `root` (relative to `base_dir`) with the default configuration.
pub fn assemble(base_dir: impl AsRef<Path>, root: impl AsRef<Path>) -> Result<Monolith, Error> {
    Assembler::new(base_dir.as_ref()).assemble(root)
}

/// Cuts the comment and trims surrounding ASCII whitespace.
fn normalize(line: &[u8]) -> &[u8] {
    let code = match line.iter().position(|&b| b == b';') {
        Some(idx) => &line[..idx],
        None => line,
    };
    code.trim_ascii()
}
