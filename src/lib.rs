//! Flattening and section lookup for GROMACS-style molecular topology files.
//!
//! A topology is an INI-like text format: `[ name ]` directive headers
//! introduce sections, `;` starts a comment, and `#include "file"` lines
//! pull in other files. This crate resolves the includes into one
//! flattened document (a [`Monolith`]) and locates named sections in it so
//! callers can pull out typed data such as the system title and the
//! molecule count table.
//!
//! # Quick Start
//!
//! ```
//! use gmx_topo::io::{find_section, molecule_table, system_title};
//!
//! let top = b"[ system ]\nPOPC membrane\n[ molecules ]\nPOPC 128\nSOL 4000\n";
//!
//! assert_eq!(system_title(top), "POPC membrane");
//!
//! let molecules = molecule_table(top)?;
//! let pairs: Vec<_> = molecules.iter().collect();
//! assert_eq!(pairs, [("POPC", 128), ("SOL", 4000)]);
//!
//! let section = find_section(top, "molecules").expect("section present");
//! assert_eq!(section.next_offset, top.len());
//! # Ok::<(), gmx_topo::io::Error>(())
//! ```
//!
//! Files on disk go through the assembler first:
//!
//! ```no_run
//! use gmx_topo::io::assemble;
//!
//! let monolith = assemble("md/", "topol.top")?;
//! let topology = monolith.topology()?;
//! println!("{}: {} molecule types", topology.title, topology.molecule_count());
//! # Ok::<(), gmx_topo::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Lexical helpers, include flattening, section lookup and typed readers
//! - [`Topology`], [`MoleculeTable`], [`Span`] — Owned results and byte ranges

mod model;

pub mod io;

pub use model::molecules::{DuplicateMoleculeError, MoleculeTable};
pub use model::span::Span;
pub use model::topology::Topology;

pub use io::{Error, Monolith};
