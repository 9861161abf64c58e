//! Reading topology files: lexing, include flattening and section lookup.
//!
//! The usual flow is [`assemble`] (or an [`Assembler`]) to build a
//! [`Monolith`], then [`find_section`] or one of the typed readers
//! ([`system_title`], [`molecule_table`], [`read_topology`]) against its
//! bytes. [`find_section_streaming`] serves callers that want to walk a
//! single file section by section without flattening it first.

pub mod error;
pub mod lexer;

mod directive;
mod locator;
mod monolith;
mod stream;

pub use directive::{defines, molecule_table, read_topology, system_title};
pub use error::Error;
pub use lexer::LexError;
pub use locator::{Section, Sections, find_section, find_section_from, sections};
pub use monolith::{AssembleConfig, Assembler, DEFAULT_MAX_DEPTH, Monolith, assemble};
pub use stream::find_section_streaming;
