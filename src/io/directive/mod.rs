//! Typed readers for individual directives.
//!
//! Each reader locates its section in a flattened document and copies the
//! interpreted values out, so the results do not borrow the document.

mod molecules;
mod system;

pub use molecules::molecule_table;
pub use system::system_title;

use super::error::Error;
use super::lexer::define_token;
use crate::model::topology::Topology;

/// Tokens of every well-formed `#define` line, in first-occurrence order.
pub fn defines(document: &[u8]) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for line in document.split(|&b| b == b'\n') {
        let text = String::from_utf8_lossy(line);
        if let Ok(token) = define_token(&text) {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens
}

/// Reads the title, molecule table and defines of a flattened document.
pub fn read_topology(document: &[u8]) -> Result<Topology, Error> {
    Ok(Topology {
        title: system_title(document),
        molecules: molecule_table(document)?,
        defines: defines(document),
    })
}
