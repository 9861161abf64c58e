//! Core data structures produced by reading a topology.
//!
//! - [`span`] – Byte ranges into a flattened document.
//! - [`molecules`] – Insertion-ordered molecule count table that refuses duplicates.
//! - [`topology`] – The owned, typed view of a whole topology.
//!
//! These types never borrow from the monolith buffer; readers in
//! [`crate::io`] copy the values out before returning them.

pub mod molecules;
pub mod span;
pub mod topology;
