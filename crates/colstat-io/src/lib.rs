//! colstat-io - Table loading for single-column analysis
//!
//! This crate provides the in-memory table model and readers that build it:
//!
//! - **Table**: rectangular rows of numeric, text, or missing cells
//! - **CSV/TSV**: delimited text with a header row and per-column type inference
//!
//! # Design
//!
//! Readers implement the `TableReader` trait and load the whole table eagerly.
//! A loaded `Table` is immutable; filtering produces a new table whose rows
//! keep their original positional index.

pub mod reader;
pub mod schema;
pub mod table;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use reader::*;
pub use schema::*;
pub use table::*;
