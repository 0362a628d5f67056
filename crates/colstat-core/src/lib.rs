//! colstat-core - Single-column analysis engine
//!
//! This crate ties the table model and the statistics together:
//!
//! - **Extract**: pull the numeric values of one column, keeping row positions
//! - **Filter**: keep rows whose value in a column lies in an inclusive range
//! - **Session**: caller-owned state (table, column, filter) with an analysis
//!   snapshot that is rebuilt on every change
//! - **Report**: fixed-precision text rendering of a statistics record
//! - **Config**: display, histogram and CSV settings from TOML or JSON
//!
//! # Filtering
//!
//! A session always filters its base table. Applying a new bound replaces the
//! previous one instead of narrowing the already-filtered rows.

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod report;
pub mod session;

pub use config::*;
pub use error::*;
pub use extract::*;
pub use filter::*;
pub use report::*;
pub use session::*;
