//! CLI command implementations.

pub mod common;
pub mod run;
pub mod truth_table;
pub mod version;
