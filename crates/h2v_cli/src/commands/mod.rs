//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod scope;
