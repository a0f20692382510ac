//! Klotski TUI (workspace facade crate).
//!
//! Re-exports the workspace crates as `klotski_tui::{core,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use klotski_core as core;
pub use klotski_input as input;
pub use klotski_term as term;
pub use klotski_types as types;
