//! Frametris (workspace facade crate).
//!
//! Re-exports the member crates as `frametris::{types, core, input, term}` and
//! holds the runner configuration. The rules engine itself lives in
//! `frametris-core` and has no terminal or I/O dependencies.

pub mod config;

pub use frametris_core as core;
pub use frametris_input as input;
pub use frametris_term as term;
pub use frametris_types as types;

pub use config::RunnerConfig;
