//! Blockfall (workspace facade crate).
//!
//! The simulation lives in dedicated crates under `crates/` and is re-exported
//! here as `blockfall::{core,types}`. This package adds the host side: the
//! replay script runner and the JSON observation format used by the
//! `blockfall-replay` binary.

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod protocol;
pub mod replay;
