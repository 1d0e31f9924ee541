//! Goblin (workspace facade crate).
//!
//! Re-exports the workspace crates under stable module names so the binary,
//! integration tests and benches can use `goblin::{core,input,term,types}`.

pub use goblin_core as core;
pub use goblin_input as input;
pub use goblin_term as term;
pub use goblin_types as types;
