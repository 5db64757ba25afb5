//! Shared test utilities for stringscope integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timestamps produced by the builders are fixed so that
//! assertions never depend on the wall clock.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
