//! dropfour (workspace facade crate).
//!
//! This package keeps the `dropfour::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use dropfour_core as core;
pub use dropfour_types as types;
