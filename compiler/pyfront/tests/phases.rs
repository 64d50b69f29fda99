// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based front end tests.
//!
//! Tests here drive the public pipeline end to end (lexer, comment filter,
//! parser, writer) through the `pyfront` crate. Unit tests for each stage
//! live next to the code in the stage's crate.
//!
//! # Organization
//!
//! - `parse/` - lexer, comment filter, parser, recovery and writer tests
//! - `common/` - shared helpers
//!
//! # Running Phase Tests
//!
//! ```bash
//! cargo test -p pyfront --test phases
//! cargo test -p pyfront --test phases recovery
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;
