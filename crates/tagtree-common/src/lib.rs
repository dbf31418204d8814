//! Common utilities for tagtree.
//!
//! This crate provides shared infrastructure used by the tokenizer and the CLI:
//! - **Warning System** - colored, de-duplicated terminal output for recoveries
//!   made while parsing malformed markup

pub mod warning;
