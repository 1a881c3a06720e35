//! Grammar rules for the saga scripting language.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `blocks.rs` - `start`, `block`, `nested_block` and the compound blocks
//! - `lines.rs` - Single-line statements (comments, `next`, assignments)
//! - `commands.rs` - Container commands with arguments and options
//! - `expressions.rs` - Operation parsing (Pratt parser)
//! - `values.rs` - Literal values, lists and objects

mod blocks;
mod commands;
mod expressions;
mod lines;
mod values;
