//! Taskboard command-line interface.
//!
//! - `taskboard show --file board.json`: print a board in display order
//! - `taskboard show --board <id> [--dir DIR]`: fetch a board by id
//! - `taskboard replay --file board.json --script drag.yaml`: replay a drag gesture
//! - `taskboard config`: print the effective configuration

pub mod cli;
pub mod commands;
pub mod layout;
pub mod script;
pub mod table;

pub use cli::{BoardSource, Cli, Commands};
