//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the crosspost binary.

mod commands;
mod compose;
mod inspect;

pub use commands::{Cli, Commands};
pub use compose::handle_compose_command;
pub use inspect::{handle_key_command, handle_normalize_command, handle_platforms_command};
