//! Command-line interface module.

mod args;
pub mod build;
pub mod list;
pub mod reserve;
pub mod scaffold;

pub use args::{Cli, Commands, ListArgs, ReserveArgs};
