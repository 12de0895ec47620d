//! CLI module - Command-line interface for the admin console.
//!
//! One subcommand per console page: authentication, the dashboard,
//! the four resource lists with their create/lifecycle actions, the
//! deletion review and trash views, and reports.

pub mod args;

pub use args::{Cli, Commands};
