//! CLI module: clap-based argument parsing and conversion into [`AppConfig`].
//!
//! [`AppConfig`]: crate::config::AppConfig

mod clap_parser;

pub use clap_parser::{BatchArgs, CheckArgs, Cli, Command};
