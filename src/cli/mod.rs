//! CLI commands and argument parsing.
//!
//! Built on [`clap`](https://docs.rs/clap). The binary has one job: run the
//! webhook listener.
//!
//! # Example
//!
//! ```bash,no_run
//! # Listen on the default interface and port
//! repowatch serve
//!
//! # Bind somewhere else, with JSON error output
//! repowatch serve --host 127.0.0.1 --port 8080 -f json
//! ```
//!
//! # Modules
//!
//! - [`commands`] - Command definitions
//! - [`output`] - Output formatting and exit codes

pub mod commands;
pub mod output;
