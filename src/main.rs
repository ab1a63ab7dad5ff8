//! Repowatch CLI entrypoint.

use clap::Parser;
use repowatch::cli::commands::{Cli, Commands};
use repowatch::cli::output::output_error;
use repowatch::core::error::ExitCode;
use repowatch::server::{serve, ServeConfig};
use repowatch::storage::event_store::InMemoryEventStore;
use std::process;

fn main() {
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Serve(args) => {
            let config = ServeConfig {
                host: args.host,
                port: args.port,
            };
            let store = InMemoryEventStore::new();
            match serve(&config, &store) {
                Ok(()) => ExitCode::Success,
                Err(err) => output_error(&err, cli.format),
            }
        }
    };

    process::exit(code.into());
}
