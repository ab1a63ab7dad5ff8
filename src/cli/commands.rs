//! CLI command definitions.

use super::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Repowatch CLI - webhook listener for repository events.
#[derive(Parser)]
#[command(name = "repowatch")]
#[command(version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the webhook listener and polling API
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["repowatch", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 5000);
    }

    #[test]
    fn serve_overrides() {
        let cli =
            Cli::try_parse_from(["repowatch", "serve", "--host", "127.0.0.1", "--port", "8080"])
                .unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
    }

    #[test]
    fn format_flag_is_global() {
        let cli = Cli::try_parse_from(["repowatch", "serve", "-f", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
