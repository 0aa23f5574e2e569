//! CLI commands and argument parsing

use crate::auth::AuthScheme;
use crate::config::DEFAULT_TOKEN_FIELD;
use crate::resources::{Resource, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Export FireHydrant data to CSV
#[derive(Parser, Debug)]
#[command(name = "fh-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file holding the API token (JSON)
    #[arg(short = 'C', long, global = true, env = "FIREHYDRANT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Name of the token field in the configuration file
    #[arg(long, global = true, default_value = DEFAULT_TOKEN_FIELD)]
    pub token_field: String,

    /// API base URL
    #[arg(
        long,
        global = true,
        env = "FIREHYDRANT_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// How the token is sent in the Authorization header
    #[arg(
        long,
        global = true,
        value_enum,
        env = "FIREHYDRANT_AUTH_SCHEME",
        default_value_t = AuthScheme::Bearer
    )]
    pub auth_scheme: AuthScheme,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every record of a resource to a CSV file
    Export {
        /// Resource to export
        #[arg(value_enum)]
        resource: Resource,

        /// Records per page (defaults to 20 for incidents, 100 for users)
        #[arg(long)]
        page_size: Option<u32>,

        /// Output file (defaults to firehydrant_<resource>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Per-request timeout in seconds (no timeout by default)
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Treat responses without a `data` array as the end of the data
        #[arg(long)]
        lenient: bool,
    },

    /// List exportable resources
    Resources,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from([
            "fh-export",
            "--config",
            "config.json",
            "export",
            "incidents",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("config.json")));
        assert_eq!(cli.token_field, "firehydrant_token");
        assert_eq!(cli.auth_scheme, AuthScheme::Bearer);
        assert!(!cli.verbose);

        match cli.command {
            Commands::Export {
                resource,
                page_size,
                output,
                timeout_secs,
                lenient,
            } => {
                assert_eq!(resource, Resource::Incidents);
                assert!(page_size.is_none());
                assert!(output.is_none());
                assert!(timeout_secs.is_none());
                assert!(!lenient);
            }
            Commands::Resources => panic!("Expected Export"),
        }
    }

    #[test]
    fn test_parse_export_overrides() {
        let cli = Cli::try_parse_from([
            "fh-export",
            "export",
            "users",
            "-C",
            "cfg.json",
            "--auth-scheme",
            "raw",
            "--base-url",
            "http://localhost:9000",
            "--page-size",
            "50",
            "-o",
            "out/users.csv",
            "--timeout-secs",
            "30",
            "--lenient",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.auth_scheme, AuthScheme::Raw);
        assert_eq!(cli.base_url, "http://localhost:9000");
        assert!(cli.verbose);

        let Commands::Export {
            resource,
            page_size,
            output,
            timeout_secs,
            lenient,
        } = cli.command
        else {
            panic!("Expected Export");
        };
        assert_eq!(resource, Resource::Users);
        assert_eq!(page_size, Some(50));
        assert_eq!(output, Some(PathBuf::from("out/users.csv")));
        assert_eq!(timeout_secs, Some(30));
        assert!(lenient);
    }

    #[test]
    fn test_parse_rejects_unknown_resource() {
        assert!(Cli::try_parse_from(["fh-export", "export", "teams"]).is_err());
    }
}
