// Command-line interface definitions and parsing for urlive

use clap::{Parser, Subcommand};

use crate::config::CliConfig;
use crate::core::constants::output_formats;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files to scan for URLs
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<String>,

    /// File listing URL prefixes to skip (lines starting with # are comments)
    #[arg(short = 'i', long, value_name = "FILE")]
    pub ignore_file: Option<String>,

    /// Surface raw transport errors for unreachable URLs
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL)]
    pub format: Option<String>,

    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Map parsed CLI arguments onto the configuration-facing struct
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        ignore_file: cli.ignore_file.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_to_config__maps_all_fields() {
        let cli = Cli::parse_from([
            "urlive",
            "README.md",
            "--ignore-file",
            "ignore.txt",
            "--verbose",
            "--format",
            "json",
            "--config",
            "custom.toml",
        ]);

        let cli_config = cli_to_config(&cli);

        assert!(cli_config.verbose);
        assert_eq!(cli_config.output_format.as_deref(), Some("json"));
        assert_eq!(cli_config.ignore_file.as_deref(), Some("ignore.txt"));
        assert_eq!(cli_config.config_file.as_deref(), Some("custom.toml"));
        assert!(!cli_config.no_config);
    }

    #[test]
    fn test_cli_to_config__defaults() {
        let cli = Cli::parse_from(["urlive", "README.md"]);

        let cli_config = cli_to_config(&cli);

        assert!(!cli_config.verbose);
        assert!(cli_config.output_format.is_none());
        assert!(cli_config.ignore_file.is_none());
        assert!(cli_config.config_file.is_none());
    }

    #[test]
    fn test_cli__requires_files() {
        let result = Cli::try_parse_from(["urlive"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli__rejects_unknown_format() {
        let result = Cli::try_parse_from(["urlive", "README.md", "--format", "xml"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_cli__completions_subcommand_needs_no_files() {
        let cli = Cli::parse_from(["urlive", "completions", "bash"]);

        assert!(matches!(
            cli.command,
            Some(Commands::Completions {
                shell: clap_complete::Shell::Bash
            })
        ));
    }
}
