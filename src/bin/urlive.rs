use clap::{CommandFactory, Parser};
use urlive::config::{CliConfig, Config};
use urlive::core::constants::exit_codes;
use urlive::discovery::{self, Finder, UrlFinder};
use urlive::logging;
use urlive::probe::{ProbeOptions, ProbeUrls, Prober};
use urlive::ui::output;
use urlive::ui::{Cli, Commands, cli_to_config, print_completions};

use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut app = Cli::command();
        print_completions(*shell, &mut app);
        std::process::exit(exit_codes::SUCCESS);
    }

    match run(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(exit_codes::INPUT_ERROR);
        }
    }
}

/// Main liveness-checking flow, extracted from main() for testing
async fn run(cli: &Cli) -> urlive::Result<i32> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    logging::init_logger(config.is_verbose());

    let ignore_patterns = match config.ignore_file.as_deref() {
        Some(path) => discovery::load_ignore_patterns(Path::new(path))?,
        None => Vec::new(),
    };

    let paths: Vec<&Path> = cli.files.iter().map(Path::new).collect();
    let finder = Finder::default();
    let found_urls = finder.find_urls(paths)?;
    let total_found = found_urls.len();

    // Normalize into the candidate set: dedup, then drop ignored prefixes
    let mut candidates = discovery::dedup_urls(&found_urls);
    if !ignore_patterns.is_empty() {
        candidates = discovery::apply_ignore_patterns(candidates, &ignore_patterns);
    }
    logging::log_url_discovery(candidates.len(), total_found);

    let options = ProbeOptions::from_config(&config);
    if !options.structured_output {
        output::print_discovery_banner(candidates.len(), total_found);
    }

    let candidate_count = candidates.len();
    logging::log_probe_start(candidate_count);

    let prober = Prober::default();
    let report = prober.probe_urls_with_options(candidates, options).await?;
    logging::log_probe_complete(
        report.outcomes.len(),
        candidate_count,
        report.is_all_clear(),
    );

    if options.structured_output {
        output::print_outcomes_json(&report)?;
    }

    Ok(report.exit_code())
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> urlive::Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI arguments take precedence over file-based configuration
    config.merge_with_cli(cli_config);
    Ok(config)
}
