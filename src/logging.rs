use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        // Only show structured logs in verbose mode
        log::LevelFilter::Off
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs (from {total_found} total)");
}

/// Log probing start
pub fn log_probe_start(url_count: usize) {
    info!("Probing {url_count} URLs");
}

/// Log probing completion
pub fn log_probe_complete(responding: usize, candidates: usize, all_clear: bool) {
    if all_clear {
        info!("Probing complete: {responding}/{candidates} URLs alive");
    } else {
        warn!("Probing complete: {responding}/{candidates} URLs responded, issues found");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
