//! Output formatting and display logic for urlive

use crate::core::error::Result;
use crate::core::types::{ProbeOutcome, UrlStatus};
use crate::probe::RunReport;
use crate::ui::color::{Colors, colorize};

fn classification_color(classification: UrlStatus) -> &'static str {
    match classification {
        UrlStatus::Ok => Colors::GREEN,
        UrlStatus::ClientError | UrlStatus::TransportError => Colors::RED,
        UrlStatus::Unknown => Colors::BRIGHT_BLACK,
    }
}

/// One line per probed URL: `[GOOD] [200] http://example.com`
pub fn print_probe_line(outcome: &ProbeOutcome) {
    let classification = outcome.classification();
    println!(
        "{} [{}] {}",
        colorize(
            &format!("[{}]", classification.label()),
            classification_color(classification)
        ),
        outcome.status,
        outcome.url
    );
}

/// Verbose-mode diagnostic for a URL that never produced a response
pub fn print_transport_diagnostic(url: &str, description: &str) {
    eprintln!(
        "{} {}: {}",
        colorize(
            &format!("[{}]", UrlStatus::TransportError.label()),
            classification_color(UrlStatus::TransportError)
        ),
        url,
        description
    );
}

/// Text-mode banner shown before probing starts
pub fn print_discovery_banner(unique_urls: usize, total_found: usize) {
    println!("Found {unique_urls} unique URL(s), {total_found} in total");
}

/// Structured-mode output: the outcome list as a JSON array of
/// `{"url": ..., "status": ...}` records
pub fn print_outcomes_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string(&report.outcomes)?);
    Ok(())
}
