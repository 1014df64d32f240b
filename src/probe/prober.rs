use async_trait::async_trait;
use reqwest::redirect::Policy;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::core::constants::probe;
use crate::core::error::{Result, UrliveError};
use crate::core::types::ProbeOutcome;
use crate::probe::report::{Aggregator, RunReport};
use crate::ui::output;

use std::sync::Arc;
use std::time::Duration;

/// Per-run knobs the engine needs from the caller. Passed by value into
/// every probe task; there is no process-wide flag state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeOptions {
    /// Surface raw transport errors as diagnostics
    pub verbose: bool,
    /// Suppress per-probe lines; the caller dumps the report as JSON
    pub structured_output: bool,
}

impl ProbeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            verbose: config.is_verbose(),
            structured_output: config.wants_structured_output(),
        }
    }
}

#[async_trait]
pub trait ProbeUrls {
    async fn probe_urls_with_options(
        &self,
        urls: Vec<String>,
        options: ProbeOptions,
    ) -> Result<RunReport>;
}

#[derive(Default, Debug)]
pub struct Prober {}

#[async_trait]
impl ProbeUrls for Prober {
    /// Probe every candidate concurrently and aggregate the outcomes.
    ///
    /// One task per candidate, all started immediately; `join_next` is
    /// drained until the set is empty, so the report is only built once
    /// every probe has completed. A probe failure never aborts the run.
    async fn probe_urls_with_options(
        &self,
        urls: Vec<String>,
        options: ProbeOptions,
    ) -> Result<RunReport> {
        let client = Self::build_client()?;
        let aggregator = Arc::new(Aggregator::new());

        let mut probes = JoinSet::new();
        for url in urls {
            let client = client.clone();
            let aggregator = Arc::clone(&aggregator);
            probes.spawn(async move {
                probe_url(&client, &url, options, &aggregator).await;
            });
        }

        while let Some(completion) = probes.join_next().await {
            if let Err(err) = completion {
                log::warn!("probe task did not run to completion: {err}");
            }
        }

        let aggregator = Arc::into_inner(aggregator).ok_or_else(|| {
            UrliveError::Probe("aggregate still shared after all probes completed".to_string())
        })?;
        Ok(aggregator.into_report())
    }
}

impl Prober {
    /// The timeout lives on the client itself, so every request carries
    /// the same fixed ceiling without a separate watchdog.
    fn build_client() -> Result<reqwest::Client> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(probe::REQUEST_TIMEOUT_SECONDS))
            .redirect(Policy::limited(probe::MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()?;

        Ok(client)
    }
}

/// Run a single liveness probe: one HEAD request, one recorded result.
///
/// Every exit path records with the aggregator exactly once; task
/// completion is the signal the dispatcher's join barrier consumes.
async fn probe_url(
    client: &reqwest::Client,
    url: &str,
    options: ProbeOptions,
    aggregator: &Aggregator,
) {
    match client.head(url).send().await {
        Ok(response) => {
            let outcome = ProbeOutcome::new(url.to_string(), response.status().as_u16());
            log::debug!("{} -> {}", url, outcome.status);
            if !options.structured_output {
                output::print_probe_line(&outcome);
            }
            aggregator.record(outcome);
        }
        Err(err) => {
            let description = std::error::Error::source(&err)
                .map(|e| e.to_string())
                .unwrap_or_else(|| err.to_string());
            log::debug!("{url} -> {description}");
            if options.verbose && !options.structured_output {
                output::print_transport_diagnostic(url, &description);
            }
            aggregator.record_transport_failure();
        }
    }
}
