use crate::core::constants::exit_codes;
use crate::core::types::ProbeOutcome;

use std::sync::Mutex;

/// Binary aggregate health signal for a whole run.
///
/// Starts at `Clear` and only ever moves to `Failing`; it never
/// downgrades once escalated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Clear,
    Failing,
}

impl Severity {
    pub fn escalate(&mut self) {
        *self = Severity::Failing;
    }

    pub fn is_clear(self) -> bool {
        matches!(self, Severity::Clear)
    }

    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Clear => exit_codes::SUCCESS,
            Severity::Failing => exit_codes::LIVENESS_FAILURE,
        }
    }
}

/// The read-only result of a probing run.
///
/// `outcomes` holds every probe that produced a response, in arrival
/// order. Arrival order depends on network latency, so membership is the
/// contract here, not order. Transport failures contribute no outcome
/// but are reflected in `severity`.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ProbeOutcome>,
    pub severity: Severity,
}

impl RunReport {
    pub fn is_all_clear(&self) -> bool {
        self.severity.is_clear()
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

#[derive(Debug, Default)]
struct ReportState {
    outcomes: Vec<ProbeOutcome>,
    severity: Severity,
}

/// Thread-safe collector for probe outcomes.
///
/// The outcome list and the severity scalar live behind a single mutex,
/// so concurrent completions are serialized through one critical section.
/// During the probing phase the aggregator is append-only; after the
/// dispatcher's join barrier it is consumed into a read-only `RunReport`.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: Mutex<ReportState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a probe that produced a response.
    ///
    /// Anything other than a 200 escalates severity.
    pub fn record(&self, outcome: ProbeOutcome) {
        let mut state = self.state.lock().unwrap();
        if !outcome.is_alive() {
            state.severity.escalate();
        }
        state.outcomes.push(outcome);
    }

    /// Record a probe that never produced a response.
    ///
    /// The outcome list is untouched; severity escalates.
    pub fn record_transport_failure(&self) {
        let mut state = self.state.lock().unwrap();
        state.severity.escalate();
    }

    /// Freeze the aggregate. Callable only once all recording is done,
    /// which the dispatcher's join barrier guarantees.
    pub fn into_report(self) -> RunReport {
        let state = self.state.into_inner().unwrap();
        RunReport {
            outcomes: state.outcomes,
            severity: state.severity,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::types::UrlStatus;
    use std::sync::Arc;

    fn outcome(url: &str, status: u16) -> ProbeOutcome {
        ProbeOutcome::new(url.to_string(), status)
    }

    #[test]
    fn test_severity__starts_clear_and_escalates_monotonically() {
        let mut severity = Severity::default();
        assert!(severity.is_clear());
        assert_eq!(severity.exit_code(), 0);

        severity.escalate();
        assert!(!severity.is_clear());
        assert_eq!(severity.exit_code(), 3);

        // Escalating again never downgrades
        severity.escalate();
        assert_eq!(severity, Severity::Failing);
    }

    #[test]
    fn test_aggregator__all_ok_stays_clear() {
        let aggregator = Aggregator::new();
        aggregator.record(outcome("http://a.com", 200));
        aggregator.record(outcome("http://b.com", 200));

        let report = aggregator.into_report();

        assert!(report.is_all_clear());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.outcomes.len(), 2);
    }

    #[test]
    fn test_aggregator__client_error_escalates() {
        let aggregator = Aggregator::new();
        aggregator.record(outcome("http://a.com", 200));
        aggregator.record(outcome("http://b.com", 404));

        let report = aggregator.into_report();

        assert!(!report.is_all_clear());
        assert_eq!(report.exit_code(), 3);
        assert_eq!(report.outcomes.len(), 2);
    }

    #[test]
    fn test_aggregator__unknown_status_escalates() {
        let aggregator = Aggregator::new();
        aggregator.record(outcome("http://a.com", 503));

        let report = aggregator.into_report();

        assert!(!report.is_all_clear());
        assert_eq!(
            report.outcomes[0].classification(),
            UrlStatus::Unknown
        );
    }

    #[test]
    fn test_aggregator__transport_failure_escalates_without_outcome() {
        let aggregator = Aggregator::new();
        aggregator.record(outcome("http://a.com", 200));
        aggregator.record_transport_failure();

        let report = aggregator.into_report();

        assert!(!report.is_all_clear());
        assert_eq!(report.outcomes.len(), 1);
    }

    #[test]
    fn test_aggregator__appends_in_arrival_order() {
        let aggregator = Aggregator::new();
        aggregator.record(outcome("http://first.com", 200));
        aggregator.record(outcome("http://second.com", 200));
        aggregator.record(outcome("http://third.com", 200));

        let report = aggregator.into_report();

        let recorded: Vec<&str> = report.outcomes.iter().map(|o| o.url.as_str()).collect();
        assert_eq!(
            recorded,
            vec!["http://first.com", "http://second.com", "http://third.com"]
        );
    }

    #[test]
    fn test_aggregator__empty_run_is_clear() {
        let report = Aggregator::new().into_report();

        assert!(report.is_all_clear());
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_aggregator__concurrent_recording_never_loses_outcomes() {
        let aggregator = Arc::new(Aggregator::new());
        let mut handles = vec![];

        for thread in 0..8 {
            let aggregator = Arc::clone(&aggregator);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    if i % 5 == 0 {
                        aggregator.record_transport_failure();
                    } else {
                        aggregator.record(ProbeOutcome::new(
                            format!("http://t{thread}.example/{i}"),
                            200,
                        ));
                    }
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let aggregator = Arc::into_inner(aggregator).unwrap();
        let report = aggregator.into_report();

        // 8 threads x 20 successful records each; failures only escalate
        assert_eq!(report.outcomes.len(), 8 * 20);
        assert!(!report.is_all_clear());
    }
}
