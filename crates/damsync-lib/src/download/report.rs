use super::types::{DownloadOutcome, OutcomeKind};
use serde::Serialize;

/// Aggregate of one full mirror run, serialized back to the caller.
#[derive(Clone, Debug, Serialize)]
pub struct MirrorReport {
    pub total: usize,
    pub success: usize,
    /// Failure count. The misspelled wire name is load-bearing: existing
    /// report consumers key on `erros`.
    #[serde(rename = "erros")]
    pub failures: usize,
    pub results: Vec<DownloadOutcome>,
}

/// Reduce the accumulated outcomes into totals.
/// `success + failures == total == results.len()` holds for any input.
pub fn build_report(results: Vec<DownloadOutcome>) -> MirrorReport {
    let failures = results
        .iter()
        .filter(|outcome| outcome.kind == OutcomeKind::Failed)
        .count();

    MirrorReport {
        total: results.len(),
        success: results.len() - failures,
        failures,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_add_up() {
        let report = build_report(vec![
            DownloadOutcome::downloaded("a.pdf"),
            DownloadOutcome::already_present("b.pdf"),
            DownloadOutcome::failed("c.pdf", "status 404"),
            DownloadOutcome::group_fault("task panicked"),
        ]);

        assert_eq!(report.total, 4);
        assert_eq!(report.success, 2);
        assert_eq!(report.failures, 2);
        assert_eq!(report.success + report.failures, report.total);
        assert_eq!(report.results.len(), report.total);
    }

    #[test]
    fn test_empty_outcomes_yield_all_zero_report() {
        let report = build_report(Vec::new());
        assert_eq!(report.total, 0);
        assert_eq!(report.success, 0);
        assert_eq!(report.failures, 0);
        assert!(report.results.is_empty());
    }

    #[test]
    fn test_report_serializes_legacy_failure_field() {
        let report = build_report(vec![DownloadOutcome::failed("a.pdf", "boom")]);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["total"], 1);
        assert_eq!(value["erros"], 1);
        assert!(value.get("failures").is_none());
        assert_eq!(value["results"][0]["fileName"], "a.pdf");
    }
}
