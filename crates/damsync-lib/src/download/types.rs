use crate::config::Config;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Tri-state result of materializing one asset locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeKind {
    AlreadyPresent,
    Downloaded,
    Failed,
}

/// Per-asset result collected by the batch orchestrator. Immutable once
/// constructed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOutcome {
    /// Absent only for synthetic group-level failures, which cannot be
    /// attributed to a single asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(skip)]
    pub kind: OutcomeKind,

    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn already_present(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            kind: OutcomeKind::AlreadyPresent,
            success: true,
            message: Some("File existed".to_string()),
            error: None,
        }
    }

    pub fn downloaded(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            kind: OutcomeKind::Downloaded,
            success: true,
            message: Some("File downloaded and saved successfully".to_string()),
            error: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            kind: OutcomeKind::Failed,
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    pub fn group_fault(error: impl Into<String>) -> Self {
        Self {
            file_name: None,
            kind: OutcomeKind::Failed,
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Tunables for one mirror run, passed explicitly to the orchestrator.
#[derive(Clone, Debug)]
pub struct MirrorOptions {
    pub base_url: String,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub output_dir: PathBuf,
    pub alias_tree: bool,
}

impl MirrorOptions {
    /// Build run options from the application config, applying the
    /// per-request base-URL override when the caller supplied one.
    pub fn from_config(config: &Config, base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| config.base_url.clone()),
            batch_size: config.batch_size,
            batch_delay: Duration::from_millis(config.batch_delay_ms),
            output_dir: config.output.path.clone(),
            alias_tree: config.output.alias_tree,
        }
    }
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self::from_config(&Config::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors_are_consistent() {
        let present = DownloadOutcome::already_present("a.pdf");
        assert_eq!(present.kind, OutcomeKind::AlreadyPresent);
        assert!(present.success);
        assert!(present.error.is_none());

        let downloaded = DownloadOutcome::downloaded("a.pdf");
        assert_eq!(downloaded.kind, OutcomeKind::Downloaded);
        assert!(downloaded.success);

        let failed = DownloadOutcome::failed("a.pdf", "status 404");
        assert_eq!(failed.kind, OutcomeKind::Failed);
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("status 404"));

        let fault = DownloadOutcome::group_fault("task panicked");
        assert!(fault.file_name.is_none());
        assert!(!fault.success);
    }

    #[test]
    fn test_outcome_serialization_shape() {
        let value = serde_json::to_value(DownloadOutcome::downloaded("a.pdf")).unwrap();
        assert_eq!(value["fileName"], "a.pdf");
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());

        let value = serde_json::to_value(DownloadOutcome::group_fault("boom")).unwrap();
        assert!(value.get("fileName").is_none());
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
    }

    #[test]
    fn test_options_from_config_applies_override() {
        let config = Config::default();
        let options =
            MirrorOptions::from_config(&config, Some("https://other.example.com".to_string()));
        assert_eq!(options.base_url, "https://other.example.com");
        assert_eq!(options.batch_size, config.batch_size);

        let options = MirrorOptions::from_config(&config, None);
        assert_eq!(options.base_url, config.base_url);
    }
}
