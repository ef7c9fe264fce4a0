use super::types::AssetDescriptor;
use crate::error::DamSyncError;
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Trailing content-node suffix some repository exports leave on asset
/// paths. Stripped once during manifest parsing, never reapplied.
const CONTENT_NODE_SUFFIX: &str = "/jcr:content";

/// Fetch the manifest of asset descriptors for one run.
///
/// Transport failures propagate as [`DamSyncError::Http`]; a non-200 status
/// or a body without a usable `results` array is reported as bad caller
/// input instead.
pub async fn fetch_manifest(
    client: &Client,
    url: &str,
) -> Result<Vec<AssetDescriptor>, DamSyncError> {
    tracing::debug!(url, "Fetching manifest");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(DamSyncError::ManifestData {
            url: url.to_string(),
            details: format!("unexpected status {status}"),
        });
    }

    let body = response.text().await?;
    parse_manifest(url, &body)
}

fn parse_manifest(url: &str, body: &str) -> Result<Vec<AssetDescriptor>, DamSyncError> {
    let payload: Value = serde_json::from_str(body).map_err(|e| DamSyncError::ManifestData {
        url: url.to_string(),
        details: format!("body is not valid JSON: {e}"),
    })?;

    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| DamSyncError::ManifestData {
            url: url.to_string(),
            details: "missing `results` array".to_string(),
        })?;

    let mut assets = Vec::with_capacity(results.len());
    for item in results {
        let mut asset: AssetDescriptor =
            serde_json::from_value(item.clone()).map_err(|e| DamSyncError::ManifestData {
                url: url.to_string(),
                details: format!("malformed asset descriptor: {e}"),
            })?;
        asset.path = strip_content_node(&asset.path).to_string();
        assets.push(asset);
    }

    tracing::info!(url, count = assets.len(), "Fetched manifest");
    Ok(assets)
}

fn strip_content_node(path: &str) -> &str {
    path.strip_suffix(CONTENT_NODE_SUFFIX).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_content_node_trailing() {
        assert_eq!(
            strip_content_node("/media/reports/2023/report.pdf/jcr:content"),
            "/media/reports/2023/report.pdf"
        );
    }

    #[test]
    fn test_strip_content_node_only_once() {
        assert_eq!(
            strip_content_node("/media/report.pdf/jcr:content/jcr:content"),
            "/media/report.pdf/jcr:content"
        );
    }

    #[test]
    fn test_strip_content_node_ignores_interior_segment() {
        assert_eq!(
            strip_content_node("/media/jcr:content/report.pdf"),
            "/media/jcr:content/report.pdf"
        );
        assert_eq!(strip_content_node("/media/report.pdf"), "/media/report.pdf");
    }

    #[test]
    fn test_parse_manifest_normalizes_paths() {
        let body = r#"{
            "results": [
                { "@name": "a.pdf", "@path": "/media/a.pdf/jcr:content", "@id": "1" },
                { "@name": "b.pdf", "@path": "/media/b.pdf", "@id": "2" }
            ]
        }"#;

        let assets = parse_manifest("http://repo/api", body).unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[0].path, "/media/a.pdf");
        assert_eq!(assets[1].path, "/media/b.pdf");
    }

    #[test]
    fn test_parse_manifest_missing_results_is_input_error() {
        let err = parse_manifest("http://repo/api", r#"{ "items": [] }"#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_parse_manifest_non_array_results_is_input_error() {
        let err = parse_manifest("http://repo/api", r#"{ "results": "nope" }"#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_parse_manifest_empty_results_is_empty() {
        let assets = parse_manifest("http://repo/api", r#"{ "results": [] }"#).unwrap();
        assert!(assets.is_empty());
    }
}
