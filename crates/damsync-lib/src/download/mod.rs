mod batch;
mod download;
mod paths;
mod report;
mod types;

pub use batch::{mirror_all, partition};
pub use download::{REMOTE_PREFIX, fetch_asset};
pub use paths::{DAM_SUBTREE, alias_path, ensure_parent, primary_path};
pub use report::{MirrorReport, build_report};
pub use types::{DownloadOutcome, MirrorOptions, OutcomeKind};

use crate::error::DamSyncError;
use crate::manifest::fetch_manifest;
use reqwest::Client;

/// Fetch the manifest behind `manifest_url` and mirror every asset it lists.
pub async fn run_mirror(
    client: &Client,
    manifest_url: &str,
    options: &MirrorOptions,
) -> Result<MirrorReport, DamSyncError> {
    url::Url::parse(manifest_url).map_err(|e| DamSyncError::InvalidRequest {
        details: format!("invalid manifest URL {manifest_url}: {e}"),
    })?;

    let manifest = fetch_manifest(client, manifest_url).await?;
    mirror_all(client, manifest, options).await
}
