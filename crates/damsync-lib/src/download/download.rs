use super::paths::{alias_path, ensure_parent, primary_path};
use super::types::{DownloadOutcome, MirrorOptions};
use crate::manifest::AssetDescriptor;
use eyre::{Result, WrapErr, eyre};
use futures::StreamExt;
use reqwest::Client;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

/// Path prefix assets are served from on the remote host.
pub const REMOTE_PREFIX: &str = "/dam";

/// Materialize one asset locally, downloading it if absent.
///
/// Never fails: every error is folded into the returned outcome so one bad
/// asset cannot abort the batch it runs in.
pub async fn fetch_asset(
    client: &Client,
    asset: &AssetDescriptor,
    options: &MirrorOptions,
) -> DownloadOutcome {
    let url = format!(
        "{}{}{}",
        options.base_url.trim_end_matches('/'),
        REMOTE_PREFIX,
        asset.path
    );

    match try_fetch(client, asset, options, &url).await {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(url, error = %format!("{err:#}"), "Asset download failed");
            DownloadOutcome::failed(asset.display_name(), format!("{err:#}"))
        }
    }
}

async fn try_fetch(
    client: &Client,
    asset: &AssetDescriptor,
    options: &MirrorOptions,
    url: &str,
) -> Result<DownloadOutcome> {
    let dest = primary_path(asset, &options.output_dir);
    ensure_parent(&dest)
        .await
        .wrap_err_with(|| format!("Failed to create directory for {}", dest.display()))?;

    let outcome = if tokio::fs::try_exists(&dest).await? {
        debug!(path = %asset.path, output = %dest.display(), "File exists, skipping download");
        DownloadOutcome::already_present(asset.display_name())
    } else {
        transfer(client, url, &dest).await?;
        info!(path = %asset.path, output = %dest.display(), "Downloaded");
        DownloadOutcome::downloaded(asset.display_name())
    };

    // Id-keyed mirror of the same bytes. An error here fails the whole
    // outcome; alias failures are not surfaced separately.
    if options.alias_tree {
        let alias = alias_path(asset, &options.output_dir);
        ensure_parent(&alias)
            .await
            .wrap_err_with(|| format!("Failed to create directory for {}", alias.display()))?;
        if !tokio::fs::try_exists(&alias).await? {
            tokio::fs::copy(&dest, &alias)
                .await
                .wrap_err_with(|| format!("Failed to copy to alias {}", alias.display()))?;
        }
    }

    Ok(outcome)
}

async fn transfer(client: &Client, url: &str, dest: &Path) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .wrap_err_with(|| format!("Failed to request {url}"))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(eyre!("Failed to download {url}: status {status}"));
    }

    // A partial file must not survive a mid-transfer failure; its presence
    // would make later runs skip the asset.
    if let Err(err) = stream_to_file(response, dest).await {
        let _ = tokio::fs::remove_file(dest).await;
        return Err(err).wrap_err_with(|| format!("Failed to stream {url}"));
    }

    Ok(())
}

async fn stream_to_file(response: reqwest::Response, dest: &Path) -> Result<()> {
    let file = tokio::fs::File::create(dest)
        .await
        .wrap_err_with(|| format!("Failed to create output file: {}", dest.display()))?;
    let mut writer = tokio::io::BufWriter::new(file);

    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let bytes = chunk.wrap_err("Failed to read from response stream")?;
        writer
            .write_all(&bytes)
            .await
            .wrap_err_with(|| format!("Failed to write to {}", dest.display()))?;
    }

    writer
        .flush()
        .await
        .wrap_err_with(|| format!("Failed to flush {}", dest.display()))?;

    Ok(())
}
