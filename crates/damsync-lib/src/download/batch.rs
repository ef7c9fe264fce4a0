use super::download::fetch_asset;
use super::report::{MirrorReport, build_report};
use super::types::{DownloadOutcome, MirrorOptions};
use crate::error::DamSyncError;
use crate::manifest::AssetDescriptor;
use futures::stream::{FuturesUnordered, StreamExt};
use reqwest::Client;
use tracing::{info, warn};

/// Split an ordered sequence into contiguous groups of `size`; the last
/// group may be shorter. Concatenating the groups reproduces the input.
///
/// `size` must be non-zero; callers validate it before partitioning.
pub fn partition<T>(items: Vec<T>, size: usize) -> Vec<Vec<T>> {
    assert!(size > 0, "partition size must be non-zero");

    let mut groups = Vec::with_capacity(items.len().div_ceil(size));
    let mut iter = items.into_iter();
    loop {
        let group: Vec<T> = iter.by_ref().take(size).collect();
        if group.is_empty() {
            break;
        }
        groups.push(group);
    }
    groups
}

/// Drive one full mirror run: partition the manifest, download each batch
/// concurrently, pause between batches, and aggregate the final report.
///
/// Batches run strictly sequentially, so peak concurrency is bounded by
/// `batch_size`. Per-asset failures are captured in their outcomes and never
/// abort the run; only empty or invalid caller input fails fast here.
pub async fn mirror_all(
    client: &Client,
    manifest: Vec<AssetDescriptor>,
    options: &MirrorOptions,
) -> Result<MirrorReport, DamSyncError> {
    if options.batch_size == 0 {
        return Err(DamSyncError::InvalidRequest {
            details: "batch size must be greater than 0".to_string(),
        });
    }
    if manifest.is_empty() {
        return Err(DamSyncError::InvalidRequest {
            details: "manifest contains no assets".to_string(),
        });
    }

    let total = manifest.len();
    let groups = partition(manifest, options.batch_size);
    let group_count = groups.len();
    let mut outcomes: Vec<DownloadOutcome> = Vec::with_capacity(total);

    for (index, group) in groups.into_iter().enumerate() {
        let mut tasks = FuturesUnordered::new();
        for asset in group {
            let client = client.clone();
            let options = options.clone();
            tasks.push(tokio::spawn(async move {
                fetch_asset(&client, &asset, &options).await
            }));
        }

        // Every task settles before the next group starts; outcomes arrive
        // in completion order, not submission order.
        let mut group_outcomes = Vec::new();
        let mut group_fault: Option<tokio::task::JoinError> = None;
        while let Some(joined) = tasks.next().await {
            match joined {
                Ok(outcome) => group_outcomes.push(outcome),
                Err(err) => {
                    group_fault.get_or_insert(err);
                }
            }
        }

        // A fault while waiting on the group (a task panic, not a captured
        // per-asset failure) collapses the whole group into one synthetic
        // failed outcome, and the run continues with the next group.
        match group_fault {
            Some(err) => {
                warn!(batch = index, error = %err, "Batch collapsed into a synthetic failure");
                outcomes.push(DownloadOutcome::group_fault(format!(
                    "batch task failure: {err}"
                )));
            }
            None => outcomes.extend(group_outcomes),
        }

        info!(progress = outcomes.len(), total, "Batch finished");

        if index + 1 != group_count && !options.batch_delay.is_zero() {
            tokio::time::sleep(options.batch_delay).await;
        }
    }

    Ok(build_report(outcomes))
}
