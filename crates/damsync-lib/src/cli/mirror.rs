use crate::cli::params::MirrorParams;
use crate::download::run_mirror;
use crate::error::DamSyncError;
use reqwest::Client;

/// One-shot mirror run without the server; prints the report to stdout.
pub async fn run_mirror_job(params: MirrorParams) -> Result<(), DamSyncError> {
    let client = Client::new();

    tracing::info!(url = %params.manifest_url, "Starting mirror run");
    let report = run_mirror(&client, &params.manifest_url, &params.options).await?;

    if report.failures > 0 {
        tracing::warn!(
            failures = report.failures,
            total = report.total,
            "Mirror run finished with failures"
        );
    } else {
        tracing::info!(total = report.total, "Mirror run finished");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
