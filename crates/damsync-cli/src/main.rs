use damsync_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_mirror_job, run_serve};
use damsync_lib::error::DamSyncError;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<(), DamSyncError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Serve(params) => run_serve(params).await?,
        ResolvedCommand::Mirror(params) => run_mirror_job(params).await?,
    }

    Ok(())
}
