use crate::cli::params::ServeParams;
use crate::error::DamSyncError;
use crate::server;
use std::sync::Arc;

pub async fn run_serve(params: ServeParams) -> Result<(), DamSyncError> {
    server::serve(Arc::new(params.config)).await
}
