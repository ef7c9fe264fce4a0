pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manifest;
pub mod server;

pub use config::Config;
pub use error::DamSyncError;
