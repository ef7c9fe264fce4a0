mod fetch;
mod types;

pub use fetch::fetch_manifest;
pub use types::AssetDescriptor;
