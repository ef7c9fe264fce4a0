use crate::manifest::AssetDescriptor;
use std::path::{Path, PathBuf};

/// Subtree under the output directory that mirrors the repository layout.
pub const DAM_SUBTREE: &str = "dam";

/// Local destination mirroring the asset's repository path.
pub fn primary_path(asset: &AssetDescriptor, output_dir: &Path) -> PathBuf {
    // Repository paths are rooted ("/media/..."); the leading slash must go
    // so the join stays under the output directory.
    output_dir
        .join(DAM_SUBTREE)
        .join(asset.path.trim_start_matches('/'))
}

/// Flat, id-keyed alias location for the same bytes, used when callers need
/// identifier-addressable lookup alongside the path-addressable tree.
///
/// Keyed by the node name; `fileName` only affects reporting.
pub fn alias_path(asset: &AssetDescriptor, output_dir: &Path) -> PathBuf {
    output_dir
        .join(DAM_SUBTREE)
        .join(format!("id:{}", asset.id))
        .join(&asset.name)
}

/// Create the destination's parent directory tree. Idempotent.
pub async fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    Ok(())
}
