use std::path::PathBuf;

use crate::source::AssetLoadError;

/// Errors that can occur in the gallery layer.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// Failed to parse the gallery manifest.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// An I/O error occurred reading the manifest.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An asset named in the manifest could not be loaded. Raised at
    /// collection-build time, before any run is possible.
    #[error("failed to load asset '{name}': {source}")]
    AssetLoad {
        name: String,
        source: AssetLoadError,
    },

    /// A sorting run is already in progress; overlapping runs are
    /// rejected, not queued.
    #[error("a sorting run is already in progress")]
    RunInProgress,
}
