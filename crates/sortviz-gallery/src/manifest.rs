use serde::Deserialize;
use std::path::Path;

use crate::error::GalleryError;

/// Top-level manifest describing the gallery: what the window is called
/// and which images make up the sortable sequence, in display order.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryManifest {
    pub title: String,
    pub description: String,
    pub images: Vec<ImageEntry>,
}

/// One image in the gallery. `name` keys asset-source lookups; `path` is
/// the file path the presentation layer loads, relative to its asset root.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    pub path: String,
}

/// Load the gallery manifest from a `gallery.ron` file.
pub fn load_manifest(dir: &Path) -> Result<GalleryManifest, GalleryError> {
    let path = dir.join("gallery.ron");
    let content = std::fs::read_to_string(&path)?;
    ron::from_str(&content).map_err(|e| GalleryError::Parse {
        file: path,
        detail: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_manifest() {
        let input = r#"(
            title: "Sorting Visualizer",
            description: "Watch six classic sorts rearrange the gallery.",
            images: [
                (name: "block100", path: "block100.png"),
                (name: "block50", path: "block50.png"),
            ],
        )"#;

        let manifest: GalleryManifest = ron::from_str(input).unwrap();
        assert_eq!(manifest.title, "Sorting Visualizer");
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[0].name, "block100");
        assert_eq!(manifest.images[1].path, "block50.png");
    }

    #[test]
    fn load_manifest_missing_file_is_io_error() {
        let err = load_manifest(Path::new("/nonexistent-gallery-dir")).unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
