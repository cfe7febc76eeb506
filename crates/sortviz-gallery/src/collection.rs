//! Builds the sortable item collection from a manifest and a source.
//!
//! Construction is fail-fast: the first asset that fails to load aborts
//! the build, so a broken gallery never offers a run at all. Sort keys are
//! the intrinsic heights the source reports; asset ids index the handle
//! table in manifest order.

use sortviz_core::{AssetId, SortableItem};

use crate::error::GalleryError;
use crate::manifest::GalleryManifest;
use crate::source::AssetSource;

/// The built collection: items for the engine, handles for the renderer.
/// `items[i].asset` indexes `handles`.
#[derive(Debug)]
pub struct Collection<H> {
    pub items: Vec<SortableItem>,
    pub handles: Vec<H>,
}

/// Load every manifest entry in order and construct the item sequence.
pub fn build_collection<S: AssetSource>(
    manifest: &GalleryManifest,
    source: &mut S,
) -> Result<Collection<S::Handle>, GalleryError> {
    let mut items = Vec::with_capacity(manifest.images.len());
    let mut handles = Vec::with_capacity(manifest.images.len());

    for (i, entry) in manifest.images.iter().enumerate() {
        let (handle, height) = source.load(&entry.name).map_err(|source| GalleryError::AssetLoad {
            name: entry.name.clone(),
            source,
        })?;
        items.push(SortableItem::new(AssetId(i as u32), height));
        handles.push(handle);
    }

    Ok(Collection { items, handles })
}
