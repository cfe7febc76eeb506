use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Identifies a visual asset in the gallery's asset table. Cheap to copy
/// and compare. The table itself (image handles, textures) is owned by the
/// gallery and rendering layers; the engine only ever moves ids around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u32);

/// An element of the working sequence: an asset reference plus its sort key.
///
/// The key is derived once at collection-build time from the asset's
/// intrinsic pixel height and never changes afterwards. A sort only ever
/// changes an item's *position* in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortableItem {
    pub asset: AssetId,
    pub key: u32,
}

impl SortableItem {
    pub fn new(asset: AssetId, key: u32) -> Self {
        Self { asset, key }
    }
}

/// Comparator strategy over items. Algorithm bodies only ever call the
/// engine's configured comparator, so alternate orderings can be swapped in
/// without touching any algorithm.
///
/// `Less` means "orders before" (appears earlier in the sorted sequence).
pub type Comparator = fn(&SortableItem, &SortableItem) -> Ordering;

/// The display order: larger keys sort first (descending by key). Ties
/// compare equal; their relative order is whatever the algorithm does with
/// equal elements.
pub fn largest_first(a: &SortableItem, b: &SortableItem) -> Ordering {
    b.key.cmp(&a.key)
}

/// Ascending by key. Not used by the visualizer itself; exists so callers
/// (and tests) can substitute an alternate ordering.
pub fn smallest_first(a: &SortableItem, b: &SortableItem) -> Ordering {
    a.key.cmp(&b.key)
}
