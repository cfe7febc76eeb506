//! The asset-source boundary.
//!
//! A source turns a manifest name into a loaded visual handle plus the
//! asset's intrinsic pixel height, which becomes the item's sort key. How
//! the bytes get decoded is the source's business; the gallery only
//! depends on this contract.

use std::collections::BTreeMap;

/// Supplies loaded assets by name. The handle type is whatever the
/// presentation layer renders with (an image handle in the Bevy shell, a
/// plain string in headless use).
pub trait AssetSource {
    type Handle;

    /// Load `name`, returning the displayable handle and the intrinsic
    /// pixel height.
    fn load(&mut self, name: &str) -> Result<(Self::Handle, u32), AssetLoadError>;
}

/// Why an asset failed to load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetLoadError {
    #[error("asset '{name}' not found")]
    NotFound { name: String },

    #[error("failed to decode '{name}': {detail}")]
    Decode { name: String, detail: String },
}

/// In-memory source mapping names to heights; the handle is the name
/// itself. Used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    heights: BTreeMap<String, u32>,
}

impl FixedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, height: u32) -> Self {
        self.heights.insert(name.to_string(), height);
        self
    }
}

impl AssetSource for FixedSource {
    type Handle = String;

    fn load(&mut self, name: &str) -> Result<(String, u32), AssetLoadError> {
        match self.heights.get(name) {
            Some(&height) => Ok((name.to_string(), height)),
            None => Err(AssetLoadError::NotFound {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_source_returns_registered_heights() {
        let mut source = FixedSource::new().with("block50", 50).with("block100", 100);
        assert_eq!(source.load("block100").unwrap(), ("block100".to_string(), 100));
        assert_eq!(source.load("block50").unwrap(), ("block50".to_string(), 50));
    }

    #[test]
    fn fixed_source_reports_missing_assets() {
        let mut source = FixedSource::new();
        assert_eq!(
            source.load("ghost").unwrap_err(),
            AssetLoadError::NotFound {
                name: "ghost".to_string()
            }
        );
    }
}
