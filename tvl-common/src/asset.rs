// tvl-common/src/asset.rs
// Asset metadata registry

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: String,
    /// Staging-only assets are excluded from the expected coverage count
    /// on production deployments.
    #[serde(default)]
    pub is_staging: bool,
}

/// Lookup table over the tracked assets. Ids are matched ignore-case;
/// an id with no entry still produces a (degraded) table row, so lookups
/// return `Option` rather than failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetRegistry {
    assets: Vec<AssetMetadata>,
}

impl AssetRegistry {
    pub fn new(assets: Vec<AssetMetadata>) -> Self {
        Self { assets }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AssetMetadata> {
        self.assets.iter().find(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// Display label for an asset id: metadata name, else symbol, else
    /// the raw id when the registry has no entry at all.
    pub fn display_label<'a>(&'a self, id: &'a str) -> &'a str {
        match self.get(id) {
            Some(a) if !a.name.is_empty() => &a.name,
            Some(a) if !a.symbol.is_empty() => &a.symbol,
            _ => id,
        }
    }

    /// Number of assets a complete snapshot is expected to cover.
    pub fn expected_count(&self, include_staging: bool) -> usize {
        self.assets
            .iter()
            .filter(|a| !a.is_staging || include_staging)
            .count()
    }
}
