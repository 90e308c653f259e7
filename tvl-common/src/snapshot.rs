// tvl-common/src/snapshot.rs
// Raw locked-value snapshot as delivered by the upstream indexer

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Contract-or-denom reference of a per-chain record: EVM chains carry a
/// token contract, Cosmos chains an IBC base denom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRef {
    Contract { address: String },
    Denom { base: String },
}

impl AssetRef {
    pub fn is_contract(&self) -> bool {
        matches!(self, AssetRef::Contract { .. })
    }

    pub fn is_denom(&self) -> bool {
        matches!(self, AssetRef::Denom { .. })
    }
}

/// Locked value of one asset on one chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainValueRecord {
    #[serde(default)]
    pub asset_ref: Option<AssetRef>,
    #[serde(default)]
    pub is_native: bool,
    #[serde(default)]
    pub escrow_addresses: Vec<String>,
    #[serde(default)]
    pub supply: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub explorer_url: Option<String>,
}

impl ChainValueRecord {
    /// Locked amount on this chain. `supply` takes precedence over
    /// `total` when both are present.
    pub fn amount(&self) -> Option<Decimal> {
        self.supply.or(self.total)
    }

    /// Whether the asset is present on this chain at all, as opposed to
    /// a record that carries no position. A zero amount still counts as
    /// present when a contract is deployed or escrows hold the denom.
    pub fn has_asset(&self) -> bool {
        self.amount().map(|a| !a.is_zero()).unwrap_or(false)
            || self.asset_ref.as_ref().is_some_and(|r| r.is_contract())
            || (!self.escrow_addresses.is_empty()
                && self.asset_ref.as_ref().is_some_and(|r| r.is_denom()))
    }
}

/// Top-level per-asset record. The three ecosystem totals are
/// pre-aggregated by the upstream indexer and copied through, never
/// re-summed here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTvl {
    #[serde(default)]
    pub total_on_evm: Option<Decimal>,
    #[serde(default)]
    pub total_on_cosmos: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub per_chain: BTreeMap<String, ChainValueRecord>,
}

/// One delivered snapshot, keyed by asset id. `BTreeMap` keeps
/// iteration deterministic, which the stable tie order of the ranking
/// relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TvlSnapshot {
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assets: BTreeMap<String, AssetTvl>,
}

impl TvlSnapshot {
    pub fn from_json(document: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
