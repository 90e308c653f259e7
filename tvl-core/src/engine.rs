// tvl-core/src/engine.rs
// Aggregation engine: merges per-chain locked-value records into ranked
// per-asset rows. Pure function of its three inputs, no internal state.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use tvl_common::{
    AssetMetadata, AssetRegistry, AssetTvl, Chain, ChainCatalog, ChainValueRecord, TvlSnapshot,
};

/// The snapshot must carry MORE than this many asset entries before a
/// table is produced; ranking a half-loaded snapshot is worse than
/// keeping the previous one.
pub const MIN_READY_ASSETS: usize = 5;

/// Price used when the feed has no quote for an asset. Same numeric
/// type as real prices so the descending sort stays total; unpriced
/// assets land at the bottom, never at the top.
pub const UNKNOWN_PRICE: Decimal = Decimal::NEGATIVE_ONE;

/// Error types for the aggregation pass
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("Snapshot not ready: {have} assets, need more than {need}")]
    NotReady { have: usize, need: usize },

    #[error("Chain catalog is empty")]
    EmptyCatalog,

    #[error("Asset registry is empty")]
    NoAssets,
}

/// The record of an asset on its home chain, with the chain attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NativePosition {
    pub chain: Chain,
    pub record: ChainValueRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedAssetRow {
    pub asset_id: String,
    /// Absent metadata degrades the display fields, it never drops the row.
    pub asset: Option<AssetMetadata>,
    pub total_on_evm: Option<Decimal>,
    pub total_on_cosmos: Option<Decimal>,
    pub total: Option<Decimal>,
    /// Spot price, or [`UNKNOWN_PRICE`] when the feed had none.
    pub price: Decimal,
    pub value_on_evm: Decimal,
    pub value_on_cosmos: Decimal,
    /// Ranking key: price * total supply.
    pub value: Decimal,
    pub native: Option<NativePosition>,
    pub per_chain: BTreeMap<String, ChainValueRecord>,
}

impl AggregatedAssetRow {
    pub fn has_price(&self) -> bool {
        self.price >= Decimal::ZERO
    }

    pub fn label(&self) -> &str {
        match &self.asset {
            Some(a) if !a.name.is_empty() => &a.name,
            Some(a) if !a.symbol.is_empty() => &a.symbol,
            _ => &self.asset_id,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        self.asset
            .as_ref()
            .map(|a| a.symbol.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Merge a raw snapshot into ranked rows, one per asset, ordered by
/// total value descending. Unpriced assets carry the sentinel price and
/// therefore sort to the bottom; ties keep snapshot encounter order.
pub fn aggregate(
    catalog: &ChainCatalog,
    registry: &AssetRegistry,
    snapshot: &TvlSnapshot,
) -> Result<Vec<AggregatedAssetRow>, EngineError> {
    if catalog.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }
    if registry.is_empty() {
        return Err(EngineError::NoAssets);
    }
    if snapshot.len() <= MIN_READY_ASSETS {
        return Err(EngineError::NotReady {
            have: snapshot.len(),
            need: MIN_READY_ASSETS,
        });
    }

    let mut rows: Vec<AggregatedAssetRow> = snapshot
        .assets
        .iter()
        .map(|(asset_id, tvl)| build_row(asset_id, tvl, catalog, registry))
        .collect();

    // Stable sort: equal values keep snapshot order across calls.
    rows.sort_by(|a, b| b.value.cmp(&a.value));

    debug!(rows = rows.len(), "aggregated tvl snapshot");
    Ok(rows)
}

fn build_row(
    asset_id: &str,
    tvl: &AssetTvl,
    catalog: &ChainCatalog,
    registry: &AssetRegistry,
) -> AggregatedAssetRow {
    let price = tvl.price.unwrap_or(UNKNOWN_PRICE);

    // First catalog chain (EVM list then Cosmos list) whose record is
    // flagged native. At most one native position per asset.
    let native = catalog.iter().find_map(|chain| {
        tvl.per_chain.iter().find_map(|(chain_id, record)| {
            (record.is_native && chain_id.eq_ignore_ascii_case(&chain.id)).then(|| {
                NativePosition {
                    chain: chain.clone(),
                    record: record.clone(),
                }
            })
        })
    });

    // Records for chains the catalog no longer tracks are dropped; a
    // chain with no record stays absent (no position, not a zero).
    let per_chain: BTreeMap<String, ChainValueRecord> = tvl
        .per_chain
        .iter()
        .filter(|(chain_id, _)| catalog.get(chain_id).is_some())
        .map(|(chain_id, record)| (chain_id.clone(), record.clone()))
        .collect();

    AggregatedAssetRow {
        asset_id: asset_id.to_string(),
        asset: registry.get(asset_id).cloned(),
        total_on_evm: tvl.total_on_evm,
        total_on_cosmos: tvl.total_on_cosmos,
        total: tvl.total,
        price,
        value_on_evm: price * tvl.total_on_evm.unwrap_or(Decimal::ZERO),
        value_on_cosmos: price * tvl.total_on_cosmos.unwrap_or(Decimal::ZERO),
        value: price * tvl.total.unwrap_or(Decimal::ZERO),
        native,
        per_chain,
    }
}

/// Whether the ranked table covers fewer assets than a complete
/// snapshot should; callers surface this as a trailing loading state.
pub fn is_partial(
    rows: &[AggregatedAssetRow],
    registry: &AssetRegistry,
    include_staging: bool,
) -> bool {
    rows.len() < registry.expected_count(include_staging)
}
