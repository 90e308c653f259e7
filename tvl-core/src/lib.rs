// tvl-core/src/lib.rs
// Cross-chain TVL core: aggregation, column planning, formatting

pub mod columns;
pub mod config;
pub mod engine;
pub mod format;
pub mod store;

pub use columns::{plan_columns, Cell, ColumnKind, ColumnSpec};
pub use engine::{
    aggregate, is_partial, AggregatedAssetRow, EngineError, NativePosition, MIN_READY_ASSETS,
};
pub use store::TvlStore;

// Re-export the shared model for convenience
pub use tvl_common::{
    asset, chain, snapshot, AssetMetadata, AssetRegistry, AssetRef, Chain, ChainCatalog,
    ChainValueRecord, Ecosystem, SnapshotError, TvlSnapshot,
};
