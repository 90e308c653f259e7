// tvl-common/src/lib.rs
// Shared data model for the cross-chain TVL engine

pub mod asset;
pub mod chain;
pub mod error;
pub mod snapshot;

pub use asset::{AssetMetadata, AssetRegistry};
pub use chain::{Chain, ChainCatalog, Ecosystem};
pub use error::SnapshotError;
pub use snapshot::{AssetRef, AssetTvl, ChainValueRecord, TvlSnapshot};
