// tvl-core/src/store.rs
// Change-detection boundary around the pure engine: generation-counted
// input slots, recompute only when an input identity changed, keep the
// previous table while a fresh snapshot is below the readiness gate.

use tracing::debug;

use tvl_common::{AssetRegistry, Chain, ChainCatalog, TvlSnapshot};

use crate::columns::{plan_columns, ColumnSpec};
use crate::engine::{aggregate, AggregatedAssetRow};

#[derive(Debug, Clone)]
struct Versioned<T> {
    generation: u64,
    value: T,
}

/// Holds the four engine inputs plus the memoized outputs. Not shared:
/// the `&mut self` API keeps it single-threaded; concurrent callers
/// invoke [`aggregate`] directly on their own snapshots.
#[derive(Debug, Default)]
pub struct TvlStore {
    evm_chains: Option<Versioned<Vec<Chain>>>,
    cosmos_chains: Option<Versioned<Vec<Chain>>>,
    assets: Option<Versioned<AssetRegistry>>,
    snapshot: Option<Versioned<TvlSnapshot>>,

    rows: Option<Vec<AggregatedAssetRow>>,
    rows_inputs: Option<(u64, u64, u64, u64)>,
    columns: Option<Vec<ColumnSpec>>,
    columns_inputs: Option<(u64, u64)>,

    next_generation: u64,
}

impl TvlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_evm_chains(&mut self, chains: Vec<Chain>) {
        let generation = self.bump();
        self.evm_chains = Some(Versioned {
            generation,
            value: chains,
        });
    }

    pub fn set_cosmos_chains(&mut self, chains: Vec<Chain>) {
        let generation = self.bump();
        self.cosmos_chains = Some(Versioned {
            generation,
            value: chains,
        });
    }

    pub fn set_assets(&mut self, registry: AssetRegistry) {
        let generation = self.bump();
        self.assets = Some(Versioned {
            generation,
            value: registry,
        });
    }

    pub fn set_snapshot(&mut self, snapshot: TvlSnapshot) {
        let generation = self.bump();
        self.snapshot = Some(Versioned {
            generation,
            value: snapshot,
        });
    }

    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }

    /// The ranked table for the current inputs. Recomputes at most once
    /// per input change; while inputs are missing or the snapshot is
    /// not ready, the previously computed table (if any) is returned.
    pub fn ranked(&mut self) -> Option<&[AggregatedAssetRow]> {
        if let (Some(evm), Some(cosmos), Some(assets), Some(snapshot)) = (
            &self.evm_chains,
            &self.cosmos_chains,
            &self.assets,
            &self.snapshot,
        ) {
            let inputs = (
                evm.generation,
                cosmos.generation,
                assets.generation,
                snapshot.generation,
            );
            if self.rows_inputs != Some(inputs) {
                let catalog = ChainCatalog::new(evm.value.clone(), cosmos.value.clone());
                let result = aggregate(&catalog, &assets.value, &snapshot.value);
                self.rows_inputs = Some(inputs);
                match result {
                    Ok(rows) => self.rows = Some(rows),
                    Err(err) => debug!("keeping previous table: {err}"),
                }
            }
        }
        self.rows.as_deref()
    }

    /// The column layout for the current catalogs, memoized on their
    /// generations.
    pub fn columns(&mut self) -> Option<&[ColumnSpec]> {
        if let (Some(evm), Some(cosmos)) = (&self.evm_chains, &self.cosmos_chains) {
            let inputs = (evm.generation, cosmos.generation);
            if self.columns_inputs != Some(inputs) {
                let catalog = ChainCatalog::new(evm.value.clone(), cosmos.value.clone());
                self.columns = Some(plan_columns(&catalog));
                self.columns_inputs = Some(inputs);
            }
        }
        self.columns.as_deref()
    }
}
