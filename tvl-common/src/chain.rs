// tvl-common/src/chain.rs
// Chain catalog: the ordered set of tracked chains per ecosystem

use serde::{Deserialize, Serialize};

/// Which aggregate-total bucket a chain's locked value rolls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Evm,
    Cosmos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub ecosystem: Ecosystem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_native_asset: Option<bool>,
}

impl Chain {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Ordered chain lists, EVM ecosystem first. Chain ids are compared
/// ignore-case everywhere; upstream sources are not consistent about
/// casing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainCatalog {
    evm: Vec<Chain>,
    cosmos: Vec<Chain>,
}

impl ChainCatalog {
    pub fn new(evm: Vec<Chain>, cosmos: Vec<Chain>) -> Self {
        // A chain id shared across ecosystems would double-shift the
        // column rank rule; this is a precondition on the catalogs.
        debug_assert!(
            evm.iter()
                .all(|e| !cosmos.iter().any(|c| c.id.eq_ignore_ascii_case(&e.id))),
            "chain id present in both ecosystems"
        );
        Self { evm, cosmos }
    }

    pub fn evm(&self) -> &[Chain] {
        &self.evm
    }

    pub fn cosmos(&self) -> &[Chain] {
        &self.cosmos
    }

    pub fn len(&self) -> usize {
        self.evm.len() + self.cosmos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evm.is_empty() && self.cosmos.is_empty()
    }

    /// All chains in catalog order: EVM list first, then Cosmos list,
    /// each in input order.
    pub fn iter(&self) -> impl Iterator<Item = &Chain> {
        self.evm.iter().chain(self.cosmos.iter())
    }

    pub fn get(&self, id: &str) -> Option<&Chain> {
        self.iter().find(|c| c.id.eq_ignore_ascii_case(id))
    }

    pub fn is_cosmos(&self, id: &str) -> bool {
        self.cosmos.iter().any(|c| c.id.eq_ignore_ascii_case(id))
    }
}
