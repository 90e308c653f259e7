// tvl-core/src/columns.rs
// Column planner: stable column layout over a dynamic chain set, plus
// the per-cell value accessors the presentation layer binds to.

use rust_decimal::Decimal;
use serde::Serialize;

use tvl_common::{Chain, ChainCatalog, ChainValueRecord};

use crate::engine::AggregatedAssetRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ColumnKind {
    Asset,
    Native,
    TotalSupply,
    MovedToEvm,
    MovedToCosmos,
    Chain(Chain),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub rank: usize,
    pub header: String,
}

/// One resolved table cell. `NoPosition` means the asset has no record
/// on that chain at all; it is distinct from a position of zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    AssetIdentity {
        label: String,
        symbol: Option<String>,
        image: Option<String>,
    },
    Aggregate {
        amount: Option<Decimal>,
        value: Option<Decimal>,
        symbol: Option<String>,
    },
    Position {
        amount: Option<Decimal>,
        value: Option<Decimal>,
        has_asset: bool,
        explorer_url: Option<String>,
    },
    NoPosition,
}

/// Fixed aggregate columns (ranks 0..=4) followed by one column per
/// chain, EVM list then Cosmos list.
pub fn plan_columns(catalog: &ChainCatalog) -> Vec<ColumnSpec> {
    let mut columns = vec![
        fixed(ColumnKind::Asset, 0, "Asset"),
        fixed(ColumnKind::Native, 1, "Native"),
        fixed(ColumnKind::TotalSupply, 2, "Total Supply"),
        fixed(ColumnKind::MovedToEvm, 3, "Moved to EVM"),
        fixed(ColumnKind::MovedToCosmos, 4, "Moved to Cosmos"),
    ];

    for (i, chain) in catalog.iter().enumerate() {
        // Rank rule ported verbatim from the original dashboard: a chain
        // that is also in the cosmos list gets one extra rank slot. For
        // the cosmos tail this is a uniform +1 shift; a chain id shared
        // across ecosystems would double-shift and is not guarded here.
        let cosmos_offset = usize::from(catalog.is_cosmos(&chain.id));
        columns.push(ColumnSpec {
            kind: ColumnKind::Chain(chain.clone()),
            rank: 5 + i + cosmos_offset,
            header: chain.display_name().to_string(),
        });
    }

    columns.sort_by_key(|c| c.rank);
    columns
}

fn fixed(kind: ColumnKind, rank: usize, header: &str) -> ColumnSpec {
    ColumnSpec {
        kind,
        rank,
        header: header.to_string(),
    }
}

impl ColumnSpec {
    /// Resolve this column's cell for one row. Full-precision values;
    /// rounding belongs to the formatting layer.
    pub fn cell(&self, row: &AggregatedAssetRow) -> Cell {
        match &self.kind {
            ColumnKind::Asset => Cell::AssetIdentity {
                label: row.label().to_string(),
                symbol: row.symbol().map(str::to_string),
                image: row
                    .asset
                    .as_ref()
                    .map(|a| a.image.clone())
                    .filter(|i| !i.is_empty()),
            },
            ColumnKind::Native => match &row.native {
                Some(native) => position_cell(&native.record, row),
                None => Cell::NoPosition,
            },
            ColumnKind::TotalSupply => aggregate_cell(row.total, row.value, row),
            ColumnKind::MovedToEvm => aggregate_cell(row.total_on_evm, row.value_on_evm, row),
            ColumnKind::MovedToCosmos => {
                aggregate_cell(row.total_on_cosmos, row.value_on_cosmos, row)
            }
            ColumnKind::Chain(chain) => {
                let record = row
                    .per_chain
                    .iter()
                    .find(|(id, _)| id.eq_ignore_ascii_case(&chain.id))
                    .map(|(_, record)| record);
                match record {
                    Some(record) => position_cell(record, row),
                    None => Cell::NoPosition,
                }
            }
        }
    }
}

fn aggregate_cell(amount: Option<Decimal>, value: Decimal, row: &AggregatedAssetRow) -> Cell {
    // The value line is suppressed for unpriced rows, matching the
    // dashboard's `value > -1` guard.
    let value = (amount.is_some() && value > Decimal::NEGATIVE_ONE).then_some(value);
    Cell::Aggregate {
        amount,
        value,
        symbol: row.symbol().map(str::to_string),
    }
}

fn position_cell(record: &ChainValueRecord, row: &AggregatedAssetRow) -> Cell {
    let amount = record.amount();
    let value = match amount {
        Some(a) if row.has_price() => Some(a * row.price),
        _ => None,
    };
    Cell::Position {
        amount,
        value,
        has_asset: record.has_asset(),
        explorer_url: record.explorer_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;
    use tvl_common::{AssetRef, Ecosystem};

    fn chain(id: &str, ecosystem: Ecosystem) -> Chain {
        Chain {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: String::new(),
            ecosystem,
            is_native_asset: None,
        }
    }

    fn catalog() -> ChainCatalog {
        ChainCatalog::new(
            vec![chain("a", Ecosystem::Evm), chain("b", Ecosystem::Evm)],
            vec![chain("c", Ecosystem::Cosmos), chain("d", Ecosystem::Cosmos)],
        )
    }

    fn row() -> AggregatedAssetRow {
        AggregatedAssetRow {
            asset_id: "uusdc".to_string(),
            asset: None,
            total_on_evm: Some(dec!(100)),
            total_on_cosmos: Some(dec!(40)),
            total: Some(dec!(140)),
            price: dec!(2),
            value_on_evm: dec!(200),
            value_on_cosmos: dec!(80),
            value: dec!(280),
            native: None,
            per_chain: BTreeMap::new(),
        }
    }

    #[test]
    fn test_fixed_prefix_order() {
        let columns = plan_columns(&catalog());
        assert!(matches!(columns[0].kind, ColumnKind::Asset));
        assert!(matches!(columns[1].kind, ColumnKind::Native));
        assert!(matches!(columns[2].kind, ColumnKind::TotalSupply));
        assert!(matches!(columns[3].kind, ColumnKind::MovedToEvm));
        assert!(matches!(columns[4].kind, ColumnKind::MovedToCosmos));
        assert_eq!(
            columns.iter().map(|c| c.rank).collect::<Vec<_>>()[..5],
            [0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_dynamic_rank_offsets() {
        // evm [a, b], cosmos [c, d]: the cosmos chains each get the +1
        // offset slot, so ranks come out 5, 6, 8, 9.
        let columns = plan_columns(&catalog());
        let dynamic: Vec<(&str, usize)> = columns
            .iter()
            .filter_map(|c| match &c.kind {
                ColumnKind::Chain(chain) => Some((chain.id.as_str(), c.rank)),
                _ => None,
            })
            .collect();
        assert_eq!(dynamic, vec![("a", 5), ("b", 6), ("c", 8), ("d", 9)]);
    }

    #[test]
    fn test_missing_record_vs_zero() {
        let mut r = row();
        r.per_chain.insert(
            "a".to_string(),
            ChainValueRecord {
                asset_ref: Some(AssetRef::Contract {
                    address: "0xdead".to_string(),
                }),
                total: Some(dec!(0)),
                ..Default::default()
            },
        );
        let columns = plan_columns(&catalog());
        let cell_for = |id: &str| {
            columns
                .iter()
                .find(|c| matches!(&c.kind, ColumnKind::Chain(chain) if chain.id == id))
                .unwrap()
                .cell(&r)
        };

        match cell_for("a") {
            Cell::Position {
                amount, has_asset, ..
            } => {
                assert_eq!(amount, Some(dec!(0)));
                assert!(has_asset);
            }
            other => panic!("expected a position cell, got {:?}", other),
        }
        assert_eq!(cell_for("b"), Cell::NoPosition);
    }

    #[test]
    fn test_chain_cell_value_derivation() {
        let mut r = row();
        r.per_chain.insert(
            "c".to_string(),
            ChainValueRecord {
                supply: Some(dec!(30)),
                total: Some(dec!(99)),
                explorer_url: Some("https://scan.example/asset".to_string()),
                ..Default::default()
            },
        );
        let columns = plan_columns(&catalog());
        let cell = columns
            .iter()
            .find(|c| matches!(&c.kind, ColumnKind::Chain(chain) if chain.id == "c"))
            .unwrap()
            .cell(&r);
        match cell {
            Cell::Position {
                amount,
                value,
                explorer_url,
                ..
            } => {
                // supply wins over total; value = amount * row price.
                assert_eq!(amount, Some(dec!(30)));
                assert_eq!(value, Some(dec!(60)));
                assert!(explorer_url.is_some());
            }
            other => panic!("expected a position cell, got {:?}", other),
        }
    }

    #[test]
    fn test_aggregate_cell_suppresses_unpriced_value() {
        let mut r = row();
        r.price = dec!(-1);
        r.value = dec!(-140);
        let columns = plan_columns(&catalog());
        match columns[2].cell(&r) {
            Cell::Aggregate { amount, value, .. } => {
                assert_eq!(amount, Some(dec!(140)));
                assert_eq!(value, None);
            }
            other => panic!("expected an aggregate cell, got {:?}", other),
        }
    }
}
