// tvl-core/src/bin/tvl_report.rs
// One-shot ranked TVL report over already-fetched JSON snapshots

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use tvl_core::config::Settings;
use tvl_core::format::{self, AmountStyle, ValueStyle};
use tvl_core::{
    aggregate, is_partial, plan_columns, AggregatedAssetRow, AssetMetadata, AssetRegistry, Cell,
    Chain, ChainCatalog, ColumnKind, ColumnSpec, TvlSnapshot,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let settings = Settings::new().context("failed to load settings")?;

    let evm_chains: Vec<Chain> = read_json(&settings.data.evm_chains)?;
    let cosmos_chains: Vec<Chain> = read_json(&settings.data.cosmos_chains)?;
    let assets: Vec<AssetMetadata> = read_json(&settings.data.assets)?;
    let snapshot: TvlSnapshot = read_json(&settings.data.tvl)?;

    let catalog = ChainCatalog::new(evm_chains, cosmos_chains);
    let registry = AssetRegistry::new(assets);
    info!(
        chains = catalog.len(),
        assets = registry.len(),
        snapshot = snapshot.len(),
        "inputs loaded"
    );

    let rows = aggregate(&catalog, &registry, &snapshot)?;
    let columns = plan_columns(&catalog);
    let sym = settings.currency_symbol.as_str();

    println!("\n--- CROSS-CHAIN TVL RANKING ---");
    println!(
        "{:<4} | {:<24} | {:<14} | {:<16} | {:<14} | {:<14} | {:<14} | {:<6}",
        "RANK", "ASSET", "NATIVE CHAIN", "SUPPLY", "TOTAL VALUE", "ON EVM", "ON COSMOS", "CHAINS"
    );
    println!("{:-<125}", "");

    for (i, row) in rows.iter().take(settings.report.max_rows).enumerate() {
        let native_chain = row
            .native
            .as_ref()
            .map(|n| n.chain.display_name().to_string())
            .unwrap_or_else(|| "-".to_string());

        let supply = match fixed_cell(&columns, &ColumnKind::TotalSupply, row) {
            Some(Cell::Aggregate {
                amount: Some(a), ..
            }) => format::format_amount(a, AmountStyle::AssetTotal),
            _ => "-".to_string(),
        };

        let chains_with_asset = columns
            .iter()
            .filter(|c| matches!(c.kind, ColumnKind::Chain(_)))
            .filter(|c| matches!(c.cell(row), Cell::Position { has_asset: true, .. }))
            .count();

        println!(
            "{:<4} | {:<24} | {:<14} | {:<16} | {:<14} | {:<14} | {:<14} | {:<6}",
            i + 1,
            row.label(),
            native_chain,
            supply,
            value_text(fixed_cell(&columns, &ColumnKind::TotalSupply, row), sym),
            value_text(fixed_cell(&columns, &ColumnKind::MovedToEvm, row), sym),
            value_text(fixed_cell(&columns, &ColumnKind::MovedToCosmos, row), sym),
            chains_with_asset
        );
    }
    println!("{:-<125}", "");

    if is_partial(&rows, &registry, settings.staging) {
        println!(
            "NOTE: snapshot covers {} of {} tracked assets; values for the rest are still loading upstream.",
            rows.len(),
            registry.expected_count(settings.staging)
        );
    }

    Ok(())
}

fn fixed_cell(columns: &[ColumnSpec], kind: &ColumnKind, row: &AggregatedAssetRow) -> Option<Cell> {
    columns.iter().find(|c| &c.kind == kind).map(|c| c.cell(row))
}

fn value_text(cell: Option<Cell>, sym: &str) -> String {
    match cell {
        Some(Cell::Aggregate {
            value: Some(v), ..
        }) => format!("{}{}", sym, format::format_value(v, ValueStyle::Aggregate)),
        _ => "-".to_string(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path))
}
