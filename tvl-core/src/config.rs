// tvl-core/src/config.rs
// Report configuration: defaults first, optional `config` file on top

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Report {
    pub max_rows: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataFiles {
    pub evm_chains: String,
    pub cosmos_chains: String,
    pub assets: String,
    pub tvl: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Passed through untouched to the report output.
    pub currency_symbol: String,
    /// Staging deployments also count staging-only assets as expected.
    pub staging: bool,
    pub report: Report,
    pub data: DataFiles,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("currency_symbol", "$")?
            .set_default("staging", false)?
            .set_default("report.max_rows", 50)?
            .set_default("data.evm_chains", "data/evm_chains.json")?
            .set_default("data.cosmos_chains", "data/cosmos_chains.json")?
            .set_default("data.assets", "data/assets.json")?
            .set_default("data.tvl", "data/tvl.json")?
            .add_source(File::with_name("config").required(false))
            .build()?;

        s.try_deserialize()
    }
}
