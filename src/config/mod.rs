pub mod fleet_config;

pub use fleet_config::{FleetConfig, DEFAULT_CURRENCY};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "bike-hire")]
#[command(about = "Interactive bicycle hire and return tracker")]
pub struct CliConfig {
    /// TOML file describing the fleet; the built-in fleet is used when omitted
    #[arg(long)]
    pub fleet: Option<PathBuf>,

    /// Currency shown next to rates and costs, overrides the fleet file
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 讀取車隊設定並套用命令列覆蓋
    pub fn load_fleet(&self) -> crate::utils::error::Result<FleetConfig> {
        let mut fleet = match &self.fleet {
            Some(path) => FleetConfig::from_file(path)?,
            None => FleetConfig::default(),
        };

        if let Some(currency) = &self.currency {
            tracing::debug!("Currency overridden to {}", currency);
            fleet.currency = Some(currency.clone());
        }

        Ok(fleet)
    }
}
