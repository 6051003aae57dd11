use anyhow::Context;
use bike_hire::utils::{logger, validation::Validate};
use bike_hire::{CliConfig, FleetRegistry, HireDesk, MenuSession, SystemClock};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bike-hire");
    tracing::debug!("CLI config: {:?}", config);

    let fleet = match config.load_fleet() {
        Ok(fleet) => fleet,
        Err(e) => {
            tracing::error!("❌ Failed to load fleet: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證車隊設定
    if let Err(e) = fleet.validate() {
        tracing::error!("❌ Fleet validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let registry = FleetRegistry::from_seeds(&fleet.bicycles);
    tracing::info!(
        "🚲 Fleet ready: {} bicycles, prices in {}",
        registry.len(),
        fleet.currency()
    );

    let mut session = MenuSession::new(HireDesk::new(registry, SystemClock), fleet.currency());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    session
        .run(stdin.lock(), &mut stdout)
        .context("console session failed")?;

    Ok(())
}
