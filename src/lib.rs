pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use crate::core::{Baseline, PriceProvider, PriceQuote, fetch_baseline};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Prompt for hypothetical prices until the user quits
    Interactive,
    /// Print the baseline prices
    Quote,
    /// Project a single hypothetical reference price
    Project { price: f64 },
    /// Print the formula and risk notes
    About,
}

/// Loads the config from `config_path`, or from the default location.
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

fn price_provider(config: &AppConfig, offline: bool) -> Box<dyn PriceProvider + Send + Sync> {
    if offline {
        return Box::new(providers::OfflineProvider);
    }
    let yahoo = &config.providers.yahoo;
    let cache = Arc::new(Cache::<String, PriceQuote>::with_ttl(Duration::from_secs(
        yahoo.cache_ttl_secs,
    )));
    Box::new(
        providers::YahooFinanceProvider::new(&yahoo.base_url, cache)
            .with_timeout(Duration::from_secs(yahoo.timeout_secs)),
    )
}

async fn load_baseline(
    provider: &(dyn PriceProvider + Send + Sync),
    config: &AppConfig,
) -> Result<Baseline> {
    let spinner = cli::ui::new_spinner("Fetching prices...");
    let baseline = fetch_baseline(provider, config).await;
    spinner.finish_and_clear();
    baseline
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    offline: bool,
) -> Result<()> {
    info!("levcalc starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::About => println!("{}", cli::about::about_text(&config)),
        AppCommand::Quote => {
            let provider = price_provider(&config, offline);
            let baseline = load_baseline(provider.as_ref(), &config).await?;
            println!("{}", baseline.display_as_table());
        }
        AppCommand::Project { price } => {
            let provider = price_provider(&config, offline);
            let baseline = load_baseline(provider.as_ref(), &config).await?;
            println!("{}\n", baseline.display_as_table());
            println!("{}", cli::project::render_projection(&baseline, price)?);
        }
        AppCommand::Interactive => {
            let provider = price_provider(&config, offline);
            let baseline = load_baseline(provider.as_ref(), &config).await?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cli::session::run(provider.as_ref(), &config, baseline, stdin.lock(), &mut stdout)
                .await?;
        }
    }

    Ok(())
}
