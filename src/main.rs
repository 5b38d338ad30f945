use anyhow::Result;
use clap::{Parser, Subcommand};
use levcalc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log to stderr; repeat for more detail (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Skip the network and use the configured default prices
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Prompt for hypothetical prices (default)
    Interactive,
    /// Display current prices of the pair
    Quote,
    /// Project the leveraged price for one hypothetical reference price
    Project {
        /// Hypothetical reference price, 0 or more
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },
    /// Explain the formula and leveraged ETF risks
    About,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Setup => None,
        Commands::Interactive => Some(levcalc::AppCommand::Interactive),
        Commands::Quote => Some(levcalc::AppCommand::Quote),
        Commands::Project { price } => Some(levcalc::AppCommand::Project { price }),
        Commands::About => Some(levcalc::AppCommand::About),
    };
    let result = match command {
        Some(command) => {
            levcalc::run_command(command, cli.config_path.as_deref(), cli.offline).await
        }
        None => levcalc::cli::setup::setup(),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
