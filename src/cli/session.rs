//! Interactive terminal session: one projection per line of input.

use super::{project, ui};
use crate::core::config::AppConfig;
use crate::core::{Baseline, PriceProvider, fetch_baseline};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Project(f64),
    /// Empty input re-uses the current reference price.
    Current,
    Refresh,
    Help,
    Quit,
}

/// Parses a price such as `483.24`, `$483.24` or `1,024.50`.
pub fn parse_price(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.parse::<f64>().ok()
}

fn parse_command(line: &str) -> Option<SessionCommand> {
    match line.trim().to_lowercase().as_str() {
        "" => Some(SessionCommand::Current),
        "q" | "quit" | "exit" => Some(SessionCommand::Quit),
        "refresh" => Some(SessionCommand::Refresh),
        "help" | "?" => Some(SessionCommand::Help),
        other => parse_price(other).map(SessionCommand::Project),
    }
}

fn help_text(baseline: &Baseline) -> String {
    format!(
        "Enter a hypothetical {} price to project {}.\n  \
         <price>   project, e.g. 483.24 or $483.24\n  \
         <enter>   use the current price\n  \
         refresh   fetch prices again\n  \
         help      show this help\n  \
         quit      leave",
        baseline.reference_symbol, baseline.leveraged_symbol
    )
}

/// Runs the read-project-print loop until `quit` or end of input.
///
/// The baseline is only replaced by an explicit `refresh`.
pub async fn run<R: BufRead, W: Write>(
    provider: &(dyn PriceProvider + Send + Sync),
    config: &AppConfig,
    mut baseline: Baseline,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}\n", baseline.display_as_table())?;
    writeln!(
        output,
        "{}\n",
        ui::style_text(&help_text(&baseline), ui::StyleType::Subtle)
    )?;

    let mut line = String::new();
    loop {
        write!(
            output,
            "{} ",
            ui::style_text(
                &format!("{} price>", baseline.reference_symbol),
                ui::StyleType::Label
            )
        )?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            writeln!(output)?;
            break;
        }

        let Some(command) = parse_command(&line) else {
            writeln!(
                output,
                "{}\n",
                ui::style_text(
                    &format!("Not a price: '{}'. Type 'help' for usage.", line.trim()),
                    ui::StyleType::Error
                )
            )?;
            continue;
        };
        debug!(?command, "Session command");

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => {
                writeln!(output, "{}\n", help_text(&baseline))?;
            }
            SessionCommand::Refresh => {
                provider.invalidate().await;
                baseline = fetch_baseline(provider, config).await?;
                writeln!(output, "{}\n", baseline.display_as_table())?;
            }
            SessionCommand::Current => {
                let rendered =
                    project::render_projection(&baseline, baseline.prices.reference_price())?;
                writeln!(output, "{rendered}\n")?;
            }
            SessionCommand::Project(price) => {
                match project::render_projection(&baseline, price) {
                    Ok(rendered) => writeln!(output, "{rendered}\n")?,
                    Err(e) => writeln!(
                        output,
                        "{}\n",
                        ui::style_text(&e.to_string(), ui::StyleType::Error)
                    )?,
                }
            }
        }
    }

    Ok(())
}
