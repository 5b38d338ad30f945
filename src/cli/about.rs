use super::ui;
use crate::core::LeverageMultiple;
use crate::core::config::AppConfig;

/// Formula and risk notes for the configured pair.
pub fn about_text(config: &AppConfig) -> String {
    let reference = &config.pair.reference;
    let leveraged = &config.pair.leveraged;
    let leverage = LeverageMultiple::DOUBLE;

    format!(
        "{title}\n\n\
         {leveraged} is a {leverage} leveraged ETF on {reference}: it targets {pct:.0}% of \
         {reference}'s DAILY price change.\n\n\
         {formula_label}\n  \
         new {leveraged} = current {leveraged} x (1 + {mult} x (new {reference} - current {reference}) / current {reference})\n\n\
         {risk_label}\n  \
         Leveraged ETFs reset daily. Over several days the compounding of daily returns \
         (volatility decay) makes the result diverge from this single-day projection, \
         especially in choppy markets. Not suited for long-term holding.\n\n\
         {disclaimer}",
        title = ui::style_text(&format!("About {leveraged}"), ui::StyleType::Title),
        pct = leverage.value() * 100.0,
        mult = leverage.value(),
        formula_label = ui::style_text("Formula", ui::StyleType::Label),
        risk_label = ui::style_text("Risk", ui::StyleType::Label),
        disclaimer = ui::style_text(
            "Data source: Yahoo Finance. For reference only, not investment advice.",
            ui::StyleType::Subtle
        ),
    )
}
