use super::ui;
use crate::core::{Baseline, LeverageMultiple, ProjectionResult, Scenario, project};
use anyhow::Result;

/// Projects `hypothetical` against the baseline and renders the result block
/// or the informational message for an unchanged price.
pub fn render_projection(baseline: &Baseline, hypothetical: f64) -> Result<String> {
    let result = project(&baseline.prices, LeverageMultiple::DOUBLE, hypothetical)?;
    Ok(match result.scenario() {
        Scenario::Unchanged => ui::style_text(
            &format!(
                "Enter a {} price different from {} to run a projection.",
                baseline.reference_symbol,
                ui::format_price(baseline.prices.reference_price(), &baseline.currency)
            ),
            ui::StyleType::Info,
        ),
        scenario => format!(
            "{}\n\n{}\n\n{}",
            ui::style_text("Projection", ui::StyleType::Title),
            result_table(baseline, &result),
            scenario_message(baseline, scenario)
        ),
    })
}

fn result_table(baseline: &Baseline, result: &ProjectionResult) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell(&format!("{} Change", baseline.reference_symbol)),
        ui::header_cell(&format!("{} Change", baseline.leveraged_symbol)),
        ui::header_cell(&format!("Expected {} Price", baseline.leveraged_symbol)),
    ]);
    table.add_row(vec![
        ui::ratio_cell(result.reference_change_ratio),
        ui::ratio_cell(result.leveraged_change_ratio),
        ui::price_cell(result.display_price(), &baseline.currency),
    ]);
    table.to_string()
}

fn scenario_message(baseline: &Baseline, scenario: Scenario) -> String {
    let leveraged = &baseline.leveraged_symbol;
    match scenario {
        Scenario::Rally => ui::style_text(
            &format!("Upside scenario: {leveraged} amplifies the gain, with higher risk."),
            ui::StyleType::Success,
        ),
        Scenario::Decline => ui::style_text(
            &format!(
                "Downside scenario: {leveraged} amplifies the loss; sharp swings deepen volatility decay."
            ),
            ui::StyleType::Error,
        ),
        Scenario::Wipeout => ui::style_text(
            &format!(
                "Extreme scenario: a one-day move this large would drive {leveraged} to zero. \
                 The linear model no longer applies."
            ),
            ui::StyleType::Error,
        ),
        Scenario::Unchanged => String::new(),
    }
}
