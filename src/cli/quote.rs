use super::ui;
use crate::core::{Baseline, BaselineSource};
use comfy_table::Cell;

impl Baseline {
    /// Renders the baseline prices, followed by a warning when defaults were used.
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Ticker"),
            ui::header_cell("Name"),
            ui::header_cell("Current Price"),
        ]);

        let rows = [
            (
                &self.reference_symbol,
                &self.reference_name,
                self.prices.reference_price(),
            ),
            (
                &self.leveraged_symbol,
                &self.leveraged_name,
                self.prices.leveraged_price(),
            ),
        ];
        for (symbol, name, price) in rows {
            table.add_row(vec![
                Cell::new(symbol),
                Cell::new(name.as_deref().unwrap_or("-")),
                ui::price_cell(price, &self.currency),
            ]);
        }

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Current Prices", ui::StyleType::Title)
        );
        output.push_str(&table.to_string());

        if let BaselineSource::Fallback { reason } = &self.source {
            output.push_str(&format!(
                "\n\n{}\n{}",
                ui::style_text(
                    "Warning: live prices unavailable, using default values.",
                    ui::StyleType::Warning
                ),
                ui::style_text(reason, ui::StyleType::Subtle)
            ));
        }

        output
    }
}
