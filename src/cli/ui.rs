use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Label,
    Success,
    Warning,
    Error,
    Info,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Label => style(text).bold(),
        StyleType::Success => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Error => style(text).red(),
        StyleType::Info => style(text).cyan(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats a ratio as a signed percentage, e.g. `0.1` as `+10.00%`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:+.2}%", ratio * 100.0)
}

/// Formats a price with its currency. US dollars get a `$` prefix.
pub fn format_price(price: f64, currency: &str) -> String {
    if currency.eq_ignore_ascii_case("USD") {
        format!("${price:.2}")
    } else {
        format!("{price:.2} {currency}")
    }
}

/// Creates a cell for displaying a change ratio with color coding.
pub fn ratio_cell(ratio: f64) -> Cell {
    let color = if ratio >= 0.0 { Color::Green } else { Color::Red };
    Cell::new(format_ratio(ratio))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

pub fn price_cell(price: f64, currency: &str) -> Cell {
    Cell::new(format_price(price, currency))
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Right)
}

/// Creates a spinner shown while prices are fetched.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ratio_is_signed() {
        assert_eq!(format_ratio(0.1), "+10.00%");
        assert_eq!(format_ratio(-0.2), "-20.00%");
        assert_eq!(format_ratio(0.0), "+0.00%");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(24.2033, "USD"), "$24.20");
        assert_eq!(format_price(16.1361, "usd"), "$16.14");
        assert_eq!(format_price(85.5, "EUR"), "85.50 EUR");
    }
}
