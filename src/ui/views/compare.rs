use compareoffers::Comparison;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::table::{Align, Table};

pub const HEADERS: [&str; 4] = ["Sales level", "Offer 1", "Offer 2", "Difference"];

/// Two decimals, no grouping
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

fn difference_cell(difference: f64) -> ColoredText {
    let text = format_amount(difference);
    if difference > 0.0 {
        ColoredText::success(text)
    } else if difference < 0.0 {
        ColoredText::error(text)
    } else {
        ColoredText::dim(text)
    }
}

pub fn render_comparison_table(
    comparison: &Comparison,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut table = Table::new(HEADERS)
        .align(0, Align::Right)
        .align(1, Align::Right)
        .align(2, Align::Right)
        .align(3, Align::Right);

    for row in &comparison.rows {
        table.add_row(vec![
            ColoredText::plain(row.sales.to_string()),
            ColoredText::plain(format_amount(row.first)),
            ColoredText::plain(format_amount(row.second)),
            difference_cell(row.difference),
        ]);
    }

    table.render(supports_color, supports_unicode)
}

/// Crossover and earn-out notes printed under the table
pub fn render_summary(comparison: &Comparison, supports_color: bool, supports_unicode: bool) -> String {
    let arrow = theme::icon_arrow(supports_unicode);
    let mut out = String::new();

    if let Some(level) = comparison.crossover {
        let line = format!("{} The better offer changes at {} copies", arrow, level);
        out.push_str(&ColoredText::info(line).render(supports_color));
        out.push('\n');
    }

    for (i, earn_out) in comparison.earn_out.iter().enumerate() {
        let line = match earn_out {
            Some(copies) => format!("{} Offer {} earns out at {} copies", arrow, i + 1, copies),
            None => format!("{} Offer {} never earns out", arrow, i + 1),
        };
        out.push_str(&ColoredText::dim(line).render(supports_color));
        out.push('\n');
    }

    out
}
