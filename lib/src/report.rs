//! Presentation-independent preparation of the order reports.

use crate::types::ItemQuantity;

pub const CHART_TITLE: &str = "Total Quantity Ordered by Food Item";
/// Shown instead of the chart when there are no orders.
pub const NO_ORDERS_TO_VISUALIZE: &str = "No orders to visualize.";

/// One bar of the per-item chart.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub total_quantity: i64,
    /// Bar length in `0..=width`.
    pub bar_len: usize,
}

/// Scale `totals` into bars, with the largest total filling `width`.
///
/// Totals of zero or less get an empty bar.
pub fn chart_rows(totals: &[ItemQuantity], width: usize) -> Vec<ChartRow> {
    let max = totals.iter()
        .map(|iq| iq.total_quantity)
        .max()
        .unwrap_or(0);
    totals.iter()
        .map(|iq| ChartRow {
            label: iq.food_item.clone(),
            total_quantity: iq.total_quantity,
            bar_len: bar_len(iq.total_quantity, max, width),
        })
        .collect()
}

fn bar_len(total: i64, max: i64, width: usize) -> usize {
    if total <= 0 || max <= 0 || width == 0 {
        0
    } else {
        // i128 so large totals can't overflow
        let len = (total as i128 * width as i128 + max as i128 / 2)
            / max as i128;
        (len as usize).max(1)
    }
}

/// Render rows as text, one bar per line, with labels padded to line up.
pub fn render_chart(rows: &[ChartRow], bar: char) -> String {
    let label_width = rows.iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = format!("{CHART_TITLE}\n");
    for row in rows {
        let padding = label_width - row.label.chars().count();
        out.push_str(&format!(
            "{}{} | {} {}\n",
            row.label,
            " ".repeat(padding),
            bar.to_string().repeat(row.bar_len),
            row.total_quantity));
    }
    out
}
