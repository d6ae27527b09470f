use foodorders::config::{ValueRef, parse};

/// Maximum bar length when drawing the per-item chart.
pub const REPORT_CHART_WIDTH: ValueRef<'_, u16> = ValueRef {
    names: &["report", "chart-width"],
    def: "40",
    type_: &parse::POSITIVE_U16,
    validators: &[],
};

pub const REPORT_CURRENCY_SYMBOL: ValueRef<'_, String> = ValueRef {
    names: &["report", "currency-symbol"],
    def: "$",
    type_: &parse::STRING,
    validators: &[],
};
