use foodorders::config;
use foodorders::db::Db;
use foodorders::report::{self, NO_ORDERS_TO_VISUALIZE};
use crate::configrefs;
use crate::state::State;
use super::to_json;

const BAR: char = '#';

pub fn analyze(state: &mut State, json: bool) -> Result<String, String> {
    let summary = state.db.summarize().map_err(|e| e.to_string())?;
    if json {
        to_json(&summary)
    } else {
        let currency = config::get_ref(
            &*state.cfg, &configrefs::REPORT_CURRENCY_SYMBOL)?;
        Ok(summary.message(&currency))
    }
}

/// An empty store is an error, so the caller can warn about it.
pub fn visualize(state: &mut State, width: Option<u16>, json: bool)
-> Result<String, String> {
    let totals = state.db.aggregate_by_item().map_err(|e| e.to_string())?;
    if totals.is_empty() {
        return Err(NO_ORDERS_TO_VISUALIZE.to_owned());
    }
    if json {
        return to_json(&totals);
    }
    let width = match width {
        Some(width) => width,
        None => config::get_ref(
            &*state.cfg, &configrefs::REPORT_CHART_WIDTH)?,
    };
    let rows = report::chart_rows(&totals, usize::from(width));
    Ok(report::render_chart(&rows, BAR))
}
