use std::rc::Rc;
use rusqlite::{Connection, named_params, types::Value};
use crate::db::{DbResult, DbResults, StoredOrder};
use crate::types::{ItemQuantity, Summary};
use super::dbtypes::table::ORDERS;
use super::fromdb::{self, ITEM_QUANTITY_SQL, ORDERS_SQL, SUMMARY_SQL};

pub fn get_all_orders(conn: &Connection) -> DbResults<StoredOrder> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {ORDERS_SQL} FROM {ORDERS}
            ORDER BY id ASC
        ").as_ref())?;
        let rows = stmt.query_map((), fromdb::order)?;
        rows.collect()
    })
}

pub fn get_orders(conn: &Connection, dbids: Rc<Vec<Value>>)
-> DbResults<StoredOrder> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {ORDERS_SQL} FROM {ORDERS}
            WHERE id IN rarray(:ids)
            ORDER BY id ASC
        ").as_ref())?;
        let rows = stmt.query_map(
            named_params! { ":ids": dbids },
            fromdb::order)?;
        rows.collect()
    })
}

pub fn summarize(conn: &Connection) -> DbResult<Summary> {
    fromdb::internal_err_fn(|| {
        conn.query_row(format!("
            SELECT {SUMMARY_SQL} FROM {ORDERS}
        ").as_ref(), (), fromdb::summary)
    })
}

pub fn aggregate_by_item(conn: &Connection) -> DbResults<ItemQuantity> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {ITEM_QUANTITY_SQL} FROM {ORDERS}
            GROUP BY food_item
            ORDER BY food_item ASC
        ").as_ref())?;
        let rows = stmt.query_map((), fromdb::item_quantity)?;
        rows.collect()
    })
}
