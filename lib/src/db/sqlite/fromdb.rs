use std::fmt::Display;
use rusqlite::Row;
use crate::db::{DbError, DbResult, Stored, StoredOrder};
use crate::types::{ItemQuantity, Order, Summary};

pub fn storage_err(context: String, e: impl Display) -> DbError {
    DbError::Storage(format!("{context}: {e}"))
}

pub fn internal_err<T>(r: rusqlite::Result<T>) -> DbResult<T> {
    r.map_err(|e| storage_err("internal error".to_owned(), e))
}

pub fn internal_err_fn<T, F>(f: F) -> DbResult<T>
where
    F: FnOnce() -> rusqlite::Result<T>
{
    internal_err(f())
}

pub const ORDERS_SQL: &str = "id, customer_name, food_item, quantity, price";

/// for result selected by [`ORDERS_SQL`]
pub fn order(r: &Row) -> rusqlite::Result<StoredOrder> {
    Ok(Stored {
        id: r.get(0)?,
        data: Order {
            customer_name: r.get(1)?,
            food_item: r.get(2)?,
            quantity: r.get(3)?,
            price: r.get(4)?,
        },
    })
}

pub const SUMMARY_SQL: &str = "COUNT(*), TOTAL(price)";

/// for result selected by [`SUMMARY_SQL`]
pub fn summary(r: &Row) -> rusqlite::Result<Summary> {
    let total_orders: i64 = r.get(0)?;
    let total_revenue: f64 = r.get(1)?;
    Ok(Summary::from_totals(total_orders.max(0) as u64, total_revenue))
}

pub const ITEM_QUANTITY_SQL: &str = "food_item, SUM(quantity)";

/// for result selected by [`ITEM_QUANTITY_SQL`]
pub fn item_quantity(r: &Row) -> rusqlite::Result<ItemQuantity> {
    Ok(ItemQuantity {
        food_item: r.get(0)?,
        total_quantity: r.get(1)?,
    })
}
