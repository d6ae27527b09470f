//! Helpers for writing to the database.

use rusqlite::{Connection, named_params};
use crate::db::{DbError, DbResult};
use crate::types::Order;
use super::dbtypes::{self, table::ORDERS};
use super::fromdb;

/// NaN has no SQLite representation and would be bound as NULL.
fn check_price(order: &Order) -> DbResult<()> {
    if order.price.is_nan() {
        Err(DbError::Validation("price must be a number: NaN".to_owned()))
    } else {
        Ok(())
    }
}

pub fn create_order(conn: &Connection, order: &Order)
-> DbResult<dbtypes::Id> {
    check_price(order)?;
    conn.execute(format!("
        INSERT INTO {ORDERS} (customer_name, food_item, quantity, price)
        VALUES (:customer_name, :food_item, :quantity, :price)
    ").as_ref(), named_params! {
        ":customer_name": order.customer_name,
        ":food_item": order.food_item,
        ":quantity": order.quantity,
        ":price": order.price,
    })
        .map(|_| conn.last_insert_rowid())
        .map_err(|e| fromdb::storage_err(
            format!("error creating order ({order:?})"), e))
}

/// Fails with [`DbError::NotFound`] if no row was changed.
fn expect_changed(id: dbtypes::Id, changed: usize) -> DbResult<()> {
    if changed == 0 {
        Err(DbError::NotFound(id))
    } else {
        Ok(())
    }
}

pub fn update_order(conn: &Connection, id: dbtypes::Id, order: &Order)
-> DbResult<()> {
    check_price(order)?;
    conn.execute(format!("
        UPDATE {ORDERS}
        SET customer_name = :customer_name, food_item = :food_item,
            quantity = :quantity, price = :price
        WHERE id = :id
    ").as_ref(), named_params! {
        ":id": id,
        ":customer_name": order.customer_name,
        ":food_item": order.food_item,
        ":quantity": order.quantity,
        ":price": order.price,
    })
        .map_err(|e| fromdb::storage_err(
            format!("error updating order ({id}, {order:?})"), e))
        .and_then(|changed| expect_changed(id, changed))
}

pub fn delete_order(conn: &Connection, id: dbtypes::Id) -> DbResult<()> {
    conn.execute(format!("
        DELETE FROM {ORDERS}
        WHERE id = :id
    ").as_ref(), named_params! {
        ":id": id,
    })
        .map_err(|e| fromdb::storage_err(
            format!("error deleting order ({id})"), e))
        .and_then(|changed| expect_changed(id, changed))
}
