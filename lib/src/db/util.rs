//! Single-update wrappers around [`Db::write`], and single-object reads.

use log::debug;
use crate::types::{Order, OrderId, OrderInput};
use super::{Db, DbError, DbResult, DbUpdate, StoredOrder};

/// Treat [`DbError::NotFound`] as `false`.
fn found(r: DbResult<()>) -> DbResult<bool> {
    match r {
        Ok(()) => Ok(true),
        Err(DbError::NotFound(id)) => {
            debug!("no order to change: {id}");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

pub fn create_order(db: &mut impl Db, order: &Order) -> DbResult<OrderId> {
    let id_token = DbUpdate::id_token();
    let mut ids = db.write(&[&DbUpdate::create_order(id_token, order)])?;
    ids.remove(&id_token)
        .ok_or_else(|| DbError::Storage(
            "unknown error - ID not returned".to_owned()))
}

/// Like [`create_order`], converting the input first.
pub fn create_order_input(db: &mut impl Db, input: &OrderInput)
-> DbResult<OrderId> {
    create_order(db, &input.coerce()?)
}

/// Returns `false` if there is no order with the ID.
pub fn update_order(db: &mut impl Db, id: OrderId, order: &Order)
-> DbResult<bool> {
    found(db.write(&[&DbUpdate::update_order(id, order)]).map(|_| ()))
}

/// Like [`update_order`], converting the input first.
pub fn update_order_input(db: &mut impl Db, id: OrderId, input: &OrderInput)
-> DbResult<bool> {
    update_order(db, id, &input.coerce()?)
}

/// Returns `false` if there is no order with the ID.
pub fn delete_order(db: &mut impl Db, id: OrderId) -> DbResult<bool> {
    found(db.write(&[&DbUpdate::delete_order(id)]).map(|_| ()))
}

pub fn get_order(db: &impl Db, id: OrderId) -> DbResult<StoredOrder> {
    db.get_orders(&[id])?
        .into_iter()
        .next()
        .ok_or(DbError::NotFound(id))
}
