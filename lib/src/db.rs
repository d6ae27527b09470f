//! Durable storage of orders.
//!
//! All access goes through a [`Db`] value owned by the caller.  Writes are
//! batched into [`DbUpdate`]s and applied atomically; [`util`] wraps the common
//! single-update cases.

use std::collections::HashMap;
use std::sync::atomic;
use crate::config::{self, Config};
use crate::configrefs;
use crate::types::{ItemQuantity, Order, OrderId, Summary};

mod sqlite;
pub mod util;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DbError {
    /// Input could not be converted to the type stored.
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("order does not exist: {0}")]
    NotFound(OrderId),
    /// The database is unavailable or its content is unreadable.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type DbResult<T> = Result<T, DbError>;
pub type DbWriteResult = DbResult<HashMap<IdToken, OrderId>>;
pub type DbResults<T> = DbResult<Vec<T>>;

/// An object as it exists in the database.
#[derive(Clone, Debug, PartialEq)]
pub struct Stored<T> {
    pub id: OrderId,
    pub data: T,
}

pub type StoredOrder = Stored<Order>;

/// Caller-chosen handle for an order created in a write, used to find out the
/// ID it was given.
pub type IdToken = u64;
static UPDATE_TOKEN: atomic::AtomicU64 = atomic::AtomicU64::new(0);

#[derive(Debug)]
pub enum DbUpdate<'a> {
    CreateOrder { id_token: IdToken, order: &'a Order },
    /// Overwrites every field.
    UpdateOrder { id: OrderId, order: &'a Order },
    DeleteOrder { id: OrderId },
}

impl<'a> DbUpdate<'a> {
    pub fn id_token() -> IdToken {
        UPDATE_TOKEN.fetch_add(1, atomic::Ordering::Relaxed)
    }

    pub fn create_order(id_token: IdToken, order: &'a Order) -> DbUpdate<'a> {
        DbUpdate::CreateOrder { id_token, order }
    }

    pub fn update_order(id: OrderId, order: &'a Order) -> DbUpdate<'a> {
        DbUpdate::UpdateOrder { id, order }
    }

    pub fn delete_order(id: OrderId) -> DbUpdate<'a> {
        DbUpdate::DeleteOrder { id }
    }
}

pub trait Db {
    /// Apply `updates` in order, in a single transaction.
    ///
    /// If any update fails, none are applied.  Updating or deleting an order
    /// that doesn't exist fails with [`DbError::NotFound`].
    ///
    /// Returns IDs of created orders, keyed by the tokens given in the
    /// updates.
    fn write(&mut self, updates: &[&DbUpdate]) -> DbWriteResult;

    /// All orders, in ascending ID order.
    fn get_all_orders(&self) -> DbResults<StoredOrder>;

    /// Orders with the given IDs, in ascending ID order.  IDs with no order
    /// are skipped.
    fn get_orders(&self, ids: &[OrderId]) -> DbResults<StoredOrder>;

    fn summarize(&self) -> DbResult<Summary>;

    /// Total quantity per distinct food item, ordered by food item.
    fn aggregate_by_item(&self) -> DbResults<ItemQuantity>;
}

impl<D: Db + ?Sized> Db for Box<D> {
    fn write(&mut self, updates: &[&DbUpdate]) -> DbWriteResult {
        (**self).write(updates)
    }

    fn get_all_orders(&self) -> DbResults<StoredOrder> {
        (**self).get_all_orders()
    }

    fn get_orders(&self, ids: &[OrderId]) -> DbResults<StoredOrder> {
        (**self).get_orders(ids)
    }

    fn summarize(&self) -> DbResult<Summary> {
        (**self).summarize()
    }

    fn aggregate_by_item(&self) -> DbResults<ItemQuantity> {
        (**self).aggregate_by_item()
    }
}

/// Open the database configured by `cfg`, creating it if needed.
pub fn open<C>(cfg: &C) -> DbResult<impl Db>
where
    C: Config + ?Sized,
{
    let path = config::get_ref(cfg, &configrefs::DB_SQLITE_PATH)
        .map_err(DbError::Storage)?;
    sqlite::open(&path)
}

/// Open a database which lives only as long as the returned value.
pub fn open_in_memory() -> DbResult<impl Db> {
    sqlite::open_in_memory()
}
