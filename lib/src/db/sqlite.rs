//! SQLite database implementation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use log::{debug, info};
use rusqlite::Connection;
use crate::db::{DbResult, DbResults, DbUpdate, DbWriteResult, IdToken,
                StoredOrder};
use crate::types::{ItemQuantity, OrderId, Summary};

mod dbtypes;
mod fromdb;
mod read;
mod todb;
mod write;

/// SQLite [`Db`](crate::db::Db) implementation.
#[derive(Debug)]
pub struct Db { conn: Connection }

/// Initialise the database schema.  Existing tables are left alone.
fn init_schema(conn: &Connection) -> DbResult<()> {
    dbtypes::SCHEMA.iter()
        .try_for_each(|(name, sql)| {
            info!("ensuring database schema: {name}");
            conn.execute_batch(sql)
                .map_err(|e| fromdb::storage_err(
                    format!("error executing schema ({name})"), e))
        })
}

/// Perform initialisation required for every new connection.
fn init(conn: Connection) -> DbResult<Db> {
    fromdb::internal_err(rusqlite::vtab::array::load_module(&conn))?;
    init_schema(&conn)?;
    Ok(Db { conn })
}

/// Connect to the database, creating it and its directory if they don't
/// exist.
pub fn open(db_path: &Path) -> DbResult<Db> {
    let db_path_parent = db_path.parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .unwrap_or(db_path);

    fs::create_dir_all(db_path_parent)
        .map_err(|e| fromdb::storage_err(
            format!("error creating directory ({})", db_path_parent.display()),
            e))?;
    debug!("opening database: {}", db_path.display());
    let conn = Connection::open(db_path)
        .map_err(|e| fromdb::storage_err(
            format!("error opening database ({})", db_path.display()), e))?;
    init(conn)
}

pub fn open_in_memory() -> DbResult<Db> {
    debug!("opening in-memory database");
    let conn = Connection::open_in_memory()
        .map_err(|e| fromdb::storage_err(
            "error opening in-memory database".to_owned(), e))?;
    init(conn)
}

/// Run a single `update` against the database.
///
/// Returns the token and ID of any created order.
fn write_update(conn: &Connection, update: &DbUpdate)
-> DbResult<Option<(IdToken, OrderId)>> {
    match update {
        DbUpdate::CreateOrder { id_token, order } => {
            write::create_order(conn, order)
                .map(|id| Some((*id_token, id)))
        }
        DbUpdate::UpdateOrder { id, order } => {
            write::update_order(conn, *id, order).map(|_| None)
        }
        DbUpdate::DeleteOrder { id } => {
            write::delete_order(conn, *id).map(|_| None)
        }
    }
}

impl crate::db::Db for Db {
    fn write(&mut self, updates: &[&DbUpdate]) -> DbWriteResult {
        debug!("writing {} update(s)", updates.len());
        let mut ids_map: HashMap<IdToken, OrderId> = HashMap::new();
        let tx = self.conn.transaction()
            .map_err(|e| fromdb::storage_err(
                "error writing to database".to_owned(), e))?;

        for update in updates {
            if let Some((id_token, id)) = write_update(&tx, update)? {
                ids_map.insert(id_token, id);
            }
        }

        tx.commit()
            .map_err(|e| fromdb::storage_err(
                "error writing to database".to_owned(), e))?;
        Ok(ids_map)
    }

    fn get_all_orders(&self) -> DbResults<StoredOrder> {
        read::get_all_orders(&self.conn)
    }

    fn get_orders(&self, ids: &[OrderId]) -> DbResults<StoredOrder> {
        read::get_orders(&self.conn, todb::ids(ids))
    }

    fn summarize(&self) -> DbResult<Summary> {
        read::summarize(&self.conn)
    }

    fn aggregate_by_item(&self) -> DbResults<ItemQuantity> {
        read::aggregate_by_item(&self.conn)
    }
}
