//! Configuration values read by the library.

use std::path::PathBuf;
use crate::config::{ValueRef, parse, validate};

pub const DB_SQLITE_PATH: ValueRef<'_, PathBuf> = ValueRef {
    names: &["db", "sqlite", "db-path"],
    def: "food_orders.db",
    type_: &parse::FILE_PATH,
    validators: &[validate::NON_EMPTY],
};

