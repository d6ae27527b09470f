/// Schema scripts run on every open, in order, as `(name, sql)`.
pub const SCHEMA: [(&str, &str); 1] = [
    ("00-init.sql", include_str!("../../../db-schema/00-init.sql")),
];

pub type Id = i64;

pub mod table {
    pub const ORDERS: &str = "orders";
}
