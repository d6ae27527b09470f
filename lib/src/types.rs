use std::fmt;
use serde::{Deserialize, Serialize};
use crate::db::{DbError, DbResult};

/// Identifies a stored order.  Assigned by the store, never reused.
pub type OrderId = i64;

/// A recorded food purchase.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Order {
    pub customer_name: String,
    pub food_item: String,
    /// No lower bound is enforced.
    pub quantity: i64,
    /// Total for the whole order, in currency units.  Must not be NaN.
    pub price: f64,
}

impl Order {
    pub fn new(customer_name: &str, food_item: &str, quantity: i64, price: f64)
    -> Order {
        Order {
            customer_name: customer_name.to_owned(),
            food_item: food_item.to_owned(),
            quantity,
            price,
        }
    }
}

/// An order as entered by a user, before any numeric conversion.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct OrderInput {
    pub customer_name: String,
    pub food_item: String,
    pub quantity: String,
    pub price: String,
}

impl OrderInput {
    /// Convert the numeric fields.  Text fields are taken as they are.
    pub fn coerce(&self) -> DbResult<Order> {
        Ok(Order {
            customer_name: self.customer_name.clone(),
            food_item: self.food_item.clone(),
            quantity: coerce_quantity(&self.quantity)?,
            price: coerce_price(&self.price)?,
        })
    }
}

pub fn coerce_quantity(raw: &str) -> DbResult<i64> {
    raw.trim().parse::<i64>()
        .map_err(|_| DbError::Validation(
            format!("quantity must be a whole number: {raw:?}")))
}

/// Any float is accepted, including infinities, except NaN, which can't be
/// stored.
pub fn coerce_price(raw: &str) -> DbResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(price) if !price.is_nan() => Ok(price),
        _ => Err(DbError::Validation(
            format!("price must be a number: {raw:?}"))),
    }
}

/// Figures shown by the order analysis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Summary {
    pub total_orders: u64,
    pub total_revenue: f64,
    /// Zero when there are no orders.
    pub average_order_value: f64,
}

impl Summary {
    pub fn from_totals(total_orders: u64, total_revenue: f64) -> Summary {
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };
        Summary { total_orders, total_revenue, average_order_value }
    }

    /// Analysis message with amounts shown to two decimal places.
    pub fn message(&self, currency: &str) -> String {
        format!("Total Orders: {}\n\
                 Total Revenue: {currency}{:.2}\n\
                 Average Order Value: {currency}{:.2}",
                self.total_orders,
                self.total_revenue,
                self.average_order_value)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message("$"))
    }
}

/// Total quantity sold of one food item.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub struct ItemQuantity {
    pub food_item: String,
    pub total_quantity: i64,
}
