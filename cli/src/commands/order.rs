use serde::Serialize;
use foodorders::db::{util, Db, StoredOrder};
use foodorders::types::{OrderId, OrderInput};
use crate::state::State;
use super::to_json;

const HEADINGS: [&str; 5] =
    ["ID", "Customer Name", "Food Item", "Quantity", "Price"];

#[derive(Debug, Serialize)]
pub struct OrderRow {
    id: OrderId,
    customer_name: String,
    food_item: String,
    quantity: i64,
    price: f64,
}

impl From<StoredOrder> for OrderRow {
    fn from(order: StoredOrder) -> OrderRow {
        OrderRow {
            id: order.id,
            customer_name: order.data.customer_name,
            food_item: order.data.food_item,
            quantity: order.data.quantity,
            price: order.data.price,
        }
    }
}

pub fn create(state: &mut State, input: OrderInput) -> Result<String, String> {
    let id = util::create_order_input(&mut state.db, &input)
        .map_err(|e| e.to_string())?;
    Ok(format!("Order created successfully. (ID: {id})"))
}

pub fn list(state: &mut State, json: bool) -> Result<String, String> {
    let rows: Vec<OrderRow> = state.db.get_all_orders()
        .map_err(|e| e.to_string())?
        .into_iter()
        .map(OrderRow::from)
        .collect();
    if json {
        to_json(&rows)
    } else {
        Ok(table(&rows))
    }
}

pub fn update(state: &mut State, id: OrderId, input: OrderInput)
-> Result<String, String> {
    if util::update_order_input(&mut state.db, id, &input)
        .map_err(|e| e.to_string())?
    {
        Ok("Order updated successfully.".to_owned())
    } else {
        Err(format!("Select an existing order to update (no order {id})."))
    }
}

pub fn delete(state: &mut State, id: OrderId) -> Result<String, String> {
    if util::delete_order(&mut state.db, id).map_err(|e| e.to_string())? {
        Ok("Order deleted successfully.".to_owned())
    } else {
        Err(format!("Select an existing order to delete (no order {id})."))
    }
}

/// Left-aligned text columns, right-aligned numbers.
fn table(rows: &[OrderRow]) -> String {
    let cells: Vec<[String; 5]> = rows.iter()
        .map(|row| [
            row.id.to_string(),
            row.customer_name.clone(),
            row.food_item.clone(),
            row.quantity.to_string(),
            format!("{:.2}", row.price),
        ])
        .collect();
    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: [&str; 5]| -> String {
        values.iter().zip(widths).enumerate()
            .map(|(i, (value, width))| {
                if i == 1 || i == 2 {
                    format!("{value:<width$}")
                } else {
                    format!("{value:>width$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_owned()
    };

    let mut out = line(HEADINGS) + "\n";
    for row in &cells {
        out += &line([&row[0], &row[1], &row[2], &row[3], &row[4]]);
        out += "\n";
    }
    out
}

#[cfg(test)]
mod tests {
    use foodorders::types::Order;
    use crate::commands::test_util::state;
    use super::*;

    fn input(quantity: &str, price: &str) -> OrderInput {
        OrderInput {
            customer_name: "Alice".to_owned(),
            food_item: "Burger".to_owned(),
            quantity: quantity.to_owned(),
            price: price.to_owned(),
        }
    }

    #[test]
    fn create_then_list() {
        let mut state = state(&[]);
        let msg = create(&mut state, input("2", "9.5")).unwrap();
        assert!(msg.starts_with("Order created successfully."), "{msg}");
        assert_eq!(list(&mut state, false).unwrap(),
                   "ID  Customer Name  Food Item  Quantity  Price\n \
                    1  Alice          Burger            2   9.50\n");
    }

    #[test]
    fn create_reports_bad_quantity() {
        let mut state = state(&[]);
        let err = create(&mut state, input("two", "9.5")).unwrap_err();
        assert!(err.contains("quantity"), "{err}");
    }

    #[test]
    fn list_json() {
        let mut state = state(&[]);
        util::create_order(&mut state.db, &Order::new("Bob", "Pizza", 1, 12.0))
            .unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&list(&mut state, true).unwrap()).unwrap();
        assert_eq!(value[0]["food_item"], "Pizza");
        assert_eq!(value[0]["price"], 12.0);
    }

    #[test]
    fn update_and_delete_missing_order_fail() {
        let mut state = state(&[]);
        assert!(update(&mut state, 7, input("1", "1")).is_err());
        assert!(delete(&mut state, 7).is_err());
    }

    #[test]
    fn update_then_delete() {
        let mut state = state(&[]);
        create(&mut state, input("2", "9.5")).unwrap();
        let id = state.db.get_all_orders().unwrap()[0].id;
        assert_eq!(update(&mut state, id, input("3", "14.25")).unwrap(),
                   "Order updated successfully.");
        assert_eq!(util::get_order(&state.db, id).unwrap().data.quantity, 3);
        assert_eq!(delete(&mut state, id).unwrap(),
                   "Order deleted successfully.");
        assert!(state.db.get_all_orders().unwrap().is_empty());
    }
}
