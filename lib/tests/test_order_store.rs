use foodorders::config::map;
use foodorders::db::{self, util, Db, DbError, Stored};
use foodorders::types::{ItemQuantity, Order, OrderInput, Summary};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn store() -> impl Db {
    init_logging();
    db::open_in_memory().unwrap()
}

fn input(customer: &str, food: &str, quantity: &str, price: &str)
-> OrderInput {
    OrderInput {
        customer_name: customer.to_owned(),
        food_item: food.to_owned(),
        quantity: quantity.to_owned(),
        price: price.to_owned(),
    }
}

#[test]
fn create_adds_exactly_one_order() {
    let mut db = store();
    util::create_order(&mut db, &Order::new("Zed", "Soup", 1, 4.0)).unwrap();
    let before = db.get_all_orders().unwrap();

    let order = Order::new("Alice", "Burger", 2, 9.5);
    let id = util::create_order(&mut db, &order).unwrap();
    let after = db.get_all_orders().unwrap();

    assert_eq!(after.len(), before.len() + 1);
    assert!(before.iter().all(|o| o.id != id));
    assert_eq!(after.last(), Some(&Stored { id, data: order }));
}

#[test]
fn list_is_in_insertion_order() {
    let mut db = store();
    let ids: Vec<i64> = ["a", "b", "c"].iter()
        .map(|food| util::create_order(
            &mut db, &Order::new("Alice", food, 1, 1.0)).unwrap())
        .collect();
    let listed: Vec<i64> = db.get_all_orders().unwrap()
        .iter().map(|o| o.id).collect();
    assert_eq!(listed, ids);
}

#[test]
fn update_overwrites_every_field() {
    let mut db = store();
    let id = util::create_order(
        &mut db, &Order::new("Alice", "Burger", 2, 9.5)).unwrap();
    let replacement = Order::new("Bob", "Pizza", -1, 0.0);

    assert_eq!(util::update_order(&mut db, id, &replacement), Ok(true));
    assert_eq!(util::get_order(&db, id).unwrap().data, replacement);
}

#[test]
fn update_with_same_values_changes_nothing() {
    let mut db = store();
    util::create_order(&mut db, &Order::new("Alice", "Burger", 2, 9.5))
        .unwrap();
    let before = db.get_all_orders().unwrap();
    let first = before[0].clone();

    assert_eq!(util::update_order(&mut db, first.id, &first.data), Ok(true));
    assert_eq!(db.get_all_orders().unwrap(), before);
}

#[test]
fn delete_twice_reports_not_found() {
    let mut db = store();
    let keep = util::create_order(
        &mut db, &Order::new("Bob", "Pizza", 1, 12.0)).unwrap();
    let id = util::create_order(
        &mut db, &Order::new("Alice", "Burger", 2, 9.5)).unwrap();

    assert_eq!(util::delete_order(&mut db, id), Ok(true));
    let after_first = db.get_all_orders().unwrap();
    assert!(after_first.iter().all(|o| o.id != id));

    assert_eq!(util::delete_order(&mut db, id), Ok(false));
    assert_eq!(db.get_all_orders().unwrap(), after_first);
    assert_eq!(after_first.len(), 1);
    assert_eq!(after_first[0].id, keep);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let mut db = store();
    let id = util::create_order(
        &mut db, &Order::new("Alice", "Burger", 2, 9.5)).unwrap();
    util::delete_order(&mut db, id).unwrap();
    let next = util::create_order(
        &mut db, &Order::new("Bob", "Pizza", 1, 12.0)).unwrap();
    assert!(next > id);
}

#[test]
fn summarize_empty_store() {
    let db = store();
    assert_eq!(db.summarize().unwrap(), Summary {
        total_orders: 0,
        total_revenue: 0.0,
        average_order_value: 0.0,
    });
}

#[test]
fn summarize_prices() {
    let mut db = store();
    for price in [10.0, 20.0, 30.0] {
        util::create_order(&mut db, &Order::new("Alice", "Burger", 1, price))
            .unwrap();
    }
    assert_eq!(db.summarize().unwrap(), Summary {
        total_orders: 3,
        total_revenue: 60.0,
        average_order_value: 20.0,
    });
}

#[test]
fn aggregate_sums_quantity_per_item() {
    let mut db = store();
    for (food, quantity) in [("pizza", 2), ("pizza", 3), ("soda", 1)] {
        util::create_order(&mut db, &Order::new("Alice", food, quantity, 1.0))
            .unwrap();
    }
    let mut totals = db.aggregate_by_item().unwrap();
    totals.sort_by(|a, b| a.food_item.cmp(&b.food_item));
    assert_eq!(totals, vec![
        ItemQuantity { food_item: "pizza".to_owned(), total_quantity: 5 },
        ItemQuantity { food_item: "soda".to_owned(), total_quantity: 1 },
    ]);
}

#[test]
fn aggregate_of_empty_store_is_empty() {
    let db = store();
    assert!(db.aggregate_by_item().unwrap().is_empty());
}

#[test]
fn two_customer_scenario() {
    let mut db = store();
    util::create_order_input(&mut db, &input("Alice", "Burger", "2", "9.5"))
        .unwrap();
    util::create_order_input(&mut db, &input("Bob", "Pizza", "1", "12.0"))
        .unwrap();

    let summary = db.summarize().unwrap();
    assert_eq!(summary, Summary {
        total_orders: 2,
        total_revenue: 21.5,
        average_order_value: 10.75,
    });
    assert_eq!(summary.to_string(),
               "Total Orders: 2\n\
                Total Revenue: $21.50\n\
                Average Order Value: $10.75");
    assert_eq!(db.aggregate_by_item().unwrap(), vec![
        ItemQuantity { food_item: "Burger".to_owned(), total_quantity: 2 },
        ItemQuantity { food_item: "Pizza".to_owned(), total_quantity: 1 },
    ]);
}

#[test]
fn invalid_input_is_a_validation_error() {
    let mut db = store();
    let result = util::create_order_input(
        &mut db, &input("Alice", "Burger", "lots", "9.5"));
    assert!(matches!(result, Err(DbError::Validation(_))));
    assert_eq!(db.summarize().unwrap().total_orders, 0);
}

#[test]
fn names_are_stored_verbatim() {
    let mut db = store();
    let name = "Robert'); DROP TABLE orders;--";
    let id = util::create_order(&mut db, &Order::new(name, "Pie", 1, 3.0))
        .unwrap();
    assert_eq!(util::get_order(&db, id).unwrap().data.customer_name, name);
    assert_eq!(db.get_all_orders().unwrap().len(), 1);
}

#[test]
fn file_store_persists_across_opens() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("orders.db");
    let path_str = path.to_str().unwrap();
    let cfg = map::from_pairs([("db.sqlite.db-path", path_str)]);

    let id = {
        let mut db = db::open(&cfg).unwrap();
        util::create_order(&mut db, &Order::new("Alice", "Burger", 2, 9.5))
            .unwrap()
    };
    assert!(path.exists());

    let db = db::open(&cfg).unwrap();
    assert_eq!(db.get_all_orders().unwrap(), vec![Stored {
        id,
        data: Order::new("Alice", "Burger", 2, 9.5),
    }]);
}

#[test]
fn unusable_directory_is_a_storage_error() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("orders.db");
    let cfg = map::from_pairs([("db.sqlite.db-path", path.to_str().unwrap())]);
    match db::open(&cfg) {
        Err(DbError::Storage(msg)) => {
            assert!(msg.contains("not-a-dir"), "{msg}");
        }
        Err(e) => panic!("expected storage error, got {e:?}"),
        Ok(_) => panic!("expected storage error, got a store"),
    }
}
