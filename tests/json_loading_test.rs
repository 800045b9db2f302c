use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use recipe_allocator::generator::{generate_data, GeneratorParams};
use recipe_allocator::loader::{load_orders, load_stock, write_json};
use recipe_allocator::{satisfy_order_json, AllocatorError};
use tempfile::TempDir;

const STOCK: &str = r#"{
    "recipe_1": {"stock_count": 2, "box_type": "vegetarian"},
    "recipe_2": {"stock_count": 2, "box_type": "vegetarian"},
    "recipe_3": {"stock_count": 4, "box_type": "vegetarian"},
    "recipe_4": {"stock_count": 4, "box_type": "vegetarian"},
    "recipe_5": {"stock_count": 0, "box_type": "gourmet"}
}"#;

const ORDERS: &str = r#"{
    "vegetarian": {
        "two_recipes": {"two_portions": 0, "four_portions": 1},
        "three_recipes": {"two_portions": 0, "four_portions": 0},
        "four_recipes": {"two_portions": 0, "four_portions": 0}
    },
    "gourmet": {
        "two_recipes": {"two_portions": 1, "four_portions": 0},
        "three_recipes": {"two_portions": 0, "four_portions": 0},
        "four_recipes": {"two_portions": 0, "four_portions": 0}
    }
}"#;

fn write_files(dir: &TempDir, stock: &str, orders: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let stock_path = dir.path().join("stock.json");
    let orders_path = dir.path().join("orders.json");
    fs::write(&stock_path, stock).unwrap();
    fs::write(&orders_path, orders).unwrap();
    (stock_path, orders_path)
}

#[test]
fn test_satisfy_order_from_json_files() {
    let dir = TempDir::new().unwrap();
    let (stock_path, orders_path) = write_files(&dir, STOCK, ORDERS);

    assert!(satisfy_order_json(&stock_path, &orders_path).unwrap());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(load_stock(&missing), Err(AllocatorError::Io { .. })));
}

#[test]
fn test_malformed_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let (stock_path, orders_path) = write_files(&dir, r#"{"recipe_1": {"box_type": "gourmet"}}"#, ORDERS);

    let err = satisfy_order_json(&stock_path, &orders_path).unwrap_err();
    assert!(matches!(err, AllocatorError::Json { .. }));
    assert!(err.to_string().contains("stock.json"));
}

#[test]
fn test_unknown_tier_label_is_rejected() {
    let dir = TempDir::new().unwrap();
    let orders = r#"{"gourmet": {"five_recipes": {"two_portions": 1}}}"#;
    let (stock_path, orders_path) = write_files(&dir, STOCK, orders);

    let err = satisfy_order_json(&stock_path, &orders_path).unwrap_err();
    assert!(matches!(err, AllocatorError::UnknownRecipeTier(label) if label == "five_recipes"));
}

#[test]
fn test_negative_stock_is_rejected() {
    let dir = TempDir::new().unwrap();
    let stock = r#"{"recipe_1": {"stock_count": -4, "box_type": "vegetarian"}}"#;
    let (stock_path, orders_path) = write_files(&dir, stock, ORDERS);

    let err = satisfy_order_json(&stock_path, &orders_path).unwrap_err();
    assert!(matches!(err, AllocatorError::NegativeStock { .. }));
}

#[test]
fn test_generated_data_survives_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let params = GeneratorParams { customer_range: (100, 200), extra_stock: 10, ..GeneratorParams::default() };
    let data = generate_data(&params, &mut rng).unwrap();

    let stock_path = dir.path().join("stock.json");
    let orders_path = dir.path().join("orders.json");
    write_json(&stock_path, &data.stock).unwrap();
    write_json(&orders_path, &data.orders).unwrap();

    assert_eq!(load_stock(&stock_path).unwrap(), data.stock);
    assert_eq!(load_orders(&orders_path).unwrap(), data.orders);
    assert_eq!(satisfy_order_json(&stock_path, &orders_path).unwrap(), data.possible);
}
