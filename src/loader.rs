/// JSON loading for stock and order files

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AllocatorError, Result};
use crate::models::{RawOrders, RawStock};
use crate::satisfier::satisfy_order_raw;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| AllocatorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AllocatorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_stock(path: impl AsRef<Path>) -> Result<RawStock> {
    read_json(path.as_ref())
}

pub fn load_orders(path: impl AsRef<Path>) -> Result<RawOrders> {
    read_json(path.as_ref())
}

/// Pretty-print `value` as JSON to `path`
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(value).map_err(|source| AllocatorError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| AllocatorError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load stock and orders from JSON files and check whether the orders can be met
pub fn satisfy_order_json(
    stock_path: impl AsRef<Path>,
    orders_path: impl AsRef<Path>,
) -> Result<bool> {
    let stock = load_stock(stock_path)?;
    let orders = load_orders(orders_path)?;
    satisfy_order_raw(stock, orders)
}
