//! Recipe allocation: decides whether a stock of prepared recipe portions
//! can cover a set of customer orders.

pub mod error;
pub mod generator;
pub mod loader;
pub mod logging;
pub mod models;
pub mod monte_carlo;
pub mod reporting;
pub mod satisfier;
pub mod selector;

pub use error::{AllocatorError, Result};
pub use loader::satisfy_order_json;
pub use models::{BoxType, OrderSubset, Orders, PortionCount, Recipe, RecipeCount, Stock};
pub use satisfier::{satisfy_order, satisfy_order_raw};
