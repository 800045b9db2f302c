/// Error types for input validation and data loading
/// Infeasible orders are not errors: they surface as `Ok(false)`

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AllocatorError {
    #[error("unknown box type '{0}' (expected 'vegetarian' or 'gourmet')")]
    UnknownBoxType(String),

    #[error("unknown recipe count label '{0}' (expected two_recipes, three_recipes or four_recipes)")]
    UnknownRecipeTier(String),

    #[error("unknown portion count label '{0}' (expected two_portions or four_portions)")]
    UnknownPortionTier(String),

    #[error("recipe '{recipe}' has negative stock count {stock_count}")]
    NegativeStock { recipe: String, stock_count: i64 },

    #[error("stock count {stock_count} for recipe '{recipe}' is out of range")]
    StockOutOfRange { recipe: String, stock_count: i64 },

    #[error("order cell {box_type}/{recipe_count}/{portion_count} has invalid customer count {customers}")]
    InvalidCustomers {
        box_type: String,
        recipe_count: String,
        portion_count: String,
        customers: i64,
    },

    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),

    #[error("failed to read or write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AllocatorError>;
