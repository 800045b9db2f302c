/// Synthetic stock and order generation
/// Stock is built from the orders themselves so feasibility is known up front

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{AllocatorError, Result};
use crate::models::{
    BoxType, OrderSubset, Orders, PortionCount, Recipe, RecipeCount, RawOrders, RawStock, Stock,
};

/// Parameters for synthetic data
#[derive(Clone, Debug)]
pub struct GeneratorParams {
    /// Customers per order cell, drawn from `min..max`
    pub customer_range: (u32, u32),
    pub num_vegetarian: usize,
    pub num_gourmet: usize,
    /// Single portions added to (positive) or removed from (negative) the exact stock
    pub extra_stock: i64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams {
            customer_range: (10, 100),
            num_vegetarian: 8,
            num_gourmet: 22,
            extra_stock: 0,
        }
    }
}

/// Generated orders and stock, plus whether the orders should be satisfiable
#[derive(Clone, Debug)]
pub struct GeneratedData {
    pub orders: RawOrders,
    pub stock: RawStock,
    pub possible: bool,
}

/// Generate random orders and a stock level that covers them exactly,
/// then shift the stock by `params.extra_stock` portions
pub fn generate_data<R: Rng>(params: &GeneratorParams, rng: &mut R) -> Result<GeneratedData> {
    let (min_customers, max_customers) = params.customer_range;
    if params.num_vegetarian < RecipeCount::Four.value() as usize {
        return Err(AllocatorError::InvalidGenerator(format!(
            "need at least 4 vegetarian recipes, got {}",
            params.num_vegetarian
        )));
    }
    if min_customers >= max_customers {
        return Err(AllocatorError::InvalidGenerator(format!(
            "empty customer range {}..{}",
            min_customers, max_customers
        )));
    }

    let mut subsets = Vec::new();
    for box_type in BoxType::ALL {
        for recipe_count in RecipeCount::ALL {
            for portion_count in PortionCount::ALL {
                subsets.push(OrderSubset {
                    box_type,
                    recipe_count,
                    portion_count,
                    customers: rng.gen_range(min_customers..max_customers),
                });
            }
        }
    }
    let orders = Orders::new(subsets);

    let num_recipes = params.num_vegetarian + params.num_gourmet;
    let mut counts = vec![0u32; num_recipes];
    let vegetarian: Vec<usize> = (0..params.num_vegetarian).collect();
    let everything: Vec<usize> = (0..num_recipes).collect();

    // Every customer gets distinct recipes from the pool they may draw on
    for subset in orders.subsets() {
        let pool = if subset.box_type.is_vegetarian() { &vegetarian } else { &everything };
        let recipes = subset.recipe_count.value() as usize;
        for _ in 0..subset.customers {
            for &i in pool.choose_multiple(rng, recipes) {
                counts[i] += subset.portion_count.value();
            }
        }
    }

    let possible = params.extra_stock >= 0;
    if possible {
        for _ in 0..params.extra_stock {
            counts[rng.gen_range(0..num_recipes)] += 1;
        }
    } else {
        for _ in 0..params.extra_stock.unsigned_abs() {
            let stocked: Vec<usize> = (0..num_recipes).filter(|&i| counts[i] > 0).collect();
            match stocked.choose(rng) {
                Some(&i) => counts[i] -= 1,
                None => break,
            }
        }
    }

    let recipes = counts
        .iter()
        .enumerate()
        .map(|(i, &stock_count)| Recipe {
            name: format!("recipe_{}", i + 1),
            box_type: if i < params.num_vegetarian { BoxType::Vegetarian } else { BoxType::Gourmet },
            stock_count,
        })
        .collect();
    let stock = Stock::new(recipes);

    debug!(
        customers = orders.total_customers(),
        total_stock = stock.total(),
        extra_stock = params.extra_stock,
        "generated synthetic data"
    );

    Ok(GeneratedData {
        orders: RawOrders::from(&orders),
        stock: RawStock::from(&stock),
        possible,
    })
}
