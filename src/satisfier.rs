/// Order feasibility check
/// Works through order subsets against a working copy of stock, hardest subsets first

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{OrderSubset, Orders, RawOrders, RawStock, Stock};
use crate::selector::select;

/// Portions needed to serve every customer in `orders`
pub fn total_demand(orders: &Orders) -> u64 {
    orders.subsets().iter().map(|s| s.demand()).sum()
}

/// Subsets in the order they are allocated
///
/// Stable sort by portions then recipes, both descending. Subsets in the same
/// tier cell keep canonical order, so vegetarian goes before gourmet.
pub fn processing_order(orders: &Orders) -> Vec<OrderSubset> {
    let mut subsets = orders.subsets().to_vec();
    subsets.sort_by(|a, b| {
        (b.portion_count, b.recipe_count).cmp(&(a.portion_count, a.recipe_count))
    });
    subsets
}

/// Positions of the stock vector that make up one pool
struct Pool {
    indices: Vec<usize>,
}

impl Pool {
    fn from_mask(mask: &[bool], wanted: bool) -> Self {
        Pool {
            indices: mask
                .iter()
                .enumerate()
                .filter(|(_, &m)| m == wanted)
                .map(|(i, _)| i)
                .collect(),
        }
    }

    fn extract(&self, stock: &[u32]) -> Vec<u32> {
        self.indices.iter().map(|&i| stock[i]).collect()
    }

    fn commit(&self, stock: &mut [u32], updated: &[u32]) {
        for (&i, &count) in self.indices.iter().zip(updated) {
            stock[i] = count;
        }
    }
}

/// Determine whether `stock` can cover every order in `orders`
///
/// Vegetarian customers draw only from vegetarian recipes. Gourmet customers
/// draw from gourmet recipes first and fall back to the full range once the
/// gourmet recipes can no longer serve them. The caller's stock is not changed.
pub fn satisfy_order(stock: &Stock, orders: &Orders) -> bool {
    let total_stock = stock.total();
    let demand = total_demand(orders);

    // Enough portions overall is necessary but not sufficient
    if demand > total_stock {
        info!(demand, total_stock, "orders rejected: demand exceeds total stock");
        return false;
    }

    let mut counts = stock.counts();
    let mask = stock.vegetarian_mask();
    let vegetarian = Pool::from_mask(&mask, true);
    let gourmet = Pool::from_mask(&mask, false);

    for subset in processing_order(orders) {
        if subset.customers == 0 {
            continue;
        }
        let portions = subset.portion_count.value();
        let recipes = subset.recipe_count.value();

        debug!(
            box_type = %subset.box_type,
            recipes,
            portions,
            customers = subset.customers,
            "allocating subset"
        );

        if subset.box_type.is_vegetarian() {
            let (shortfall, updated) =
                select(&vegetarian.extract(&counts), subset.customers, portions, recipes);
            if shortfall > 0 {
                info!(box_type = %subset.box_type, recipes, portions, shortfall, "orders cannot be satisfied");
                return false;
            }
            vegetarian.commit(&mut counts, &updated);
        } else {
            let (shortfall, updated) =
                select(&gourmet.extract(&counts), subset.customers, portions, recipes);
            gourmet.commit(&mut counts, &updated);

            if shortfall > 0 {
                debug!(shortfall, "gourmet recipes exhausted, falling back to all recipes");
                let (shortfall, updated) = select(&counts, shortfall, portions, recipes);
                if shortfall > 0 {
                    info!(box_type = %subset.box_type, recipes, portions, shortfall, "orders cannot be satisfied");
                    return false;
                }
                counts = updated;
            }
        }
    }

    info!(demand, total_stock, "orders can be satisfied");
    true
}

/// Decode serialized-shape inputs and run [`satisfy_order`]
pub fn satisfy_order_raw(stock: RawStock, orders: RawOrders) -> Result<bool> {
    let stock = Stock::try_from(stock)?;
    let orders = Orders::try_from(orders)?;
    Ok(satisfy_order(&stock, &orders))
}
