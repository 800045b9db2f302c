/// Recipe selection for a block of identical customers
/// Each customer greedily takes the best-stocked recipes in the pool

use std::cmp::Reverse;
use tracing::trace;

/// Assign recipes to `customers` customers drawing from `stock`
///
/// Every customer takes the `recipe_count` recipes with the most remaining
/// stock (ties go to the lower index) and consumes `portion_count` portions
/// of each. Returns the number of customers left unserved together with the
/// stock remaining after every served customer.
///
/// A customer's deduction is checked before it is applied, so the returned
/// counts are never below zero.
pub fn select(
    stock: &[u32],
    customers: u32,
    portion_count: u32,
    recipe_count: u32,
) -> (u32, Vec<u32>) {
    let mut remaining = stock.to_vec();
    let recipe_count = recipe_count as usize;

    // Not enough distinct recipes to serve anyone
    if remaining.len() < recipe_count {
        return (customers, remaining);
    }

    let mut order: Vec<usize> = (0..remaining.len()).collect();

    for served in 0..customers {
        let chosen = most_stocked(&remaining, &mut order, recipe_count);

        if chosen.iter().any(|&i| remaining[i] < portion_count) {
            let shortfall = customers - served;
            trace!(served, shortfall, "selector ran out of stock");
            return (shortfall, remaining);
        }

        for &i in chosen {
            remaining[i] -= portion_count;
        }
    }

    (0, remaining)
}

/// Indices of the `k` highest counts, ties broken by lower index
fn most_stocked<'a>(stock: &[u32], order: &'a mut [usize], k: usize) -> &'a [usize] {
    if k == 0 {
        return &order[..0];
    }
    if k < order.len() {
        order.select_nth_unstable_by_key(k - 1, |&i| (Reverse(stock[i]), i));
    }
    &order[..k]
}
