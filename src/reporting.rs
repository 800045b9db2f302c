/// Reporting and output formatting module
/// Handles all console output for the binary

use crate::models::{BoxType, Orders, Stock};
use crate::monte_carlo::TrialStats;
use crate::satisfier::total_demand;

/// Shannon entropy (natural log) of the positive counts
/// Higher values mean stock is spread more evenly across recipes
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total as f64;
            -p * p.ln()
        })
        .sum()
}

/// Display stock totals per box type
pub fn display_stock_summary(stock: &Stock) {
    println!("Stock:");
    for box_type in BoxType::ALL {
        let recipes = stock.recipes().iter().filter(|r| r.box_type == box_type).count();
        println!(
            "  {:<10} {:>3} recipes, {:>7} portions",
            box_type.as_str(),
            recipes,
            stock.total_for(box_type)
        );
    }
    println!(
        "  Total: {} portions | Diversity (entropy): {:.3}\n",
        stock.total(),
        shannon_entropy(&stock.counts())
    );
}

/// Display customer counts for every non-empty order cell
pub fn display_order_summary(orders: &Orders) {
    println!("Orders:");
    for subset in orders.subsets().iter().filter(|s| s.customers > 0) {
        println!(
            "  {:<10} {} recipes x {} portions: {} customers",
            subset.box_type.as_str(),
            subset.recipe_count.value(),
            subset.portion_count.value(),
            subset.customers
        );
    }
    println!(
        "  Total: {} customers, {} portions\n",
        orders.total_customers(),
        total_demand(orders)
    );
}

pub fn display_result(satisfied: bool) {
    if satisfied {
        println!("Result: stock CAN satisfy all orders");
    } else {
        println!("Result: stock CANNOT satisfy all orders");
    }
}

/// Display round-trip trial statistics
pub fn display_trial_stats(stats: &TrialStats) {
    println!("\n=== Round-trip trials ===");
    println!(
        "  Runs: {} | Agreements: {} | Agreement rate: {:.1}%",
        stats.runs,
        stats.agreements,
        stats.agreement_rate() * 100.0
    );
    if !stats.disagreements.is_empty() {
        println!("  Disagreed at extra stock: {:?}", stats.disagreements);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_of_uniform_stock() {
        let entropy = shannon_entropy(&[5, 5, 5, 5]);
        assert!((entropy - 4f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_ignores_empty_recipes() {
        assert_eq!(shannon_entropy(&[0, 7, 0]), 0.0);
        assert_eq!(shannon_entropy(&[]), 0.0);
        assert!((shannon_entropy(&[3, 3, 0]) - 2f64.ln()).abs() < 1e-12);
    }
}
