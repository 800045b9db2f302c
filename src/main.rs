use std::env;
use std::process;

use recipe_allocator::generator::{generate_data, GeneratorParams};
use recipe_allocator::loader::{load_orders, load_stock};
use recipe_allocator::monte_carlo::run_round_trip_trials;
use recipe_allocator::reporting::{
    display_order_summary, display_result, display_stock_summary, display_trial_stats,
};
use recipe_allocator::{logging, satisfy_order, Orders, Stock};

fn run(args: &[String]) -> recipe_allocator::Result<()> {
    let (raw_stock, raw_orders) = match args {
        [stock_path, orders_path] => (load_stock(stock_path)?, load_orders(orders_path)?),
        [] => {
            // No input files: demo with generated data
            println!("No input files given, generating demo data.\n");
            let data = generate_data(&GeneratorParams::default(), &mut rand::thread_rng())?;
            (data.stock, data.orders)
        }
        _ => {
            eprintln!("usage: recipe-allocator [<stock.json> <orders.json>]");
            process::exit(2);
        }
    };

    let stock = Stock::try_from(raw_stock)?;
    let orders = Orders::try_from(raw_orders)?;

    display_stock_summary(&stock);
    display_order_summary(&orders);
    display_result(satisfy_order(&stock, &orders));

    if args.is_empty() {
        // 5 surplus levels x 20 trials gives a quick sanity check of the heuristic
        let stats = run_round_trip_trials(
            &GeneratorParams { customer_range: (100, 200), ..GeneratorParams::default() },
            &[-10, -1, 0, 1, 10],
            20,
            &mut rand::thread_rng(),
        )?;
        display_trial_stats(&stats);
    }

    Ok(())
}

fn main() {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        tracing::error!(%err, "recipe allocation failed");
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
