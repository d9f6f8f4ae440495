// demos/calculator.rs
use bsm_calc::analytics::bs_analytic::{price, price_pair, OptionKind, OptionParameters};
use bsm_calc::analytics::greeks::greeks;
use bsm_calc::output;
use bsm_calc::scenario::grid::{price_grid, GridSpec};
use bsm_calc::scenario::pnl::pnl_curve;
use bsm_calc::valuation::{evaluate, CalculatorConfig};

fn main() {
    println!("Running bsm-calc Demo\n");

    let params = OptionParameters {
        spot: 100.0,
        strike: 100.0,
        expiry: 1.0,
        rate: 0.05,
        sigma: 0.2,
    };

    // --- Pricing ---
    println!("--- Black-Scholes Prices ---");
    let call = price(&params, OptionKind::Call).expect("Valid parameters");
    let put = price(&params, OptionKind::Put).expect("Valid parameters");
    println!("Call: {:.4}  (d1 = {:.4}, d2 = {:.4})", call.price, call.d1, call.d2);
    println!("Put:  {:.4}", put.price);
    let parity_gap = call.price - put.price - (params.spot - params.strike * params.discount());
    println!("Put-call parity gap: {:e}\n", parity_gap);

    // --- Greeks ---
    println!("--- Greeks ---");
    let g = greeks(&params).expect("Valid parameters");
    for (label, value) in g.rows() {
        println!("{:<14}{:>12.4}", label, value);
    }
    println!();

    // --- Time decay towards expiry ---
    println!("--- Convergence to intrinsic value ---");
    let itm = OptionParameters { spot: 110.0, ..params };
    for &expiry in &[1.0, 0.25, 0.01, 1e-4, 1e-8] {
        let pair = price_pair(&OptionParameters { expiry, ..itm }).expect("Valid parameters");
        println!("T = {:<8e} call = {:>9.4}  put = {:>9.4}", expiry, pair.call, pair.put);
    }
    println!();

    // --- P&L scenarios on a custom, uneven range ---
    println!("--- P&L at expiry, premium 4.00 ---");
    let range = [60.0, 90.0, 98.0, 100.0, 102.0, 110.0, 140.0];
    let curve = pnl_curve(&range, params.strike, 4.0).expect("Valid strike");
    for (s, c, p) in curve.rows() {
        println!("S_T = {:>7.2}  call = {:>8.2}  put = {:>8.2}", s, c, p);
    }
    println!();

    // --- Default grid with premium set to the call price ---
    let grid = price_grid(params.spot, &GridSpec::default()).expect("Valid grid");
    println!("Default grid: {:?}\n", grid.iter().map(|s| format!("{:.1}", s)).collect::<Vec<_>>());

    let valuation = evaluate(&CalculatorConfig::default()).expect("Valid configuration");
    println!("Heatmap (row 0 call, row 1 put), bound ±{:.2}:", valuation.heatmap_bound());
    println!("{:.2}", valuation.heatmap());

    if let Err(e) = std::fs::create_dir_all("results") {
        eprintln!("Error creating results directory: {}", e);
        return;
    }
    match output::write_pnl_to_csv("results/pnl.csv", &valuation.pnl) {
        Ok(_) => println!("P&L curve written to results/pnl.csv"),
        Err(e) => eprintln!("Error writing P&L curve: {}", e),
    }
    match output::write_summary_to_csv("results/summary.csv", &output::valuation_summary(&valuation)) {
        Ok(_) => println!("Summary data written to results/summary.csv"),
        Err(e) => eprintln!("Error writing summary data: {}", e),
    }
}
