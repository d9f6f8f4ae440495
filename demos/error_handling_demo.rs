// demos/error_handling_demo.rs
use bsm_calc::analytics::bs_analytic::{price, OptionKind, OptionParameters};
use bsm_calc::analytics::greeks::greeks;
use bsm_calc::error::BsmError;
use bsm_calc::scenario::grid::GridSpec;
use bsm_calc::scenario::pnl::pnl_curve;
use bsm_calc::valuation::{evaluate, CalculatorConfig};

fn main() {
    println!("Error Handling Demo for bsm-calc");
    println!("================================\n");

    // Test 1: Expired option
    println!("1. Testing zero time to expiry...");
    let expired = OptionParameters {
        expiry: 0.0,
        ..Default::default()
    };
    match price(&expired, OptionKind::Call) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Zero volatility
    println!("\n2. Testing zero volatility...");
    let flat = OptionParameters {
        sigma: 0.0,
        ..Default::default()
    };
    match greeks(&flat) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Tiny but valid volatility
    println!("\n3. Testing extreme but valid parameters...");
    let nearly_flat = OptionParameters {
        sigma: 1e-9,
        ..Default::default()
    };
    match price(&nearly_flat, OptionKind::Call) {
        Ok(result) => println!("   ✓ Priced at {:.6} (discounted intrinsic)", result.price),
        Err(e) => println!("   Error: {}", e),
    }

    // Test 4: Unknown option kind from free text
    println!("\n4. Testing unrecognised option kind...");
    match "straddle".parse::<OptionKind>() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Bad strike for P&L
    println!("\n5. Testing non-positive strike for P&L...");
    match pnl_curve(&[90.0, 100.0, 110.0], 0.0, 5.0) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Bad grid
    println!("\n6. Testing invalid grid configuration...");
    let config = CalculatorConfig {
        grid: GridSpec {
            points: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    match evaluate(&config) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Error type matching
    println!("\n7. Testing error type matching...");
    let negative_strike = OptionParameters {
        strike: -100.0,
        ..Default::default()
    };
    match price(&negative_strike, OptionKind::Put) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(BsmError::InvalidInput { parameter, value, constraint }) => {
            println!("   ✓ Caught InvalidInput: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
    println!("All error cases were properly caught and handled.");
}
