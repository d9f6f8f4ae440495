// tests/pnl_test.rs
use bsm_calc::error::BsmError;
use bsm_calc::scenario::grid::{price_grid, GridSpec};
use bsm_calc::scenario::pnl::pnl_curve;

#[test]
fn test_at_strike_both_legs_lose_premium() {
    for &premium in &[0.0, 2.5, 10.450_583_572_185_565, -3.0, 1e6] {
        let curve = pnl_curve(&[80.0, 100.0, 120.0], 100.0, premium).expect("Valid strike");
        assert_eq!(curve.pnl_call[1], -premium);
        assert_eq!(curve.pnl_put[1], -premium);
    }
}

#[test]
fn test_curve_lengths_match() {
    let grid = price_grid(100.0, &GridSpec { points: 37, ..Default::default() }).expect("Valid grid");
    let curve = pnl_curve(&grid, 95.0, 4.0).expect("Valid strike");
    assert_eq!(curve.stock_prices.len(), 37);
    assert_eq!(curve.pnl_call.len(), curve.stock_prices.len());
    assert_eq!(curve.pnl_put.len(), curve.stock_prices.len());
    assert_eq!(curve.stock_prices, grid);
}

#[test]
fn test_monotone_legs_on_ascending_range() {
    // Uneven spacing on purpose
    let range = [1.0, 20.0, 20.5, 64.0, 99.99, 100.0, 100.01, 130.0, 400.0];
    let curve = pnl_curve(&range, 100.0, 7.25).expect("Valid strike");

    for w in curve.pnl_call.windows(2) {
        assert!(w[1] >= w[0], "Call leg decreased: {:?}", w);
    }
    for w in curve.pnl_put.windows(2) {
        assert!(w[1] <= w[0], "Put leg increased: {:?}", w);
    }
}

#[test]
fn test_losses_are_capped_at_premium() {
    let grid = price_grid(100.0, &GridSpec::default()).expect("Valid grid");
    let premium = 6.0;
    let curve = pnl_curve(&grid, 100.0, premium).expect("Valid strike");
    assert!(curve.pnl_call.iter().all(|&v| v >= -premium));
    assert!(curve.pnl_put.iter().all(|&v| v >= -premium));
    assert_eq!(curve.pnl_call[0], -premium);
    assert_eq!(curve.pnl_put[9], -premium);
}

#[test]
fn test_negative_premium_is_a_credit() {
    let curve = pnl_curve(&[50.0, 150.0], 100.0, -1.5).expect("Valid strike");
    assert_eq!(curve.pnl_call, vec![1.5, 51.5]);
    assert_eq!(curve.pnl_put, vec![51.5, 1.5]);
}

#[test]
fn test_invalid_strike() {
    for strike in [0.0, -10.0, f64::NAN] {
        match pnl_curve(&[90.0, 110.0], strike, 1.0) {
            Err(BsmError::InvalidInput { parameter, .. }) => assert_eq!(parameter, "strike"),
            other => panic!("Expected InvalidInput for strike {}, got {:?}", strike, other),
        }
    }
}
