// tests/valuation_test.rs
use bsm_calc::analytics::bs_analytic::OptionParameters;
use bsm_calc::batch::{greeks_batch, price_batch};
use bsm_calc::error::BsmError;
use bsm_calc::report::{render_text, ReportSections};
use bsm_calc::sampling::ParameterSampler;
use bsm_calc::scenario::grid::GridSpec;
use bsm_calc::valuation::{evaluate, CalculatorConfig};

#[test]
fn test_default_calculator_screen() {
    let valuation = evaluate(&CalculatorConfig::default()).expect("Valid configuration");

    println!("\n{}", render_text(&valuation, ReportSections::all(), None));

    assert!((valuation.prices.call - 10.4506).abs() < 1e-4);
    assert!((valuation.prices.put - 5.5735).abs() < 1e-4);
    assert!((valuation.greeks.delta_call - 0.6368).abs() < 1e-4);

    // Premium defaults to the call price, grid is linspace(50, 150, 10)
    assert_eq!(valuation.premium, valuation.prices.call);
    assert_eq!(valuation.pnl.len(), 10);
    assert!((valuation.pnl.stock_prices[0] - 50.0).abs() < 1e-12);
    assert!((valuation.pnl.stock_prices[9] - 150.0).abs() < 1e-12);
    assert_eq!(valuation.pnl.pnl_call[0], -valuation.prices.call);
}

#[test]
fn test_explicit_premium_and_grid() {
    let config = CalculatorConfig {
        params: OptionParameters::new(200.0, 180.0, 0.5, 0.02, 0.35),
        grid: GridSpec {
            lower_ratio: 0.8,
            upper_ratio: 1.2,
            points: 5,
        },
        premium: Some(12.0),
    };
    let valuation = evaluate(&config).expect("Valid configuration");

    assert_eq!(valuation.premium, 12.0);
    let expected_prices = [160.0, 180.0, 200.0, 220.0, 240.0];
    for (got, want) in valuation.pnl.stock_prices.iter().zip(expected_prices) {
        assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
    }
    // At the strike both legs lose exactly the premium
    assert!((valuation.pnl.pnl_call[1] + 12.0).abs() < 1e-9);
    assert!((valuation.pnl.pnl_put[1] + 12.0).abs() < 1e-9);

    let heatmap = valuation.heatmap();
    assert_eq!(heatmap.shape(), &[2, 5]);
    assert!((valuation.heatmap_bound() - 48.0).abs() < 1e-9);
}

#[test]
fn test_invalid_configuration_fails_fast() {
    let config = CalculatorConfig {
        params: OptionParameters {
            expiry: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        evaluate(&config),
        Err(BsmError::InvalidInput { .. })
    ));

    let config = CalculatorConfig {
        grid: GridSpec {
            lower_ratio: 1.0,
            upper_ratio: 1.0,
            points: 10,
        },
        ..Default::default()
    };
    assert!(matches!(
        evaluate(&config),
        Err(BsmError::InvalidConfiguration { .. })
    ));
}

#[test]
fn test_batch_matches_single_evaluations() {
    let params = ParameterSampler::new(17).sample_n(1_000);
    let prices = price_batch(&params);
    let greeks = greeks_batch(&params);

    for ((p, priced), with_greeks) in params.iter().zip(&prices).zip(&greeks) {
        let config = CalculatorConfig {
            params: *p,
            ..Default::default()
        };
        let valuation = evaluate(&config).expect("Valid configuration");
        let priced = priced.as_ref().expect("Valid parameters");
        let (pair, g) = with_greeks.as_ref().expect("Valid parameters");

        assert_eq!(priced, &valuation.prices);
        assert_eq!(pair, &valuation.prices);
        assert_eq!(g, &valuation.greeks);
    }
}
