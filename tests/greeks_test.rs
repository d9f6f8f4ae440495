// tests/greeks_test.rs
use bsm_calc::analytics::bs_analytic::{price_pair, OptionKind, OptionParameters};
use bsm_calc::analytics::greeks::{greeks, greeks_from};
use bsm_calc::sampling::ParameterSampler;

fn call_price(params: &OptionParameters) -> f64 {
    price_pair(params).expect("Valid parameters").get(OptionKind::Call)
}

fn put_price(params: &OptionParameters) -> f64 {
    price_pair(params).expect("Valid parameters").get(OptionKind::Put)
}

#[test]
fn test_bs_delta_reference() {
    let g = greeks(&OptionParameters::default()).expect("Valid parameters");

    println!("\nAnalytic Delta (Call): {}", g.delta_call);
    println!("Analytic Delta (Put): {}", g.delta_put);

    assert!((g.delta_call - 0.6368).abs() < 1e-4, "Delta {} != 0.6368", g.delta_call);
    assert!((g.delta_put - (0.636_830_651_175_619_1 - 1.0)).abs() < 1e-12);
}

#[test]
fn test_bs_gamma_analytic() {
    let analytic_gamma = greeks(&OptionParameters::default()).expect("Valid parameters").gamma;
    let expected_gamma = 0.018762017345847;

    let abs_error = (analytic_gamma - expected_gamma).abs();
    let rel_error = abs_error / expected_gamma;

    println!("\nAnalytic Gamma: {}", analytic_gamma);
    println!("Expected Gamma: {}", expected_gamma);
    println!("Relative Error (Gamma): {}", rel_error);

    assert!(rel_error < 1e-10, "Relative error for Gamma exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_vega_analytic() {
    let analytic_vega = greeks(&OptionParameters::default()).expect("Valid parameters").vega;
    let expected_vega = 37.524034691693792;

    let rel_error = (analytic_vega - expected_vega).abs() / expected_vega;

    println!("\nAnalytic Vega: {}", analytic_vega);
    println!("Expected Vega: {}", expected_vega);
    println!("Relative Error (Vega): {}", rel_error);

    assert!(rel_error < 1e-10, "Relative error for Vega exceeds tolerance: {}", rel_error);
}

#[test]
fn test_bs_theta_analytic() {
    let g = greeks(&OptionParameters::default()).expect("Valid parameters");
    let expected_call = -6.414027546438197;
    let expected_put = -1.657880423934626;

    let rel_error_call = ((g.theta_call - expected_call) / expected_call).abs();
    let rel_error_put = ((g.theta_put - expected_put) / expected_put).abs();

    println!("\nAnalytic Theta (Call): {}", g.theta_call);
    println!("Analytic Theta (Put): {}", g.theta_put);

    assert!(rel_error_call < 1e-7, "Relative error for call Theta: {}", rel_error_call);
    assert!(rel_error_put < 1e-7, "Relative error for put Theta: {}", rel_error_put);
}

#[test]
fn test_bs_rho_analytic() {
    let g = greeks(&OptionParameters::default()).expect("Valid parameters");
    assert!((g.rho_call - 53.232_481_545_376_345).abs() < 1e-8);
    assert!((g.rho_put - -41.890_460_904_695_06).abs() < 1e-8);
}

#[test]
fn test_greeks_vs_finite_differences() {
    let params = OptionParameters::new(105.0, 100.0, 0.75, 0.04, 0.3);
    let g = greeks(&params).expect("Valid parameters");

    let h_s = 0.01;
    let up = OptionParameters { spot: params.spot + h_s, ..params };
    let down = OptionParameters { spot: params.spot - h_s, ..params };
    let fd_delta = (call_price(&up) - call_price(&down)) / (2.0 * h_s);
    let fd_delta_put = (put_price(&up) - put_price(&down)) / (2.0 * h_s);
    let fd_gamma = (call_price(&up) - 2.0 * call_price(&params) + call_price(&down)) / (h_s * h_s);

    let h_v = 1e-4;
    let fd_vega = (call_price(&OptionParameters { sigma: params.sigma + h_v, ..params })
        - call_price(&OptionParameters { sigma: params.sigma - h_v, ..params }))
        / (2.0 * h_v);

    // Theta is time decay: minus the derivative with respect to time to expiry
    let h_t = 1e-5;
    let longer = OptionParameters { expiry: params.expiry + h_t, ..params };
    let shorter = OptionParameters { expiry: params.expiry - h_t, ..params };
    let fd_theta_call = -(call_price(&longer) - call_price(&shorter)) / (2.0 * h_t);
    let fd_theta_put = -(put_price(&longer) - put_price(&shorter)) / (2.0 * h_t);

    let h_r = 1e-5;
    let fd_rho = (call_price(&OptionParameters { rate: params.rate + h_r, ..params })
        - call_price(&OptionParameters { rate: params.rate - h_r, ..params }))
        / (2.0 * h_r);

    println!("\n=== Analytic vs Finite Difference ===");
    println!("Delta: {} vs {}", g.delta_call, fd_delta);
    println!("Gamma: {} vs {}", g.gamma, fd_gamma);
    println!("Vega:  {} vs {}", g.vega, fd_vega);
    println!("Theta: {} vs {}", g.theta_call, fd_theta_call);
    println!("Rho:   {} vs {}", g.rho_call, fd_rho);

    assert!((g.delta_call - fd_delta).abs() < 1e-6);
    assert!((g.delta_put - fd_delta_put).abs() < 1e-6);
    assert!((g.gamma - fd_gamma).abs() < 1e-5);
    assert!((g.vega - fd_vega).abs() < 1e-5);
    assert!((g.theta_call - fd_theta_call).abs() < 1e-4);
    assert!((g.theta_put - fd_theta_put).abs() < 1e-4);
    assert!((g.rho_call - fd_rho).abs() < 1e-5);
}

#[test]
fn test_greek_identities_over_samples() {
    let mut sampler = ParameterSampler::new(99);
    for params in sampler.sample_n(2_000) {
        let g = greeks(&params).expect("Valid parameters");

        assert!(
            (g.delta_call - g.delta_put - 1.0).abs() < 1e-14,
            "Delta spread {} for {:?}",
            g.delta_call - g.delta_put,
            params
        );
        assert!(g.gamma >= 0.0, "Negative gamma {} for {:?}", g.gamma, params);
        assert!(g.vega >= 0.0, "Negative vega {} for {:?}", g.vega, params);
        assert!((0.0..=1.0).contains(&g.delta_call));

        let rho_spread = params.strike * params.expiry * (-params.rate * params.expiry).exp();
        assert!((g.rho_call - g.rho_put - rho_spread).abs() < 1e-8 * rho_spread.max(1.0));
    }
}

#[test]
fn test_greeks_from_pair_matches_direct() {
    let mut sampler = ParameterSampler::new(3);
    for params in sampler.sample_n(200) {
        let pair = price_pair(&params).expect("Valid parameters");
        let shared = greeks_from(&params, pair.d1, pair.d2).expect("Valid parameters");
        assert_eq!(shared, greeks(&params).expect("Valid parameters"));
    }
}
