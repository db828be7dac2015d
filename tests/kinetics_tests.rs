//! Integration tests for Monod kinetics, the Euler step and steady-state analysis.
//!
//! Tests verify:
//! - Specific growth rate bounds and monotonicity
//! - The reference single-step scenario
//! - Non-negativity of both concentrations after every step
//! - Long-run convergence to the analytical steady state, and washout

use chemostat_lab::kinetics::{
    classify, predict, specific_growth_rate, step, washout_dilution_rate, CultureStatus,
    EulerIntegrator, ModelParameters,
};
use chemostat_lab::SimulationState;

fn reference_params() -> ModelParameters {
    ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap()
}

// ============================================================================
// Monod Growth Rate Tests
// ============================================================================

#[test]
fn test_growth_rate_bounded_by_max() {
    let mu_max = 0.4;
    for s in [0.0, 1e-6, 0.1, 0.5, 5.0, 50.0, 1e6] {
        let mu = specific_growth_rate(s, mu_max, 0.5);
        assert!(
            (0.0..mu_max).contains(&mu),
            "μ({}) = {} should lie in [0, {})",
            s,
            mu,
            mu_max
        );
    }
}

#[test]
fn test_growth_rate_non_decreasing() {
    let mut previous = 0.0;
    for i in 0..1000 {
        let s = i as f64 * 0.05;
        let mu = specific_growth_rate(s, 0.8, 0.5);
        assert!(mu >= previous, "μ must not decrease: μ({}) = {} < {}", s, mu, previous);
        previous = mu;
    }
}

#[test]
fn test_growth_rate_saturates() {
    let mu = specific_growth_rate(1e9, 0.4, 0.5);
    assert!((0.4 - mu).abs() < 1e-6, "μ should approach μmax for large S, got {}", mu);
}

#[test]
fn test_half_saturation_gives_half_max() {
    let mu = specific_growth_rate(0.5, 0.4, 0.5);
    assert!((mu - 0.2).abs() < 1e-12, "μ(Ks) should be μmax/2, got {}", mu);
}

// ============================================================================
// Single Step Tests
// ============================================================================

#[test]
fn test_reference_step() {
    let state = SimulationState::new(0.1, 20.0);
    let next = step(&state, &reference_params(), 0.03);

    assert!(
        (next.biomass_g_per_L - 0.1006).abs() < 1e-4,
        "X after one step should be ≈ 0.1006, got {:.6}",
        next.biomass_g_per_L
    );
    assert!(
        (next.substrate_g_per_L - 20.0577).abs() < 1e-4,
        "S after one step should be ≈ 20.0577, got {:.6}",
        next.substrate_g_per_L
    );
}

#[test]
fn test_step_never_negative() {
    // Large dt with heavy consumption overshoots both concentrations
    let params = ModelParameters::new(0.8, 0.5, 0.5, 0.6, 10.0).unwrap();
    let states = [
        SimulationState::new(50.0, 0.1),
        SimulationState::new(0.0, 0.0),
        SimulationState::new(1.0, 40.0),
    ];

    for state in states {
        for dt in [0.03, 1.0, 10.0, 100.0] {
            let next = step(&state, &params, dt);
            assert!(
                next.biomass_g_per_L >= 0.0 && next.substrate_g_per_L >= 0.0,
                "Negative concentration from {:?} with dt={}: {:?}",
                state,
                dt,
                next
            );
        }
    }
}

#[test]
fn test_sterile_reactor_fills_toward_feed() {
    let params = reference_params();
    let mut integrator = EulerIntegrator::new(0.03).unwrap();
    let state = integrator.run(SimulationState::new(0.0, 0.0), &params, 100.0);

    assert_eq!(state.biomass_g_per_L, 0.0, "No biomass should appear from nothing");
    assert!(
        (state.substrate_g_per_L - 30.0).abs() < 1e-3,
        "Sterile reactor should fill to Sf, got {:.4}",
        state.substrate_g_per_L
    );
}

// ============================================================================
// Steady State Tests
// ============================================================================

#[test]
fn test_long_run_converges_to_prediction() {
    let params = reference_params();
    let predicted = predict(&params);
    assert!(!predicted.washout);

    let mut integrator = EulerIntegrator::new(0.03).unwrap();
    let state = integrator.run(SimulationState::new(0.1, 20.0), &params, 600.0);

    assert!(
        (state.biomass_g_per_L - predicted.biomass_g_per_L).abs() < 0.01,
        "X should converge to X* = {:.4}, got {:.4}",
        predicted.biomass_g_per_L,
        state.biomass_g_per_L
    );
    assert!(
        (state.substrate_g_per_L - predicted.substrate_g_per_L).abs() < 0.01,
        "S should converge to S* = {:.4}, got {:.4}",
        predicted.substrate_g_per_L,
        state.substrate_g_per_L
    );
    assert_eq!(classify(&state, &params), CultureStatus::SteadyState);
}

#[test]
fn test_dilution_above_critical_washes_out() {
    let params = ModelParameters::new(0.4, 0.5, 0.5, 0.6, 30.0).unwrap();
    assert!(params.dilution_rate_per_h() > washout_dilution_rate(&params));

    let mut integrator = EulerIntegrator::new(0.03).unwrap();
    let state = integrator.run(SimulationState::new(0.5, 20.0), &params, 600.0);

    assert!(
        state.biomass_g_per_L < 1e-6,
        "Biomass should wash out, got {:e}",
        state.biomass_g_per_L
    );
    assert!(
        (state.substrate_g_per_L - 30.0).abs() < 1e-3,
        "Substrate should return to Sf, got {:.4}",
        state.substrate_g_per_L
    );
    assert_eq!(classify(&state, &params), CultureStatus::Washout);
}

#[test]
fn test_washout_rate_formula() {
    let dc = washout_dilution_rate(&reference_params());
    assert!((dc - 0.4 * 30.0 / 30.5).abs() < 1e-12, "Dc = {}", dc);
}

#[test]
fn test_steady_state_independent_of_initial_state() {
    let params = reference_params();
    let mut a = EulerIntegrator::new(0.03).unwrap();
    let mut b = EulerIntegrator::new(0.03).unwrap();

    let from_low = a.run(SimulationState::new(0.05, 5.0), &params, 800.0);
    let from_high = b.run(SimulationState::new(1.0, 40.0), &params, 800.0);

    assert!((from_low.biomass_g_per_L - from_high.biomass_g_per_L).abs() < 0.01);
    assert!((from_low.substrate_g_per_L - from_high.substrate_g_per_L).abs() < 0.01);
}
