//! Property tests over the whole stable / unstable input space

use proptest::prelude::*;
use queuecalc_core::application::optimizer::{search, OptimizerConfig};
use queuecalc_core::application::solver::{compute_metrics, solve_raw};
use queuecalc_core::domain::{CostParameters, QueueError, QueueParameters, MINUTES_PER_HOUR};

/// (λ, μ, c) with rho drawn from (0, 1)
fn arb_stable() -> impl Strategy<Value = (f64, f64, u32)> {
    (0.5f64..100.0, 1u32..30, 0.01f64..0.99)
        .prop_map(|(mu, c, rho)| (rho * f64::from(c) * mu, mu, c))
}

/// (λ, μ, c) with rho drawn from [1, 5)
fn arb_unstable() -> impl Strategy<Value = (f64, f64, u32)> {
    (0.5f64..100.0, 1u32..30, 1.0f64..5.0)
        .prop_map(|(mu, c, rho)| (rho * f64::from(c) * mu, mu, c))
}

proptest! {
    /// rho is exactly λ / (c μ) before any rounding
    #[test]
    fn rho_is_exact((lambda, mu, c) in arb_stable()) {
        let raw = solve_raw(&QueueParameters::new(lambda, mu, c).unwrap()).unwrap();
        prop_assert_eq!(raw.rho, lambda / (f64::from(c) * mu));
        prop_assert!(raw.rho > 0.0 && raw.rho < 1.0);
    }

    /// Little's law holds on the reported figures up to rounding
    #[test]
    fn littles_law((lambda, mu, c) in arb_stable()) {
        let metrics = compute_metrics(&QueueParameters::new(lambda, mu, c).unwrap()).unwrap();
        let w_hours = metrics.w / MINUTES_PER_HOUR;
        // L carries 4 decimals, W 2 decimals of minutes
        let tolerance = 0.5e-4 + lambda * 0.5e-2 / MINUTES_PER_HOUR + 1e-9 * metrics.l.abs();

        prop_assert!(
            (metrics.l - lambda * w_hours).abs() <= tolerance,
            "L = {}, λW = {}", metrics.l, lambda * w_hours
        );
    }

    /// Metrics are non-negative and W covers at least one service time
    #[test]
    fn metrics_are_well_formed((lambda, mu, c) in arb_stable()) {
        let raw = solve_raw(&QueueParameters::new(lambda, mu, c).unwrap()).unwrap();
        prop_assert!(raw.p0 > 0.0 && raw.p0 <= 1.0);
        prop_assert!(raw.lq >= 0.0 && raw.wq_hours >= 0.0 && raw.l >= 0.0);
        prop_assert!(raw.w_hours >= 1.0 / mu);
    }

    /// No steady state means no metrics
    #[test]
    fn unstable_is_rejected((lambda, mu, c) in arb_unstable()) {
        let params = QueueParameters::new(lambda, mu, c).unwrap();
        prop_assume!(params.utilization() >= 1.0);

        let result = compute_metrics(&params);
        prop_assert!(matches!(result, Err(QueueError::Unstable { .. })), "expected QueueError::Unstable, got {:?}", result);
    }

    /// Same input, same output
    #[test]
    fn metrics_are_idempotent((lambda, mu, c) in arb_stable()) {
        let params = QueueParameters::new(lambda, mu, c).unwrap();
        prop_assert_eq!(compute_metrics(&params).unwrap(), compute_metrics(&params).unwrap());
    }

    /// The optimum is the first minimum of a stable, ascending candidate list
    #[test]
    fn search_picks_first_minimum(
        lambda in 0.5f64..200.0,
        service_time in 0.5f64..60.0,
        wait_cost in 0.0f64..100.0,
        server_cost in 0.0f64..100.0,
    ) {
        let costs = CostParameters::new(wait_cost, server_cost).unwrap();
        let config = OptimizerConfig::default();

        match search(lambda, service_time, &costs, &config) {
            Ok(result) => {
                prop_assert!(!result.candidates.is_empty());
                prop_assert!(result.candidates.windows(2).all(|w| w[0].servers < w[1].servers));
                prop_assert!(result.candidates.iter().all(|o| o.rho < 1.0));

                let first_min = result
                    .candidates
                    .iter()
                    .find(|o| {
                        result
                            .candidates
                            .iter()
                            .all(|other| o.total_cost <= other.total_cost)
                    })
                    .unwrap();
                prop_assert_eq!(&result.optimal, first_min);
            }
            Err(QueueError::NoFeasibleConfiguration { max_servers }) => {
                prop_assert_eq!(max_servers, 20);
                // Even 20 servers cannot absorb the offered load
                let offered = lambda * service_time / MINUTES_PER_HOUR;
                prop_assert!(offered >= 20.0 * (1.0 - 1e-12));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
