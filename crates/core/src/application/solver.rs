// Steady-State Solver (M/M/c closed form)
use crate::domain::error::{QueueError, Result};
use crate::domain::rounding::round_to;
use crate::domain::{
    QueueParameters, RawSteadyState, Recommendation, SteadyStateMetrics, MINUTES_PER_HOUR,
};
use tracing::debug;

/// Partial Poisson sum Σ_{n=0}^{c-1} a^n/n! together with a^c/c!
///
/// Each term is derived from the previous one (t_n = t_{n-1} · a / n), so
/// neither a^c nor c! is ever materialized and large c cannot overflow
/// through the factorial alone.
fn poisson_terms(offered: f64, servers: u32) -> (f64, f64) {
    let mut term = 1.0;
    let mut partial_sum = 0.0;
    for n in 1..=servers {
        partial_sum += term;
        term *= offered / f64::from(n);
    }
    (partial_sum, term)
}

/// P0 from precomputed terms. Caller guarantees rho < 1.
fn idle_probability(partial_sum: f64, last_term: f64, rho: f64) -> f64 {
    1.0 / (partial_sum + last_term / (1.0 - rho))
}

/// Probability that the system is empty
///
/// `P0 = 1 / ( Σ_{n=0}^{c-1} a^n/n! + a^c / (c! (1 - rho)) )` with a = λ/μ.
///
/// # Errors
/// `DivisionSingularity` when rho >= 1 (the second term has no finite value).
pub fn compute_p0(params: &QueueParameters) -> Result<f64> {
    let rho = params.utilization();
    if rho >= 1.0 {
        return Err(QueueError::DivisionSingularity { rho });
    }

    let (partial_sum, last_term) = poisson_terms(params.offered_load(), params.servers());
    Ok(idle_probability(partial_sum, last_term, rho))
}

/// Full-precision steady state, times in hours
///
/// Shared by [`compute_metrics`] and the optimizer so neither works on
/// rounded figures.
///
/// # Errors
/// `Unstable` when rho >= 1.
pub fn solve_raw(params: &QueueParameters) -> Result<RawSteadyState> {
    let rho = params.utilization();
    if rho >= 1.0 {
        return Err(QueueError::Unstable { rho });
    }

    let lambda = params.arrival_rate();
    let (partial_sum, last_term) = poisson_terms(params.offered_load(), params.servers());
    let p0 = idle_probability(partial_sum, last_term, rho);

    // Erlang C embedded: Lq = P0 · a^c · rho / (c! (1 - rho)^2)
    let lq = p0 * last_term * rho / (1.0 - rho).powi(2);
    let wq_hours = lq / lambda;
    let w_hours = wq_hours + 1.0 / params.service_rate();
    let l = lambda * w_hours;

    Ok(RawSteadyState {
        rho,
        p0,
        lq,
        wq_hours,
        w_hours,
        l,
    })
}

/// Reported metrics for a configuration
///
/// rho, P0, Lq and L are rounded to 4 decimals; Wq and W are converted to
/// minutes and rounded to 2 decimals. The recommendation is taken from the
/// unrounded rho.
///
/// # Example
/// ```
/// use queuecalc_core::application::solver::compute_metrics;
/// use queuecalc_core::domain::QueueParameters;
///
/// let params = QueueParameters::new(10.0, 12.0, 1).unwrap();
/// let metrics = compute_metrics(&params).unwrap();
/// assert_eq!(metrics.rho, 0.8333);
/// assert_eq!(metrics.w, 30.0);
/// ```
pub fn compute_metrics(params: &QueueParameters) -> Result<SteadyStateMetrics> {
    let raw = solve_raw(params)?;

    debug!(
        lambda = params.arrival_rate(),
        mu = params.service_rate(),
        servers = params.servers(),
        rho = raw.rho,
        "Steady state solved"
    );

    Ok(SteadyStateMetrics {
        lambda: params.arrival_rate(),
        mu: params.service_rate(),
        c: params.servers(),
        rho: round_to(raw.rho, 4),
        p0: round_to(raw.p0, 4),
        lq: round_to(raw.lq, 4),
        wq: round_to(raw.wq_hours * MINUTES_PER_HOUR, 2),
        w: round_to(raw.w_hours * MINUTES_PER_HOUR, 2),
        l: round_to(raw.l, 4),
        recommendation: Recommendation::classify(raw.rho),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(lambda: f64, mu: f64, c: u32) -> QueueParameters {
        QueueParameters::new(lambda, mu, c).unwrap()
    }

    #[test]
    fn test_single_server_matches_mm1_closed_form() {
        let p = params(10.0, 12.0, 1);
        let raw = solve_raw(&p).unwrap();
        let rho = 10.0 / 12.0;

        assert!((raw.p0 - (1.0 - rho)).abs() < 1e-12);
        assert!((raw.lq - rho * rho / (1.0 - rho)).abs() < 1e-9);
        assert!((raw.w_hours - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_reported_metrics_single_server() {
        let metrics = compute_metrics(&params(10.0, 12.0, 1)).unwrap();

        assert_eq!(metrics.c, 1);
        assert_eq!(metrics.rho, 0.8333);
        assert_eq!(metrics.p0, 0.1667);
        assert_eq!(metrics.lq, 4.1667);
        assert_eq!(metrics.wq, 25.0);
        assert_eq!(metrics.w, 30.0);
        assert_eq!(metrics.l, 5.0);
        assert_eq!(metrics.recommendation, Recommendation::BusyButAcceptable);
    }

    #[test]
    fn test_reported_metrics_two_servers() {
        // a = 5/3, rho = 5/6, P0 = 1/11, Lq = 125/33
        let metrics = compute_metrics(&params(10.0, 6.0, 2)).unwrap();

        assert_eq!(metrics.p0, 0.0909);
        assert_eq!(metrics.lq, 3.7879);
        assert_eq!(metrics.wq, 22.73);
        assert_eq!(metrics.w, 32.73);
        assert_eq!(metrics.l, 5.4545);
    }

    #[test]
    fn test_p0_guards_singularity() {
        let err = compute_p0(&params(12.0, 12.0, 1)).unwrap_err();
        assert!(matches!(err, QueueError::DivisionSingularity { .. }));
    }

    #[test]
    fn test_p0_matches_solver() {
        let p = params(7.0, 3.0, 4);
        assert_eq!(compute_p0(&p).unwrap(), solve_raw(&p).unwrap().p0);
    }

    #[test]
    fn test_unstable_configuration_is_rejected() {
        // rho exactly 1 and above
        for (lambda, mu, c) in [(12.0, 12.0, 1), (30.0, 6.0, 4), (100.0, 1.0, 20)] {
            let err = compute_metrics(&params(lambda, mu, c)).unwrap_err();
            assert!(
                matches!(err, QueueError::Unstable { rho } if rho >= 1.0),
                "expected Unstable for ({lambda}, {mu}, {c})"
            );
        }
    }

    #[test]
    fn test_large_server_count_stays_finite() {
        // 400 servers: 400! alone overflows f64
        let raw = solve_raw(&params(300.0, 1.0, 400)).unwrap();
        assert!(raw.p0.is_finite() && raw.p0 >= 0.0);
        assert!(raw.lq.is_finite() && raw.lq >= 0.0);
        assert!(raw.w_hours >= 1.0);
    }

    #[test]
    fn test_wait_in_system_never_below_service_time() {
        for c in 1..=10 {
            let raw = solve_raw(&params(5.0, 6.0, c)).unwrap();
            assert!(raw.w_hours >= 1.0 / 6.0);
        }
    }
}
