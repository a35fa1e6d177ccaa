// Steady-State Result Models

use crate::domain::recommendation::Recommendation;
use serde::{Deserialize, Serialize};

/// Unrounded steady-state solution, all times in hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSteadyState {
    pub rho: f64,
    pub p0: f64,
    pub lq: f64,
    pub wq_hours: f64,
    pub w_hours: f64,
    pub l: f64,
}

/// Reported metrics for one (λ, μ, c) configuration
///
/// rho, p0, lq and l carry 4 decimals; wq and w are minutes with 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteadyStateMetrics {
    pub lambda: f64,
    pub mu: f64,
    pub c: u32,
    pub rho: f64,
    pub p0: f64,
    pub lq: f64,
    /// Minutes
    pub wq: f64,
    /// Minutes
    pub w: f64,
    pub l: f64,
    pub recommendation: Recommendation,
}

/// One stable candidate evaluated by the server-count search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerOption {
    pub servers: u32,
    pub lq: f64,
    /// Minutes
    pub wq: f64,
    pub rho: f64,
    pub total_cost: f64,
}

/// Result of the server-count search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSearchResult {
    pub optimal: ServerOption,
    /// Stable candidates in ascending server count
    pub candidates: Vec<ServerOption>,
}
