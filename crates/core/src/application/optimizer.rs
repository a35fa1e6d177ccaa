// Capacity Optimizer - bounded scan over server counts
use crate::application::solver::solve_raw;
use crate::domain::error::{QueueError, Result};
use crate::domain::rounding::round_to;
use crate::domain::{
    CostParameters, CostSearchResult, QueueParameters, ServerOption, MINUTES_PER_HOUR,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default upper bound of the scan (c = 1..=20)
pub const DEFAULT_MAX_SERVERS: u32 = 20;

/// Hard ceiling for the scan bound. Beyond a few hundred Erlangs of offered
/// load the a^n/n! terms approach the f64 range.
pub const MAX_SERVERS_LIMIT: u32 = 500;

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Largest server count evaluated
    pub max_servers: u32,
}

impl OptimizerConfig {
    pub fn new(max_servers: u32) -> Result<Self> {
        if max_servers == 0 || max_servers > MAX_SERVERS_LIMIT {
            return Err(QueueError::Validation(format!(
                "El máximo de servidores debe estar entre 1 y {} (recibido {}).",
                MAX_SERVERS_LIMIT, max_servers
            )));
        }
        Ok(Self { max_servers })
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_servers: DEFAULT_MAX_SERVERS,
        }
    }
}

/// Evaluate c = 1..=max_servers and pick the cheapest stable configuration
///
/// Cost model: `Wq_hours · wait_cost · λ + c · server_cost`. Wq enters the
/// cost unrounded and in hours; rounding only applies to the reported
/// fields. The optimum is the first candidate with the lowest reported
/// `total_cost`, so exact ties go to the smaller server count.
///
/// # Errors
/// - `Validation` for non-positive λ or service time
/// - `NoFeasibleConfiguration` when no c in range gives rho < 1
pub fn search(
    arrival_rate: f64,
    service_time_minutes: f64,
    costs: &CostParameters,
    config: &OptimizerConfig,
) -> Result<CostSearchResult> {
    let mut candidates = Vec::new();

    for servers in 1..=config.max_servers {
        let params =
            QueueParameters::from_service_time(arrival_rate, service_time_minutes, servers)?;

        let raw = match solve_raw(&params) {
            Ok(raw) => raw,
            Err(QueueError::Unstable { rho }) => {
                debug!(servers, rho, "Skipping unstable candidate");
                continue;
            }
            Err(e) => return Err(e),
        };

        let total_cost = raw.wq_hours * costs.wait_cost_per_customer_hour * arrival_rate
            + f64::from(servers) * costs.cost_per_server;
        if !total_cost.is_finite() {
            return Err(QueueError::Validation(format!(
                "El costo total para {} servidores excede el rango numérico.",
                servers
            )));
        }

        candidates.push(ServerOption {
            servers,
            lq: round_to(raw.lq, 2),
            wq: round_to(raw.wq_hours * MINUTES_PER_HOUR, 2),
            rho: round_to(raw.rho, 4),
            total_cost: round_to(total_cost, 2),
        });
    }

    // min_by keeps the first of equal elements
    let optimal = candidates
        .iter()
        .min_by(|a, b| a.total_cost.total_cmp(&b.total_cost))
        .cloned()
        .ok_or(QueueError::NoFeasibleConfiguration {
            max_servers: config.max_servers,
        })?;

    info!(
        arrival_rate,
        service_time_minutes,
        candidates = candidates.len(),
        optimal_servers = optimal.servers,
        total_cost = optimal.total_cost,
        "Server count search finished"
    );

    Ok(CostSearchResult {
        optimal,
        candidates,
    })
}
