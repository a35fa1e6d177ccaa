// Capacity Planner - entry points for the request-serving layer

pub mod metrics;
pub mod optimal;


pub use metrics::MetricsRequest;
pub use optimal::OptimalRequest;

use crate::application::optimizer::OptimizerConfig;
use crate::domain::{validation, CostSearchResult, QueueError, SteadyStateMetrics};
use crate::error::{AppError, Result};

/// Capacity Planner
///
/// Immutable: holds nothing but the default scan bound, so one value can be
/// shared across any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityPlanner {
    config: OptimizerConfig,
}

impl CapacityPlanner {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Steady-state metrics for one configuration
    pub fn metrics(&self, req: MetricsRequest) -> Result<SteadyStateMetrics> {
        metrics::execute(req)
    }

    /// Cheapest server count within the scan bound
    pub fn optimal(&self, req: OptimalRequest) -> Result<CostSearchResult> {
        optimal::execute(&self.config, req)
    }
}

/// Input rejected at the request boundary, never a domain outcome
fn rejected(err: QueueError) -> AppError {
    AppError::Validation(err.to_string())
}

fn ensure_positive(field: &str, value: f64) -> Result<()> {
    validation::ensure_positive(field, value).map_err(rejected)
}

fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    validation::ensure_non_negative(field, value).map_err(rejected)
}
