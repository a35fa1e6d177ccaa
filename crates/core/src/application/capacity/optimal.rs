// Optimal Capacity Use Case

use crate::application::optimizer::{self, OptimizerConfig};
use crate::domain::{CostParameters, CostSearchResult};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Optimal-capacity request, field names as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalRequest {
    /// Arrivals per hour (λ)
    pub tasa_llegada: f64,
    /// Mean minutes per service
    pub tiempo_servicio: f64,
    /// Cost of one customer waiting one hour
    pub costo_espera: f64,
    /// Cost per server
    pub costo_servidor: f64,

    /// Overrides the configured scan bound for this request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_servidores: Option<u32>,
}

pub fn validate_request(req: &OptimalRequest) -> Result<()> {
    super::ensure_positive("tasa_llegada", req.tasa_llegada)?;
    super::ensure_positive("tiempo_servicio", req.tiempo_servicio)?;
    super::ensure_non_negative("costo_espera", req.costo_espera)?;
    super::ensure_non_negative("costo_servidor", req.costo_servidor)?;
    Ok(())
}

/// Execute optimal-capacity use case
///
/// # Arguments
///
/// * `default_config` - Scan bound used when the request carries none
/// * `req` - Optimal-capacity request
pub fn execute(default_config: &OptimizerConfig, req: OptimalRequest) -> Result<CostSearchResult> {
    validate_request(&req)?;

    let config = match req.max_servidores {
        Some(max) => OptimizerConfig::new(max).map_err(super::rejected)?,
        None => *default_config,
    };
    let costs = CostParameters::new(req.costo_espera, req.costo_servidor)?;

    Ok(optimizer::search(
        req.tasa_llegada,
        req.tiempo_servicio,
        &costs,
        &config,
    )?)
}
