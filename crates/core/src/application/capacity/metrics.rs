// Metrics Use Case

use crate::application::optimizer::MAX_SERVERS_LIMIT;
use crate::application::solver;
use crate::domain::{QueueParameters, SteadyStateMetrics};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Metrics request, field names as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsRequest {
    /// Arrivals per hour (λ)
    pub tasa_llegada: f64,
    /// Mean minutes per service
    pub tiempo_servicio: f64,
    /// Number of servers (c)
    pub servidores: i64,
}

/// Reject out-of-domain input before it reaches the solver
pub fn validate_request(req: &MetricsRequest) -> Result<()> {
    super::ensure_positive("tasa_llegada", req.tasa_llegada)?;
    super::ensure_positive("tiempo_servicio", req.tiempo_servicio)?;

    if req.servidores <= 0 {
        return Err(AppError::Validation(
            "servidores debe ser un entero mayor que cero.".to_string(),
        ));
    }
    if req.servidores > i64::from(MAX_SERVERS_LIMIT) {
        return Err(AppError::Validation(format!(
            "servidores no puede superar {}.",
            MAX_SERVERS_LIMIT
        )));
    }

    Ok(())
}

/// Execute metrics use case
///
/// Derives μ = 60 / tiempo_servicio and solves the M/M/c steady state.
/// An unstable configuration comes back as `AppError::Domain(QueueError::Unstable)`.
pub fn execute(req: MetricsRequest) -> Result<SteadyStateMetrics> {
    validate_request(&req)?;

    let servers = u32::try_from(req.servidores)
        .map_err(|_| AppError::Validation("servidores fuera de rango.".to_string()))?;
    let params =
        QueueParameters::from_service_time(req.tasa_llegada, req.tiempo_servicio, servers)?;

    Ok(solver::compute_metrics(&params)?)
}
