//! RPC Method Handlers
//!
//! Translates wire params into use-case requests and results back into
//! wire responses. No state beyond immutable configuration.

use crate::error::to_rpc_error;
use crate::types::{HealthResponse, MetricsParams, MetricsResponse, OptimalParams, OptimalResponse};
use jsonrpsee::types::ErrorObjectOwned;
use queuecalc_core::application::{CapacityPlanner, OptimizerConfig};
use queuecalc_core::error::AppError;
use std::time::Instant;
use tracing::{info, warn};

/// RPC Handler
pub struct RpcHandler {
    planner: CapacityPlanner,
    start_time: Instant,
}

impl RpcHandler {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            planner: CapacityPlanner::new(config),
            start_time: Instant::now(),
        }
    }

    /// queue.metrics.v1
    pub fn metrics(&self, params: MetricsParams) -> Result<MetricsResponse, ErrorObjectOwned> {
        info!(
            tasa_llegada = params.tasa_llegada,
            tiempo_servicio = params.tiempo_servicio,
            servidores = params.servidores,
            "queue.metrics.v1"
        );

        self.planner
            .metrics(params.into())
            .map(MetricsResponse::from)
            .map_err(|e| reject("queue.metrics.v1", e))
    }

    /// queue.optimal.v1
    pub fn optimal(&self, params: OptimalParams) -> Result<OptimalResponse, ErrorObjectOwned> {
        info!(
            tasa_llegada = params.tasa_llegada,
            tiempo_servicio = params.tiempo_servicio,
            costo_espera = params.costo_espera,
            costo_servidor = params.costo_servidor,
            max_servidores = ?params.max_servidores,
            "queue.optimal.v1"
        );

        self.planner
            .optimal(params.into())
            .map(OptimalResponse::from)
            .map_err(|e| reject("queue.optimal.v1", e))
    }

    /// admin.health.v1
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            version: queuecalc_core::VERSION.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            max_servers: self.planner.config().max_servers,
        }
    }
}

fn reject(method: &str, err: AppError) -> ErrorObjectOwned {
    if err.is_client_error() {
        warn!(method, error = %err, "Request rejected");
    } else {
        tracing::error!(method, error = %err, "Request failed");
    }
    to_rpc_error(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;

    fn handler() -> RpcHandler {
        RpcHandler::new(OptimizerConfig::default())
    }

    #[test]
    fn test_metrics_success() {
        let response = handler()
            .metrics(MetricsParams {
                tasa_llegada: 10.0,
                tiempo_servicio: 5.0,
                servidores: 1,
            })
            .unwrap();

        assert_eq!(response.mu, 12.0);
        assert_eq!(response.rho, 0.8333);
        assert_eq!(response.w, 30.0);
    }

    #[test]
    fn test_metrics_zero_service_time_is_validation_error() {
        let err = handler()
            .metrics(MetricsParams {
                tasa_llegada: 10.0,
                tiempo_servicio: 0.0,
                servidores: 1,
            })
            .unwrap_err();

        assert_eq!(err.code(), code::VALIDATION_ERROR);
    }

    #[test]
    fn test_metrics_unstable() {
        let err = handler()
            .metrics(MetricsParams {
                tasa_llegada: 20.0,
                tiempo_servicio: 6.0,
                servidores: 1,
            })
            .unwrap_err();

        assert_eq!(err.code(), code::UNSTABLE_SYSTEM);
    }

    #[test]
    fn test_optimal_success() {
        let response = handler()
            .optimal(OptimalParams {
                tasa_llegada: 5.0,
                tiempo_servicio: 10.0,
                costo_espera: 20.0,
                costo_servidor: 15.0,
                max_servidores: None,
            })
            .unwrap();

        assert_eq!(response.optimo.servidores, 2);
        assert_eq!(response.todas_las_opciones.len(), 20);
    }

    #[test]
    fn test_health_reports_configured_bound() {
        let handler = RpcHandler::new(OptimizerConfig::new(35).unwrap());
        let health = handler.health();
        assert_eq!(health.status, "ok");
        assert_eq!(health.max_servers, 35);
    }
}
