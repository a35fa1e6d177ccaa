//! JSON-RPC Server
//!
//! Serves the capacity-planning methods over HTTP (JSON-RPC 2.0).

use crate::handler::RpcHandler;
use crate::types::{MetricsParams, OptimalParams};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use queuecalc_core::application::OptimizerConfig;
use queuecalc_core::error::AppError;
use std::net::SocketAddr;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9627;

/// Registered method names
pub mod method {
    pub const METRICS: &str = "queue.metrics.v1";
    pub const OPTIMAL: &str = "queue.optimal.v1";
    pub const HEALTH: &str = "admin.health.v1";
}

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 binds an ephemeral port
    pub port: u16,
    pub optimizer: OptimizerConfig,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// A started server: bound address plus the handle used to stop it
pub struct RunningServer {
    pub local_addr: SocketAddr,
    pub handle: ServerHandle,
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
}

impl RpcServer {
    pub fn new(config: RpcServerConfig) -> Self {
        Self { config }
    }

    /// Build the method table around a handler
    pub fn module(handler: RpcHandler) -> Result<RpcModule<RpcHandler>, AppError> {
        let mut module = RpcModule::new(handler);

        module
            .register_method(method::METRICS, |params, handler, _| {
                let req: MetricsParams = params.parse()?;
                handler.metrics(req)
            })
            .map_err(|e| AppError::Internal(e.to_string()))?;

        module
            .register_method(method::OPTIMAL, |params, handler, _| {
                let req: OptimalParams = params.parse()?;
                handler.optimal(req)
            })
            .map_err(|e| AppError::Internal(e.to_string()))?;

        module
            .register_method(method::HEALTH, |_, handler, _| {
                Ok::<_, ErrorObjectOwned>(handler.health())
            })
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(module)
    }

    /// Start the JSON-RPC server
    ///
    /// Returns once the listener is bound; requests are served on the
    /// current tokio runtime until the handle is stopped.
    pub async fn start(self) -> Result<RunningServer, AppError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        info!(
            host = %self.config.host,
            port = %self.config.port,
            max_servers = self.config.optimizer.max_servers,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| AppError::Config(format!("Failed to bind {}: {}", addr, e)))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let module = Self::module(RpcHandler::new(self.config.optimizer))?;
        let handle = server.start(module);

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        Ok(RunningServer { local_addr, handle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::params::ObjectParams;
    use jsonrpsee::core::server::MethodsError;
    use serde_json::{json, Value};

    fn module() -> RpcModule<RpcHandler> {
        RpcServer::module(RpcHandler::new(OptimizerConfig::default())).unwrap()
    }

    #[tokio::test]
    async fn test_metrics_call_through_module() {
        let mut params = ObjectParams::new();
        params.insert("tasa_llegada", 10.0).unwrap();
        params.insert("tiempo_servicio", 5.0).unwrap();
        params.insert("servidores", 1).unwrap();

        let result: Value = module().call(method::METRICS, params).await.unwrap();
        assert_eq!(result["rho"], json!(0.8333));
        assert_eq!(result["Wq"], json!(25.0));
    }

    #[tokio::test]
    async fn test_whole_float_server_count_is_accepted() {
        let mut params = ObjectParams::new();
        params.insert("tasa_llegada", 10.0).unwrap();
        params.insert("tiempo_servicio", 6.0).unwrap();
        params.insert("servidores", 2.0).unwrap();

        let result: Value = module().call(method::METRICS, params).await.unwrap();
        assert_eq!(result["c"], json!(2));
    }

    #[tokio::test]
    async fn test_fractional_server_count_is_invalid_params() {
        let mut params = ObjectParams::new();
        params.insert("tasa_llegada", 10.0).unwrap();
        params.insert("tiempo_servicio", 6.0).unwrap();
        params.insert("servidores", 2.5).unwrap();

        let err = module()
            .call::<_, Value>(method::METRICS, params)
            .await
            .unwrap_err();
        assert!(matches!(err, MethodsError::JsonRpc(obj) if obj.code() == -32602));
    }

    #[tokio::test]
    async fn test_unstable_call_returns_error_object() {
        let mut params = ObjectParams::new();
        params.insert("tasa_llegada", 30.0).unwrap();
        params.insert("tiempo_servicio", 6.0).unwrap();
        params.insert("servidores", 2).unwrap();

        let err = module()
            .call::<_, Value>(method::METRICS, params)
            .await
            .unwrap_err();

        match err {
            MethodsError::JsonRpc(obj) => {
                assert_eq!(obj.code(), crate::error::code::UNSTABLE_SYSTEM);
                let data: Value = serde_json::from_str(obj.data().unwrap().get()).unwrap();
                assert_eq!(data["status"], json!(400));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_field_is_invalid_params() {
        let mut params = ObjectParams::new();
        params.insert("tasa_llegada", 10.0).unwrap();

        let err = module()
            .call::<_, Value>(method::METRICS, params)
            .await
            .unwrap_err();
        assert!(matches!(err, MethodsError::JsonRpc(obj) if obj.code() == -32602));
    }

    #[tokio::test]
    async fn test_health_ignores_params() {
        let result: Value = module()
            .call(method::HEALTH, jsonrpsee::rpc_params![])
            .await
            .unwrap();
        assert_eq!(result["status"], "ok");
        assert_eq!(result["max_servers"], 20);
    }
}
