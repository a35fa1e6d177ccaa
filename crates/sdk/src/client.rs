//! QueueCalc Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    HealthResponse, MetricsRequest, MetricsResponse, OptimalRequest, OptimalResponse,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde::Serialize;
use std::time::Duration;

/// QueueCalc Client
///
/// Provides a typed interface to the QueueCalc JSON-RPC service.
///
/// # Example
///
/// ```no_run
/// use queuecalc_sdk::QueueCalcClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QueueCalcClient::connect("http://127.0.0.1:9627").await?;
/// # Ok(())
/// # }
/// ```
pub struct QueueCalcClient {
    client: HttpClient,
}

impl QueueCalcClient {
    /// Connect to a QueueCalc server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9627`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Steady-state metrics for one configuration
    ///
    /// An unstable configuration (rho >= 1) comes back as
    /// `SdkError::Rpc { code: 4010, .. }`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use queuecalc_sdk::{QueueCalcClient, MetricsRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = QueueCalcClient::connect("http://127.0.0.1:9627").await?;
    /// let metrics = client.metrics(MetricsRequest {
    ///     tasa_llegada: 10.0,
    ///     tiempo_servicio: 5.0,
    ///     servidores: 1,
    /// }).await?;
    ///
    /// println!("W = {} min", metrics.w);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn metrics(&self, request: MetricsRequest) -> Result<MetricsResponse> {
        let response: MetricsResponse = self
            .client
            .request("queue.metrics.v1", object_params(&request)?)
            .await?;

        Ok(response)
    }

    /// Cheapest server count within the scan bound
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use queuecalc_sdk::{QueueCalcClient, OptimalRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = QueueCalcClient::connect("http://127.0.0.1:9627").await?;
    /// let result = client.optimal(OptimalRequest {
    ///     tasa_llegada: 5.0,
    ///     tiempo_servicio: 10.0,
    ///     costo_espera: 20.0,
    ///     costo_servidor: 15.0,
    ///     max_servidores: None,
    /// }).await?;
    ///
    /// println!("Optimal: {} servers", result.optimo.servidores);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn optimal(&self, request: OptimalRequest) -> Result<OptimalResponse> {
        let response: OptimalResponse = self
            .client
            .request("queue.optimal.v1", object_params(&request)?)
            .await?;

        Ok(response)
    }

    /// Liveness and effective scan bound
    pub async fn health(&self) -> Result<HealthResponse> {
        let response: HealthResponse = self.client.request("admin.health.v1", rpc_params![]).await?;

        Ok(response)
    }
}

/// Send a request struct as named params (a JSON object)
fn object_params<T: Serialize>(request: &T) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    match serde_json::to_value(request)? {
        serde_json::Value::Object(fields) => {
            for (name, value) in fields {
                params.insert(&name, value)?;
            }
        }
        other => {
            return Err(SdkError::Other(format!(
                "Request must serialize to an object, got {}",
                other
            )))
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::traits::ToRpcParams;

    #[test]
    fn test_object_params_use_wire_names() {
        let params = object_params(&OptimalRequest {
            tasa_llegada: 5.0,
            tiempo_servicio: 10.0,
            costo_espera: 20.0,
            costo_servidor: 15.0,
            max_servidores: None,
        })
        .unwrap();

        let raw = params.to_rpc_params().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(raw.get()).unwrap();
        assert_eq!(value["tasa_llegada"], 5.0);
        assert_eq!(value["costo_servidor"], 15.0);
        assert!(value.get("max_servidores").is_none());
    }
}
