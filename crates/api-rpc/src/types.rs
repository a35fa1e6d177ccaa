//! RPC Request/Response Types
//!
//! Wire shapes of the JSON-RPC methods. Field names follow the public
//! contract (`tasa_llegada`, `Lq`, `todas_las_opciones`, ...), not Rust style.

use queuecalc_core::application::{MetricsRequest, OptimalRequest};
use queuecalc_core::domain::{CostSearchResult, Recommendation, ServerOption, SteadyStateMetrics};
use serde::{Deserialize, Deserializer, Serialize};

/// queue.metrics.v1 - Steady-state metrics for one configuration
#[derive(Debug, Deserialize)]
pub struct MetricsParams {
    pub tasa_llegada: f64,
    pub tiempo_servicio: f64,
    /// JSON integer or a float with no fractional part (`2.0`)
    #[serde(deserialize_with = "whole_number")]
    pub servidores: i64,
}

/// 2^63, the first magnitude outside i64
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Accepts `2` and `2.0`; rejects `2.5` rather than truncating it
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.fract() == 0.0 && f.abs() < TWO_POW_63 => Ok(f as i64),
        Number::Float(f) => Err(serde::de::Error::custom(format!(
            "servidores debe ser un número entero (recibido {})",
            f
        ))),
    }
}

impl From<MetricsParams> for MetricsRequest {
    fn from(p: MetricsParams) -> Self {
        MetricsRequest {
            tasa_llegada: p.tasa_llegada,
            tiempo_servicio: p.tiempo_servicio,
            servidores: p.servidores,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub lambda: f64,
    pub mu: f64,
    pub c: u32,
    pub rho: f64,
    pub p0: f64,
    #[serde(rename = "Lq")]
    pub lq: f64,
    #[serde(rename = "Wq")]
    pub wq: f64,
    #[serde(rename = "W")]
    pub w: f64,
    #[serde(rename = "L")]
    pub l: f64,
    pub recomendacion: String,
    /// Band code behind `recomendacion`
    pub estado: Recommendation,
}

impl From<SteadyStateMetrics> for MetricsResponse {
    fn from(m: SteadyStateMetrics) -> Self {
        Self {
            lambda: m.lambda,
            mu: m.mu,
            c: m.c,
            rho: m.rho,
            p0: m.p0,
            lq: m.lq,
            wq: m.wq,
            w: m.w,
            l: m.l,
            recomendacion: m.recommendation.message().to_string(),
            estado: m.recommendation,
        }
    }
}

/// queue.optimal.v1 - Cheapest server count
#[derive(Debug, Deserialize)]
pub struct OptimalParams {
    pub tasa_llegada: f64,
    pub tiempo_servicio: f64,
    pub costo_espera: f64,
    pub costo_servidor: f64,
    #[serde(default)]
    pub max_servidores: Option<u32>,
}

impl From<OptimalParams> for OptimalRequest {
    fn from(p: OptimalParams) -> Self {
        OptimalRequest {
            tasa_llegada: p.tasa_llegada,
            tiempo_servicio: p.tiempo_servicio,
            costo_espera: p.costo_espera,
            costo_servidor: p.costo_servidor,
            max_servidores: p.max_servidores,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerOptionResponse {
    pub servidores: u32,
    #[serde(rename = "Lq")]
    pub lq: f64,
    #[serde(rename = "Wq")]
    pub wq: f64,
    pub rho: f64,
    pub costo_total: f64,
}

impl From<ServerOption> for ServerOptionResponse {
    fn from(o: ServerOption) -> Self {
        Self {
            servidores: o.servers,
            lq: o.lq,
            wq: o.wq,
            rho: o.rho,
            costo_total: o.total_cost,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptimalResponse {
    pub optimo: ServerOptionResponse,
    pub todas_las_opciones: Vec<ServerOptionResponse>,
}

impl From<CostSearchResult> for OptimalResponse {
    fn from(r: CostSearchResult) -> Self {
        Self {
            optimo: r.optimal.into(),
            todas_las_opciones: r.candidates.into_iter().map(Into::into).collect(),
        }
    }
}

/// admin.health.v1 - Liveness and effective configuration (takes no params)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub max_servers: u32,
}
