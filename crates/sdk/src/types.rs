//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types from the api-rpc crate.

use serde::{Deserialize, Serialize};

/// Request for steady-state metrics of one configuration
#[derive(Debug, Clone, Serialize)]
pub struct MetricsRequest {
    /// Arrivals per hour
    pub tasa_llegada: f64,
    /// Mean minutes per service
    pub tiempo_servicio: f64,
    pub servidores: i64,
}

/// Steady-state metrics; `wq` and `w` are minutes
#[derive(Debug, Clone, Deserialize)]
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
    /// `well_dimensioned`, `busy_but_acceptable` or `overloaded`
    pub estado: String,
}

/// Request for the cheapest server count
#[derive(Debug, Clone, Serialize)]
pub struct OptimalRequest {
    pub tasa_llegada: f64,
    pub tiempo_servicio: f64,
    /// Cost of one customer waiting one hour
    pub costo_espera: f64,
    pub costo_servidor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_servidores: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerOption {
    pub servidores: u32,
    #[serde(rename = "Lq")]
    pub lq: f64,
    #[serde(rename = "Wq")]
    pub wq: f64,
    pub rho: f64,
    pub costo_total: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptimalResponse {
    pub optimo: ServerOption,
    pub todas_las_opciones: Vec<ServerOption>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub max_servers: u32,
}
