//! QueueCalc SDK - Rust Client Library
//!
//! Provides a convenient client for the QueueCalc capacity-planning service.
//!
//! # Example
//!
//! ```no_run
//! use queuecalc_sdk::{QueueCalcClient, OptimalRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QueueCalcClient::connect("http://127.0.0.1:9627").await?;
//!
//!     let result = client.optimal(OptimalRequest {
//!         tasa_llegada: 5.0,
//!         tiempo_servicio: 10.0,
//!         costo_espera: 20.0,
//!         costo_servidor: 15.0,
//!         max_servidores: None,
//!     }).await?;
//!
//!     println!("Optimal server count: {}", result.optimo.servidores);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::QueueCalcClient;
pub use error::{Result, SdkError};
pub use types::{
    HealthResponse, MetricsRequest, MetricsResponse, OptimalRequest, OptimalResponse,
    ServerOption,
};
