//! Simple SDK Example
//!
//! Demonstrates basic usage of the QueueCalc SDK.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package queuecalc-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package queuecalc-sdk --example simple
//!    ```

use queuecalc_sdk::{MetricsRequest, OptimalRequest, QueueCalcClient, SdkError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("QueueCalc SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect
    println!("1. Connecting to server...");
    let client = QueueCalcClient::connect("http://127.0.0.1:9627").await?;
    let health = client.health().await?;
    println!("   ✓ Connected (v{}, scan bound {})\n", health.version, health.max_servers);

    // 2. Metrics for a single teller: 10 customers/h, 5 min each
    println!("2. Metrics for 1 server...");
    let metrics = client
        .metrics(MetricsRequest {
            tasa_llegada: 10.0,
            tiempo_servicio: 5.0,
            servidores: 1,
        })
        .await?;
    println!(
        "   rho = {}  Lq = {}  Wq = {} min  W = {} min",
        metrics.rho, metrics.lq, metrics.wq, metrics.w
    );
    println!("   {}\n", metrics.recomendacion);

    // 3. An overloaded configuration is an expected error, not a crash
    println!("3. Metrics for an overloaded server...");
    match client
        .metrics(MetricsRequest {
            tasa_llegada: 20.0,
            tiempo_servicio: 5.0,
            servidores: 1,
        })
        .await
    {
        Err(SdkError::Rpc { code, message }) => println!("   ✗ ({}) {}\n", code, message),
        other => println!("   unexpected: {:?}\n", other.map(|m| m.rho)),
    }

    // 4. Cheapest staffing
    println!("4. Searching the optimal server count...");
    let result = client
        .optimal(OptimalRequest {
            tasa_llegada: 5.0,
            tiempo_servicio: 10.0,
            costo_espera: 20.0,
            costo_servidor: 15.0,
            max_servidores: None,
        })
        .await?;
    for option in &result.todas_las_opciones {
        let marker = if option.servidores == result.optimo.servidores { "→" } else { " " };
        println!("   {} c={:>2}  cost={:>8.2}", marker, option.servidores, option.costo_total);
    }

    println!("\n✓ Example completed successfully!");

    Ok(())
}
