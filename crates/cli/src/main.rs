//! QueueCalc CLI - Command-line interface for the capacity-planning service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9627";

#[derive(Parser)]
#[command(name = "queuecalc")]
#[command(about = "M/M/c queue metrics and server-count optimization", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "QUEUECALC_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Steady-state metrics for a fixed number of servers
    Metrics {
        /// Arrivals per hour (λ)
        #[arg(short, long)]
        arrival_rate: f64,

        /// Mean service time in minutes
        #[arg(short = 't', long)]
        service_time: f64,

        /// Number of servers (c)
        #[arg(short, long)]
        servers: i64,
    },

    /// Cheapest number of servers for a waiting/server cost trade-off
    Optimal {
        /// Arrivals per hour (λ)
        #[arg(short, long)]
        arrival_rate: f64,

        /// Mean service time in minutes
        #[arg(short = 't', long)]
        service_time: f64,

        /// Cost of one customer waiting one hour
        #[arg(short, long)]
        wait_cost: f64,

        /// Cost per server
        #[arg(short = 'c', long)]
        server_cost: f64,

        /// Largest server count to evaluate (server default if omitted)
        #[arg(short, long)]
        max_servers: Option<u32>,
    },

    /// Show server status
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: serde_json::Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<serde_json::Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Deserialize)]
struct ServerOption {
    servidores: u32,
    #[serde(rename = "Lq")]
    lq: f64,
    #[serde(rename = "Wq")]
    wq: f64,
    rho: f64,
    costo_total: f64,
}

#[derive(Deserialize)]
struct OptimalResult {
    optimo: ServerOption,
    todas_las_opciones: Vec<ServerOption>,
}

#[derive(Tabled)]
struct OptionRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Servers")]
    servers: u32,
    #[tabled(rename = "Lq")]
    lq: String,
    #[tabled(rename = "Wq (min)")]
    wq: String,
    #[tabled(rename = "rho")]
    rho: String,
    #[tabled(rename = "Total cost")]
    total_cost: String,
}

async fn call_rpc(url: &str, method: &str, params: serde_json::Value) -> Result<serde_json::Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn metric_rows(result: &serde_json::Value) -> Vec<MetricRow> {
    [
        ("λ (arrivals/h)", "lambda"),
        ("μ (services/h)", "mu"),
        ("c (servers)", "c"),
        ("ρ (utilization)", "rho"),
        ("P0", "p0"),
        ("Lq", "Lq"),
        ("Wq (min)", "Wq"),
        ("W (min)", "W"),
        ("L", "L"),
    ]
    .into_iter()
    .map(|(metric, key)| MetricRow {
        metric,
        value: result[key].to_string(),
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Metrics {
            arrival_rate,
            service_time,
            servers,
        } => {
            let params = json!({
                "tasa_llegada": arrival_rate,
                "tiempo_servicio": service_time,
                "servidores": servers,
            });

            let result = call_rpc(&cli.rpc_url, "queue.metrics.v1", params).await?;

            println!("{}", "✓ Steady state".green().bold());
            println!();
            println!("{}", Table::new(metric_rows(&result)));
            println!();

            let advice = result["recomendacion"].as_str().unwrap_or_default();
            match result["estado"].as_str() {
                Some("well_dimensioned") => println!("{}", advice.green()),
                Some("busy_but_acceptable") => println!("{}", advice.yellow()),
                _ => println!("{}", advice.red()),
            }
        }

        Commands::Optimal {
            arrival_rate,
            service_time,
            wait_cost,
            server_cost,
            max_servers,
        } => {
            let mut params = json!({
                "tasa_llegada": arrival_rate,
                "tiempo_servicio": service_time,
                "costo_espera": wait_cost,
                "costo_servidor": server_cost,
            });
            if let Some(max) = max_servers {
                params["max_servidores"] = json!(max);
            }

            let result = call_rpc(&cli.rpc_url, "queue.optimal.v1", params).await?;
            let result: OptimalResult = serde_json::from_value(result)?;

            let rows: Vec<OptionRow> = result
                .todas_las_opciones
                .iter()
                .map(|o| OptionRow {
                    marker: if o.servidores == result.optimo.servidores {
                        "★"
                    } else {
                        ""
                    },
                    servers: o.servidores,
                    lq: format!("{:.2}", o.lq),
                    wq: format!("{:.2}", o.wq),
                    rho: format!("{:.4}", o.rho),
                    total_cost: format!("{:.2}", o.costo_total),
                })
                .collect();

            println!("{}", Table::new(rows));
            println!();
            println!(
                "{} {} servers (total cost {:.2})",
                "✓ Optimal:".green().bold(),
                result.optimo.servidores,
                result.optimo.costo_total
            );
        }

        Commands::Status => {
            println!("{}", "Server Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "admin.health.v1", json!({})).await {
                Ok(health) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health["version"]);
                    println!("  {} {}", "Scan bound:".bold(), health["max_servers"]);
                    println!("  {} {} seconds", "Uptime:".bold(), health["uptime_seconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
