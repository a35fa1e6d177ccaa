//! Daemon configuration, read once from the environment at startup
//!
//! | variable | default |
//! |----------|---------|
//! | `QUEUECALC_RPC_HOST` | `127.0.0.1` |
//! | `QUEUECALC_RPC_PORT` | `9627` |
//! | `QUEUECALC_MAX_SERVERS` | `20` |
//! | `QUEUECALC_LOG_FORMAT` | `pretty` (`json` for production) |
//!
//! A variable that is set but unparsable is a startup error, never
//! replaced by its default.

use queuecalc_api_rpc::RpcServerConfig;
use queuecalc_core::application::{OptimizerConfig, DEFAULT_MAX_SERVERS};
use queuecalc_core::error::AppError;
use std::str::FromStr;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9627;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "QUEUECALC_LOG_FORMAT must be 'pretty' or 'json' (got '{}')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub rpc_host: String,
    pub rpc_port: u16,
    pub optimizer: OptimizerConfig,
    pub log_format: LogFormat,
}

impl DaemonConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let rpc_host = lookup("QUEUECALC_RPC_HOST").unwrap_or_else(|| DEFAULT_RPC_HOST.to_string());
        let rpc_port = parse_or(&lookup, "QUEUECALC_RPC_PORT", DEFAULT_RPC_PORT)?;
        let max_servers = parse_or(&lookup, "QUEUECALC_MAX_SERVERS", DEFAULT_MAX_SERVERS)?;
        let optimizer = OptimizerConfig::new(max_servers)
            .map_err(|e| AppError::Config(format!("QUEUECALC_MAX_SERVERS: {}", e)))?;
        let log_format = match lookup("QUEUECALC_LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            rpc_host,
            rpc_port,
            optimizer,
            log_format,
        })
    }

    pub fn rpc_server_config(&self) -> RpcServerConfig {
        RpcServerConfig {
            host: self.rpc_host.clone(),
            port: self.rpc_port,
            optimizer: self.optimizer,
        }
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: '{}'", key, raw))),
        None => Ok(default),
    }
}
