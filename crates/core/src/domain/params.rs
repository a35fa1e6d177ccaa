// Queue Parameter Domain Model

use crate::domain::error::{QueueError, Result};
use crate::domain::validation::{ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};

/// Rates are per hour internally, service times and waits are reported in minutes
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// M/M/c input: arrival rate λ, service rate μ (both per hour) and c servers
///
/// Only constructible through [`QueueParameters::new`] or
/// [`QueueParameters::from_service_time`], so every value in circulation
/// satisfies λ > 0, μ > 0, c >= 1 and finite rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueueParameters {
    arrival_rate: f64,
    service_rate: f64,
    servers: u32,
}

impl QueueParameters {
    pub fn new(arrival_rate: f64, service_rate: f64, servers: u32) -> Result<Self> {
        ensure_positive("arrival_rate", arrival_rate)?;
        ensure_positive("service_rate", service_rate)?;
        if servers == 0 {
            return Err(QueueError::Validation(
                "El número de servidores debe ser al menos 1.".to_string(),
            ));
        }

        Ok(Self {
            arrival_rate,
            service_rate,
            servers,
        })
    }

    /// Build from a mean service time in minutes per customer (μ = 60 / t)
    pub fn from_service_time(
        arrival_rate: f64,
        service_time_minutes: f64,
        servers: u32,
    ) -> Result<Self> {
        ensure_positive("service_time_minutes", service_time_minutes)?;
        Self::new(
            arrival_rate,
            MINUTES_PER_HOUR / service_time_minutes,
            servers,
        )
    }

    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }

    pub fn servers(&self) -> u32 {
        self.servers
    }

    /// rho = λ / (c μ)
    pub fn utilization(&self) -> f64 {
        self.arrival_rate / (f64::from(self.servers) * self.service_rate)
    }

    /// Offered load in Erlangs (λ / μ)
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    pub fn is_stable(&self) -> bool {
        self.utilization() < 1.0
    }
}

/// Cost coefficients for the server-count search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Cost of one customer waiting one hour in queue
    pub wait_cost_per_customer_hour: f64,
    pub cost_per_server: f64,
}

impl CostParameters {
    pub fn new(wait_cost_per_customer_hour: f64, cost_per_server: f64) -> Result<Self> {
        ensure_non_negative("wait_cost_per_customer_hour", wait_cost_per_customer_hour)?;
        ensure_non_negative("cost_per_server", cost_per_server)?;
        Ok(Self {
            wait_cost_per_customer_hour,
            cost_per_server,
        })
    }
}
