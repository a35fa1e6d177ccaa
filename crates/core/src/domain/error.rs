// Domain Error Types

use thiserror::Error;

/// Outcomes of the queueing math that are not a metric set.
///
/// None of these are defects: every variant is an expected branch the
/// caller is supposed to handle (pick other parameters, widen the scan).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueueError {
    #[error("{0}")]
    Validation(String),

    /// rho >= 1: the queue grows without bound, no steady state exists
    #[error("El sistema no es estable. Rho debe ser menor a 1. (rho = {rho:.4})")]
    Unstable { rho: f64 },

    #[error("No se encontró un número de servidores que estabilice el sistema (probados 1..={max_servers}).")]
    NoFeasibleConfiguration { max_servers: u32 },

    /// The P0 denominator term offered^c / (c! (1 - rho)) is undefined
    #[error("División singular al calcular P0: 1 - rho no es positivo (rho = {rho:.4})")]
    DivisionSingularity { rho: f64 },
}

impl QueueError {
    /// Stable machine-readable tag, used by the RPC layer as `data.kind`
    pub fn kind(&self) -> &'static str {
        match self {
            QueueError::Validation(_) => "validation",
            QueueError::Unstable { .. } => "unstable",
            QueueError::NoFeasibleConfiguration { .. } => "no_feasible_configuration",
            QueueError::DivisionSingularity { .. } => "division_singularity",
        }
    }
}

pub type Result<T> = std::result::Result<T, QueueError>;
