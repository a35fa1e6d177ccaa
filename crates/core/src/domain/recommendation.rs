// Operating-status bands derived from utilization

use serde::{Deserialize, Serialize};

/// Below this utilization the system is considered well dimensioned
pub const WELL_DIMENSIONED_BELOW: f64 = 0.7;

/// From this utilization upwards the system is considered overloaded
pub const OVERLOADED_FROM: f64 = 0.85;

/// Qualitative status of a queue at a given utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    WellDimensioned,
    BusyButAcceptable,
    Overloaded,
}

impl Recommendation {
    /// Map utilization to a band. Intervals are closed-open, so a
    /// boundary value belongs to the upper band.
    pub fn classify(rho: f64) -> Self {
        if rho < WELL_DIMENSIONED_BELOW {
            Recommendation::WellDimensioned
        } else if rho < OVERLOADED_FROM {
            Recommendation::BusyButAcceptable
        } else {
            Recommendation::Overloaded
        }
    }

    /// User-facing advice text
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::WellDimensioned => "El sistema está bien dimensionado.",
            Recommendation::BusyButAcceptable => {
                "El sistema está ocupado, pero aún dentro de límites aceptables."
            }
            Recommendation::Overloaded => {
                "El sistema está sobrecargado. Considere aumentar el número de servidores."
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
