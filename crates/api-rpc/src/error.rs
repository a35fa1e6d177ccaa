//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error objects. Every object carries
//! `data: {status, kind}` so HTTP-minded clients get a 400/500 split and a
//! machine-readable discriminator without parsing the message.

use jsonrpsee::types::ErrorObjectOwned;
use queuecalc_core::domain::QueueError;
use queuecalc_core::error::AppError;
use serde::Serialize;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const UNSTABLE_SYSTEM: i32 = 4010;
    pub const NO_FEASIBLE_CONFIGURATION: i32 = 4011;
    pub const INTERNAL_ERROR: i32 = 5000;
}

/// Structured `data` member of an error object
#[derive(Debug, Clone, Serialize)]
pub struct ErrorData {
    pub status: u16,
    pub kind: &'static str,
}

fn error_object(code: i32, message: String, status: u16, kind: &'static str) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code, message, Some(ErrorData { status, kind }))
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let message = err.to_string();
    match err {
        AppError::Domain(e) => match e {
            QueueError::Unstable { .. } => {
                error_object(code::UNSTABLE_SYSTEM, message, 400, e.kind())
            }
            QueueError::NoFeasibleConfiguration { .. } => {
                error_object(code::NO_FEASIBLE_CONFIGURATION, message, 400, e.kind())
            }
            // The solver reports the singularity only for unstable loads
            QueueError::DivisionSingularity { .. } => {
                error_object(code::UNSTABLE_SYSTEM, message, 400, e.kind())
            }
            QueueError::Validation(_) => {
                error_object(code::VALIDATION_ERROR, message, 400, e.kind())
            }
        },
        AppError::Validation(_) => error_object(code::VALIDATION_ERROR, message, 400, "validation"),
        AppError::Config(_) | AppError::Internal(_) => {
            error_object(code::INTERNAL_ERROR, message, 500, "internal")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_of(obj: &ErrorObjectOwned) -> serde_json::Value {
        serde_json::from_str(obj.data().map(|d| d.get()).unwrap_or("null")).unwrap()
    }

    #[test]
    fn test_unstable_maps_to_400() {
        let obj = to_rpc_error(AppError::Domain(QueueError::Unstable { rho: 1.25 }));
        assert_eq!(obj.code(), code::UNSTABLE_SYSTEM);
        assert!(obj.message().contains("no es estable"));
        assert_eq!(data_of(&obj)["status"], 400);
        assert_eq!(data_of(&obj)["kind"], "unstable");
    }

    #[test]
    fn test_no_feasible_configuration_code() {
        let obj = to_rpc_error(AppError::Domain(QueueError::NoFeasibleConfiguration {
            max_servers: 20,
        }));
        assert_eq!(obj.code(), code::NO_FEASIBLE_CONFIGURATION);
        assert_eq!(data_of(&obj)["kind"], "no_feasible_configuration");
    }

    #[test]
    fn test_validation_keeps_message_verbatim() {
        let obj = to_rpc_error(AppError::Validation(
            "tiempo_servicio debe ser un número mayor que cero.".to_string(),
        ));
        assert_eq!(obj.code(), code::VALIDATION_ERROR);
        assert_eq!(obj.message(), "tiempo_servicio debe ser un número mayor que cero.");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let obj = to_rpc_error(AppError::Internal("boom".to_string()));
        assert_eq!(obj.code(), code::INTERNAL_ERROR);
        assert_eq!(data_of(&obj)["status"], 500);
    }
}
