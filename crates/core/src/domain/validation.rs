// Input checks shared by the domain constructors and the use cases

use crate::domain::error::{QueueError, Result};

/// Finite and strictly positive
pub fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(QueueError::Validation(format!(
            "{} debe ser un número mayor que cero.",
            field
        )));
    }
    Ok(())
}

/// Finite and not below zero
pub fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(QueueError::Validation(format!(
            "{} no puede ser negativo.",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert!(ensure_positive("x", 0.5).is_ok());
        assert!(ensure_positive("x", 0.0).is_err());
        assert!(ensure_positive("x", f64::INFINITY).is_err());
        let err = ensure_positive("tasa_llegada", f64::NAN).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tasa_llegada debe ser un número mayor que cero."
        );
    }

    #[test]
    fn test_non_negative() {
        assert!(ensure_non_negative("x", 0.0).is_ok());
        let err = ensure_non_negative("costo_espera", -0.1).unwrap_err();
        assert_eq!(err.to_string(), "costo_espera no puede ser negativo.");
    }
}
