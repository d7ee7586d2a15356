//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que los controllers aplican antes de tocar la base de datos.

use crate::utils::errors::{validation_error, AppError};

/// Validar que un string no esté vacío
pub fn validate_not_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(validation_error(field, "must not be empty"));
    }
    Ok(())
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), AppError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(validation_error("latitude", "must be between -90.0 and 90.0"));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(validation_error("longitude", "must be between -180.0 and 180.0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("pseudonym", "alice").is_ok());
        assert!(validate_not_empty("pseudonym", "").is_err());
        assert!(validate_not_empty("pseudonym", "   ").is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(45.0, -75.0).is_ok());
        assert!(validate_coordinates(-90.0, 180.0).is_ok());
        assert!(validate_coordinates(91.0, -75.0).is_err());
        assert!(validate_coordinates(45.0, -181.0).is_err());
    }

}
