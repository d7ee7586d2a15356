use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::Driver;

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 50))]
    pub pseudonym: String,
}

// Request para reemplazar un conductor (PUT semántica de reemplazo total).
// El seudónimo del body debe coincidir con el de la URI.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 50))]
    pub pseudonym: String,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub pseudonym: String,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            pseudonym: driver.pseudonym,
            created_at: driver.created_at,
        }
    }
}
