use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::location::Location;

// Request para crear una ubicación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// Request para reemplazar una ubicación (PUT)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

// Response de ubicación
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            latitude: location.latitude,
            longitude: location.longitude,
            created_at: location.created_at,
        }
    }
}
