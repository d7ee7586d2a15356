use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::location_dto::LocationResponse;
use crate::models::location::Location;
use crate::models::stop::Stop;

// Datos de una parada dentro de un trayecto. Las paradas no se crean
// sueltas: siempre llegan como parte del body de un ride.
#[derive(Debug, Deserialize, Validate)]
pub struct StopRequest {
    pub moment: DateTime<Utc>,
    #[validate(range(min = 0))]
    pub odometer_value: i64,
    pub location_id: Uuid,
}

// Response de parada, con su ubicación embebida
#[derive(Debug, Serialize)]
pub struct StopResponse {
    pub id: Uuid,
    pub moment: DateTime<Utc>,
    pub odometer_value: i64,
    pub location: LocationResponse,
}

impl StopResponse {
    pub fn from_parts(stop: Stop, location: Location) -> Self {
        Self {
            id: stop.id,
            moment: stop.moment,
            odometer_value: stop.odometer_value,
            location: LocationResponse::from(location),
        }
    }
}
