use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::stop_dto::{StopRequest, StopResponse};
use crate::models::ride::TrafficCondition;

// Request para crear un trayecto. La salida es obligatoria, la llegada
// es opcional (un trayecto en curso todavía no tiene llegada).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRideRequest {
    #[validate]
    pub departure: StopRequest,
    #[validate]
    pub arrival: Option<StopRequest>,
    pub traffic_condition: Option<TrafficCondition>,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

// Request para reemplazar un trayecto (PUT semántica de reemplazo total)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRideRequest {
    #[validate]
    pub departure: StopRequest,
    #[validate]
    pub arrival: Option<StopRequest>,
    pub traffic_condition: Option<TrafficCondition>,
    #[validate(length(max = 500))]
    pub comment: Option<String>,
}

// Response de trayecto. El conductor propietario se omite a propósito:
// el recurso ya vive bajo /api/drivers/{pseudonym}/rides.
#[derive(Debug, Serialize)]
pub struct RideResponse {
    pub id: Uuid,
    pub done: bool,
    pub departure: StopResponse,
    pub arrival: Option<StopResponse>,
    pub traffic_condition: TrafficCondition,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_ride_request_minimal_body() {
        let body = r#"{
            "departure": {
                "moment": "2024-03-15T08:00:00Z",
                "odometer_value": 1000,
                "location_id": "550e8400-e29b-41d4-a716-446655440000"
            }
        }"#;
        let request: CreateRideRequest = serde_json::from_str(body).unwrap();
        assert!(request.arrival.is_none());
        assert!(request.traffic_condition.is_none());
        assert!(request.comment.is_none());
    }

    #[test]
    fn test_traffic_condition_deserializes_lowercase() {
        let body = r#"{
            "departure": {
                "moment": "2024-03-15T08:00:00Z",
                "odometer_value": 1000,
                "location_id": "550e8400-e29b-41d4-a716-446655440000"
            },
            "traffic_condition": "congested"
        }"#;
        let request: CreateRideRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.traffic_condition, Some(TrafficCondition::Congested));
    }

    #[test]
    fn test_unknown_traffic_condition_is_rejected() {
        let body = r#"{
            "departure": {
                "moment": "2024-03-15T08:00:00Z",
                "odometer_value": 1000,
                "location_id": "550e8400-e29b-41d4-a716-446655440000"
            },
            "traffic_condition": "gridlock"
        }"#;
        assert!(serde_json::from_str::<CreateRideRequest>(body).is_err());
    }
}
