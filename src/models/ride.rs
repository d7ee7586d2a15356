//! Modelo de Ride
//!
//! Este módulo contiene el struct Ride y sus variantes para CRUD
//! operations. Un trayecto va de una parada de salida a una parada de
//! llegada opcional; mientras no hay llegada el trayecto está en curso.
//! La tabla rides tiene la restricción UNIQUE (departure_id, arrival_id,
//! driver_pseudonym).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::stop::Stop;

/// Condición del tráfico durante el trayecto - se persiste como texto
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrafficCondition {
    Calm,
    Normal,
    Congested,
}

impl TrafficCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficCondition::Calm => "calm",
            TrafficCondition::Normal => "normal",
            TrafficCondition::Congested => "congested",
        }
    }

    /// Convertir el valor almacenado en la columna traffic_condition
    pub fn from_db(value: &str) -> TrafficCondition {
        match value {
            "calm" => TrafficCondition::Calm,
            "normal" => TrafficCondition::Normal,
            "congested" => TrafficCondition::Congested,
            _ => TrafficCondition::Normal,
        }
    }
}

/// Ride principal - mapea exactamente a la tabla rides
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ride {
    pub id: Uuid,
    pub driver_pseudonym: String,
    pub departure_id: Uuid,
    pub arrival_id: Option<Uuid>,
    pub traffic_condition: String,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trayecto con sus paradas resueltas
#[derive(Debug, Clone)]
pub struct RideWithStops {
    pub ride: Ride,
    pub departure: Stop,
    pub arrival: Option<Stop>,
}

impl RideWithStops {
    /// Un trayecto está terminado cuando el conductor llegó a su destino
    pub fn is_done(&self) -> bool {
        self.arrival.is_some()
    }

    /// Un trayecto terminado es válido si la llegada es estrictamente
    /// posterior a la salida tanto en el momento como en el odómetro
    pub fn is_valid(&self) -> bool {
        match &self.arrival {
            None => true,
            Some(arrival) => {
                arrival.is_after(&self.departure)
                    && arrival.odometer_value > self.departure.odometer_value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stop(hour: u32, odometer_value: i64) -> Stop {
        Stop {
            id: Uuid::new_v4(),
            driver_pseudonym: "alice".to_string(),
            location_id: Uuid::new_v4(),
            moment: Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap(),
            odometer_value,
            created_at: Utc::now(),
        }
    }

    fn ride(departure: Stop, arrival: Option<Stop>) -> RideWithStops {
        let row = Ride {
            id: Uuid::new_v4(),
            driver_pseudonym: "alice".to_string(),
            departure_id: departure.id,
            arrival_id: arrival.as_ref().map(|a| a.id),
            traffic_condition: "normal".to_string(),
            comment: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        RideWithStops { ride: row, departure, arrival }
    }

    #[test]
    fn test_ride_without_arrival_is_not_done() {
        let ride = ride(stop(8, 1000), None);
        assert!(!ride.is_done());
        assert!(ride.is_valid());
    }

    #[test]
    fn test_ride_with_later_arrival_is_done_and_valid() {
        let ride = ride(stop(8, 1000), Some(stop(9, 1050)));
        assert!(ride.is_done());
        assert!(ride.is_valid());
    }

    #[test]
    fn test_ride_with_earlier_arrival_is_invalid() {
        let ride = ride(stop(9, 1000), Some(stop(8, 1050)));
        assert!(ride.is_done());
        assert!(!ride.is_valid());
    }

    #[test]
    fn test_ride_with_lower_odometer_is_invalid() {
        let ride = ride(stop(8, 1050), Some(stop(9, 1000)));
        assert!(!ride.is_valid());
    }

    #[test]
    fn test_ride_with_equal_odometer_is_invalid() {
        let ride = ride(stop(8, 1000), Some(stop(9, 1000)));
        assert!(!ride.is_valid());
    }

    #[test]
    fn test_traffic_condition_round_trip() {
        assert_eq!(TrafficCondition::from_db("calm"), TrafficCondition::Calm);
        assert_eq!(TrafficCondition::from_db("congested"), TrafficCondition::Congested);
        assert_eq!(TrafficCondition::Calm.as_str(), "calm");
        // valores desconocidos en la columna caen en normal
        assert_eq!(TrafficCondition::from_db("gridlock"), TrafficCondition::Normal);
    }
}
