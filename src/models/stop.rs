//! Modelo de Stop
//!
//! Este módulo contiene el struct Stop que mapea exactamente a la
//! tabla stops. Una parada es una visita a una ubicación, con su
//! momento y el valor del odómetro en ese instante. Las paradas se
//! crean siempre a través de un trayecto (composición).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Parada de un conductor en una ubicación
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stop {
    pub id: Uuid,
    pub driver_pseudonym: String,
    pub location_id: Uuid,
    pub moment: DateTime<Utc>,
    pub odometer_value: i64,
    pub created_at: DateTime<Utc>,
}

impl Stop {
    /// Indica si esta parada ocurre estrictamente después de otra
    pub fn is_after(&self, other: &Stop) -> bool {
        self.moment > other.moment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stop_at(hour: u32) -> Stop {
        Stop {
            id: Uuid::new_v4(),
            driver_pseudonym: "alice".to_string(),
            location_id: Uuid::new_v4(),
            moment: Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap(),
            odometer_value: 1000,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_after() {
        let departure = stop_at(8);
        let arrival = stop_at(9);
        assert!(arrival.is_after(&departure));
        assert!(!departure.is_after(&arrival));
    }

    #[test]
    fn test_is_after_same_moment() {
        let departure = stop_at(8);
        let arrival = stop_at(8);
        assert!(!arrival.is_after(&departure));
    }
}
