//! Modelo de Location
//!
//! Este módulo contiene el struct Location que mapea exactamente
//! a la tabla locations. El nombre es único dentro del conjunto de
//! ubicaciones de un conductor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Punto geográfico con nombre, propiedad de un conductor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub driver_pseudonym: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}
