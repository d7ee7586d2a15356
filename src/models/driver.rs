//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver que mapea exactamente
//! a la tabla drivers. El seudónimo es la clave primaria y es
//! inmutable una vez creado el conductor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Conductor del diario - identificado por su seudónimo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub pseudonym: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
