//! Schema del diario de conducción
//!
//! Este módulo crea las tablas al arrancar el servicio. Las sentencias
//! son idempotentes para que el arranque sea seguro sobre una base ya
//! inicializada.

use sqlx::PgPool;

const CREATE_DRIVERS: &str = r#"
CREATE TABLE IF NOT EXISTS drivers (
    pseudonym TEXT PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_LOCATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS locations (
    id UUID PRIMARY KEY,
    driver_pseudonym TEXT NOT NULL REFERENCES drivers(pseudonym),
    name TEXT NOT NULL,
    latitude DOUBLE PRECISION NOT NULL,
    longitude DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    UNIQUE (driver_pseudonym, name)
)
"#;

const CREATE_STOPS: &str = r#"
CREATE TABLE IF NOT EXISTS stops (
    id UUID PRIMARY KEY,
    driver_pseudonym TEXT NOT NULL REFERENCES drivers(pseudonym),
    location_id UUID NOT NULL REFERENCES locations(id),
    moment TIMESTAMPTZ NOT NULL,
    odometer_value BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_RIDES: &str = r#"
CREATE TABLE IF NOT EXISTS rides (
    id UUID PRIMARY KEY,
    driver_pseudonym TEXT NOT NULL REFERENCES drivers(pseudonym),
    departure_id UUID NOT NULL REFERENCES stops(id),
    arrival_id UUID REFERENCES stops(id),
    traffic_condition TEXT NOT NULL,
    comment TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    UNIQUE (departure_id, arrival_id, driver_pseudonym)
)
"#;

/// Crear las tablas del diario en orden de dependencias
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_DRIVERS, CREATE_LOCATIONS, CREATE_STOPS, CREATE_RIDES] {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
