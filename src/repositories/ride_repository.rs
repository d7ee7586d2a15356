use crate::dto::stop_dto::StopRequest;
use crate::models::ride::{Ride, RideWithStops, TrafficCondition};
use crate::models::stop::Stop;
use crate::utils::errors::{validation_error, AppError};
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct RideRepository {
    pool: PgPool,
}

impl RideRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // El trayecto y sus paradas se insertan en una sola transacción
    pub async fn create(
        &self,
        pseudonym: &str,
        departure: &StopRequest,
        arrival: Option<&StopRequest>,
        traffic_condition: TrafficCondition,
        comment: Option<&str>,
    ) -> Result<RideWithStops, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let departure_stop = insert_stop(&mut tx, pseudonym, departure).await?;
        let arrival_stop = match arrival {
            Some(stop) => Some(insert_stop(&mut tx, pseudonym, stop).await?),
            None => None,
        };

        let ride = sqlx::query_as::<_, Ride>(
            r#"
            INSERT INTO rides (
                id, driver_pseudonym, departure_id, arrival_id,
                traffic_condition, comment, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(pseudonym)
        .bind(departure_stop.id)
        .bind(arrival_stop.as_ref().map(|stop| stop.id))
        .bind(traffic_condition.as_str())
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let with_stops = RideWithStops {
            ride,
            departure: departure_stop,
            arrival: arrival_stop,
        };

        // Si el trayecto no es válido la transacción se descarta sin escribir
        if !with_stops.is_valid() {
            return Err(validation_error(
                "arrival",
                "must be strictly after the departure in moment and odometer",
            ));
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(with_stops)
    }

    pub async fn find_for_driver(
        &self,
        pseudonym: &str,
        id: Uuid,
    ) -> Result<Option<RideWithStops>, AppError> {
        let ride = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE id = $1 AND driver_pseudonym = $2",
        )
        .bind(id)
        .bind(pseudonym)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let ride = match ride {
            Some(ride) => ride,
            None => return Ok(None),
        };

        Ok(Some(self.load_stops(ride).await?))
    }

    pub async fn find_all_for_driver(
        &self,
        pseudonym: &str,
    ) -> Result<Vec<RideWithStops>, AppError> {
        let rides = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE driver_pseudonym = $1 ORDER BY created_at DESC",
        )
        .bind(pseudonym)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut result = Vec::with_capacity(rides.len());
        for ride in rides {
            result.push(self.load_stops(ride).await?);
        }

        Ok(result)
    }

    // Reemplazo total: nuevas paradas, y las anteriores se descartan
    pub async fn update(
        &self,
        pseudonym: &str,
        id: Uuid,
        departure: &StopRequest,
        arrival: Option<&StopRequest>,
        traffic_condition: TrafficCondition,
        comment: Option<&str>,
    ) -> Result<Option<RideWithStops>, AppError> {
        let existing = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE id = $1 AND driver_pseudonym = $2",
        )
        .bind(id)
        .bind(pseudonym)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let existing = match existing {
            Some(ride) => ride,
            None => return Ok(None),
        };

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let departure_stop = insert_stop(&mut tx, pseudonym, departure).await?;
        let arrival_stop = match arrival {
            Some(stop) => Some(insert_stop(&mut tx, pseudonym, stop).await?),
            None => None,
        };

        let ride = sqlx::query_as::<_, Ride>(
            r#"
            UPDATE rides
            SET departure_id = $3, arrival_id = $4, traffic_condition = $5,
                comment = $6, updated_at = $7
            WHERE id = $1 AND driver_pseudonym = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(pseudonym)
        .bind(departure_stop.id)
        .bind(arrival_stop.as_ref().map(|stop| stop.id))
        .bind(traffic_condition.as_str())
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let with_stops = RideWithStops {
            ride,
            departure: departure_stop,
            arrival: arrival_stop,
        };

        // Si el trayecto no es válido la transacción se descarta sin escribir
        if !with_stops.is_valid() {
            return Err(validation_error(
                "arrival",
                "must be strictly after the departure in moment and odometer",
            ));
        }

        delete_stop(&mut tx, existing.departure_id).await?;
        if let Some(old_arrival_id) = existing.arrival_id {
            delete_stop(&mut tx, old_arrival_id).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(Some(with_stops))
    }

    // Borrar el trayecto arrastra sus paradas (composición)
    pub async fn delete_for_driver(&self, pseudonym: &str, id: Uuid) -> Result<bool, AppError> {
        let existing = sqlx::query_as::<_, Ride>(
            "SELECT * FROM rides WHERE id = $1 AND driver_pseudonym = $2",
        )
        .bind(id)
        .bind(pseudonym)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let existing = match existing {
            Some(ride) => ride,
            None => return Ok(false),
        };

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM rides WHERE id = $1")
            .bind(existing.id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        delete_stop(&mut tx, existing.departure_id).await?;
        if let Some(arrival_id) = existing.arrival_id {
            delete_stop(&mut tx, arrival_id).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        Ok(true)
    }

    async fn load_stops(&self, ride: Ride) -> Result<RideWithStops, AppError> {
        let departure = sqlx::query_as::<_, Stop>("SELECT * FROM stops WHERE id = $1")
            .bind(ride.departure_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| {
                AppError::Internal(format!("Ride {} references a missing departure stop", ride.id))
            })?;

        let arrival = match ride.arrival_id {
            Some(arrival_id) => Some(
                sqlx::query_as::<_, Stop>("SELECT * FROM stops WHERE id = $1")
                    .bind(arrival_id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(AppError::Database)?
                    .ok_or_else(|| {
                        AppError::Internal(format!(
                            "Ride {} references a missing arrival stop",
                            ride.id
                        ))
                    })?,
            ),
            None => None,
        };

        Ok(RideWithStops {
            ride,
            departure,
            arrival,
        })
    }
}

async fn insert_stop(
    tx: &mut Transaction<'_, Postgres>,
    pseudonym: &str,
    stop: &StopRequest,
) -> Result<Stop, AppError> {
    let inserted = sqlx::query_as::<_, Stop>(
        r#"
        INSERT INTO stops (id, driver_pseudonym, location_id, moment, odometer_value, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(pseudonym)
    .bind(stop.location_id)
    .bind(stop.moment)
    .bind(stop.odometer_value)
    .bind(Utc::now())
    .fetch_one(&mut **tx)
    .await
    .map_err(AppError::Database)?;

    Ok(inserted)
}

async fn delete_stop(tx: &mut Transaction<'_, Postgres>, id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM stops WHERE id = $1")
        .bind(id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    Ok(())
}
