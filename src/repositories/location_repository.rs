use crate::models::location::Location;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_for_driver(
        &self,
        pseudonym: &str,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (id, driver_pseudonym, name, latitude, longitude, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(pseudonym)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(location)
    }

    pub async fn find_for_driver(
        &self,
        pseudonym: &str,
        id: Uuid,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE id = $1 AND driver_pseudonym = $2",
        )
        .bind(id)
        .bind(pseudonym)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(location)
    }

    pub async fn find_all_for_driver(&self, pseudonym: &str) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations WHERE driver_pseudonym = $1 ORDER BY name",
        )
        .bind(pseudonym)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(locations)
    }

    // La unicidad del nombre es por conductor, no global
    pub async fn name_exists_for_driver(
        &self,
        pseudonym: &str,
        name: &str,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM locations WHERE driver_pseudonym = $1 AND name = $2)",
        )
        .bind(pseudonym)
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.0)
    }

    // Para renombrados: detecta colisión con otra ubicación del mismo conductor
    pub async fn name_taken_by_other(
        &self,
        pseudonym: &str,
        name: &str,
        id: Uuid,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM locations
                WHERE driver_pseudonym = $1 AND name = $2 AND id <> $3
            )
            "#,
        )
        .bind(pseudonym)
        .bind(name)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(result.0)
    }

    pub async fn update_for_driver(
        &self,
        pseudonym: &str,
        id: Uuid,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = $3, latitude = $4, longitude = $5
            WHERE id = $1 AND driver_pseudonym = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(pseudonym)
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(location)
    }

    pub async fn is_referenced_by_stop(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM stops WHERE location_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(result.0)
    }

    pub async fn delete_for_driver(&self, pseudonym: &str, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1 AND driver_pseudonym = $2")
            .bind(id)
            .bind(pseudonym)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
