use crate::models::stop::Stop;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct StopRepository {
    pool: PgPool,
}

impl StopRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_for_driver(
        &self,
        pseudonym: &str,
        id: Uuid,
    ) -> Result<Option<Stop>, AppError> {
        let stop = sqlx::query_as::<_, Stop>(
            "SELECT * FROM stops WHERE id = $1 AND driver_pseudonym = $2",
        )
        .bind(id)
        .bind(pseudonym)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(stop)
    }

    pub async fn find_all_for_driver(&self, pseudonym: &str) -> Result<Vec<Stop>, AppError> {
        let stops = sqlx::query_as::<_, Stop>(
            "SELECT * FROM stops WHERE driver_pseudonym = $1 ORDER BY moment",
        )
        .bind(pseudonym)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(stops)
    }
}
