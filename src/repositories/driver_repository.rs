use crate::models::driver::Driver;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, pseudonym: &str) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (pseudonym, created_at, updated_at)
            VALUES ($1, $2, $2)
            RETURNING *
            "#,
        )
        .bind(pseudonym)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(driver)
    }

    pub async fn find_by_pseudonym(&self, pseudonym: &str) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE pseudonym = $1")
            .bind(pseudonym)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(driver)
    }

    pub async fn find_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY pseudonym")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(drivers)
    }

    pub async fn pseudonym_exists(&self, pseudonym: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE pseudonym = $1)")
                .bind(pseudonym)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(result.0)
    }

    // El seudónimo es inmutable: el reemplazo solo refresca updated_at
    pub async fn update(&self, pseudonym: &str) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET updated_at = $2
            WHERE pseudonym = $1
            RETURNING *
            "#,
        )
        .bind(pseudonym)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(driver)
    }

    // Borra al conductor con todo lo que posee, en orden de referencias
    pub async fn delete(&self, pseudonym: &str) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM rides WHERE driver_pseudonym = $1")
            .bind(pseudonym)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM stops WHERE driver_pseudonym = $1")
            .bind(pseudonym)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM locations WHERE driver_pseudonym = $1")
            .bind(pseudonym)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM drivers WHERE pseudonym = $1")
            .bind(pseudonym)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
