use crate::dto::stop_dto::StopResponse;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::location_repository::LocationRepository;
use crate::repositories::stop_repository::StopRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

// Las paradas se consultan en solo lectura: nacen y mueren con sus trayectos
pub struct StopController {
    driver_repository: DriverRepository,
    location_repository: LocationRepository,
    repository: StopRepository,
}

impl StopController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            driver_repository: DriverRepository::new(pool.clone()),
            location_repository: LocationRepository::new(pool.clone()),
            repository: StopRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, pseudonym: &str, id: Uuid) -> Result<StopResponse, AppError> {
        self.driver_repository
            .find_by_pseudonym(pseudonym)
            .await?
            .ok_or_else(|| not_found_error("Driver", pseudonym))?;

        let stop = self
            .repository
            .find_for_driver(pseudonym, id)
            .await?
            .ok_or_else(|| not_found_error("Stop", &id.to_string()))?;

        let location = self
            .location_repository
            .find_for_driver(pseudonym, stop.location_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Stop {} references a missing location", stop.id))
            })?;

        Ok(StopResponse::from_parts(stop, location))
    }

    pub async fn list(&self, pseudonym: &str) -> Result<Vec<StopResponse>, AppError> {
        self.driver_repository
            .find_by_pseudonym(pseudonym)
            .await?
            .ok_or_else(|| not_found_error("Driver", pseudonym))?;

        let stops = self.repository.find_all_for_driver(pseudonym).await?;

        let mut response = Vec::with_capacity(stops.len());
        for stop in stops {
            let location = self
                .location_repository
                .find_for_driver(pseudonym, stop.location_id)
                .await?
                .ok_or_else(|| {
                    AppError::Internal(format!("Stop {} references a missing location", stop.id))
                })?;
            response.push(StopResponse::from_parts(stop, location));
        }

        Ok(response)
    }
}
