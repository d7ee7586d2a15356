pub mod driver_repository;
pub mod location_repository;
pub mod ride_repository;
pub mod stop_repository;
