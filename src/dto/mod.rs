pub mod driver_dto;
pub mod location_dto;
pub mod ride_dto;
pub mod stop_dto;
