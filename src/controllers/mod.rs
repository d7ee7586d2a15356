pub mod driver_controller;
pub mod location_controller;
pub mod ride_controller;
pub mod stop_controller;
