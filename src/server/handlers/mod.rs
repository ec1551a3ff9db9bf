pub mod alerts;
pub mod map;
pub mod routes;
pub mod waypoints;
