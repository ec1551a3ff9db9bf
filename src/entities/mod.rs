mod alert;
mod controls;
mod location;
mod route;
mod waypoint;

pub use alert::{Alert, AlertKind};
pub use controls::{Controls, Trigger};
pub use location::Coordinates;
pub use route::{DirectionsRequest, PathCandidate, RouteSegment, RouteSummary, TravelMode};
pub use waypoint::Waypoint;
