use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{RouteSummary, Trigger, Waypoint};
use crate::error::Error;
use crate::map::MapSnapshot;

#[async_trait]
pub trait WaypointAPI {
    async fn add_waypoint(&self, address: String) -> Result<Waypoint, Error>;
    async fn reset(&self, trigger: Trigger) -> Result<MapSnapshot, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn compute_route(&self, trigger: Trigger) -> Result<RouteSummary, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn find_map(&self) -> Result<MapSnapshot, Error>;
    async fn dismiss_alert(&self, id: Uuid) -> Result<(), Error>;
}

pub trait API: WaypointAPI + RouteAPI + MapAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
