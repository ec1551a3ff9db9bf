use axum::extract::{Extension, Json};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::{entities::Waypoint, error::Error};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    address: String,
}

#[debug_handler]
pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Waypoint>, Error> {
    let waypoint = api.add_waypoint(params.address).await?;

    Ok(waypoint.into())
}
