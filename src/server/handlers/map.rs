use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Trigger;
use crate::error::Error;
use crate::map::MapSnapshot;

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<MapSnapshot>, Error> {
    let snapshot = api.find_map().await?;

    Ok(snapshot.into())
}

pub async fn reset(Extension(api): Extension<DynAPI>) -> Result<Json<MapSnapshot>, Error> {
    let snapshot = api.reset(Trigger::Control).await?;

    Ok(snapshot.into())
}
