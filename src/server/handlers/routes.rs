use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::{RouteSummary, Trigger};
use crate::error::Error;

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<RouteSummary>, Error> {
    let summary = api.compute_route(Trigger::Control).await?;

    Ok(summary.into())
}
