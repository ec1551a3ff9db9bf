use axum::extract::{Extension, Json, Path};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::error::Error;

pub async fn dismiss(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, Error> {
    api.dismiss_alert(id).await?;

    Ok(().into())
}
