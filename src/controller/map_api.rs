use super::{Command, Controller};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{api::MapAPI, error::Error, map::MapSnapshot};

#[async_trait]
impl MapAPI for Controller {
    #[tracing::instrument(skip(self))]
    async fn find_map(&self) -> Result<MapSnapshot, Error> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    #[tracing::instrument(skip(self))]
    async fn dismiss_alert(&self, id: Uuid) -> Result<(), Error> {
        self.request(|reply| Command::DismissAlert { id, reply })
            .await?
    }
}
