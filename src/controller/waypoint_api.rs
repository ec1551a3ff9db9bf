use super::{
    helpers::{guarded, respond},
    Command, Completion, Controller, ControllerTask, Reply,
};

use async_trait::async_trait;

use crate::{
    api::WaypointAPI,
    entities::{Alert, AlertKind, Controls, Coordinates, Trigger, Waypoint},
    error::{cancelled_error, geocode_unavailable_error, invalid_state_error, Error},
    external::Placemark,
    map::MapSnapshot,
};

#[async_trait]
impl WaypointAPI for Controller {
    #[tracing::instrument(skip(self))]
    async fn add_waypoint(&self, address: String) -> Result<Waypoint, Error> {
        self.request(|reply| Command::AddWaypoint { address, reply })
            .await?
    }

    #[tracing::instrument(skip(self))]
    async fn reset(&self, trigger: Trigger) -> Result<MapSnapshot, Error> {
        self.request(|reply| Command::Reset { trigger, reply })
            .await?
    }
}

impl ControllerTask {
    #[tracing::instrument(skip(self, reply))]
    pub(super) fn add_waypoint(&mut self, address: String, reply: Reply<Result<Waypoint, Error>>) {
        let geocoder = self.geocoder.clone();
        let completions = self.completion_sender.clone();
        let epoch = self.epoch;

        self.geocodes.retain(|task| !task.is_finished());
        self.geocodes.push(tokio::spawn(async move {
            let result = guarded(geocoder.geocode(&address)).await;

            let completion = Completion::Geocoded {
                epoch,
                address,
                result,
                reply,
            };

            if completions.send(completion).await.is_err() {
                tracing::warn!("controller stopped before geocode completed");
            }
        }));
    }

    pub(super) fn complete_geocode(
        &mut self,
        epoch: u64,
        address: String,
        result: Result<Vec<Placemark>, Error>,
        reply: Reply<Result<Waypoint, Error>>,
    ) {
        if epoch != self.epoch {
            tracing::info!("dropping geocode of {:?} issued before reset", address);
            respond(reply, Err(cancelled_error()));
            return;
        }

        let coordinates = match first_location(result) {
            Ok(coordinates) => coordinates,
            Err(err) => {
                tracing::warn!("geocode of {:?} failed: {}", address, err);
                self.map.alert(Alert::new(AlertKind::GeocodeUnavailable));
                respond(reply, Err(geocode_unavailable_error()));
                return;
            }
        };

        let waypoint = Waypoint::new(address, coordinates);
        self.waypoints.push(waypoint.clone());

        tracing::info!(
            "added waypoint {} ({} total)",
            waypoint.id,
            self.waypoints.len()
        );

        if self.waypoints.len() > 2 && !self.map.controls.route_visible {
            tracing::info!("enabling route and reset controls");
            self.map.set_controls(Controls::enabled());
        }

        self.map.show_annotations(&self.waypoints);
        respond(reply, Ok(waypoint));
    }

    #[tracing::instrument(skip(self))]
    pub(super) fn reset(&mut self, trigger: Trigger) -> Result<MapSnapshot, Error> {
        if trigger == Trigger::Control && !self.map.controls.reset_visible {
            return Err(invalid_state_error());
        }

        // completions already queued from before this point are stale
        self.epoch += 1;
        self.abort_in_flight();

        self.waypoints.clear();
        self.map.remove_overlays();
        self.map.remove_annotations();
        self.map.set_controls(Controls::default());

        Ok(self.snapshot())
    }
}

fn first_location(result: Result<Vec<Placemark>, Error>) -> Result<Coordinates, Error> {
    let placemark = result?
        .into_iter()
        .next()
        .ok_or_else(|| geocode_unavailable_error())?;

    if !placemark.coordinates.is_valid() {
        tracing::warn!("geocoder returned unusable {:?}", placemark.coordinates);
        return Err(geocode_unavailable_error());
    }

    Ok(placemark.coordinates)
}
