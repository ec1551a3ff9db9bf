use super::{
    helpers::{guarded, respond, select_shortest},
    Command, Completion, Controller, ControllerTask, Reply, RouteBatch,
};

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{
        Alert, AlertKind, DirectionsRequest, PathCandidate, RouteSegment, RouteSummary, Trigger,
    },
    error::{invalid_state_error, route_unavailable_error, Error},
};

#[async_trait]
impl RouteAPI for Controller {
    #[tracing::instrument(skip(self))]
    async fn compute_route(&self, trigger: Trigger) -> Result<RouteSummary, Error> {
        self.request(|reply| Command::ComputeRoute { trigger, reply })
            .await?
    }
}

impl ControllerTask {
    #[tracing::instrument(skip(self, reply))]
    pub(super) fn compute_route(
        &mut self,
        trigger: Trigger,
        reply: Reply<Result<RouteSummary, Error>>,
    ) {
        // the route control only shows up once three waypoints exist
        let hidden = trigger == Trigger::Control && !self.map.controls.route_visible;

        if hidden || self.waypoints.len() < 2 {
            respond(reply, Err(invalid_state_error()));
            return;
        }

        if let Some(previous) = self.batch.take() {
            tracing::info!("superseding route request {}", previous.id);
            previous.cancel();
        }

        self.map.remove_overlays();

        let id = Uuid::new_v4();
        let tasks: Vec<_> = self
            .waypoints
            .windows(2)
            .enumerate()
            .map(|(pair, waypoints)| {
                let request =
                    DirectionsRequest::walking(waypoints[0].coordinates, waypoints[1].coordinates);
                let directions = self.directions.clone();
                let completions = self.completion_sender.clone();

                tokio::spawn(async move {
                    let result = guarded(directions.directions(request)).await;

                    let completion = Completion::Routed {
                        batch_id: id,
                        pair,
                        result,
                    };

                    if completions.send(completion).await.is_err() {
                        tracing::warn!("controller stopped before directions completed");
                    }
                })
            })
            .collect();

        tracing::info!("route request {} issued {} directions requests", id, tasks.len());

        self.batch = Some(RouteBatch {
            id,
            summary: RouteSummary::new(tasks.len()),
            tasks,
            reply,
        });

        self.map.show_annotations(&self.waypoints);
    }

    pub(super) fn complete_route(
        &mut self,
        batch_id: Uuid,
        pair: usize,
        result: Result<Vec<PathCandidate>, Error>,
    ) {
        let batch = match self.batch.as_mut() {
            Some(batch) if batch.id == batch_id => batch,
            _ => {
                tracing::info!("dropping directions for stale route request {}", batch_id);
                return;
            }
        };

        let shortest = result.and_then(|candidates| {
            select_shortest(candidates).ok_or_else(|| route_unavailable_error())
        });

        match shortest {
            Ok(candidate) => {
                let segment = RouteSegment::new(pair, candidate);
                self.map.add_overlay(segment.clone());
                batch.summary.segments.push(segment);
            }
            Err(err) => {
                tracing::warn!("directions for pair {} failed: {}", pair, err);
                self.map.alert(Alert::new(AlertKind::RouteUnavailable));
                batch.summary.failed_pairs.push(pair);
            }
        }

        if batch.summary.is_complete() {
            if let Some(batch) = self.batch.take() {
                tracing::info!(
                    "route request {} finished: {} segments, {} failed",
                    batch.id,
                    batch.summary.segments.len(),
                    batch.summary.failed_pairs.len()
                );
                respond(batch.reply, Ok(batch.summary));
            }
        }
    }
}
