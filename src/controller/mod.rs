mod helpers;
mod map_api;
mod route_api;
mod waypoint_api;


use std::sync::Arc;

use async_channel::{Receiver, Sender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    api::API,
    entities::{PathCandidate, RouteSummary, Trigger, Waypoint},
    error::{cancelled_error, unexpected_error, Error},
    external::{Directions, Geocoder, Placemark},
    map::{MapSnapshot, MapView},
};

use helpers::respond;

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynDirections = Arc<dyn Directions + Send + Sync>;

type Reply<T> = oneshot::Sender<T>;

enum Command {
    AddWaypoint {
        address: String,
        reply: Reply<Result<Waypoint, Error>>,
    },
    ComputeRoute {
        trigger: Trigger,
        reply: Reply<Result<RouteSummary, Error>>,
    },
    Reset {
        trigger: Trigger,
        reply: Reply<Result<MapSnapshot, Error>>,
    },
    Snapshot {
        reply: Reply<MapSnapshot>,
    },
    DismissAlert {
        id: Uuid,
        reply: Reply<Result<(), Error>>,
    },
}

enum Completion {
    Geocoded {
        epoch: u64,
        address: String,
        result: Result<Vec<Placemark>, Error>,
        reply: Reply<Result<Waypoint, Error>>,
    },
    Routed {
        batch_id: Uuid,
        pair: usize,
        result: Result<Vec<PathCandidate>, Error>,
    },
}

/// Directions requests issued by one `compute_route` call.
struct RouteBatch {
    id: Uuid,
    summary: RouteSummary,
    tasks: Vec<JoinHandle<()>>,
    reply: Reply<Result<RouteSummary, Error>>,
}

impl RouteBatch {
    fn cancel(self) {
        for task in self.tasks {
            task.abort();
        }

        respond(self.reply, Err(cancelled_error()));
    }
}

/// Cloneable handle to the controller task.
#[derive(Clone)]
pub struct Controller {
    commands: Sender<Command>,
}

impl Controller {
    #[tracing::instrument(name = "Controller::spawn", skip_all)]
    pub fn spawn(geocoder: DynGeocoder, directions: DynDirections) -> Self {
        let (commands, receiver) = async_channel::unbounded();

        tokio::spawn(ControllerTask::new(geocoder, directions, receiver).run());

        Self { commands }
    }

    async fn request<T>(&self, command: impl FnOnce(Reply<T>) -> Command) -> Result<T, Error> {
        let (reply, response) = oneshot::channel();

        self.commands
            .send(command(reply))
            .await
            .map_err(|_| unexpected_error())?;

        // a dropped reply means the work behind it was aborted
        response.await.map_err(|_| cancelled_error())
    }
}

impl API for Controller {}

/// Owns the waypoint list and the map. All state changes happen on this task;
/// service calls run on spawned tasks and report back as completions.
struct ControllerTask {
    geocoder: DynGeocoder,
    directions: DynDirections,
    commands: Receiver<Command>,
    completions: Receiver<Completion>,
    completion_sender: Sender<Completion>,
    waypoints: Vec<Waypoint>,
    map: MapView,
    epoch: u64,
    geocodes: Vec<JoinHandle<()>>,
    batch: Option<RouteBatch>,
}

impl ControllerTask {
    fn new(geocoder: DynGeocoder, directions: DynDirections, commands: Receiver<Command>) -> Self {
        let (completion_sender, completions) = async_channel::unbounded();

        Self {
            geocoder,
            directions,
            commands,
            completions,
            completion_sender,
            waypoints: vec![],
            map: MapView::new(),
            epoch: 0,
            geocodes: vec![],
            batch: None,
        }
    }

    async fn run(mut self) {
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Ok(command) => self.handle_command(command),
                    Err(_) => break,
                },
                Ok(completion) = self.completions.recv() => self.handle_completion(completion),
            }
        }

        tracing::info!("all controller handles dropped, stopping");
        self.abort_in_flight();
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::AddWaypoint { address, reply } => self.add_waypoint(address, reply),
            Command::ComputeRoute { trigger, reply } => self.compute_route(trigger, reply),
            Command::Reset { trigger, reply } => {
                let snapshot = self.reset(trigger);
                respond(reply, snapshot);
            }
            Command::Snapshot { reply } => respond(reply, self.snapshot()),
            Command::DismissAlert { id, reply } => respond(reply, self.map.dismiss_alert(id)),
        }
    }

    fn handle_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Geocoded {
                epoch,
                address,
                result,
                reply,
            } => self.complete_geocode(epoch, address, result, reply),
            Completion::Routed {
                batch_id,
                pair,
                result,
            } => self.complete_route(batch_id, pair, result),
        }
    }

    fn snapshot(&self) -> MapSnapshot {
        MapSnapshot {
            waypoints: self.waypoints.clone(),
            map: self.map.clone(),
        }
    }

    fn abort_in_flight(&mut self) {
        for task in self.geocodes.drain(..) {
            task.abort();
        }

        if let Some(batch) = self.batch.take() {
            batch.cancel();
        }
    }
}
