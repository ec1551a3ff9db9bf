use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::oneshot;

use crate::entities::PathCandidate;
use crate::error::{upstream_error, Error};

/// Picks the shortest candidate. Ties keep the earlier one.
pub fn select_shortest(candidates: Vec<PathCandidate>) -> Option<PathCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            if !candidate.distance.is_finite() {
                tracing::warn!("skipping candidate with distance {}", candidate.distance);
                return false;
            }

            true
        })
        .fold(None, |shortest, candidate| match shortest {
            Some(shortest) if shortest.distance <= candidate.distance => Some(shortest),
            _ => Some(candidate),
        })
}

/// Runs a service call, turning a panic inside it into an upstream error so
/// the caller still gets a completion.
pub async fn guarded<T, F>(call: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(_) => {
            tracing::error!("service call panicked");
            Err(upstream_error())
        }
    }
}

pub fn respond<T>(reply: oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        tracing::debug!("requester went away before the reply");
    }
}
