use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

use super::router;
use crate::controller::Controller;
use crate::entities::RouteSummary;
use crate::map::MapSnapshot;
use crate::testing::{StubDirections, StubGeocoder};

struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    fn start() -> Self {
        let controller = Controller::spawn(
            Arc::new(StubGeocoder::new()),
            Arc::new(StubDirections::with_distances(&[1.0])),
        );

        let server = axum::Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0)))
            .serve(router(controller).into_make_service());
        let addr = server.local_addr();

        tokio::spawn(server);

        Self {
            base: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    async fn post(&self, path: &str, body: Option<Value>) -> reqwest::Response {
        let mut request = self.client.post(format!("{}{}", self.base, path));

        if let Some(body) = body {
            request = request.json(&body);
        }

        request.send().await.unwrap()
    }

    async fn add(&self, address: &str) -> reqwest::Response {
        self.post("/waypoints", Some(json!({ "address": address })))
            .await
    }
}

async fn error_code(res: reqwest::Response) -> i64 {
    let body: Value = res.json().await.unwrap();
    body["code"].as_i64().unwrap()
}

#[tokio::test]
async fn route_and_reset_wait_for_third_waypoint() {
    let server = TestServer::start();

    for address in ["a", "b"] {
        assert_eq!(server.add(address).await.status(), StatusCode::OK);
    }

    let res = server.post("/route", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, 100);

    let res = server.post("/reset", None).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, 100);

    assert_eq!(server.add("c").await.status(), StatusCode::OK);

    let res = server.post("/route", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let summary: RouteSummary = res.json().await.unwrap();
    assert_eq!(summary.requested, 2);
    assert_eq!(summary.segments.len(), 2);

    let res = server.post("/reset", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let snapshot: MapSnapshot = res.json().await.unwrap();
    assert!(snapshot.waypoints.is_empty());
    assert!(snapshot.map.overlays.is_empty());
}

#[tokio::test]
async fn failed_geocode_is_reported_and_alerted() {
    let server = TestServer::start();

    let res = server.add("offline").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, 102);

    let res = server
        .client
        .get(format!("{}/map", server.base))
        .send()
        .await
        .unwrap();
    let snapshot: MapSnapshot = res.json().await.unwrap();
    assert_eq!(snapshot.map.alerts.len(), 1);

    let res = server
        .client
        .delete(format!("{}/alerts/{}", server.base, snapshot.map.alerts[0].id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn dismissing_unknown_alert_is_bad_request() {
    let server = TestServer::start();

    let res = server
        .client
        .delete(format!("{}/alerts/{}", server.base, Uuid::new_v4()))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_code(res).await, 101);
}
