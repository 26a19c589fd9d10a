use reqwest::StatusCode;
use rtripplanner::api::{HttpTripApi, TripApi};
use rtripplanner::api::client::decode_body;
use rtripplanner::errors::AppError;
use rtripplanner::models::api_error::{ErrorKind, ErrorReport};
use rtripplanner::models::trip::{TripInput, TripResult};
use std::time::Duration;

mod common;
use common::{MockServer, Route, error_body, sample_trip_json};

fn input() -> TripInput {
    TripInput {
        current_location: "Dallas, TX".into(),
        pickup_location: "Houston, TX".into(),
        dropoff_location: "Chicago, IL".into(),
        current_cycle_hours: 12.5,
    }
}

fn client(server: &MockServer) -> HttpTripApi {
    HttpTripApi::new(&server.base_url, Duration::from_secs(5)).unwrap()
}

fn report(err: AppError) -> ErrorReport {
    match err {
        AppError::Api(report) => report,
        other => panic!("expected a service error, got {other:?}"),
    }
}

#[test]
fn test_base_url_keeps_api_prefix() {
    let api = HttpTripApi::new("http://localhost:8000/api", Duration::from_secs(1)).unwrap();
    assert_eq!(api.base_url().as_str(), "http://localhost:8000/api/");

    assert!(matches!(
        HttpTripApi::new("not a url", Duration::from_secs(1)),
        Err(AppError::InvalidUrl(_))
    ));
}

#[test]
fn test_decode_body() {
    let ok: TripResult = decode_body(StatusCode::CREATED, &sample_trip_json(3)).unwrap();
    assert_eq!(ok.id, 3);

    let err = decode_body::<TripResult>(
        StatusCode::BAD_REQUEST,
        &error_body("DistanceLimitExceededError", "Route is 4,200 miles"),
    )
    .unwrap_err();
    let r = report(err);
    assert_eq!(r.kind, ErrorKind::DistanceLimitExceeded);
    assert_eq!(r.message, "Route is 4,200 miles");

    let err = decode_body::<TripResult>(StatusCode::BAD_GATEWAY, "<html>oops</html>").unwrap_err();
    assert_eq!(report(err), ErrorReport::network());

    let err = decode_body::<TripResult>(StatusCode::OK, "{\"id\": ").unwrap_err();
    assert_eq!(report(err).kind, ErrorKind::Network);
}

#[tokio::test]
async fn test_create_trip_posts_input() {
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(201, sample_trip_json(11)),
    )]);

    let trip = client(&server).create_trip(&input()).await.unwrap();
    assert_eq!(trip.id, 11);
    assert_eq!(trip.logs.len(), 2);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let sent: serde_json::Value = serde_json::from_str(&requests[0].1).unwrap();
    assert_eq!(sent["pickup_location"], "Houston, TX");
    assert_eq!(sent["current_cycle_hours"], 12.5);
}

#[tokio::test]
async fn test_create_trip_structured_error() {
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(400, error_body("GeocodingError", "Could not find 'Atlantis'")),
    )]);

    let err = client(&server).create_trip(&input()).await.unwrap_err();
    let r = report(err);
    assert_eq!(r.kind, ErrorKind::Geocoding);
    assert!(r.user_friendly);
}

#[tokio::test]
async fn test_created_trip_carrying_error_is_a_failure() {
    let mut body: serde_json::Value = serde_json::from_str(&sample_trip_json(12)).unwrap();
    body["status"] = "failed".into();
    body["error"] = serde_json::json!({
        "type": "RouteCalculationError",
        "message": "No road connection",
        "user_friendly": true
    });
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(201, body.to_string()),
    )]);

    let err = client(&server).create_trip(&input()).await.unwrap_err();
    assert_eq!(report(err).kind, ErrorKind::RouteCalculation);
}

#[tokio::test]
async fn test_server_error_without_body_is_network() {
    let server = MockServer::start(vec![("POST /api/trips/create/", Route::json(500, ""))]);

    let err = client(&server).create_trip(&input()).await.unwrap_err();
    assert_eq!(report(err), ErrorReport::network());
}

#[tokio::test]
async fn test_unreachable_service_is_network() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpTripApi::new(&format!("http://127.0.0.1:{port}/api"), Duration::from_secs(2)).unwrap();

    let err = api.list_trips().await.unwrap_err();
    assert_eq!(report(err).kind, ErrorKind::Network);
}

#[tokio::test]
async fn test_list_and_get_trips() {
    let list = format!("[{}, {}]", sample_trip_json(2), sample_trip_json(1));
    let server = MockServer::start(vec![
        ("GET /api/trips/", Route::json(200, list)),
        ("GET /api/trips/2/", Route::json(200, sample_trip_json(2))),
    ]);
    let api = client(&server);

    let trips = api.list_trips().await.unwrap();
    assert_eq!(trips.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);

    assert_eq!(api.get_trip(2).await.unwrap().id, 2);
    assert!(matches!(api.get_trip(77).await, Err(AppError::TripNotFound(77))));
}
