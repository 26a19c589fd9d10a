#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtripplanner::models::trip::TripResult;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

pub fn rtp() -> Command {
    let mut cmd = cargo_bin_cmd!("rtripplanner");
    cmd.env_remove("RTRIPPLANNER_API_URL").env("NO_COLOR", "1");
    cmd
}

/// Unique config file path inside the system temp dir; any existing file is removed.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtripplanner.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Canned answer of the mock planning service.
#[derive(Clone)]
pub struct Route {
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Minimal planning service on a random local port.
///
/// Routes are keyed by "METHOD /path"; unknown routes answer 404 with an
/// empty body. Request bodies are recorded in arrival order.
pub struct MockServer {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockServer {
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let routes: HashMap<String, Route> = routes
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let key = format!("{} {}", request.method(), request.url());
                let mut body = String::new();
                request.as_reader().read_to_string(&mut body).ok();
                log.lock().unwrap().push((key.clone(), body));

                let route = routes.get(&key).cloned().unwrap_or(Route {
                    status: 404,
                    body: String::new(),
                });
                let header =
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap();
                let response = tiny_http::Response::from_string(route.body)
                    .with_status_code(route.status)
                    .with_header(header);
                request.respond(response).ok();
            }
        });

        Self {
            base_url: format!("http://{addr}/api"),
            received,
        }
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.received.lock().unwrap().clone()
    }
}

/// A completed trip with two daily logs in the past and three stops.
pub fn sample_trip_json(id: u64) -> String {
    format!(
        r#"{{
  "id": {id},
  "created_at": "2025-03-10T08:15:00Z",
  "current_location": "Dallas, TX",
  "pickup_location": "Houston, TX",
  "dropoff_location": "Chicago, IL",
  "current_cycle_hours": 12.5,
  "distance_miles": 1234.56,
  "estimated_days": 2,
  "status": "completed",
  "logs": [
    {{
      "id": 1,
      "date": "2025-03-10",
      "log_data": [
        {{ "start": "0:00", "end": "6:00", "status": "off_duty" }},
        {{ "start": "6:00", "end": "8:30", "status": "driving" }},
        {{ "start": "8:30", "end": "9:00", "status": "on_duty", "note": "Pickup" }},
        {{ "start": "9:00", "end": "9:30", "status": "rest_break" }},
        {{ "start": "9:30", "end": "24:00", "status": "off_duty" }}
      ]
    }},
    {{
      "id": 2,
      "date": "2025-03-11",
      "log_data": [
        {{ "start": "00:00", "end": "10:00", "status": "sleeper_berth" }},
        {{ "start": "10:00", "end": "18:00", "status": "driving" }},
        {{ "start": "18:00", "end": "24:00", "status": "off_duty" }}
      ]
    }}
  ],
  "stops": [
    {{ "id": 3, "stop_type": "dropoff", "order": 3, "lat": 41.8781, "lng": -87.6298, "description": "Dropoff in Chicago" }},
    {{ "id": 1, "stop_type": "start", "order": 1, "lat": 32.7767, "lng": -96.797, "description": "Start in Dallas" }},
    {{ "id": 2, "stop_type": "pickup", "order": 2, "lat": 29.7604, "lng": -95.3698, "description": "Pickup in Houston" }}
  ],
  "geometry": [[-96.797, 32.7767], [-95.3698, 29.7604], [-87.6298, 41.8781]]
}}"#
    )
}

pub fn sample_trip(id: u64) -> TripResult {
    serde_json::from_str(&sample_trip_json(id)).unwrap()
}

pub fn error_body(kind: &str, message: &str) -> String {
    format!(r#"{{ "error": {{ "type": "{kind}", "message": "{message}", "user_friendly": true }} }}"#)
}
