use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{MockServer, Route, error_body, rtp, sample_trip_json, temp_config};

#[test]
fn test_help_lists_commands() {
    rtp()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("plan"))
        .stdout(contains("history"))
        .stdout(contains("show"))
        .stdout(contains("shell"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let cfg = temp_config("init_test_mode");

    rtp()
        .args(["--config-file", &cfg, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));

    assert!(!std::path::Path::new(&cfg).exists());
}

#[test]
fn test_init_writes_default_config_once() {
    let cfg = temp_config("init_writes");

    rtp()
        .args(["--config-file", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Configuration written"));

    let content = fs::read_to_string(&cfg).unwrap();
    assert!(content.contains("spotter-trip-planner.onrender.com/api"));
    assert!(content.contains("history_limit: 6"));

    rtp()
        .args(["--config-file", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rtp()
        .args(["--config-file", &cfg, "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Configuration written"));
}

#[test]
fn test_config_print_applies_overrides() {
    let cfg = temp_config("config_print");
    fs::write(&cfg, "history_limit: 3\ngrid_width: 96\n").unwrap();

    rtp()
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            "http://localhost:8000/api",
            "config",
            "--print",
        ])
        .assert()
        .success()
        .stdout(contains("history_limit: 3"))
        .stdout(contains("grid_width: 96"))
        .stdout(contains("http://localhost:8000/api"))
        .stdout(contains("color: false"));
}

#[test]
fn test_broken_config_is_an_error() {
    let cfg = temp_config("config_broken");
    fs::write(&cfg, "history_limit: [not a number\n").unwrap();

    rtp()
        .args(["--config-file", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_plan_validation_errors() {
    let cfg = temp_config("plan_validation");

    rtp()
        .args(["--config-file", &cfg, "plan", "", "Houston, TX", "", "--cycle", "80"])
        .assert()
        .failure()
        .stderr(contains("Enter your current location."))
        .stderr(contains("Enter dropoff location."))
        .stderr(contains("Cycle hours must be between 0 and 70."))
        .stderr(contains("Enter pickup location.").not());
}

#[test]
fn test_plan_prints_trip() {
    let cfg = temp_config("plan_ok");
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(201, sample_trip_json(21)),
    )]);

    rtp()
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &server.base_url,
            "plan",
            "Dallas, TX",
            "Houston, TX",
            "Chicago, IL",
            "-c",
            "12.5",
        ])
        .assert()
        .success()
        .stdout(contains("Trip planned!"))
        .stdout(contains("Dallas, TX → Houston, TX → Chicago, IL"))
        .stdout(contains("1,234.6 mi"))
        .stdout(contains("ELD Log Sheets"))
        .stdout(contains("📅 2025-03-11"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].1.contains("\"dropoff_location\":\"Chicago, IL\""));
}

#[test]
fn test_plan_json_output() {
    let cfg = temp_config("plan_json");
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(201, sample_trip_json(22)),
    )]);

    rtp()
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &server.base_url,
            "plan",
            "Dallas, TX",
            "Houston, TX",
            "Chicago, IL",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"id\": 22"))
        .stdout(contains("\"log_data\""))
        .stdout(contains("Planning your route").not());
}

#[test]
fn test_plan_service_error() {
    let cfg = temp_config("plan_error");
    let server = MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(400, error_body("DistanceLimitExceededError", "Route is 4,200 miles")),
    )]);

    rtp()
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &server.base_url,
            "plan",
            "Miami, FL",
            "Seattle, WA",
            "Anchorage, AK",
        ])
        .assert()
        .failure()
        .stderr(contains("Route too long - please plan shorter segments"))
        .stderr(contains("Route Too Long"))
        .stderr(contains("Break your trip into multiple segments"));
}

#[test]
fn test_history_lists_trips() {
    let cfg = temp_config("history_ok");
    let list = format!(
        "[{}, {}, {}]",
        sample_trip_json(3),
        sample_trip_json(2),
        sample_trip_json(1)
    );
    let server = MockServer::start(vec![("GET /api/trips/", Route::json(200, list))]);

    rtp()
        .args(["--config-file", &cfg, "--api-url", &server.base_url, "history", "-n", "2"])
        .assert()
        .success()
        .stdout(contains("Recent Trips"))
        .stdout(contains("Houston, TX → Chicago, IL"))
        .stdout(contains("2  2"))
        .stdout(contains("3  1").not());
}

#[test]
fn test_history_empty() {
    let cfg = temp_config("history_empty");
    let server = MockServer::start(vec![("GET /api/trips/", Route::json(200, "[]"))]);

    rtp()
        .args(["--config-file", &cfg, "--api-url", &server.base_url, "history"])
        .assert()
        .success()
        .stdout(contains("No trips planned yet."));
}

#[test]
fn test_history_unreachable_service() {
    let cfg = temp_config("history_down");
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    rtp()
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &format!("http://127.0.0.1:{port}/api"),
            "history",
        ])
        .assert()
        .failure()
        .stderr(contains("Could not load history."))
        .stderr(contains("Connection Problem"));
}

#[test]
fn test_show_trip() {
    let cfg = temp_config("show_ok");
    let server = MockServer::start(vec![("GET /api/trips/5/", Route::json(200, sample_trip_json(5)))]);

    rtp()
        .args(["--config-file", &cfg, "--api-url", &server.base_url, "show", "5", "--rest-row"])
        .assert()
        .success()
        .stdout(contains("Trip Summary"))
        .stdout(contains("Start in Dallas"))
        .stdout(contains("Rest/Fuel │"));
}

#[test]
fn test_show_missing_trip() {
    let cfg = temp_config("show_missing");
    let server = MockServer::start(vec![]);

    rtp()
        .args(["--config-file", &cfg, "--api-url", &server.base_url, "show", "99"])
        .assert()
        .failure()
        .stderr(contains("Trip not found: 99"));
}

#[test]
fn test_watch_and_json_conflict() {
    rtp()
        .args(["show", "1", "--watch", "--json"])
        .assert()
        .failure()
        .stderr(contains("cannot be used with"));
}

fn failing_plan_server() -> MockServer {
    MockServer::start(vec![(
        "POST /api/trips/create/",
        Route::json(400, error_body("GeocodingError", "Could not find 'Atlantis'")),
    )])
}

#[test]
fn test_no_color_flag_strips_escapes() {
    let cfg = temp_config("no_color_flag");
    let server = failing_plan_server();

    rtp()
        .env_remove("NO_COLOR")
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &server.base_url,
            "--no-color",
            "--verbose",
            "plan",
            "Dallas, TX",
            "Atlantis",
            "Chicago, IL",
        ])
        .assert()
        .failure()
        .stdout(contains("Planning your route..."))
        .stdout(contains("\u{1b}").not())
        .stderr(contains("Location Not Found"))
        .stderr(contains("\u{1b}").not());
}

#[test]
fn test_no_color_env_strips_escapes() {
    let cfg = temp_config("no_color_env");

    rtp()
        .args(["--config-file", &cfg, "plan", "", "Houston, TX", "Chicago, IL"])
        .assert()
        .failure()
        .stdout(contains("\u{1b}").not())
        .stderr(contains("Enter your current location."))
        .stderr(contains("\u{1b}").not());
}

#[test]
fn test_status_lines_coloured_by_default() {
    let cfg = temp_config("color_default");
    let server = failing_plan_server();

    rtp()
        .env_remove("NO_COLOR")
        .args([
            "--config-file",
            &cfg,
            "--api-url",
            &server.base_url,
            "plan",
            "Dallas, TX",
            "Atlantis",
            "Chicago, IL",
        ])
        .assert()
        .failure()
        .stdout(contains("\u{1b}["))
        .stderr(contains("\u{1b}["));
}
