//! End-to-end CLI integration tests.

use assert_cmd::Command;
use fuelbud_tests::{unused_endpoint, StubResponse, StubServer};
use predicates::prelude::*;

fn fuelbud() -> Command {
    let mut cmd = Command::cargo_bin("fuelbud").expect("binary not found");
    cmd.env_remove("FUELBUD_ENDPOINT").env_remove("FUELBUD_USER");
    cmd
}

fn serve(status: u16, body: &str) -> StubServer {
    StubServer::start(vec![StubResponse::json(status, body)]).unwrap()
}

const TRIP: [&str; 6] = [
    "--distance",
    "100",
    "--fuel-used",
    "4",
    "--fuel-price",
    "3.50",
];

#[test]
fn help_flag() {
    fuelbud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn version_flag() {
    fuelbud()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fuelbud"));
}

#[test]
fn models_lists_catalog() {
    fuelbud()
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("c_300"))
        .stdout(predicate::str::contains("GLE 350 SUV"));
}

#[test]
fn completion_bash() {
    fuelbud()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fuelbud"));
}

#[test]
fn blank_field_is_validation_error() {
    fuelbud()
        .args(["predict", "--distance", "100", "--fuel-used", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please fill all fields"));
}

#[test]
fn non_numeric_field_is_validation_error() {
    fuelbud()
        .args(["predict", "--distance", "far", "--fuel-used", "4", "--fuel-price", "3"])
        .assert()
        .code(2);
}

#[test]
fn unknown_model_is_validation_error() {
    fuelbud()
        .args(["predict", "--model", "x_999"])
        .args(TRIP)
        .assert()
        .code(2);
}

#[test]
fn unreachable_service_is_transport_error() {
    fuelbud()
        .args(["predict", "-q", "--endpoint", &unused_endpoint().unwrap()])
        .args(TRIP)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreachable"));
}

#[test]
fn server_error_is_http_status() {
    let server = serve(500, r#"{"detail":"boom"}"#);
    fuelbud()
        .args(["predict", "-q", "--endpoint", &server.url()])
        .args(TRIP)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("HTTP 500"));
}

#[test]
fn garbage_body_is_malformed_response() {
    let server = serve(200, "<html>nope</html>");
    fuelbud()
        .args(["predict", "-q", "--endpoint", &server.url()])
        .args(TRIP)
        .assert()
        .code(5);
}

#[test]
fn predict_quiet_prints_final_values() {
    let server = serve(
        200,
        r#"{"model_display_name":"C 300 Sedan","predicted_mpg":25.0,"base_mpg":23.0,"fuel_cost":14.0}"#,
    );
    fuelbud()
        .args(["predict", "-q", "--endpoint", &server.url()])
        .args(TRIP)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Predicted MPG: 25.00 | Base MPG: 23.00 | Fuel Cost: $14.00",
        ));
}

#[test]
fn predict_animated_ends_on_targets() {
    let server = serve(
        200,
        r#"{"model_display_name":"C 300 Sedan","predicted_mpg":25.0,"base_mpg":23.0,"fuel_cost":14.0}"#,
    );
    fuelbud()
        .args([
            "predict",
            "--endpoint",
            &server.url(),
            "--steps",
            "5",
            "--duration",
            "50ms",
            "--name",
            "Ada",
        ])
        .args(TRIP)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello, Ada"))
        .stdout(predicate::str::contains("Fuel Cost: $14.00"));
}

#[test]
fn compare_prints_recommendation() {
    let server = serve(
        200,
        r#"{"model_a":{"model_display_name":"C 300 Sedan","predicted_mpg":17.5,"trip_cost":20.0},"model_b":{"model_display_name":"E 350 Sedan","predicted_mpg":20.0,"trip_cost":17.5}}"#,
    );
    fuelbud()
        .args(["compare", "-q", "--endpoint", &server.url()])
        .args(TRIP)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "E 350 Sedan over C 300 Sedan, saving $2.50",
        ));
}
