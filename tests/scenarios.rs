//! End-to-end request and display scenarios over a scripted service.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use fuelbud_core::animator::ValueAnimator;
use fuelbud_core::comparison::{format_dollars, Choice};
use fuelbud_core::constants::metric_names;
use fuelbud_core::observers::RecordingObserver;
use fuelbud_core::options::AnimationOptions;
use fuelbud_core::trip::{TripInput, FILL_ALL_FIELDS};
use fuelbud_orchestration::error::{FailureKind, ServiceError};
use fuelbud_orchestration::interfaces::LoadingReporter;
use fuelbud_orchestration::orchestrator::{RequestOrchestrator, RequestOutcome};
use fuelbud_orchestration::scripted::ScriptedService;
use fuelbud_orchestration::wire::PredictResponse;

#[derive(Default)]
struct Transitions(Mutex<Vec<bool>>);

impl LoadingReporter for Transitions {
    fn started(&self, _label: &str) {
        self.0.lock().push(true);
    }

    fn finished(&self) {
        self.0.lock().push(false);
    }
}

fn trip() -> TripInput {
    TripInput::new("100", "4", "3.50")
}

fn options() -> AnimationOptions {
    AnimationOptions {
        duration: Duration::from_millis(600),
        steps: 60,
        restart_delay: Duration::from_millis(10),
    }
}

fn c300_prediction() -> PredictResponse {
    PredictResponse {
        model_display_name: "C 300 Sedan".into(),
        predicted_mpg: 25.0,
        base_mpg: 23.0,
        fuel_cost: 14.0,
    }
}

#[test]
fn predict_then_animate_to_targets() {
    let service = Arc::new(ScriptedService::new());
    service.push_predict(Ok(c300_prediction()));
    let transitions = Arc::new(Transitions::default());
    let orchestrator =
        RequestOrchestrator::new(service.clone()).with_loading_reporter(transitions.clone());
    service.observe_loading(orchestrator.loading().clone());

    let request = orchestrator.prepare_predict("c_300", &trip()).unwrap();
    assert_eq!(request.model_name, "c_300");
    assert_eq!(request.distance, 100.0);
    assert_eq!(request.fuel_used, 4.0);
    assert_eq!(request.fuel_price, 3.5);

    let submission = orchestrator.submit_predict(&request);
    assert!(orchestrator.is_current(submission.ticket));
    let response = submission.outcome.into_result().unwrap();

    let mut animator = ValueAnimator::new(options());
    let start = Instant::now();
    animator.start(response.metric_target(), start);
    let recorder = RecordingObserver::new();
    let applied = animator.advance(start + Duration::from_millis(600), &recorder);

    assert_eq!(applied, 60);
    assert!(!animator.is_running());
    assert_eq!(format!("{:.2}", animator.value(metric_names::PREDICTED_MPG)), "25.00");
    assert_eq!(format_dollars(animator.value(metric_names::FUEL_COST)), "$14.00");
    assert_eq!(animator.value(metric_names::BASE_MPG), 23.0);

    assert_eq!(service.loading_seen(), vec![true]);
    assert_eq!(transitions.0.lock().as_slice(), [true, false]);
    assert!(!orchestrator.loading().is_loading());
}

#[test]
fn compare_b_cheaper() {
    let service = Arc::new(ScriptedService::new());
    service.push_compare(Ok(ScriptedService::compare_response(20.0, 17.5, None)));
    let orchestrator = RequestOrchestrator::new(service.clone());

    let request = orchestrator.prepare_compare("c_300", "e_350", &trip()).unwrap();
    let report = orchestrator
        .submit_compare(&request)
        .outcome
        .into_result()
        .unwrap();

    assert_eq!(report.result.cheaper, Choice::B);
    assert!((report.result.savings - 2.5).abs() < 1e-9);
    let text = report.recommendation();
    assert!(text.contains("E 350 Sedan"));
    assert!(text.contains("$2.50"));
    assert_eq!(service.last_compare(), Some(request));
}

#[test]
fn compare_prefers_service_reason() {
    let service = Arc::new(ScriptedService::new());
    service.push_compare(Ok(ScriptedService::compare_response(
        20.0,
        17.5,
        Some("E 350 Sedan is lighter on fuel for this trip."),
    )));
    let orchestrator = RequestOrchestrator::new(service);
    let request = orchestrator.prepare_compare("c_300", "e_350", &trip()).unwrap();
    let report = orchestrator
        .submit_compare(&request)
        .outcome
        .into_result()
        .unwrap();
    assert_eq!(
        report.recommendation(),
        "E 350 Sedan is lighter on fuel for this trip."
    );
    assert_eq!(report.result.cheaper, Choice::B);
}

#[test]
fn equal_costs_select_a() {
    let service = Arc::new(ScriptedService::new());
    service.push_compare(Ok(ScriptedService::compare_response(14.0, 14.0, None)));
    let orchestrator = RequestOrchestrator::new(service);
    let request = orchestrator.prepare_compare("c_300", "e_350", &trip()).unwrap();
    let report = orchestrator
        .submit_compare(&request)
        .outcome
        .into_result()
        .unwrap();
    assert_eq!(report.result.cheaper, Choice::A);
    assert_eq!(report.result.savings, 0.0);
    assert!(report.recommendation().ends_with("saving $0.00"));
}

#[test]
fn transport_failure_leaves_display_empty() {
    let service = Arc::new(ScriptedService::new());
    service.push_predict(Err(ServiceError::Transport("connection refused".into())));
    let transitions = Arc::new(Transitions::default());
    let orchestrator =
        RequestOrchestrator::new(service.clone()).with_loading_reporter(transitions.clone());
    service.observe_loading(orchestrator.loading().clone());

    let mut animator = ValueAnimator::new(options());
    animator.start(c300_prediction().metric_target(), Instant::now());
    animator.step();
    let request = orchestrator.prepare_predict("c_300", &trip()).unwrap();
    let submission = orchestrator.submit_predict(&request);

    match submission.outcome {
        RequestOutcome::Success(_) => panic!("unexpected success"),
        RequestOutcome::Failure(failure) => {
            assert_eq!(failure.kind, FailureKind::Transport);
            assert!(failure.message.contains("unreachable"));
            animator.clear();
        }
    }

    assert_eq!(service.loading_seen(), vec![true]);
    assert_eq!(transitions.0.lock().as_slice(), [true, false]);
    assert!(animator.target().is_none());
    assert_eq!(animator.value(metric_names::PREDICTED_MPG), 0.0);
    assert_eq!(animator.value(metric_names::FUEL_COST), 0.0);
}

#[test]
fn validation_blocks_network_call() {
    let service = Arc::new(ScriptedService::new());
    let orchestrator = RequestOrchestrator::new(service.clone());
    let err = orchestrator
        .prepare_predict("c_300", &TripInput::new("100", "", "3.50"))
        .unwrap_err();
    assert_eq!(err.user_message(), FILL_ALL_FIELDS);
    assert_eq!(service.predict_calls(), 0);
    assert!(!orchestrator.loading().is_loading());
}

#[test]
fn newer_prediction_supersedes_older() {
    let service = Arc::new(ScriptedService::new());
    service.push_predict(Ok(c300_prediction()));
    service.push_predict(Ok(PredictResponse {
        model_display_name: "E 350 Sedan".into(),
        predicted_mpg: 22.0,
        base_mpg: 21.0,
        fuel_cost: 15.9,
    }));
    let orchestrator = RequestOrchestrator::new(service);
    let request = orchestrator.prepare_predict("c_300", &trip()).unwrap();

    let first = orchestrator.begin("predict");
    let second = orchestrator.begin("predict");
    assert_eq!(orchestrator.loading().in_flight(), 2);

    let older = first.predict(&request);
    let newer = second.predict(&request);
    assert!(!orchestrator.is_current(older.ticket));
    assert!(orchestrator.is_current(newer.ticket));
    assert!(!orchestrator.loading().is_loading());

    let mut animator = ValueAnimator::new(options());
    let now = Instant::now();
    for submission in [older, newer] {
        if !orchestrator.is_current(submission.ticket) {
            continue;
        }
        if let Some(response) = submission.outcome.success() {
            animator.start(response.metric_target(), now);
        }
    }
    animator.finish();
    assert_eq!(animator.value(metric_names::FUEL_COST), 15.9);
}

#[test]
fn restart_mid_animation_begins_at_zero() {
    let mut animator = ValueAnimator::new(options());
    let start = Instant::now();
    animator.start(c300_prediction().metric_target(), start);
    let recorder = RecordingObserver::new();
    animator.advance(start + Duration::from_millis(300), &recorder);
    assert!(animator.value(metric_names::PREDICTED_MPG) > 0.0);

    let reset = animator.start(c300_prediction().metric_target(), start);
    assert_eq!(reset.value(metric_names::PREDICTED_MPG), Some(0.0));
    let first = animator.step().unwrap();
    assert!(first.value(metric_names::PREDICTED_MPG).unwrap() < 1.0);
}
