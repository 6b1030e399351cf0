//! Canned-response prediction service for tests and offline runs.

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::error::ServiceError;
use crate::interfaces::PredictionService;
use crate::loading::LoadingFlag;
use crate::wire::{CompareRequest, CompareResponse, ModelSummary, PredictRequest, PredictResponse};

#[derive(Default)]
struct Script {
    predict: VecDeque<Result<PredictResponse, ServiceError>>,
    compare: VecDeque<Result<CompareResponse, ServiceError>>,
    predict_requests: Vec<PredictRequest>,
    compare_requests: Vec<CompareRequest>,
    loading_seen: Vec<bool>,
    probe: Option<LoadingFlag>,
}

/// [`PredictionService`] that replays queued results in order.
///
/// When a queue is empty the call fails with a transport error, as if the
/// service were down.
#[derive(Default)]
pub struct ScriptedService {
    script: Mutex<Script>,
}

impl ScriptedService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_predict(&self, result: Result<PredictResponse, ServiceError>) {
        self.script.lock().predict.push_back(result);
    }

    pub fn push_compare(&self, result: Result<CompareResponse, ServiceError>) {
        self.script.lock().compare.push_back(result);
    }

    /// Record the state of `flag` at every call.
    pub fn observe_loading(&self, flag: LoadingFlag) {
        self.script.lock().probe = Some(flag);
    }

    /// Loading state observed during each call, in call order.
    #[must_use]
    pub fn loading_seen(&self) -> Vec<bool> {
        self.script.lock().loading_seen.clone()
    }

    #[must_use]
    pub fn predict_calls(&self) -> usize {
        self.script.lock().predict_requests.len()
    }

    #[must_use]
    pub fn compare_calls(&self) -> usize {
        self.script.lock().compare_requests.len()
    }

    #[must_use]
    pub fn last_predict(&self) -> Option<PredictRequest> {
        self.script.lock().predict_requests.last().cloned()
    }

    #[must_use]
    pub fn last_compare(&self) -> Option<CompareRequest> {
        self.script.lock().compare_requests.last().cloned()
    }

    /// A compare response with the given trip costs for A and B.
    #[must_use]
    pub fn compare_response(cost_a: f64, cost_b: f64, ai_reason: Option<&str>) -> CompareResponse {
        CompareResponse {
            model_a: ModelSummary {
                model_display_name: "C 300 Sedan".into(),
                predicted_mpg: 20.0,
                trip_cost: cost_a,
            },
            model_b: ModelSummary {
                model_display_name: "E 350 Sedan".into(),
                predicted_mpg: 22.86,
                trip_cost: cost_b,
            },
            ai_reason: ai_reason.map(str::to_string),
        }
    }
}

fn exhausted(endpoint: &str) -> ServiceError {
    ServiceError::Transport(format!("no scripted response for {endpoint}"))
}

impl PredictionService for ScriptedService {
    fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServiceError> {
        let mut script = self.script.lock();
        let loading = script.probe.as_ref().map(LoadingFlag::is_loading);
        script.loading_seen.extend(loading);
        script.predict_requests.push(request.clone());
        script
            .predict
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("/predict")))
    }

    fn compare(&self, request: &CompareRequest) -> Result<CompareResponse, ServiceError> {
        let mut script = self.script.lock();
        let loading = script.probe.as_ref().map(LoadingFlag::is_loading);
        script.loading_seen.extend(loading);
        script.compare_requests.push(request.clone());
        script
            .compare
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("/compare")))
    }
}
