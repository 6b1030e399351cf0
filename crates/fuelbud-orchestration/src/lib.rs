//! # fuelbud-orchestration
//!
//! Prediction service client, request sequencing, loading state, and
//! failure classification.

pub mod client;
pub mod error;
pub mod interfaces;
pub mod loading;
pub mod orchestrator;
pub mod report;
pub mod scripted;
pub mod sequence;
pub mod wire;

pub use client::{ClientConfig, HttpPredictionService};
pub use error::{FailureKind, ServiceError};
pub use interfaces::{LoadingReporter, PredictionService, ResultPresenter};
pub use loading::{LoadingFlag, LoadingGuard};
pub use orchestrator::{
    PendingRequest, RequestFailure, RequestOrchestrator, RequestOutcome, Submission,
};
pub use report::{ComparisonReport, RecommendationSource};
pub use sequence::{RequestSequencer, RequestTicket};
pub use wire::{CompareRequest, CompareResponse, ModelSummary, PredictRequest, PredictResponse};
