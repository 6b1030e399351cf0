//! Comparison report: the local decision plus the service's explanation.
//!
//! The service's `ai_reason` is the authoritative recommendation text when it
//! is present and not blank. Otherwise the locally rendered recommendation is
//! used. The cheaper choice and the savings are always computed locally.

use fuelbud_core::comparison::{ComparisonEngine, ComparisonResult};

use crate::wire::{CompareRequest, CompareResponse};

/// Where the recommendation text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
    Service,
    Local,
}

/// A comparison ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub result: ComparisonResult,
    pub ai_reason: Option<String>,
}

impl ComparisonReport {
    /// Build a report from a compare request and the service's answer.
    #[must_use]
    pub fn from_response(request: &CompareRequest, response: CompareResponse) -> Self {
        let engine = ComparisonEngine::new();
        let result = engine.compare(
            response.model_a.to_option(&request.model_a),
            response.model_b.to_option(&request.model_b),
        );
        Self {
            result,
            ai_reason: response.ai_reason,
        }
    }

    /// Source of [`Self::recommendation`].
    #[must_use]
    pub fn recommendation_source(&self) -> RecommendationSource {
        match self.ai_reason.as_deref() {
            Some(reason) if !reason.trim().is_empty() => RecommendationSource::Service,
            _ => RecommendationSource::Local,
        }
    }

    /// Recommendation text to display.
    #[must_use]
    pub fn recommendation(&self) -> &str {
        match (self.recommendation_source(), self.ai_reason.as_deref()) {
            (RecommendationSource::Service, Some(reason)) => reason.trim(),
            _ => &self.result.recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::ModelSummary;
    use fuelbud_core::comparison::Choice;

    fn request() -> CompareRequest {
        CompareRequest {
            model_a: "c_300".into(),
            model_b: "e_350".into(),
            distance: 100.0,
            fuel_used: 4.0,
            fuel_price: 3.5,
        }
    }

    fn response(reason: Option<&str>) -> CompareResponse {
        CompareResponse {
            model_a: ModelSummary {
                model_display_name: "C 300 Sedan".into(),
                predicted_mpg: 17.5,
                trip_cost: 20.0,
            },
            model_b: ModelSummary {
                model_display_name: "E 350 Sedan".into(),
                predicted_mpg: 20.0,
                trip_cost: 17.5,
            },
            ai_reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn decision_is_local() {
        let report = ComparisonReport::from_response(&request(), response(Some("Pick A")));
        assert_eq!(report.result.cheaper, Choice::B);
        assert!((report.result.savings - 2.5).abs() < 1e-12);
        assert_eq!(report.result.option_a.name, "c_300");
    }

    #[test]
    fn service_reason_is_authoritative() {
        let report = ComparisonReport::from_response(&request(), response(Some("  Go E 350.  ")));
        assert_eq!(report.recommendation_source(), RecommendationSource::Service);
        assert_eq!(report.recommendation(), "Go E 350.");
    }

    #[test]
    fn local_fallback_when_missing() {
        let report = ComparisonReport::from_response(&request(), response(None));
        assert_eq!(report.recommendation_source(), RecommendationSource::Local);
        assert_eq!(
            report.recommendation(),
            "E 350 Sedan over C 300 Sedan, saving $2.50"
        );
    }

    #[test]
    fn local_fallback_when_blank() {
        let report = ComparisonReport::from_response(&request(), response(Some("   ")));
        assert_eq!(report.recommendation_source(), RecommendationSource::Local);
        assert!(report.recommendation().contains("$2.50"));
    }
}
