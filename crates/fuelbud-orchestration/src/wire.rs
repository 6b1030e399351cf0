//! JSON bodies of the `/predict` and `/compare` endpoints.

use serde::{Deserialize, Serialize};

use fuelbud_core::comparison::OptionRecord;
use fuelbud_core::constants::metric_names;
use fuelbud_core::metrics::MetricTarget;
use fuelbud_core::trip::TripParameters;

/// Body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub model_name: String,
    pub distance: f64,
    pub fuel_used: f64,
    pub fuel_price: f64,
}

impl PredictRequest {
    #[must_use]
    pub fn new(model_name: impl Into<String>, trip: &TripParameters) -> Self {
        Self {
            model_name: model_name.into(),
            distance: trip.distance,
            fuel_used: trip.fuel_used,
            fuel_price: trip.fuel_price,
        }
    }
}

/// Response of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub model_display_name: String,
    pub predicted_mpg: f64,
    pub base_mpg: f64,
    pub fuel_cost: f64,
}

impl PredictResponse {
    /// The values a display should animate toward.
    #[must_use]
    pub fn metric_target(&self) -> MetricTarget {
        MetricTarget::builder()
            .field(metric_names::PREDICTED_MPG, self.predicted_mpg)
            .field(metric_names::BASE_MPG, self.base_mpg)
            .field(metric_names::FUEL_COST, self.fuel_cost)
            .build()
    }
}

/// Body of `POST /compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub model_a: String,
    pub model_b: String,
    pub distance: f64,
    pub fuel_used: f64,
    pub fuel_price: f64,
}

impl CompareRequest {
    #[must_use]
    pub fn new(
        model_a: impl Into<String>,
        model_b: impl Into<String>,
        trip: &TripParameters,
    ) -> Self {
        Self {
            model_a: model_a.into(),
            model_b: model_b.into(),
            distance: trip.distance,
            fuel_used: trip.fuel_used,
            fuel_price: trip.fuel_price,
        }
    }
}

/// Per-model block of a compare response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub model_display_name: String,
    pub predicted_mpg: f64,
    pub trip_cost: f64,
}

impl ModelSummary {
    /// Turn the summary into a comparison option named `name`.
    #[must_use]
    pub fn to_option(&self, name: &str) -> OptionRecord {
        OptionRecord::new(
            name,
            self.model_display_name.clone(),
            self.predicted_mpg,
            self.trip_cost,
        )
    }
}

/// Response of `POST /compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub model_a: ModelSummary,
    pub model_b: ModelSummary,
    #[serde(default)]
    pub ai_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripParameters {
        TripParameters {
            distance: 100.0,
            fuel_used: 4.0,
            fuel_price: 3.5,
        }
    }

    #[test]
    fn predict_request_shape() {
        let json = serde_json::to_value(PredictRequest::new("c_300", &trip())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model_name": "c_300",
                "distance": 100.0,
                "fuel_used": 4.0,
                "fuel_price": 3.5
            })
        );
    }

    #[test]
    fn compare_request_shape() {
        let json = serde_json::to_value(CompareRequest::new("c_300", "e_350", &trip())).unwrap();
        assert_eq!(json["model_a"], "c_300");
        assert_eq!(json["model_b"], "e_350");
        assert_eq!(json["fuel_price"], 3.5);
    }

    #[test]
    fn predict_response_to_target() {
        let response: PredictResponse = serde_json::from_str(
            r#"{"model_display_name":"C 300 Sedan","predicted_mpg":25.0,"base_mpg":23.0,"fuel_cost":14.0}"#,
        )
        .unwrap();
        let target = response.metric_target();
        assert_eq!(target.get(metric_names::PREDICTED_MPG), Some(25.0));
        assert_eq!(target.get(metric_names::BASE_MPG), Some(23.0));
        assert_eq!(target.get(metric_names::FUEL_COST), Some(14.0));
    }

    #[test]
    fn predict_response_accepts_integers() {
        let response: PredictResponse = serde_json::from_str(
            r#"{"model_display_name":"X","predicted_mpg":25,"base_mpg":23,"fuel_cost":14}"#,
        )
        .unwrap();
        assert_eq!(response.fuel_cost, 14.0);
    }

    #[test]
    fn predict_response_missing_field_fails() {
        let result: Result<PredictResponse, _> =
            serde_json::from_str(r#"{"model_display_name":"X","predicted_mpg":25}"#);
        assert!(result.is_err());
    }

    #[test]
    fn compare_response_without_reason() {
        let response: CompareResponse = serde_json::from_str(
            r#"{
                "model_a": {"model_display_name": "A", "predicted_mpg": 20.0, "trip_cost": 20.0},
                "model_b": {"model_display_name": "B", "predicted_mpg": 30.0, "trip_cost": 17.5}
            }"#,
        )
        .unwrap();
        assert!(response.ai_reason.is_none());
        let option = response.model_b.to_option("e_350");
        assert_eq!(option.name, "e_350");
        assert_eq!(option.display_name, "B");
        assert_eq!(option.cost, 17.5);
    }
}
