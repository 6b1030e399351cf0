//! CLI output formatting.

use std::time::Duration;

use fuelbud_core::animator::AnimationFrame;
use fuelbud_core::catalog::VehicleModel;
use fuelbud_core::comparison::{format_dollars, Choice};
use fuelbud_core::constants::metric_names;
use fuelbud_orchestration::report::{ComparisonReport, RecommendationSource};
use fuelbud_orchestration::wire::PredictResponse;

/// Fuel efficiency with two decimals.
#[must_use]
pub fn format_mpg(value: f64) -> String {
    format!("{value:.2}")
}

/// The three prediction metrics on one line.
#[must_use]
pub fn format_metrics(predicted_mpg: f64, base_mpg: f64, fuel_cost: f64) -> String {
    format!(
        "Predicted MPG: {} | Base MPG: {} | Fuel Cost: {}",
        format_mpg(predicted_mpg),
        format_mpg(base_mpg),
        format_dollars(fuel_cost)
    )
}

/// Metrics line for an animation frame. Absent fields read as zero.
#[must_use]
pub fn format_frame(frame: &AnimationFrame) -> String {
    let value = |name: &str| frame.value(name).unwrap_or(0.0);
    format_metrics(
        value(metric_names::PREDICTED_MPG),
        value(metric_names::BASE_MPG),
        value(metric_names::FUEL_COST),
    )
}

/// Metrics line for the final values of a prediction.
#[must_use]
pub fn format_prediction(response: &PredictResponse) -> String {
    format_metrics(
        response.predicted_mpg,
        response.base_mpg,
        response.fuel_cost,
    )
}

/// Table rows and the recommendation for a comparison.
#[must_use]
pub fn format_comparison(report: &ComparisonReport) -> Vec<String> {
    let result = &report.result;
    let mut lines = Vec::with_capacity(5);
    lines.push(format!(
        "  {:<16} {:>10} {:>12}",
        "Model", "MPG", "Trip cost"
    ));
    for (choice, option) in [
        (Choice::A, &result.option_a),
        (Choice::B, &result.option_b),
    ] {
        let marker = if choice == result.cheaper { " *" } else { "" };
        lines.push(format!(
            "  {:<16} {:>10} {:>12}{marker}",
            option.display_name,
            format_mpg(option.efficiency),
            format_dollars(option.cost),
        ));
    }
    lines.push(format!("Savings: {}", format_dollars(result.savings)));
    let source = match report.recommendation_source() {
        RecommendationSource::Service => "",
        RecommendationSource::Local => " (local)",
    };
    lines.push(format!("Recommendation{source}: {}", report.recommendation()));
    lines
}

/// One catalog entry per line.
#[must_use]
pub fn format_model_list(models: &[VehicleModel]) -> Vec<String> {
    models
        .iter()
        .map(|m| format!("{:<10} {}", m.id, m.label))
        .collect()
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}
