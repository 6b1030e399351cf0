//! Trip form input and its validation.
//!
//! Raw form fields stay strings until validation so that "empty" and
//! "not a number" can be told apart and reported before any request is
//! built.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Message shown for any missing or unusable trip field.
pub const FILL_ALL_FIELDS: &str = "Please fill all fields.";

/// Validation failure. Nothing is sent to the network when this occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A required field does not parse as a finite number.
    #[error("{field} must be a number, got {value:?}")]
    NotNumeric { field: &'static str, value: String },

    /// The model id is not in the catalog.
    #[error("unknown model {0:?}")]
    UnknownModel(String),
}

impl ValidationError {
    /// The message to show the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { .. } | Self::NotNumeric { .. } => FILL_ALL_FIELDS.to_string(),
            Self::UnknownModel(id) => {
                let known: Vec<&str> = catalog::MODELS.iter().map(|m| m.id).collect();
                format!("Unknown model {id:?}; choose one of {}.", known.join(", "))
            }
        }
    }
}

/// Raw trip fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripInput {
    pub distance: String,
    pub fuel_used: String,
    pub fuel_price: String,
}

impl TripInput {
    #[must_use]
    pub fn new(
        distance: impl Into<String>,
        fuel_used: impl Into<String>,
        fuel_price: impl Into<String>,
    ) -> Self {
        Self {
            distance: distance.into(),
            fuel_used: fuel_used.into(),
            fuel_price: fuel_price.into(),
        }
    }

    /// Parse every field, reporting the first problem in form order.
    pub fn validate(&self) -> Result<TripParameters, ValidationError> {
        Ok(TripParameters {
            distance: parse_field("distance", &self.distance)?,
            fuel_used: parse_field("fuel_used", &self.fuel_used)?,
            fuel_price: parse_field("fuel_price", &self.fuel_price)?,
        })
    }
}

/// Validated trip parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Distance in miles.
    pub distance: f64,
    /// Fuel used in gallons.
    pub fuel_used: f64,
    /// Fuel price in dollars per gallon.
    pub fuel_price: f64,
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotNumeric {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Check that a model id is in the catalog.
pub fn validate_model(id: &str) -> Result<&'static catalog::VehicleModel, ValidationError> {
    catalog::find(id.trim()).ok_or_else(|| ValidationError::UnknownModel(id.to_string()))
}
