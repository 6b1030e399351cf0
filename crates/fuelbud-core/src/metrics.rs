//! Metric targets: the values an animation converges to.

use serde::{Deserialize, Serialize};

/// One named numeric field of a [`MetricTarget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricField {
    /// Field name, e.g. `predicted_mpg`.
    pub name: String,
    /// Final value the displayed metric converges to.
    pub value: f64,
}

/// Immutable snapshot of the named values a display should converge to.
///
/// A new target supersedes the previous one; targets are never mutated
/// after construction.
///
/// # Example
/// ```
/// use fuelbud_core::metrics::MetricTarget;
///
/// let target = MetricTarget::builder()
///     .field("predicted_mpg", 25.0)
///     .field("fuel_cost", 14.0)
///     .build();
/// assert_eq!(target.len(), 2);
/// assert_eq!(target.get("fuel_cost"), Some(14.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTarget {
    fields: Vec<MetricField>,
}

impl MetricTarget {
    /// Start building a target.
    #[must_use]
    pub fn builder() -> MetricTargetBuilder {
        MetricTargetBuilder { fields: Vec::new() }
    }

    /// Fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[MetricField] {
        &self.fields
    }

    /// Value of the named field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|i| self.fields[i].value)
    }

    /// Position of the named field, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the target has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether every field value is a finite number.
    ///
    /// The animator does not enforce this; callers validate before starting.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.fields.iter().all(|f| f.value.is_finite())
    }
}

/// Builder for [`MetricTarget`].
#[derive(Debug, Default)]
pub struct MetricTargetBuilder {
    fields: Vec<MetricField>,
}

impl MetricTargetBuilder {
    /// Add a field. A repeated name replaces the earlier value in place.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == name) {
            existing.value = value;
        } else {
            self.fields.push(MetricField { name, value });
        }
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> MetricTarget {
        MetricTarget {
            fields: self.fields,
        }
    }
}
