//! Cheaper-option selection between two trip results.
//!
//! Ties are broken toward the first option so that repeated comparisons of
//! equal costs always give the same answer.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRecord {
    /// Machine name, e.g. `c_300`.
    pub name: String,
    /// Human-readable name, e.g. `C 300 Sedan`.
    pub display_name: String,
    /// Fuel efficiency in miles per gallon.
    pub efficiency: f64,
    /// Trip cost in dollars.
    pub cost: f64,
}

impl OptionRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        efficiency: f64,
        cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            efficiency,
            cost,
        }
    }
}

/// Which side of a comparison was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// The other side.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// Outcome of comparing two options. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub option_a: OptionRecord,
    pub option_b: OptionRecord,
    /// The cheaper side; `A` on equal cost.
    pub cheaper: Choice,
    /// Absolute cost difference, never negative.
    pub savings: f64,
    /// Locally rendered recommendation.
    pub recommendation: String,
}

impl ComparisonResult {
    /// The option on the given side.
    #[must_use]
    pub fn option(&self, choice: Choice) -> &OptionRecord {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
        }
    }

    /// The cheaper option.
    #[must_use]
    pub fn cheaper_option(&self) -> &OptionRecord {
        self.option(self.cheaper)
    }

    /// The option that was not selected.
    #[must_use]
    pub fn other_option(&self) -> &OptionRecord {
        self.option(self.cheaper.other())
    }
}

/// Stateless comparison engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compare two options by cost.
    ///
    /// # Example
    /// ```
    /// use fuelbud_core::comparison::{Choice, ComparisonEngine, OptionRecord};
    ///
    /// let a = OptionRecord::new("c_300", "C 300 Sedan", 24.0, 20.0);
    /// let b = OptionRecord::new("e_350", "E 350 Sedan", 27.0, 17.5);
    /// let result = ComparisonEngine::new().compare(a, b);
    /// assert_eq!(result.cheaper, Choice::B);
    /// assert_eq!(result.recommendation, "E 350 Sedan over C 300 Sedan, saving $2.50");
    /// ```
    #[must_use]
    pub fn compare(&self, option_a: OptionRecord, option_b: OptionRecord) -> ComparisonResult {
        let cheaper = if option_b.cost < option_a.cost {
            Choice::B
        } else {
            Choice::A
        };
        let savings = (option_a.cost - option_b.cost).abs();

        let (winner, other) = match cheaper {
            Choice::A => (&option_a, &option_b),
            Choice::B => (&option_b, &option_a),
        };
        let recommendation = render_recommendation(winner, other, savings);
        debug!(?cheaper, savings, "comparison computed");

        ComparisonResult {
            option_a,
            option_b,
            cheaper,
            savings,
            recommendation,
        }
    }
}

/// Render `"<cheaper> over <other>, saving $<savings>"`.
#[must_use]
pub fn render_recommendation(cheaper: &OptionRecord, other: &OptionRecord, savings: f64) -> String {
    format!(
        "{} over {}, saving {}",
        cheaper.display_name,
        other.display_name,
        format_dollars(savings)
    )
}

/// Format an amount as dollars with exactly two decimals and no separators.
///
/// ```
/// assert_eq!(fuelbud_core::comparison::format_dollars(14.0), "$14.00");
/// assert_eq!(fuelbud_core::comparison::format_dollars(-2.5), "-$2.50");
/// assert_eq!(fuelbud_core::comparison::format_dollars(12345.678), "$12345.68");
/// ```
#[must_use]
pub fn format_dollars(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    if amount < 0.0 && rendered != "0.00" {
        format!("-${rendered}")
    } else {
        format!("${rendered}")
    }
}
