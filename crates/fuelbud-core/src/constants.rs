//! Constants for animation timing, metric names, and exit codes.

use std::time::Duration;

/// Default number of ticks in one animation run.
pub const DEFAULT_ANIMATION_STEPS: u32 = 60;

/// Default wall-clock duration of one animation run.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(1500);

/// Delay added before the first tick of a run that superseded an active one.
///
/// Keeps the reset-to-zero frame and the first increment in separate
/// observable frames.
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_millis(10);

/// Minimum interval between two logged animation frames.
pub const FRAME_LOG_INTERVAL_MS: u64 = 250;

/// Default prediction service endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Metric field names shared by the wire layer and the display layer.
pub mod metric_names {
    /// Model-predicted fuel efficiency in miles per gallon.
    pub const PREDICTED_MPG: &str = "predicted_mpg";
    /// Manufacturer baseline fuel efficiency in miles per gallon.
    pub const BASE_MPG: &str = "base_mpg";
    /// Fuel cost of the trip in dollars.
    pub const FUEL_COST: &str = "fuel_cost";
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A required field was empty or not numeric; nothing was sent.
    pub const ERROR_VALIDATION: i32 = 2;
    /// The prediction service could not be reached.
    pub const ERROR_TRANSPORT: i32 = 3;
    /// The prediction service answered with a non-success status.
    pub const ERROR_HTTP_STATUS: i32 = 4;
    /// The prediction service answered with an unexpected body.
    pub const ERROR_MALFORMED_RESPONSE: i32 = 5;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
