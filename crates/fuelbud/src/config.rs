//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use fuelbud_core::catalog::{DEFAULT_COMPARE_MODEL, DEFAULT_MODEL};
use fuelbud_core::constants::DEFAULT_ENDPOINT;
use fuelbud_core::options::AnimationOptions;
use fuelbud_core::trip::TripInput;
use fuelbud_orchestration::client::ClientConfig;

/// FuelBud: fuel-efficiency predictions and model comparisons.
#[derive(Parser, Debug)]
#[command(name = "fuelbud", version, about, arg_required_else_help = true)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Base URL of the prediction service.
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT, env = "FUELBUD_ENDPOINT")]
    pub endpoint: String,

    /// Request timeout (e.g. "500ms", "30s", "5m").
    #[arg(long, global = true, default_value = "30s", value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Number of animation ticks.
    #[arg(long, global = true, default_value = "60")]
    pub steps: u32,

    /// Total animation duration.
    #[arg(long, global = true, default_value = "1500ms", value_parser = parse_duration_arg)]
    pub duration: Duration,

    /// Pause before each request is issued, with the loading indicator up.
    #[arg(long, global = true, default_value = "0ms", value_parser = parse_duration_arg)]
    pub think_delay: Duration,

    /// Print final values without animating.
    #[arg(long, global = true)]
    pub no_animate: bool,

    /// Quiet mode (only output the values).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (debug logging on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Name used in the greeting.
    #[arg(long, global = true, env = "FUELBUD_USER")]
    pub name: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Predict fuel efficiency and trip cost for one model.
    Predict(PredictArgs),
    /// Compare the trip cost of two models.
    Compare(CompareArgs),
    /// List the known vehicle models.
    Models,
    /// Launch the interactive terminal UI.
    Tui,
}

/// Trip fields, taken as raw text so that validation decides what is
/// missing or non-numeric.
#[derive(Args, Debug, Clone, Default)]
pub struct TripArgs {
    /// Trip distance in miles.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub distance: String,

    /// Fuel used in gallons.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub fuel_used: String,

    /// Fuel price in dollars per gallon.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub fuel_price: String,
}

impl TripArgs {
    #[must_use]
    pub fn input(&self) -> TripInput {
        TripInput::new(
            self.distance.clone(),
            self.fuel_used.clone(),
            self.fuel_price.clone(),
        )
    }
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Vehicle model id (see `fuelbud models`).
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[command(flatten)]
    pub trip: TripArgs,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First model id.
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model_a: String,

    /// Second model id.
    #[arg(long, default_value = DEFAULT_COMPARE_MODEL)]
    pub model_b: String,

    #[command(flatten)]
    pub trip: TripArgs,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// HTTP client settings.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }

    /// Animation settings, normalized.
    #[must_use]
    pub fn animation_options(&self) -> AnimationOptions {
        AnimationOptions {
            duration: self.duration,
            steps: self.steps,
            ..AnimationOptions::default()
        }
        .normalize()
    }

    /// Whether results should be animated.
    #[must_use]
    pub fn animate(&self) -> bool {
        !self.no_animate && !self.quiet
    }
}

fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    parse_duration(s).ok_or_else(|| format!("invalid duration: {s:?} (try 500ms, 30s, 5m, 1h)"))
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
