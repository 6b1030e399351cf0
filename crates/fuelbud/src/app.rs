//! Application entry point and dispatch.

use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use tracing::{debug, warn};

use fuelbud_cli::output::format_model_list;
use fuelbud_cli::presenter::CLIResultPresenter;
use fuelbud_cli::spinner::SpinnerReporter;
use fuelbud_cli::ui::print_greeting;
use fuelbud_core::cancel::CancellationToken;
use fuelbud_core::catalog::MODELS;
use fuelbud_core::constants::exit_codes;
use fuelbud_core::observers::LoggingObserver;
use fuelbud_orchestration::client::HttpPredictionService;
use fuelbud_orchestration::error::FailureKind;
use fuelbud_orchestration::interfaces::ResultPresenter;
use fuelbud_orchestration::orchestrator::RequestOrchestrator;

use crate::config::{AppConfig, Command, CompareArgs, PredictArgs};
use crate::errors::exit_code_for;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Input was rejected before anything was sent.
    Validation,
    Failed(FailureKind),
    Cancelled,
}

impl Outcome {
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => exit_codes::SUCCESS,
            Self::Validation => exit_codes::ERROR_VALIDATION,
            Self::Failed(kind) => exit_code_for(kind),
            Self::Cancelled => exit_codes::ERROR_CANCELED,
        }
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<Outcome> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fuelbud_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(Outcome::Success);
    }

    match &config.command {
        Some(Command::Predict(args)) => {
            let (orchestrator, presenter, cancel) = cli_parts(config);
            greet(config);
            Ok(run_predict(&orchestrator, &presenter, &cancel, args))
        }
        Some(Command::Compare(args)) => {
            let (orchestrator, presenter, cancel) = cli_parts(config);
            greet(config);
            Ok(run_compare(&orchestrator, &presenter, &cancel, args))
        }
        Some(Command::Models) => {
            let mut stdout = io::stdout().lock();
            for line in format_model_list(&MODELS) {
                writeln!(stdout, "{line}")?;
            }
            Ok(Outcome::Success)
        }
        Some(Command::Tui) => run_tui(config),
        None => Ok(Outcome::Success),
    }
}

fn greet(config: &AppConfig) {
    if !config.quiet {
        print_greeting(config.name.as_deref());
    }
}

fn cli_parts(config: &AppConfig) -> (RequestOrchestrator, CLIResultPresenter, CancellationToken) {
    let service = Arc::new(HttpPredictionService::new(&config.client_config()));
    debug!(endpoint = service.base_url(), "using prediction service");
    let orchestrator = RequestOrchestrator::new(service)
        .with_think_delay(config.think_delay)
        .with_loading_reporter(Arc::new(SpinnerReporter::new(!config.quiet)));

    let cancel = interrupt_token();
    let mut presenter =
        CLIResultPresenter::new(config.quiet, config.animate(), config.animation_options())
            .with_cancel(cancel.clone());
    if config.verbose {
        presenter = presenter.with_observer(Arc::new(LoggingObserver::new()));
    }
    (orchestrator, presenter, cancel)
}

/// Validate, submit and present one prediction.
pub fn run_predict(
    orchestrator: &RequestOrchestrator,
    presenter: &dyn ResultPresenter,
    cancel: &CancellationToken,
    args: &PredictArgs,
) -> Outcome {
    let request = match orchestrator.prepare_predict(&args.model, &args.trip.input()) {
        Ok(request) => request,
        Err(err) => {
            presenter.present_error(&err.user_message());
            return Outcome::Validation;
        }
    };

    let submission = orchestrator.submit_predict(&request);
    if cancel.is_cancelled() {
        return Outcome::Cancelled;
    }
    match submission.outcome.into_result() {
        Ok(response) => {
            presenter.present_prediction(&response);
            if cancel.is_cancelled() {
                Outcome::Cancelled
            } else {
                Outcome::Success
            }
        }
        Err(failure) => {
            presenter.present_error(&failure.message);
            Outcome::Failed(failure.kind)
        }
    }
}

/// Validate, submit and present one comparison.
pub fn run_compare(
    orchestrator: &RequestOrchestrator,
    presenter: &dyn ResultPresenter,
    cancel: &CancellationToken,
    args: &CompareArgs,
) -> Outcome {
    let request =
        match orchestrator.prepare_compare(&args.model_a, &args.model_b, &args.trip.input()) {
            Ok(request) => request,
            Err(err) => {
                presenter.present_error(&err.user_message());
                return Outcome::Validation;
            }
        };

    let submission = orchestrator.submit_compare(&request);
    if cancel.is_cancelled() {
        return Outcome::Cancelled;
    }
    match submission.outcome.into_result() {
        Ok(report) => {
            presenter.present_comparison(&report);
            Outcome::Success
        }
        Err(failure) => {
            presenter.present_error(&failure.message);
            Outcome::Failed(failure.kind)
        }
    }
}

fn run_tui(config: &AppConfig) -> Result<Outcome> {
    let (tx, rx) = crossbeam_channel::unbounded::<fuelbud_tui::TuiMessage>();
    let service = Arc::new(HttpPredictionService::new(&config.client_config()));
    let orchestrator = RequestOrchestrator::new(service)
        .with_think_delay(config.think_delay)
        .with_loading_reporter(Arc::new(fuelbud_tui::TuiLoadingReporter::new(tx.clone())));

    let mut app = fuelbud_tui::TuiApp::with_channel(
        Arc::new(orchestrator),
        config.animation_options(),
        tx,
        rx,
    )
    .with_greeting(config.name.as_deref());

    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(Outcome::Success)
}

/// Token fired by Ctrl+C. The handler is installed once per process.
fn interrupt_token() -> CancellationToken {
    static TOKEN: OnceLock<CancellationToken> = OnceLock::new();
    TOKEN
        .get_or_init(|| {
            let token = CancellationToken::new();
            let handler_token = token.clone();
            if let Err(err) = ctrlc::set_handler(move || handler_token.cancel()) {
                warn!(error = %err, "could not install Ctrl+C handler");
            }
            token
        })
        .clone()
}
