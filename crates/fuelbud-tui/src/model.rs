//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use fuelbud_core::animator::ValueAnimator;
use fuelbud_core::observer::FrameObserver;
use fuelbud_core::observers::LoggingObserver;
use fuelbud_core::options::AnimationOptions;
use fuelbud_orchestration::orchestrator::{RequestOrchestrator, RequestOutcome, Submission};
use fuelbud_orchestration::report::ComparisonReport;
use fuelbud_orchestration::sequence::RequestTicket;
use fuelbud_orchestration::wire::PredictResponse;

use crate::bridge::RequestBridge;
use crate::footer::{render_footer, Status};
use crate::form::{render_form, FormState, Mode};
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogPane};
use crate::messages::TuiMessage;
use crate::results::{render_comparison, render_placeholder, render_prediction};

const TICK_RATE: Duration = Duration::from_millis(25);
const LOG_PAGE: usize = 10;

/// The result currently on display.
#[derive(Debug, Clone)]
pub enum Display {
    Empty,
    Prediction(PredictResponse),
    Comparison(ComparisonReport),
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    pub form: FormState,
    pub display: Display,
    pub status: Option<Status>,
    pub logs: LogPane,
    /// Greeting shown in the header.
    pub greeting: Option<String>,
    animator: ValueAnimator,
    frame_observer: Box<dyn FrameObserver>,
    bridge: RequestBridge,
    rx: Receiver<TuiMessage>,
    tx: Sender<TuiMessage>,
    ticks: u64,
}

impl TuiApp {
    /// Create a new TUI app over `orchestrator`.
    #[must_use]
    pub fn new(orchestrator: Arc<RequestOrchestrator>, options: AnimationOptions) -> Self {
        let (tx, rx) = unbounded();
        Self::with_channel(orchestrator, options, tx, rx)
    }

    /// Create a TUI app over an existing channel. Lets a loading reporter
    /// built before the app post into it.
    #[must_use]
    pub fn with_channel(
        orchestrator: Arc<RequestOrchestrator>,
        options: AnimationOptions,
        tx: Sender<TuiMessage>,
        rx: Receiver<TuiMessage>,
    ) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(),
            display: Display::Empty,
            status: None,
            logs: LogPane::new(),
            greeting: None,
            animator: ValueAnimator::new(options),
            frame_observer: Box::new(LoggingObserver::new()),
            bridge: RequestBridge::new(orchestrator, tx.clone()),
            rx,
            tx,
            ticks: 0,
        }
    }

    /// Show `Hello, <name>` in the header.
    #[must_use]
    pub fn with_greeting(mut self, name: Option<&str>) -> Self {
        self.greeting = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(|n| format!("Hello, {n}"));
        self
    }

    /// Sender for posting messages into this app.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    #[must_use]
    pub fn animator(&self) -> &ValueAnimator {
        &self.animator
    }

    /// Whether any submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.bridge.orchestrator().loading().is_loading()
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Wait up to `timeout` for one message and handle it.
    ///
    /// Returns whether a message was handled.
    pub fn update_blocking(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.handle_message(msg);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Tick => {
                self.ticks = self.ticks.wrapping_add(1);
                self.animator
                    .advance(Instant::now(), self.frame_observer.as_ref());
            }
            TuiMessage::KeyPress(action) => self.handle_key_action(action),
            TuiMessage::Resize { .. } => {}
            TuiMessage::Log(text) => self.logs.info(text),
            TuiMessage::Predicted(submission) => self.apply_prediction(submission),
            TuiMessage::Compared(submission) => self.apply_comparison(submission),
            TuiMessage::Quit => self.quit(),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Submit => self.submit(),
            KeyAction::NextField => self.form.focus_next(),
            KeyAction::PrevField => self.form.focus_prev(),
            KeyAction::ToggleMode => self.form.toggle_mode(),
            KeyAction::PrevModel => self.form.cycle_model(false),
            KeyAction::NextModel => self.form.cycle_model(true),
            KeyAction::Input(c) => self.form.input(c),
            KeyAction::Backspace => self.form.backspace(),
            KeyAction::ClearField => self.form.clear_field(),
            KeyAction::ScrollUp => self.logs.scroll_up(),
            KeyAction::ScrollDown => self.logs.scroll_down(),
            KeyAction::PageUp => self.logs.page_up(LOG_PAGE),
            KeyAction::PageDown => self.logs.page_down(LOG_PAGE),
            KeyAction::None => {}
        }
    }

    /// Validate the form and submit it. Invalid input never reaches the
    /// network.
    pub fn submit(&mut self) {
        let orchestrator = self.bridge.orchestrator();
        let input = self.form.trip_input();
        let prepared = match self.form.mode {
            Mode::Predict => orchestrator
                .prepare_predict(self.form.model_a().id, &input)
                .map(|request| self.bridge.spawn_predict(request)),
            Mode::Compare => orchestrator
                .prepare_compare(self.form.model_a().id, self.form.model_b().id, &input)
                .map(|request| self.bridge.spawn_compare(request)),
        };
        match prepared {
            Ok(ticket) => {
                debug!(ticket = ticket.get(), mode = self.form.mode.label(), "submitted");
                self.animator.clear();
                self.display = Display::Empty;
                self.status = Some(Status::Info("Calculating...".to_string()));
                self.logs.info(format!(
                    "#{} {} submitted",
                    ticket.get(),
                    self.form.mode.label()
                ));
            }
            Err(err) => {
                let message = err.user_message();
                self.logs.warn(format!("Validation: {err}"));
                self.status = Some(Status::Error(message));
            }
        }
    }

    fn is_current(&self, ticket: RequestTicket) -> bool {
        self.bridge.orchestrator().is_current(ticket)
    }

    fn apply_prediction(&mut self, submission: Submission<PredictResponse>) {
        let ticket = submission.ticket;
        if !self.is_current(ticket) {
            self.logs
                .warn(format!("#{} superseded; result discarded", ticket.get()));
            return;
        }
        match submission.outcome {
            RequestOutcome::Success(response) => {
                self.animator
                    .start(response.metric_target(), Instant::now());
                self.logs.info(format!(
                    "#{} {}: {:.2} MPG",
                    ticket.get(),
                    response.model_display_name,
                    response.predicted_mpg
                ));
                self.status = Some(Status::Success(format!(
                    "Prediction for {}",
                    response.model_display_name
                )));
                self.display = Display::Prediction(response);
            }
            RequestOutcome::Failure(failure) => {
                self.animator.clear();
                self.display = Display::Empty;
                self.logs.error(format!(
                    "#{} {}: {}",
                    ticket.get(),
                    failure.kind,
                    failure.detail
                ));
                self.status = Some(Status::Error(failure.message));
            }
        }
    }

    fn apply_comparison(&mut self, submission: Submission<ComparisonReport>) {
        let ticket = submission.ticket;
        if !self.is_current(ticket) {
            self.logs
                .warn(format!("#{} superseded; result discarded", ticket.get()));
            return;
        }
        self.animator.clear();
        match submission.outcome {
            RequestOutcome::Success(report) => {
                self.logs
                    .info(format!("#{} {}", ticket.get(), report.recommendation()));
                self.status = Some(Status::Success(report.recommendation().to_string()));
                self.display = Display::Comparison(report);
            }
            RequestOutcome::Failure(failure) => {
                self.display = Display::Empty;
                self.logs.error(format!(
                    "#{} {}: {}",
                    ticket.get(),
                    failure.kind,
                    failure.detail
                ));
                self.status = Some(Status::Error(failure.message));
            }
        }
    }

    fn quit(&mut self) {
        self.animator.cancel();
        self.should_quit = true;
    }

    /// Compute the layout.
    ///
    /// Returns (header, form, result, logs, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(8),    // main content
                Constraint::Length(3), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(3)])
            .split(main[0]);

        (outer[0], left[0], main[1], left[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header, form, result, logs, footer) = Self::compute_layout(frame.area());
        let loading = self.is_loading();
        render_header(
            frame,
            header,
            self.greeting.as_deref(),
            self.form.mode,
            loading.then_some(self.ticks),
        );
        render_form(frame, form, &self.form, loading);
        match &self.display {
            Display::Empty => render_placeholder(frame, result),
            Display::Prediction(response) => {
                render_prediction(frame, result, &response.model_display_name, &self.animator);
            }
            Display::Comparison(report) => render_comparison(frame, result, report),
        }
        render_logs(frame, logs, &self.logs);
        render_footer(frame, footer, self.status.as_ref());
    }

    /// Set up the terminal for TUI mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if raw mode or the alternate screen fails.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be restored.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// # Errors
    ///
    /// Returns an I/O error from terminal setup, drawing, or event polling.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if self.should_quit {
                return Ok(());
            }

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(TuiMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }
            if last_tick.elapsed() >= TICK_RATE {
                self.handle_message(TuiMessage::Tick);
                last_tick = Instant::now();
            }

            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuelbud_core::constants::metric_names;
    use fuelbud_core::trip::FILL_ALL_FIELDS;
    use fuelbud_orchestration::error::ServiceError;
    use fuelbud_orchestration::scripted::ScriptedService;
    use ratatui::backend::TestBackend;

    const WAIT: Duration = Duration::from_secs(5);

    fn options() -> AnimationOptions {
        AnimationOptions {
            duration: Duration::from_millis(40),
            steps: 4,
            restart_delay: Duration::from_millis(1),
        }
    }

    fn predicted() -> PredictResponse {
        PredictResponse {
            model_display_name: "C 300 Sedan".into(),
            predicted_mpg: 25.0,
            base_mpg: 23.0,
            fuel_cost: 14.0,
        }
    }

    fn make_app(service: Arc<ScriptedService>) -> TuiApp {
        let orchestrator = Arc::new(RequestOrchestrator::new(service));
        TuiApp::new(orchestrator, options())
    }

    fn fill(app: &mut TuiApp) {
        app.form.distance = "100".into();
        app.form.fuel_used = "4".into();
        app.form.fuel_price = "3.50".into();
    }

    fn run_animation(app: &mut TuiApp) {
        let deadline = Instant::now() + WAIT;
        while app.animator().is_running() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            app.handle_message(TuiMessage::Tick);
        }
    }

    #[test]
    fn initial_state() {
        let app = make_app(Arc::new(ScriptedService::new()));
        assert!(!app.should_quit);
        assert!(matches!(app.display, Display::Empty));
        assert!(app.status.is_none());
        assert!(!app.is_loading());
    }

    #[test]
    fn blank_fields_block_submission() {
        let service = Arc::new(ScriptedService::new());
        let mut app = make_app(service.clone());
        app.handle_key_action(KeyAction::Submit);
        assert_eq!(app.status, Some(Status::Error(FILL_ALL_FIELDS.to_string())));
        assert_eq!(service.predict_calls(), 0);
        assert!(!app.is_loading());
        assert!(matches!(app.display, Display::Empty));
    }

    #[test]
    fn prediction_animates_to_target() {
        let service = Arc::new(ScriptedService::new());
        service.push_predict(Ok(predicted()));
        let mut app = make_app(service);
        fill(&mut app);
        app.handle_key_action(KeyAction::Submit);
        assert!(app.update_blocking(WAIT));
        assert!(matches!(app.display, Display::Prediction(_)));
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 0.0);

        run_animation(&mut app);
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 25.0);
        assert_eq!(app.animator().value(metric_names::FUEL_COST), 14.0);
        assert!(!app.is_loading());
    }

    #[test]
    fn transport_failure_sets_no_target() {
        let service = Arc::new(ScriptedService::new());
        service.push_predict(Err(ServiceError::Transport("refused".into())));
        let mut app = make_app(service);
        fill(&mut app);
        app.handle_key_action(KeyAction::Submit);
        assert!(app.update_blocking(WAIT));
        assert!(matches!(app.display, Display::Empty));
        assert!(app.animator().target().is_none());
        assert!(app.status.as_ref().is_some_and(Status::is_error));
        assert!(app.status.as_ref().unwrap().text().contains("unreachable"));
        assert!(!app.is_loading());
    }

    #[test]
    fn compare_mode_submits_both_models() {
        let service = Arc::new(ScriptedService::new());
        service.push_compare(Ok(ScriptedService::compare_response(20.0, 17.5, None)));
        let mut app = make_app(service.clone());
        fill(&mut app);
        app.handle_key_action(KeyAction::ToggleMode);
        app.handle_key_action(KeyAction::Submit);
        assert!(app.update_blocking(WAIT));
        let Display::Comparison(report) = &app.display else {
            panic!("expected a comparison");
        };
        assert!((report.result.savings - 2.5).abs() < 1e-12);
        let sent = service.last_compare().unwrap();
        assert_eq!(sent.model_a, "c_300");
        assert_eq!(sent.model_b, "e_350");
    }

    #[test]
    fn stale_result_is_discarded() {
        let service = Arc::new(ScriptedService::new());
        let orchestrator = Arc::new(RequestOrchestrator::new(service.clone()));
        let mut app = TuiApp::new(orchestrator.clone(), options());
        service.push_predict(Ok(predicted()));
        let request = orchestrator
            .prepare_predict("c_300", &fuelbud_core::trip::TripInput::new("1", "1", "1"))
            .unwrap();
        let stale = orchestrator.begin("predict");
        let _newer = orchestrator.begin("predict");
        let submission = stale.predict(&request);
        app.handle_message(TuiMessage::Predicted(submission));
        assert!(matches!(app.display, Display::Empty));
        assert!(app
            .logs
            .entries()
            .iter()
            .any(|e| e.text.contains("superseded")));
    }

    #[test]
    fn new_prediction_restarts_from_zero() {
        let service = Arc::new(ScriptedService::new());
        service.push_predict(Ok(predicted()));
        service.push_predict(Ok(PredictResponse {
            predicted_mpg: 40.0,
            ..predicted()
        }));
        let mut app = make_app(service);
        fill(&mut app);
        app.handle_key_action(KeyAction::Submit);
        assert!(app.update_blocking(WAIT));
        run_animation(&mut app);
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 25.0);

        app.handle_key_action(KeyAction::Submit);
        assert!(matches!(app.display, Display::Empty));
        assert!(app.animator().target().is_none());
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 0.0);
        assert_eq!(app.animator().value(metric_names::FUEL_COST), 0.0);

        assert!(app.update_blocking(WAIT));
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 0.0);
        run_animation(&mut app);
        assert_eq!(app.animator().value(metric_names::PREDICTED_MPG), 40.0);
    }

    #[test]
    fn quit_cancels_animation() {
        let service = Arc::new(ScriptedService::new());
        service.push_predict(Ok(predicted()));
        let mut app = make_app(service);
        fill(&mut app);
        app.handle_key_action(KeyAction::Submit);
        assert!(app.update_blocking(WAIT));
        assert!(app.animator().is_running());
        app.handle_message(TuiMessage::Quit);
        assert!(app.should_quit);
        assert!(!app.animator().is_running());
    }

    #[test]
    fn greeting_is_trimmed() {
        let app = make_app(Arc::new(ScriptedService::new())).with_greeting(Some(" Ada "));
        assert_eq!(app.greeting.as_deref(), Some("Hello, Ada"));
        let app = make_app(Arc::new(ScriptedService::new())).with_greeting(Some("  "));
        assert!(app.greeting.is_none());
    }

    #[test]
    fn log_messages_are_recorded() {
        let mut app = make_app(Arc::new(ScriptedService::new()));
        app.sender().send(TuiMessage::Log("hello".into())).unwrap();
        app.update();
        assert_eq!(app.logs.entries()[0].text, "hello");
    }

    #[test]
    fn render_full_view() {
        let mut app =
            make_app(Arc::new(ScriptedService::new())).with_greeting(Some("Ada"));
        app.handle_key_action(KeyAction::Submit);
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();
        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf.buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(content.contains("Hello, Ada"));
        assert!(content.contains("Please fill all fields."));
        assert!(content.contains("Fill the form and press Enter."));
    }
}
