//! Session wiring
//!
//! A [`Session`] owns the capture controller, the input adapters and the
//! presenter. Input and control commands are applied synchronously. Every
//! [`InkAction::Recognize`] spawns a recognition request on the runtime; the
//! result comes back over a channel and is applied by the session itself,
//! so the history and the display are only ever touched from one task.

use ink::{
    CanvasOrigin, CaptureController, History, InkAction, InkSurface, InputModality, MouseInput,
    TouchInput,
};
use scrawl_config::RecognitionConfig;
use scrawl_ipc::{
    ControlCommand, ControlState, EquationInput, MouseEvent, RecognitionResponse, ResultType,
    TouchEvent,
};
use scrawl_recognition::{RecognitionError, Recognizer, RequestId, RequestSequencer};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::presenter::ResultPresenter;

/// Anything the session can be fed
#[derive(Debug, Clone, PartialEq)]
pub enum SessionInput {
    Mouse(MouseEvent),
    Touch(TouchEvent),
    Control(ControlCommand),
}

type Outcome = (RequestId, Result<RecognitionResponse, RecognitionError>);

pub struct Session<R, S, P>
where
    R: Recognizer + Clone + 'static,
    S: InkSurface,
    P: ResultPresenter,
{
    controller: CaptureController<S>,
    mouse: MouseInput,
    touch: TouchInput,
    /// `None` runs the session offline: strokes are captured, nothing is sent
    recognizer: Option<R>,
    presenter: P,
    result_type: ResultType,
    sequencer: RequestSequencer,
    responses_tx: mpsc::UnboundedSender<Outcome>,
    responses_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: usize,
    reported_state: ControlState,
}

impl<R, S, P> Session<R, S, P>
where
    R: Recognizer + Clone + 'static,
    S: InkSurface,
    P: ResultPresenter,
{
    pub fn new(surface: S, recognizer: Option<R>, presenter: P, config: &RecognitionConfig) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        let sequencer = RequestSequencer::new(config.discard_stale_responses);
        if sequencer.discards_stale() {
            info!("Stale recognition responses will be discarded");
        }
        Self {
            controller: CaptureController::new(surface, History::new()),
            mouse: MouseInput::default(),
            touch: TouchInput::default(),
            recognizer,
            presenter,
            result_type: config.result_type,
            sequencer,
            responses_tx,
            responses_rx,
            in_flight: 0,
            reported_state: ControlState::default(),
        }
    }

    /// Interpret page coordinates relative to `origin`
    pub fn with_origin(mut self, origin: CanvasOrigin) -> Self {
        self.mouse = MouseInput::new(origin);
        self.touch = TouchInput::new(origin);
        self
    }

    pub fn controller(&self) -> &CaptureController<S> {
        &self.controller
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn control_state(&self) -> ControlState {
        self.controller.control_state()
    }

    pub fn result_type(&self) -> ResultType {
        self.result_type
    }

    /// Requests sent whose response has not been received yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply one input event or control command
    pub fn handle(&mut self, input: SessionInput) {
        let action = match input {
            SessionInput::Mouse(event) => self.mouse.dispatch(&event, self.controller.as_sink()),
            SessionInput::Touch(event) => self.touch.dispatch(&event, self.controller.as_sink()),
            SessionInput::Control(command) => self.control(command),
        };
        self.perform(action);
    }

    fn control(&mut self, command: ControlCommand) -> InkAction {
        match command {
            ControlCommand::Undo => self.controller.undo(),
            ControlCommand::Redo => self.controller.redo(),
            ControlCommand::Clear => self.controller.clear(),
            ControlCommand::SetResultType(result_type) => self.set_result_type(result_type),
        }
    }

    fn set_result_type(&mut self, result_type: ResultType) -> InkAction {
        info!("Result type set to {}", result_type);
        self.result_type = result_type;
        if self.controller.history().is_empty() {
            InkAction::None
        } else {
            InkAction::Recognize
        }
    }

    fn perform(&mut self, action: InkAction) {
        match action {
            InkAction::None => {}
            InkAction::Recognize => self.submit(),
            InkAction::ClearResult => {
                self.sequencer.supersede();
                self.presenter.clear();
            }
        }

        let state = self.controller.control_state();
        if state != self.reported_state {
            self.reported_state = state;
            self.presenter.control_state_changed(state);
        }
    }

    /// Send the active strokes for recognition
    fn submit(&mut self) {
        let Some(recognizer) = self.recognizer.clone() else {
            debug!("Offline session, skipping recognition");
            return;
        };

        let input = EquationInput::new(self.controller.history().to_components(), self.result_type);
        let id = self.sequencer.issue();
        debug!("Submitting {} with {} strokes", id, input.components.len());

        self.in_flight += 1;
        self.presenter.show_pending();

        let tx = self.responses_tx.clone();
        tokio::spawn(async move {
            let result = recognizer.recognize(input).await;
            // The session may be gone by now
            let _ = tx.send((id, result));
        });
    }

    /// Wait for the next response and apply it
    ///
    /// Returns `None` without waiting when nothing is in flight.
    pub async fn apply_next_response(&mut self) -> Option<RequestId> {
        if self.in_flight == 0 {
            return None;
        }
        let (id, result) = self.responses_rx.recv().await?;
        self.apply_response(id, result);
        Some(id)
    }

    /// Apply every response already received, without waiting
    pub fn try_apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((id, result)) = self.responses_rx.try_recv() {
            self.apply_response(id, result);
            applied += 1;
        }
        applied
    }

    /// Wait for every outstanding request to finish
    pub async fn drain_responses(&mut self) {
        while self.apply_next_response().await.is_some() {}
    }

    fn apply_response(&mut self, id: RequestId, result: Result<RecognitionResponse, RecognitionError>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if !self.sequencer.accept(id) {
            warn!("Discarding stale response to {}", id);
            if self.in_flight == 0 {
                self.presenter.hide_pending();
            }
            return;
        }

        match result {
            Ok(response) => {
                let formula = response.formula();
                info!("Recognized {}: {}", id, formula);
                self.presenter.show_formula(&formula);
                self.presenter.typeset();
            }
            Err(e) => {
                warn!("Recognition {} failed: {}", id, e);
                let (status, body) = e.status_and_body();
                self.presenter.show_error(&status, &body);
            }
        }
        self.presenter.hide_pending();
    }
}
