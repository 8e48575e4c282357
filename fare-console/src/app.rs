//! Console application state and actions

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use fare_client::FareApi;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::form::FormState;
use crate::outcome::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Calculate,
    GenerateBill,
}

impl Action {
    pub fn busy_label(self) -> &'static str {
        match self {
            Action::Calculate => "Calculating fare...",
            Action::GenerateBill => "Generating bill...",
        }
    }
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Run(Action),
    Quit,
}

pub struct App<A> {
    pub form: FormState,
    /// Last action result
    pub outcome: Option<Outcome>,
    /// Action in flight (drawn as the busy indicator)
    pub busy: Option<Action>,
    pub logger_state: TuiWidgetState,
    api: A,
}

impl<A: FareApi> App<A> {
    pub fn new(api: A) -> Self {
        Self {
            form: FormState::new(),
            outcome: None,
            busy: None,
            logger_state: TuiWidgetState::new(),
            api,
        }
    }

    /// Map a key press to a command, editing the form as needed
    pub fn on_key(&mut self, key: KeyEvent) -> Command {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return Command::None;
        }
        match key.code {
            KeyCode::Esc => Command::Quit,
            KeyCode::F(2) => Command::Run(Action::Calculate),
            KeyCode::F(3) => Command::Run(Action::GenerateBill),
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Command::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Command::None
            }
            KeyCode::PageUp => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey);
                Command::None
            }
            KeyCode::PageDown => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey);
                Command::None
            }
            _ => {
                self.form.handle_event(&Event::Key(key));
                Command::None
            }
        }
    }

    /// Run an action to completion
    ///
    /// Form errors stop here without contacting the service.
    pub async fn run(&mut self, action: Action) {
        self.busy = Some(action);
        let outcome = match action {
            Action::Calculate => match self.form.fare_request() {
                Ok(request) => {
                    tracing::info!("Calculating fare");
                    Outcome::from_quote(self.api.calculate(&request).await)
                }
                Err(e) => e.into(),
            },
            Action::GenerateBill => match self.form.save_request() {
                Ok(request) => {
                    tracing::info!("Generating bill");
                    Outcome::from_save(self.api.save_bill(&request).await)
                }
                Err(e) => e.into(),
            },
        };

        match &outcome {
            Outcome::Quote(_) | Outcome::Saved(_) => tracing::info!("{}", outcome.message()),
            Outcome::Offline(_) => tracing::error!("{}", outcome.message()),
            _ => tracing::warn!("{}", outcome.message()),
        }

        self.outcome = Some(outcome);
        self.busy = None;
    }
}
