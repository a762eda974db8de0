mod actions;
mod keys;

use ratatui::{
    crossterm::event::{Event as CrosstermEvent, KeyEventKind},
    DefaultTerminal,
};
use color_eyre::Result;
use throbber_widgets_tui::ThrobberState;

use crate::chat::ChatSession;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::login::LoginForm;
use crate::navigation::NavigationState;
use crate::role::Role;
use crate::router::View;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    /// Authenticated with no role held yet
    RoleSelect { highlighted: Role },
    Dashboard(NavigationState),
}

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub screen: Screen,
    pub config: AppConfig,
    pub login: LoginForm,
    /// Shared by the "AI Assistant" section and the floating overlay
    pub chat: ChatSession,
    /// Bumped on logout so replies scheduled by an earlier session are dropped
    pub chat_generation: u64,
    pub chat_open: bool,
    pub chat_focused: bool,
    pub throbber: ThrobberState,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`] reading from the terminal.
    pub fn new(config: AppConfig) -> Self {
        let events = EventHandler::new(config.tick_rate());
        Self::with_events(config, events)
    }

    pub fn with_events(config: AppConfig, events: EventHandler) -> Self {
        let screen = if config.skip_login {
            Screen::RoleSelect { highlighted: Role::default() }
        } else {
            Screen::Login
        };

        Self {
            running: true,
            screen,
            config,
            login: LoginForm::new(),
            chat: ChatSession::new(),
            chat_generation: 0,
            chat_open: false,
            chat_focused: false,
            throbber: ThrobberState::default(),
            events,
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        tracing::info!(screen = ?self.screen, "EduTrack started");
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                // save power
                needs_redraw = false;
            }

            let event = self.events.next().await?;
            needs_redraw = self.handle_event(event)?;
        }

        tracing::info!("EduTrack stopped");
        Ok(())
    }

    /// Apply one event. Returns whether the screen needs redrawing.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Tick => Ok(self.tick()),
            Event::Crossterm(event) => match event {
                CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_events(key_event)?;
                    Ok(true)
                }
                CrosstermEvent::Resize(_, _) => Ok(true),
                _ => Ok(false),
            },
            Event::App(app_event) => {
                self.handle_app_event(app_event);
                Ok(true)
            }
        }
    }

    /// Advance the spinner while something is pending.
    pub fn tick(&mut self) -> bool {
        if self.login.is_signing_in() || self.chat.is_composing() {
            self.throbber.calc_next();
            true
        } else {
            false
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigation(&self) -> Option<&NavigationState> {
        match &self.screen {
            Screen::Dashboard(nav) => Some(nav),
            _ => None,
        }
    }

    pub fn current_view(&self) -> Option<View> {
        self.navigation().map(|nav| nav.current_view().view)
    }
}
