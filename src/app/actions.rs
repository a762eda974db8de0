use crate::chat::ChatSession;
use crate::event::AppEvent;
use crate::login::LoginForm;
use crate::navigation::NavigationState;
use crate::role::Role;
use crate::router::View;
use crate::{log_debug, log_info, log_warn};

use super::{App, Screen};

impl App {
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::SignInComplete(_) if !self.login.is_signing_in() => {
                log_warn!("Sign-in completion arrived with no sign-in pending");
            }
            AppEvent::SignInComplete(_) => {
                let role = self.login.complete();
                self.enter_dashboard(role);
            }
            AppEvent::Logout => self.logout(),
            AppEvent::ChatReply { session, reply } => {
                if session == self.chat_generation {
                    self.chat.receive_reply(reply);
                } else {
                    log_debug!("Dropping reply for ended chat session {}", session);
                }
            }
        }
    }

    /// Start the sign-in delay if the form is complete.
    pub fn submit_login(&mut self) {
        if let Some(role) = self.login.submit() {
            self.events
                .send_delayed(self.config.login_delay(), AppEvent::SignInComplete(role));
        }
    }

    pub fn enter_dashboard(&mut self, role: Role) {
        tracing::info!(role = %role, "session started");
        log_info!("Dashboard opened for {}", role);
        self.screen = Screen::Dashboard(NavigationState::new(role));
    }

    /// End the session. The next one starts at the login form with a fresh chat.
    pub fn logout(&mut self) {
        if let Some(nav) = self.navigation() {
            tracing::info!(role = %nav.role(), "session ended");
        }
        self.screen = Screen::Login;
        self.login = LoginForm::new();
        self.chat = ChatSession::new();
        self.chat_generation += 1;
        self.chat_open = false;
        self.chat_focused = false;
    }

    pub fn submit_chat(&mut self) {
        if let Some(reply) = self.chat.submit() {
            let event = AppEvent::ChatReply {
                session: self.chat_generation,
                reply,
            };
            self.events.send_delayed(self.config.reply_delay(), event);
        }
    }

    /// Run the `index`th quick action of the current role. Actions without a target do nothing.
    pub fn trigger_quick_action(&mut self, index: usize) {
        let Screen::Dashboard(nav) = &mut self.screen else {
            return;
        };

        let Some(action) = nav.role().profile().quick_actions.get(index) else {
            return;
        };

        match &action.target {
            Some(section) => nav.select(section.clone()),
            None => log_debug!("Quick action '{}' has no target", action.label),
        }
    }

    /// Move to the highlighted sidebar item. Opening the assistant focuses its input.
    pub fn open_highlighted(&mut self) {
        if let Screen::Dashboard(nav) = &mut self.screen {
            nav.select_highlighted();
        }
        if self.current_view() == Some(View::Chat) {
            self.chat_focused = true;
        }
    }

    /// `c` on the dashboard: focus the inline assistant if it is showing, else toggle the overlay.
    pub fn toggle_chat(&mut self) {
        if self.current_view() == Some(View::Chat) {
            self.chat_focused = true;
            return;
        }
        self.chat_open = !self.chat_open;
        self.chat_focused = self.chat_open;
    }

    pub fn leave_chat(&mut self) {
        self.chat_open = false;
        self.chat_focused = false;
    }
}
