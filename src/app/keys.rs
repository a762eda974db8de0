use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use color_eyre::Result;

use crate::event::AppEvent;
use crate::login::LoginField;

use super::{App, Screen};

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if is_ctrl(&key_event, 'c') {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        match &self.screen {
            Screen::Login => self.handle_login_key(key_event),
            Screen::RoleSelect { .. } => self.handle_role_select_key(key_event),
            Screen::Dashboard(_) if self.chat_focused => self.handle_chat_key(key_event),
            Screen::Dashboard(_) => self.handle_dashboard_key(key_event),
        }
        Ok(())
    }

    fn handle_login_key(&mut self, key_event: KeyEvent) {
        if is_ctrl(&key_event, 'd') {
            self.login.fill_demo();
            return;
        }
        if is_ctrl(&key_event, 'r') {
            self.login.toggle_password();
            return;
        }

        let on_role = self.login.focus == LoginField::Role;
        match key_event.code {
            KeyCode::Esc => self.events.send(AppEvent::Quit),
            KeyCode::Tab | KeyCode::Down => self.login.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.login.prev_field(),
            KeyCode::Left if on_role => self.login.prev_role(),
            KeyCode::Right | KeyCode::Char(' ') if on_role => self.login.next_role(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.login.backspace(),
            KeyCode::Char(ch) => self.login.handle_input(ch),
            _ => {}
        }
    }

    fn handle_role_select_key(&mut self, key_event: KeyEvent) {
        let Screen::RoleSelect { highlighted } = &mut self.screen else {
            return;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => *highlighted = highlighted.prev(),
            KeyCode::Down | KeyCode::Char('j') => *highlighted = highlighted.next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let role = *highlighted;
                self.enter_dashboard(role);
            }
            _ => {}
        }
    }

    fn handle_dashboard_key(&mut self, key_event: KeyEvent) {
        let Screen::Dashboard(nav) = &mut self.screen else {
            return;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Up | KeyCode::Char('k') => nav.prev_item(),
            KeyCode::Down | KeyCode::Char('j') => nav.next_item(),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_highlighted(),
            KeyCode::Char(digit @ '1'..='3') => {
                self.trigger_quick_action(digit as usize - '1' as usize);
            }
            KeyCode::Char('c') => self.toggle_chat(),
            KeyCode::Char('s') => self.events.send(AppEvent::Logout),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key_event: KeyEvent) {
        if is_ctrl(&key_event, 'l') {
            self.chat.cycle_language();
            return;
        }
        if is_ctrl(&key_event, 'u') {
            self.chat.clear_input();
            return;
        }

        match key_event.code {
            KeyCode::Esc => self.leave_chat(),
            KeyCode::Enter => self.submit_chat(),
            KeyCode::Tab => self.chat.cycle_quick_query(1),
            KeyCode::BackTab => self.chat.cycle_quick_query(-1),
            KeyCode::Backspace => self.chat.backspace(),
            KeyCode::PageUp | KeyCode::Up => self.chat.scroll_up(),
            KeyCode::PageDown | KeyCode::Down => self.chat.scroll_down(),
            KeyCode::Char(ch) => self.chat.handle_input(ch),
            _ => {}
        }
    }
}

fn is_ctrl(key_event: &KeyEvent, ch: char) -> bool {
    key_event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key_event.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
