//! Form application - key handling
//!
//! The App struct owns the FormState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Field, FormState};

/// Form application
#[derive(Debug)]
pub struct App {
    /// Form state
    state: FormState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self { state: FormState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit immediately.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear any transient error message on key press
        self.state.clear_error();

        // Global bindings take precedence over the focused field
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true; // Force quit
            }
            (KeyCode::Esc, _) => {
                self.state.should_quit = true;
                return false;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.state.request_save();
                return false;
            }
            (KeyCode::Tab, _) => {
                self.state.focus = self.state.focus.next();
                return false;
            }
            (KeyCode::BackTab, _) => {
                self.state.focus = self.state.focus.prev();
                return false;
            }
            _ => {}
        }

        match self.state.focus {
            Field::Email => self.handle_email_key(key),
            Field::Sources => self.handle_sources_key(key),
            Field::Interests => self.handle_interests_key(key),
            Field::Frequency => self.handle_frequency_key(key),
            Field::Save => self.handle_save_key(key),
        }

        false
    }

    /// Email field: direct replace on every keystroke
    fn handle_email_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.record.email.push(c);
            }
            KeyCode::Backspace => {
                self.state.record.email.pop();
            }
            KeyCode::Enter | KeyCode::Down => {
                self.state.focus = self.state.focus.next();
            }
            KeyCode::Up => {
                self.state.focus = self.state.focus.prev();
            }
            _ => {}
        }
    }

    /// Source checkboxes: move along the catalog, toggle membership
    fn handle_sources_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.select_prev_source(),
            KeyCode::Right => self.state.select_next_source(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_selected_source(),
            KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::Up => self.state.focus = self.state.focus.prev(),
            _ => {}
        }
    }

    /// Interests: type into the draft, Enter commits, Delete removes
    fn handle_interests_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.new_interest.push(c);
            }
            KeyCode::Backspace => {
                self.state.new_interest.pop();
            }
            KeyCode::Enter => self.state.commit_interest(),
            KeyCode::Up => self.state.select_prev_interest(),
            KeyCode::Down => self.state.select_next_interest(),
            KeyCode::Delete => self.state.remove_selected_interest(),
            _ => {}
        }
    }

    /// Frequency: single-select, stepped left/right
    fn handle_frequency_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.cycle_frequency(false),
            KeyCode::Right | KeyCode::Char(' ') => self.state.cycle_frequency(true),
            KeyCode::Enter | KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::Up => self.state.focus = self.state.focus.prev(),
            _ => {}
        }
    }

    /// Save button
    fn handle_save_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.state.request_save(),
            KeyCode::Down => self.state.focus = self.state.focus.next(),
            KeyCode::Up => self.state.focus = self.state.focus.prev(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_edits_email() {
        let mut app = App::new();

        type_text(&mut app, "a@b.com");
        assert_eq!(app.state().record.email, "a@b.com");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().record.email, "a@b.co");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::new();
        assert_eq!(app.state().focus, Field::Email);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().focus, Field::Sources);

        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.state().focus, Field::Email);
    }

    #[test]
    fn test_space_toggles_source_membership() {
        let mut app = App::new();
        app.state_mut().focus = Field::Sources;

        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state().record.selected_sources, vec!["nzz".to_string()]);

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.state().record.selected_sources.is_empty());

        // Final membership matches the last toggle per source
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.state().record.selected_sources, vec!["economist".to_string()]);
    }

    #[test]
    fn test_draft_commit_via_enter() {
        let mut app = App::new();
        app.state_mut().focus = Field::Interests;

        type_text(&mut app, "Climate");
        assert_eq!(app.state().new_interest, "Climate");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.state().record.interests,
            vec!["Technology".to_string(), "Climate".to_string()]
        );
        assert!(app.state().new_interest.is_empty());
    }

    #[test]
    fn test_duplicate_commit_leaves_list_unchanged() {
        let mut app = App::new();
        app.state_mut().focus = Field::Interests;

        type_text(&mut app, "Technology");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state().record.interests, vec!["Technology".to_string()]);
    }

    #[test]
    fn test_ctrl_s_queues_save_from_any_field() {
        let mut app = App::new();

        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert!(app.state().pending_save);
    }

    #[test]
    fn test_enter_on_save_button_queues_save() {
        let mut app = App::new();
        app.state_mut().focus = Field::Save;

        app.handle_key(key(KeyCode::Enter));
        assert!(app.state().pending_save);
    }

    #[test]
    fn test_ctrl_c_exits_immediately() {
        let mut app = App::new();

        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_esc_requests_quit() {
        let mut app = App::new();

        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(app.state().should_quit);
    }
}
