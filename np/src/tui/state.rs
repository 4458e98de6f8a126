//! Form state for the preferences editor
//!
//! Pure data structures for the form. No rendering logic here; the views
//! module reads this state and the app module mutates it on key events.
//!
//! The save acknowledgment is a one-shot deadline that is replaced (never
//! stacked) when a save lands while a previous acknowledgment is showing.

use std::time::{Duration, Instant};

use prefstore::{Frequency, PreferencesRecord, SOURCE_CATALOG};

/// Form fields, in focus traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Email,
    Sources,
    Interests,
    Frequency,
    Save,
}

/// Focus traversal order (Tab / Shift+Tab)
pub const FIELD_ORDER: [Field; 5] = [Field::Email, Field::Sources, Field::Interests, Field::Frequency, Field::Save];

impl Field {
    fn index(self) -> usize {
        match self {
            Self::Email => 0,
            Self::Sources => 1,
            Self::Interests => 2,
            Self::Frequency => 3,
            Self::Save => 4,
        }
    }

    /// Next field in traversal order, wrapping
    pub fn next(self) -> Field {
        FIELD_ORDER[(self.index() + 1) % FIELD_ORDER.len()]
    }

    /// Previous field in traversal order, wrapping
    pub fn prev(self) -> Field {
        FIELD_ORDER[(self.index() + FIELD_ORDER.len() - 1) % FIELD_ORDER.len()]
    }

    /// Display name for the footer hint
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Email => "Email address",
            Self::Sources => "News sources",
            Self::Interests => "Interests",
            Self::Frequency => "Frequency",
            Self::Save => "Save",
        }
    }
}

/// Main form state
#[derive(Debug)]
pub struct FormState {
    /// Working copy of the preferences record
    pub record: PreferencesRecord,
    /// Uncommitted interest draft
    pub new_interest: String,
    /// Which field has focus
    pub focus: Field,
    /// Cursor within the source catalog
    pub source_cursor: usize,
    /// Cursor within the committed interests list
    pub interest_cursor: usize,
    /// Should the app quit
    pub should_quit: bool,
    /// Last error message (shown in the footer)
    pub error_message: Option<String>,
    /// Save queued for the runner to execute on the next tick
    pub pending_save: bool,
    /// When the save acknowledgment label reverts
    save_ack_until: Option<Instant>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// Create fresh form state with default field values
    pub fn new() -> Self {
        Self {
            record: PreferencesRecord::default(),
            new_interest: String::new(),
            focus: Field::default(),
            source_cursor: 0,
            interest_cursor: 0,
            should_quit: false,
            error_message: None,
            pending_save: false,
            save_ack_until: None,
        }
    }

    /// Mount: replace the working record with the stored one
    pub fn hydrate(&mut self, record: PreferencesRecord) {
        self.record = record;
        self.clamp_cursors();
    }

    /// Snapshot of all fields, as written on save
    pub fn snapshot(&self) -> PreferencesRecord {
        self.record.clone()
    }

    /// Commit the interest draft; silent no-op for empty or duplicate drafts
    pub fn commit_interest(&mut self) {
        let draft = self.new_interest.clone();
        if self.record.add_interest(&draft) {
            self.new_interest.clear();
            self.interest_cursor = self.record.interests.len() - 1;
        }
    }

    /// Remove the interest under the cursor
    pub fn remove_selected_interest(&mut self) {
        if let Some(interest) = self.record.interests.get(self.interest_cursor).cloned() {
            self.record.remove_interest(&interest);
            self.clamp_cursors();
        }
    }

    /// Flip the source under the cursor
    pub fn toggle_selected_source(&mut self) {
        if let Some(source) = SOURCE_CATALOG.get(self.source_cursor) {
            self.record.toggle_source(source.id);
        }
    }

    /// Step the frequency selection forward or backward
    ///
    /// Unset frequency enters the cycle at its nearest end; once set it can
    /// only be replaced, never cleared interactively.
    pub fn cycle_frequency(&mut self, forward: bool) {
        let all = Frequency::ALL;
        let next = match self.record.frequency {
            None => {
                if forward {
                    all[0]
                } else {
                    all[all.len() - 1]
                }
            }
            Some(current) => {
                let idx = all.iter().position(|f| *f == current).unwrap_or(0);
                if forward {
                    all[(idx + 1) % all.len()]
                } else {
                    all[(idx + all.len() - 1) % all.len()]
                }
            }
        };
        self.record.frequency = Some(next);
    }

    /// Queue a save for the runner to execute
    pub fn request_save(&mut self) {
        self.pending_save = true;
    }

    /// Consume the queued save flag
    pub fn take_pending_save(&mut self) -> bool {
        std::mem::take(&mut self.pending_save)
    }

    /// Record a completed save; replaces any previous acknowledgment deadline
    pub fn mark_saved(&mut self, now: Instant, ack: Duration) {
        self.save_ack_until = Some(now + ack);
    }

    /// Is the save acknowledgment label currently showing
    pub fn save_ack(&self) -> bool {
        self.save_ack_until.is_some()
    }

    /// Tick - expire the acknowledgment deadline
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.save_ack_until
            && now >= deadline
        {
            self.save_ack_until = None;
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn select_next_source(&mut self) {
        if self.source_cursor + 1 < SOURCE_CATALOG.len() {
            self.source_cursor += 1;
        }
    }

    pub fn select_prev_source(&mut self) {
        if self.source_cursor > 0 {
            self.source_cursor -= 1;
        }
    }

    pub fn select_next_interest(&mut self) {
        if !self.record.interests.is_empty() && self.interest_cursor < self.record.interests.len() - 1 {
            self.interest_cursor += 1;
        }
    }

    pub fn select_prev_interest(&mut self) {
        if self.interest_cursor > 0 {
            self.interest_cursor -= 1;
        }
    }

    /// Ensure cursors stay within bounds after list edits
    fn clamp_cursors(&mut self) {
        if self.record.interests.is_empty() {
            self.interest_cursor = 0;
        } else if self.interest_cursor >= self.record.interests.len() {
            self.interest_cursor = self.record.interests.len() - 1;
        }

        if self.source_cursor >= SOURCE_CATALOG.len() {
            self.source_cursor = SOURCE_CATALOG.len().saturating_sub(1);
        }
    }
}
