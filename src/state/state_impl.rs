use crate::app::SessionSaveSender;
use crate::config::ScopeHotkeys;
use crate::router::{Router, Screen};
use log::*;
use ratatui::widgets::ListState;

use super::home::{sample_entries, ListEntry, Snackbar, DEFAULT_SNACKBAR_TICKS};
use super::navigation::{Destination, SavedNavigation};

/// Maximum number of log entries kept for the log pane.
///
const MAX_LOG_ENTRIES: usize = 1000;

/// Houses data representative of the top-level surface.
///
pub struct State {
    session_sender: Option<SessionSaveSender>,
    router: Router,
    entries: Vec<ListEntry>,
    entries_list_state: ListState,
    snackbar: Option<Snackbar>,
    snackbar_ticks: u32,
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>,
    show_log: bool,
    theme: crate::ui::Theme,
    hotkeys: ScopeHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let mut entries_list_state = ListState::default();
        entries_list_state.select(Some(0));
        State {
            session_sender: None,
            router: Router::new(),
            entries: sample_entries(),
            entries_list_state,
            snackbar: None,
            snackbar_ticks: DEFAULT_SNACKBAR_TICKS,
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            show_log: false,
            theme: crate::ui::Theme::default(),
            hotkeys: ScopeHotkeys::default(),
        }
    }
}

impl State {
    /// Build the state of a freshly shown surface, restoring the navigation
    /// from the given snapshot.
    ///
    pub fn new(
        session_sender: Option<SessionSaveSender>,
        saved: SavedNavigation,
        theme: crate::ui::Theme,
        hotkeys: ScopeHotkeys,
        snackbar_ticks: u32,
        show_log: bool,
    ) -> Self {
        State {
            session_sender,
            router: Router::restore(saved),
            theme,
            hotkeys,
            snackbar_ticks,
            show_log,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Get the hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ScopeHotkeys {
        &self.hotkeys
    }

    /// Return the current destination.
    ///
    pub fn current_destination(&self) -> Destination {
        self.router.current()
    }

    /// Return the screen for the current destination.
    ///
    pub fn current_screen(&self) -> Screen {
        self.router.screen()
    }

    /// Select a destination.
    ///
    pub fn select_destination(&mut self, destination: Destination) -> &mut Self {
        let before = self.router.current();
        self.router.select(destination);
        self.after_navigation(before)
    }

    /// Select the destination to the right in the navigation bar.
    ///
    pub fn next_destination(&mut self) -> &mut Self {
        let before = self.router.current();
        self.router.next();
        self.after_navigation(before)
    }

    /// Select the destination to the left in the navigation bar.
    ///
    pub fn previous_destination(&mut self) -> &mut Self {
        let before = self.router.current();
        self.router.previous();
        self.after_navigation(before)
    }

    /// Take a snapshot of the navigation.
    ///
    pub fn save_navigation(&self) -> SavedNavigation {
        self.router.save()
    }

    fn after_navigation(&mut self, before: Destination) -> &mut Self {
        if before != self.router.current() {
            info!("Showing {}", self.router.current().label());
            self.request_session_save();
        }
        self
    }

    fn request_session_save(&self) {
        if let Some(sender) = &self.session_sender {
            if let Err(err) = sender.send(self.router.save()) {
                error!("Failed to request session save: {}", err);
            }
        }
    }

    /// Return the Home list entries.
    ///
    pub fn get_entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Return the list state of the Home entries.
    ///
    pub fn get_entries_list_state(&mut self) -> &mut ListState {
        &mut self.entries_list_state
    }

    /// Return the index of the selected Home entry.
    ///
    pub fn selected_entry_index(&self) -> Option<usize> {
        self.entries_list_state.selected()
    }

    /// Select the next Home entry, wrapping to the first.
    ///
    pub fn next_entry(&mut self) -> &mut Self {
        if self.entries.is_empty() {
            return self;
        }
        let next = match self.entries_list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.entries_list_state.select(Some(next));
        self
    }

    /// Select the previous Home entry, wrapping to the last.
    ///
    pub fn previous_entry(&mut self) -> &mut Self {
        if self.entries.is_empty() {
            return self;
        }
        let previous = match self.entries_list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.entries_list_state.select(Some(previous));
        self
    }

    /// Activate the selected Home entry, showing a snackbar for it.
    ///
    pub fn activate_entry(&mut self) -> &mut Self {
        let headline = self
            .entries_list_state
            .selected()
            .and_then(|i| self.entries.get(i))
            .map(|entry| entry.headline.clone());
        if let Some(headline) = headline {
            info!("Activated '{}'", headline);
            self.show_snackbar(format!("Clicked: {}", headline));
        }
        self
    }

    /// Show a snackbar, replacing any visible one.
    ///
    pub fn show_snackbar(&mut self, message: String) -> &mut Self {
        self.snackbar = Some(Snackbar::new(message, self.snackbar_ticks));
        self
    }

    /// Remove the visible snackbar.
    ///
    pub fn dismiss_snackbar(&mut self) -> &mut Self {
        self.snackbar = None;
        self
    }

    /// Return the visible snackbar.
    ///
    pub fn get_snackbar(&self) -> Option<&Snackbar> {
        self.snackbar.as_ref()
    }

    /// Advance time-based state by one tick.
    ///
    pub fn tick(&mut self) -> &mut Self {
        if let Some(snackbar) = self.snackbar.as_mut() {
            if !snackbar.tick() {
                self.snackbar = None;
            }
        }
        self
    }

    /// Whether the log pane should be drawn.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log || self.debug_mode
    }

    /// Enter debug mode for navigating logs.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        // Start on the most recent log
        self.debug_index = self.debug_entries.len().saturating_sub(1);
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Check if in debug mode.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Get current debug index.
    ///
    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            self.debug_index = (self.debug_index + 1) % self.debug_entries.len();
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            if self.debug_index == 0 {
                self.debug_index = self.debug_entries.len() - 1;
            } else {
                self.debug_index -= 1;
            }
        }
        self
    }

    /// Add a log entry to the debug buffer.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.debug_entries.push(entry);
        if self.debug_entries.len() > MAX_LOG_ENTRIES {
            self.debug_entries.remove(0);
            self.debug_index = self.debug_index.saturating_sub(1);
        }
        // Outside debug mode the pane follows the newest entry
        if !self.debug_mode {
            self.debug_index = self.debug_entries.len() - 1;
        }
    }

    /// Get debug entries for rendering (read-only access).
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }
}
