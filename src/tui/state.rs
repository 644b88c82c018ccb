//! Application state management and input handling.
//!
//! [`App`] wires the two input surfaces (search bar and selector panel) to
//! the filter engine. Both are observers of the same catalogue and view
//! state; entering one narrowing mode makes the other inert until it is
//! re-entered.

use crate::catalog::Catalog;
use crate::types::Episode;
use crate::view::{self, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use super::types::{Action, Focus, Screen, SelectorOption};

/// Label of the synthetic first selector entry.
pub const SHOW_ALL_LABEL: &str = "-- Show all episodes --";

/// Application state for the TUI.
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Current focus (selector or episode list)
    pub focus: Focus,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Literal contents of the search bar. Kept, but inert, while a
    /// selection is active; typing re-enters text mode.
    pub search_input: String,
    /// Whether the search bar is focused
    pub search_focused: bool,
    /// The loaded catalogue (empty until the fetch resolves)
    pub catalog: Catalog,
    /// Active narrowing mode
    pub view: ViewState,
    /// Selector entries, derived once from the catalogue
    pub selector_options: Vec<SelectorOption>,
    /// List state for the selector panel
    pub selector_state: ListState,
    /// List state for the episode card list
    pub episode_list_state: ListState,
    /// Error message shown as a popup (recoverable errors)
    pub error_message: Option<String>,
    /// Error message for a failed catalogue load
    pub load_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App in the loading state.
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            focus: Focus::Episodes,
            should_quit: false,
            search_input: String::new(),
            search_focused: false,
            catalog: Catalog::default(),
            view: ViewState::default(),
            selector_options: Vec::new(),
            selector_state: ListState::default(),
            episode_list_state: ListState::default(),
            error_message: None,
            load_error: None,
        }
    }

    /// Populate the catalogue and derive the selector options.
    ///
    /// Called exactly once, after the provider fetch succeeds. The option
    /// list is built here, in dataset order, headed by the synthetic
    /// "show all" entry, and is never rebuilt during rendering.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        let mut options = Vec::with_capacity(catalog.len() + 1);
        options.push(SelectorOption {
            id: None,
            label: SHOW_ALL_LABEL.to_string(),
        });
        for episode in catalog.all() {
            options.push(SelectorOption {
                id: Some(episode.id),
                label: episode.to_display(),
            });
        }

        self.catalog = catalog;
        self.selector_options = options;
        self.selector_state.select(Some(0));
        self.episode_list_state.select(Some(0));
        self.view = ViewState::default();
        self.screen = Screen::Browse;
    }

    /// Enter the failed-load state.
    pub fn set_load_error(&mut self, message: &str) {
        self.load_error = Some(message.to_string());
        self.screen = Screen::LoadFailed;
    }

    /// Set a recoverable error message.
    pub fn set_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }

    /// Clear the recoverable error message.
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// The episodes visible under the current view state.
    ///
    /// Always recomputed from (catalogue, view state). A selection that no
    /// longer resolves is reported as an empty list here only after the
    /// error has been surfaced via [`Self::set_error`] at selection time;
    /// the catalogue is immutable, so a validated selection stays valid.
    pub fn visible_episodes(&self) -> Vec<&Episode> {
        match view::visible(&self.catalog, &self.view) {
            Ok(episodes) => episodes,
            Err(_) => Vec::new(),
        }
    }

    /// Number of episodes currently shown, for the counter.
    pub fn shown_count(&self) -> usize {
        if self.screen == Screen::Browse {
            self.visible_episodes().len()
        } else {
            0
        }
    }

    /// Total episodes in the catalogue, for the counter.
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Switch to text mode with the current search bar contents.
    fn apply_search(&mut self) {
        self.view = ViewState::Search(self.search_input.clone());
        self.episode_list_state.select(Some(0));
    }

    /// Select an episode by id, or re-enter "show all" for `None`.
    ///
    /// An id that does not resolve surfaces an error and leaves the
    /// previous view state intact.
    pub fn select_option(&mut self, id: Option<u64>) {
        match id {
            None => {
                self.view = ViewState::show_all();
                self.episode_list_state.select(Some(0));
            }
            Some(id) => match self.catalog.find(id) {
                Ok(_) => {
                    self.view = ViewState::Selected(id);
                    self.episode_list_state.select(Some(0));
                }
                Err(e) => self.set_error(&e.to_string()),
            },
        }
    }

    /// Handle keyboard input and return an action.
    pub fn handle_input(&mut self, key: KeyEvent) -> Action {
        // Global quit with Ctrl+C or Ctrl+Q
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Action::Quit;
                }
                _ => {}
            }
        }

        // Any keypress dismisses a recoverable error popup first.
        if self.error_message.is_some() {
            self.clear_error();
            return Action::None;
        }

        if self.search_focused {
            return self.handle_search_bar_input(key);
        }

        match self.screen {
            Screen::Browse => self.handle_browse_input(key),
            Screen::Loading | Screen::LoadFailed => match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    Action::Quit
                }
                _ => Action::None,
            },
        }
    }

    /// Live search: every change to the query recomputes the view state.
    fn handle_search_bar_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => {
                self.search_input.push(c);
                self.apply_search();
                Action::None
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                self.apply_search();
                Action::None
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.search_focused = false;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('/') => {
                self.search_focused = true;
                // Focusing the bar re-enters text mode with its contents.
                self.apply_search();
                Action::None
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Selector => Focus::Episodes,
                    Focus::Episodes => Focus::Selector,
                };
                Action::None
            }
            KeyCode::Esc => {
                self.select_option(None);
                Action::None
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                Action::Quit
            }
            _ => match self.focus {
                Focus::Selector => self.handle_selector_input(key),
                Focus::Episodes => self.handle_episode_list_input(key),
            },
        }
    }

    fn handle_selector_input(&mut self, key: KeyEvent) -> Action {
        if matches!(key.code, KeyCode::Up | KeyCode::Char('k')) {
            let i = self.selector_state.selected().unwrap_or(0);
            if i > 0 {
                self.selector_state.select(Some(i - 1));
            }
            Action::None
        } else if matches!(key.code, KeyCode::Down | KeyCode::Char('j')) {
            let i = self.selector_state.selected().unwrap_or(0);
            if i < self.selector_options.len().saturating_sub(1) {
                self.selector_state.select(Some(i + 1));
            }
            Action::None
        } else if key.code == KeyCode::Enter {
            if let Some(i) = self.selector_state.selected() {
                if let Some(option) = self.selector_options.get(i) {
                    let id = option.id;
                    self.select_option(id);
                }
            }
            Action::None
        } else {
            Action::None
        }
    }

    fn handle_episode_list_input(&mut self, key: KeyEvent) -> Action {
        let visible_len = self.visible_episodes().len();

        if matches!(key.code, KeyCode::Up | KeyCode::Char('k')) {
            let i = self.episode_list_state.selected().unwrap_or(0);
            if i > 0 {
                self.episode_list_state.select(Some(i - 1));
            }
            Action::None
        } else if matches!(key.code, KeyCode::Down | KeyCode::Char('j')) {
            let i = self.episode_list_state.selected().unwrap_or(0);
            if i < visible_len.saturating_sub(1) {
                self.episode_list_state.select(Some(i + 1));
            }
            Action::None
        } else {
            Action::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: u64, name: &str, season: u32, number: u32, summary: &str) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season,
            number,
            image: None,
            summary: summary.to_string(),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.set_catalog(Catalog::new(vec![
            episode(1, "Pilot", 1, 1, "The story begins."),
            episode(2, "Second", 1, 2, "Things escalate."),
            episode(3, "Return", 2, 1, "An old face."),
        ]));
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_set_catalog_builds_selector_options_once() {
        let app = loaded_app();
        assert_eq!(app.selector_options.len(), 4);
        assert_eq!(app.selector_options[0].id, None);
        assert_eq!(app.selector_options[0].label, SHOW_ALL_LABEL);
        assert_eq!(app.selector_options[1].label, "S01E01 - Pilot");
        assert_eq!(app.selector_options[3].label, "S02E01 - Return");
        assert_eq!(app.screen, Screen::Browse);
    }

    #[test]
    fn test_initial_counter_shows_all() {
        let app = loaded_app();
        assert_eq!(app.shown_count(), 3);
        assert_eq!(app.total_count(), 3);
    }

    #[test]
    fn test_typing_filters_live() {
        let mut app = loaded_app();
        app.handle_input(press(KeyCode::Char('/')));
        assert!(app.search_focused);

        for c in "ret".chars() {
            app.handle_input(press(KeyCode::Char(c)));
        }

        assert_eq!(app.view, ViewState::Search("ret".to_string()));
        let shown = app.visible_episodes();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Return");
        assert_eq!(app.shown_count(), 1);
        assert_eq!(app.total_count(), 3);
    }

    #[test]
    fn test_backspace_widens_filter() {
        let mut app = loaded_app();
        app.handle_input(press(KeyCode::Char('/')));
        app.handle_input(press(KeyCode::Char('x')));
        assert_eq!(app.shown_count(), 0);
        assert_eq!(app.total_count(), 3);

        app.handle_input(press(KeyCode::Backspace));
        assert_eq!(app.shown_count(), 3);
    }

    #[test]
    fn test_selection_overrides_text_filter() {
        let mut app = loaded_app();
        app.handle_input(press(KeyCode::Char('/')));
        app.handle_input(press(KeyCode::Char('r')));
        app.handle_input(press(KeyCode::Enter)); // unfocus, query stays

        app.select_option(Some(2));
        assert_eq!(app.view, ViewState::Selected(2));
        // Literal search text is retained but inert.
        assert_eq!(app.search_input, "r");
        let shown = app.visible_episodes();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Second");
    }

    #[test]
    fn test_typing_re_enters_text_mode_after_selection() {
        let mut app = loaded_app();
        app.select_option(Some(2));
        app.handle_input(press(KeyCode::Char('/')));
        app.handle_input(press(KeyCode::Char('p')));

        assert!(matches!(app.view, ViewState::Search(_)));
    }

    #[test]
    fn test_unknown_selection_surfaces_error_and_keeps_view() {
        let mut app = loaded_app();
        app.select_option(Some(2));
        let before = app.view.clone();

        app.select_option(Some(99));
        assert!(app.error_message.is_some());
        assert_eq!(app.view, before);
        assert_eq!(app.shown_count(), 1);
    }

    #[test]
    fn test_show_all_round_trip() {
        let mut app = loaded_app();
        app.select_option(Some(3));
        assert_eq!(app.shown_count(), 1);

        app.select_option(None);
        assert_eq!(app.view, ViewState::show_all());
        assert_eq!(app.shown_count(), 3);
        let ids: Vec<_> = app.visible_episodes().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_selector_enter_selects_highlighted_episode() {
        let mut app = loaded_app();
        app.focus = Focus::Selector;
        app.handle_input(press(KeyCode::Down));
        app.handle_input(press(KeyCode::Down));
        app.handle_input(press(KeyCode::Enter));

        assert_eq!(app.view, ViewState::Selected(2));
    }

    #[test]
    fn test_selector_enter_on_first_entry_shows_all() {
        let mut app = loaded_app();
        app.select_option(Some(1));
        app.focus = Focus::Selector;
        app.selector_state.select(Some(0));
        app.handle_input(press(KeyCode::Enter));

        assert_eq!(app.view, ViewState::show_all());
    }

    #[test]
    fn test_load_failure_counter_is_zero_zero() {
        let mut app = App::new();
        app.set_load_error("Network error: connection refused");
        assert_eq!(app.screen, Screen::LoadFailed);
        assert_eq!(app.shown_count(), 0);
        assert_eq!(app.total_count(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = loaded_app();
        assert_eq!(app.handle_input(press(KeyCode::Char('q'))), Action::Quit);

        let mut app = loaded_app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_input(ctrl_c), Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_any_key_dismisses_error_popup() {
        let mut app = loaded_app();
        app.set_error("boom");
        app.handle_input(press(KeyCode::Char('j')));
        assert!(app.error_message.is_none());
    }
}
