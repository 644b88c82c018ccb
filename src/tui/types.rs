//! TUI type definitions for screens, focus, and actions.

/// The current screen/view of the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Waiting for the catalogue fetch to resolve
    Loading,
    /// Browsing the loaded catalogue
    Browse,
    /// The catalogue fetch failed
    LoadFailed,
}

/// Focus state for the split-panel browse view.
#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    /// The episode selector panel
    Selector,
    /// The rendered card list
    Episodes,
}

/// Actions that can be returned from the TUI.
///
/// All filtering and selection happens synchronously inside [`super::App`],
/// so the event loop only needs to know when to stop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action, continue running
    None,
    /// Quit the application
    Quit,
}

/// One entry in the selector panel.
///
/// `id` is `None` for the synthetic "show all" entry that heads the list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    pub id: Option<u64>,
    pub label: String,
}
