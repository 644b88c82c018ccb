//! View state and the filter engine.
//!
//! The catalogue can be narrowed one of two ways: a free-text query or a
//! single selected episode. [`ViewState`] makes the two mutually exclusive
//! by construction, so a stale query can never coexist with an active
//! selection. The visible subset is always recomputed from
//! (catalogue, view state) and never stored as authoritative state.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::Episode;

/// The active way of narrowing the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Free-text filter. An empty query shows the whole catalogue.
    Search(String),
    /// A single selected episode id.
    Selected(u64),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Search(String::new())
    }
}

impl ViewState {
    /// "Show all": back to text mode with an empty query.
    pub fn show_all() -> Self {
        Self::default()
    }
}

/// Compute the visible subset of the catalogue under the given view state.
///
/// Text mode matches `query` case-insensitively against name and summary,
/// keeping catalogue order; an empty query matches everything. Selection
/// mode yields a singleton, or [`crate::error::AppError::SelectionNotFound`]
/// when the id does not resolve. Callers must surface that error rather
/// than render an empty list for it.
pub fn visible<'a>(catalog: &'a Catalog, view: &ViewState) -> Result<Vec<&'a Episode>> {
    match view {
        ViewState::Search(query) => {
            if query.is_empty() {
                return Ok(catalog.all().iter().collect());
            }
            let needle = query.to_lowercase();
            Ok(catalog
                .all()
                .iter()
                .filter(|e| {
                    e.name.to_lowercase().contains(&needle)
                        || e.summary.to_lowercase().contains(&needle)
                })
                .collect())
        }
        ViewState::Selected(id) => Ok(vec![catalog.find(*id)?]),
    }
}
