//! The episode catalogue: the single source of truth for the loaded dataset.
//!
//! A [`Catalog`] is populated exactly once from the provider result and is
//! read-only afterwards. Everything the UI shows is derived from it.

use crate::error::{AppError, Result};
use crate::types::Episode;
use log::warn;
use std::collections::HashSet;

/// The full episode dataset, in provider order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    episodes: Vec<Episode>,
}

impl Catalog {
    /// Build a catalogue from the provider's episode list.
    ///
    /// Provider order is preserved. Ids are required to be unique; if the
    /// provider repeats one, the first occurrence wins and later duplicates
    /// are dropped.
    pub fn new(episodes: Vec<Episode>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(episodes.len());

        for episode in episodes {
            if seen.insert(episode.id) {
                unique.push(episode);
            } else {
                warn!(
                    "Dropping duplicate episode id {} ({})",
                    episode.id, episode.name
                );
            }
        }

        Self { episodes: unique }
    }

    /// All episodes in catalogue order.
    pub fn all(&self) -> &[Episode] {
        &self.episodes
    }

    /// Total number of episodes.
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Whether the catalogue holds no episodes.
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    /// Look up an episode by id.
    pub fn get(&self, id: u64) -> Option<&Episode> {
        self.episodes.iter().find(|e| e.id == id)
    }

    /// Look up an episode by id, failing loudly when it is absent.
    pub fn find(&self, id: u64) -> Result<&Episode> {
        self.get(id).ok_or(AppError::SelectionNotFound(id))
    }
}
