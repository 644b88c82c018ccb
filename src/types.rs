//! Type definitions for the episode-browser application.
//!
//! This module contains the core data structures used throughout the
//! application for representing episodes, plus the episode code formatter.

use serde::Deserialize;

/// Format a season/number pair as a fixed-width episode code.
///
/// Each component is zero-padded to at least two digits. Components of
/// 100 or more keep their natural width rather than being truncated.
///
/// # Examples
///
/// ```
/// use episode_browser::types::episode_code;
///
/// assert_eq!(episode_code(2, 7), "S02E07");
/// assert_eq!(episode_code(10, 1), "S10E01");
/// assert_eq!(episode_code(1, 100), "S01E100");
/// ```
pub fn episode_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}

/// One episode of the catalogued show.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Episode {
    /// Unique identifier for the episode.
    pub id: u64,

    /// Display title of the episode.
    pub name: String,

    /// Season the episode belongs to.
    pub season: u32,

    /// Episode number within the season.
    pub number: u32,

    /// Medium-resolution image URL, when the provider supplies one.
    pub image: Option<String>,

    /// Descriptive text. May contain markup; displayed verbatim.
    pub summary: String,
}

impl Episode {
    /// The `SxxEyy` code for this episode.
    pub fn code(&self) -> String {
        episode_code(self.season, self.number)
    }

    /// Format the episode for display in the selector panel.
    ///
    /// # Examples
    ///
    /// ```
    /// use episode_browser::types::Episode;
    ///
    /// let ep = Episode {
    ///     id: 1,
    ///     name: "Pilot".to_string(),
    ///     season: 1,
    ///     number: 1,
    ///     image: None,
    ///     summary: String::new(),
    /// };
    /// assert_eq!(ep.to_display(), "S01E01 - Pilot");
    /// ```
    pub fn to_display(&self) -> String {
        format!("{} - {}", self.code(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: u64, name: &str, season: u32, number: u32) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season,
            number,
            image: None,
            summary: String::new(),
        }
    }

    #[test]
    fn test_episode_code_pads_to_two_digits() {
        assert_eq!(episode_code(2, 7), "S02E07");
        assert_eq!(episode_code(10, 1), "S10E01");
    }

    #[test]
    fn test_episode_code_keeps_wide_components() {
        assert_eq!(episode_code(1, 100), "S01E100");
        assert_eq!(episode_code(100, 100), "S100E100");
    }

    #[test]
    fn test_episode_code_zero_values() {
        assert_eq!(episode_code(0, 0), "S00E00");
    }

    #[test]
    fn test_episode_code_method_matches_free_function() {
        let ep = episode(5, "Return", 2, 1);
        assert_eq!(ep.code(), episode_code(2, 1));
    }

    #[test]
    fn test_episode_to_display() {
        let ep = episode(1, "Winter Is Coming", 1, 1);
        assert_eq!(ep.to_display(), "S01E01 - Winter Is Coming");
    }
}
