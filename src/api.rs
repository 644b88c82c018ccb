//! API client for the TVMaze episode provider.
//!
//! This module fetches a show's full episode catalogue in one request and
//! converts the wire records into [`Episode`] values, skipping malformed
//! entries instead of failing the whole load.

use crate::error::{AppError, Result};
use crate::types::Episode;
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

const USER_AGENT: &str = "episode-browser/0.1";

/// Request timeout for the single catalogue fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw episode record as returned by the TVMaze API.
///
/// Every field is optional at the wire level; [`convert_record`] decides
/// which omissions make a record unusable.
#[derive(Debug, Deserialize)]
pub struct RawEpisode {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub season: Option<u32>,
    pub number: Option<u32>,
    #[serde(default)]
    pub image: Option<RawImage>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Image URLs attached to a raw episode record.
#[derive(Debug, Deserialize)]
pub struct RawImage {
    pub medium: Option<String>,
}

/// Convert one wire record into an [`Episode`].
///
/// An id, a non-empty name, and season/number are required; a record
/// missing any of them is malformed. Image and summary may be absent,
/// the renderer degrades gracefully for both.
pub fn convert_record(raw: RawEpisode) -> Result<Episode> {
    let id = raw
        .id
        .ok_or_else(|| AppError::MalformedRecord("record has no id".to_string()))?;

    let name = match raw.name {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AppError::MalformedRecord(format!(
                "episode {} has no name",
                id
            )));
        }
    };

    let season = raw
        .season
        .ok_or_else(|| AppError::MalformedRecord(format!("episode {} has no season", id)))?;
    let number = raw
        .number
        .ok_or_else(|| AppError::MalformedRecord(format!("episode {} has no number", id)))?;

    Ok(Episode {
        id,
        name,
        season,
        number,
        image: raw.image.and_then(|i| i.medium),
        summary: raw.summary.unwrap_or_default(),
    })
}

/// Convert a batch of wire records, skipping malformed ones.
///
/// A single bad entry is isolated with a warning rather than aborting
/// the load.
pub fn convert_records(raw: Vec<RawEpisode>) -> Vec<Episode> {
    raw.into_iter()
        .filter_map(|record| match convert_record(record) {
            Ok(episode) => Some(episode),
            Err(e) => {
                warn!("Skipping record: {}", e);
                None
            }
        })
        .collect()
}

/// Fetch the full episode catalogue for a show.
///
/// One GET of `{base}/shows/{id}/episodes`, single attempt, no retry.
/// Transport failures, error statuses, and undecodable bodies all map to
/// a load failure the caller recovers from with a visible error state.
pub async fn fetch_episodes(api_url: &str, show_id: u64) -> Result<Vec<Episode>> {
    let url = format!(
        "{}/shows/{}/episodes",
        api_url.trim_end_matches('/'),
        show_id
    );
    debug!("Fetching episodes from {}", url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let resp = client.get(&url).send().await?;

    if !resp.status().is_success() {
        return Err(AppError::DataLoad(format!(
            "provider returned HTTP {}",
            resp.status()
        )));
    }

    let raw: Vec<RawEpisode> = resp
        .json()
        .await
        .map_err(|e| AppError::Parse(format!("invalid episode list: {}", e)))?;

    let episodes = convert_records(raw);
    debug!("Loaded {} episodes for show {}", episodes.len(), show_id);

    Ok(episodes)
}
