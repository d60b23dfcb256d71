//! Normalization of raw provider payloads into the canonical rank model.
//!
//! Providers parse their own wire formats into [`RawPlaylistRank`] values;
//! this module owns the parts of the mapping that are the same for every
//! upstream: playlist-name translation, tier rebasing and identity
//! stamping. A response either normalizes fully or is discarded, so a
//! partial upstream glitch can never produce a half-filled rank set.

use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashMap};

use crate::errors::RankDataError;
use crate::models::{FetchOutcome, PlayerIdentity, Playlist, Rank, RankSet};

/// One playlist entry as extracted from a provider response, before any
/// normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlaylistRank {
    /// Upstream free-text playlist name, e.g. "Ranked Duel 1v1".
    pub name: String,
    /// Raw one-based tier; 0 means unplaced.
    pub tier: u32,
    /// Matchmaking rating.
    pub mmr: i32,
}

lazy_static! {
    /// Upstream playlist names to canonical playlists. Names not in this
    /// table fail the whole response.
    static ref PLAYLIST_NAMES: HashMap<&'static str, Playlist> = {
        let mut m = HashMap::new();
        m.insert("Ranked Duel 1v1", Playlist::Duel);
        m.insert("Ranked Doubles 2v2", Playlist::Doubles);
        m.insert("Ranked Standard 3v3", Playlist::Standard);
        m.insert("Hoops", Playlist::Hoops);
        m.insert("Rumble", Playlist::Rumble);
        m.insert("Dropshot", Playlist::Dropshot);
        m.insert("Snowday", Playlist::SnowDay);
        m.insert("Tournament Matches", Playlist::Tournament);
        m
    };
}

/// Translate an upstream playlist name into the canonical enum.
pub fn translate_playlist(name: &str) -> Result<Playlist, RankDataError> {
    PLAYLIST_NAMES
        .get(name)
        .copied()
        .ok_or_else(|| RankDataError::UnknownPlaylist {
            name: name.to_string(),
        })
}

/// Normalize a full set of raw playlist entries into a [`FetchOutcome`].
///
/// Tier rebasing: a raw tier of 0 means the player is unplaced in that
/// playlist and the playlist is omitted entirely; any other raw tier is
/// decremented to its zero-based form. An empty input list is a valid,
/// authoritative "no ranked playlists" answer and classifies as
/// [`FetchOutcome::NotFound`].
pub fn normalize(
    identity: &PlayerIdentity,
    raw: Vec<RawPlaylistRank>,
) -> Result<FetchOutcome, RankDataError> {
    let mut ranks = BTreeMap::new();

    for entry in raw {
        let playlist = translate_playlist(&entry.name)?;
        if entry.tier == 0 {
            continue;
        }
        ranks.insert(playlist, Rank::new(playlist, entry.tier - 1, entry.mmr));
    }

    Ok(FetchOutcome::from_rank_set(RankSet::new(
        identity.clone(),
        ranks,
    )))
}
