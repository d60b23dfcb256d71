//! Derived queries over a resolved rank set.
//!
//! Pure functions; the whitelist narrows which playlists count for a
//! given consumer (a chat server tracking only some modes, for example).
//! An empty whitelist means every playlist counts.

use std::cmp::Reverse;

use rocketranks_rank_data::{Playlist, Rank, RankSet};

use super::errors::RankError;

fn in_whitelist(playlist: Playlist, whitelist: &[Playlist]) -> bool {
    whitelist.is_empty() || whitelist.contains(&playlist)
}

/// True iff the player has no rank in any whitelisted playlist.
pub fn unranked(rank_set: &RankSet, whitelist: &[Playlist]) -> bool {
    !rank_set
        .iter()
        .any(|rank| in_whitelist(rank.playlist, whitelist))
}

/// The player's best whitelisted rank.
///
/// Highest tier wins; ties break on higher mmr, then on the fixed
/// playlist priority order (`Duel` first). Fails with
/// [`RankError::NoRanks`] when nothing matches the whitelist, so callers
/// should check [`unranked`] first.
pub fn best<'a>(rank_set: &'a RankSet, whitelist: &[Playlist]) -> Result<&'a Rank, RankError> {
    rank_set
        .iter()
        .filter(|rank| in_whitelist(rank.playlist, whitelist))
        .max_by_key(|rank| (rank.tier, rank.mmr, Reverse(rank.playlist)))
        .ok_or(RankError::NoRanks)
}

/// Length of the longest display label among present playlists. Used by
/// the presentation layer to right-align rank listings.
pub fn longest_playlist_label(rank_set: &RankSet) -> usize {
    rank_set
        .iter()
        .map(|rank| rank.playlist.label().len())
        .max()
        .unwrap_or(0)
}
