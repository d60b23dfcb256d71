//! Canonical rank model.
//!
//! [`RankSet`] is the one durable shape every provider's payload is
//! normalized into: a player identity plus at most one [`Rank`] per
//! playlist. Playlists a player has no ranked result in are simply absent
//! from the map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::types::{Platform, Playlist};

/// Identity of a player within the resolution domain.
///
/// Immutable once constructed. Also the storage key for persisted rank
/// sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub account_id: String,
    pub platform: Platform,
}

impl PlayerIdentity {
    pub fn new(account_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            account_id: account_id.into(),
            platform,
        }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.account_id)
    }
}

/// A single playlist's rank after normalization.
///
/// `tier` is zero-based. Raw upstream tiers are one-based; an upstream tier
/// of 0 means "unplaced" and produces no `Rank` at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub playlist: Playlist,
    pub tier: u32,
    pub mmr: i32,
}

impl Rank {
    pub fn new(playlist: Playlist, tier: u32, mmr: i32) -> Self {
        Self {
            playlist,
            tier,
            mmr,
        }
    }
}

/// A player's full set of resolved ranks.
///
/// Created fresh by a successful provider fetch, persisted as-is, never
/// mutated afterwards. Reads from the store may return an arbitrarily
/// stale copy; `resolved_at` says when the data was actually fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankSet {
    pub identity: PlayerIdentity,
    pub ranks: BTreeMap<Playlist, Rank>,
    pub resolved_at: DateTime<Utc>,
}

impl RankSet {
    pub fn new(identity: PlayerIdentity, ranks: BTreeMap<Playlist, Rank>) -> Self {
        Self {
            identity,
            ranks,
            resolved_at: Utc::now(),
        }
    }

    /// A rank set with no ranked playlists, as produced by an
    /// authoritative empty upstream response.
    pub fn empty(identity: PlayerIdentity) -> Self {
        Self::new(identity, BTreeMap::new())
    }

    pub fn get(&self, playlist: Playlist) -> Option<&Rank> {
        self.ranks.get(&playlist)
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Ranks in playlist priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Rank> {
        self.ranks.values()
    }
}

/// Outcome of a successful provider fetch.
///
/// Failure is the error half of the provider contract; this enum splits
/// the success half into the two cases the resolver treats identically
/// but consumers may not: a player with ranks, and a player the upstream
/// has verified as having none.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The upstream returned at least one ranked playlist.
    Ranked(RankSet),
    /// The upstream answered authoritatively with zero ranked playlists.
    /// Carries an empty rank set so the result can be persisted and
    /// returned like any other.
    NotFound(RankSet),
}

impl FetchOutcome {
    /// Classify a freshly normalized rank set.
    pub fn from_rank_set(rank_set: RankSet) -> Self {
        if rank_set.is_empty() {
            FetchOutcome::NotFound(rank_set)
        } else {
            FetchOutcome::Ranked(rank_set)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchOutcome::NotFound(_))
    }

    pub fn rank_set(&self) -> &RankSet {
        match self {
            FetchOutcome::Ranked(rs) | FetchOutcome::NotFound(rs) => rs,
        }
    }

    pub fn into_rank_set(self) -> RankSet {
        match self {
            FetchOutcome::Ranked(rs) | FetchOutcome::NotFound(rs) => rs,
        }
    }
}
