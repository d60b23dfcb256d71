//! Rank storage trait.
//!
//! Abstracts the persistence layer so resolution logic stays
//! database-agnostic. The store is both the durable cache of resolved
//! rank sets and, wrapped in
//! [`StoreProvider`](super::store_provider::StoreProvider), the
//! last-resort provider in the fallback chain.

use async_trait::async_trait;

use rocketranks_rank_data::{PlayerIdentity, RankSet};

use crate::errors::Result;

/// Storage interface for resolved rank sets.
///
/// Keyed by [`PlayerIdentity`]; `put` is a last-write-wins upsert. Reads
/// return whatever was stored last, however old; there is no TTL.
/// Implementations must support concurrent `get`/`put` from independent
/// resolutions, which only requires per-key write serialization.
#[async_trait]
pub trait RankStore: Send + Sync {
    /// Gets the most recently stored rank set for a player, or `None` if
    /// the player has never been resolved.
    async fn get(&self, identity: &PlayerIdentity) -> Result<Option<RankSet>>;

    /// Upserts a rank set under its identity key, replacing any previous
    /// entry.
    async fn put(&self, rank_set: &RankSet) -> Result<()>;
}
