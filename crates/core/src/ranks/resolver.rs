//! Ordered-fallback rank resolution.
//!
//! The resolver walks an explicit, priority-ordered provider list,
//! stopping at the first success. Provider failure is expected and
//! routine: each failed attempt is logged at warn level naming the
//! provider and identity, then fully recovered by advancing to the next
//! entry. Only when the list runs dry does the caller see an error.

use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use rocketranks_rank_data::{PlayerIdentity, RankProvider, RankSet};

use super::errors::RankError;
use super::store::RankStore;
use crate::errors::Result;

/// Default per-provider deadline. Every provider call is bounded; an
/// elapsed deadline counts as that provider being unavailable.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves a player's ranks by trying providers in priority order.
///
/// Providers are tried strictly sequentially, never in parallel, so a
/// success from a fast authoritative source avoids load on the rest of
/// the chain. The first successful outcome is persisted to the store and
/// returned; a `NotFound` outcome is a success here, because a verified
/// empty result is more authoritative than an untried fallback.
pub struct Resolver {
    providers: Vec<Arc<dyn RankProvider>>,
    store: Arc<dyn RankStore>,
    provider_timeout: Duration,
}

impl Resolver {
    /// Create a resolver over the given providers. The list is sorted by
    /// `priority()` once here; resolution order never changes afterwards.
    pub fn new(mut providers: Vec<Arc<dyn RankProvider>>, store: Arc<dyn RankStore>) -> Self {
        providers.sort_by_key(|p| p.priority());
        Self {
            providers,
            store,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, provider_timeout: Duration) -> Self {
        self.provider_timeout = provider_timeout;
        self
    }

    /// Provider ids in the order they will be tried.
    pub fn provider_order(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Resolve the player's current best-known ranks.
    ///
    /// On success the rank set is persisted before being returned, so the
    /// store always holds the latest resolved answer. When every provider
    /// is unavailable the store is not written and the caller gets
    /// [`RankError::Exhausted`].
    pub async fn resolve(&self, identity: &PlayerIdentity) -> Result<RankSet> {
        for provider in &self.providers {
            let attempt = timeout(self.provider_timeout, provider.fetch_ranks(identity)).await;

            let outcome = match attempt {
                Err(_) => {
                    warn!(
                        "Provider '{}' timed out after {:?} for {}. Trying next.",
                        provider.id(),
                        self.provider_timeout,
                        identity
                    );
                    continue;
                }
                Ok(Err(e)) => {
                    warn!(
                        "Provider '{}' failed for {}: {}. Trying next.",
                        provider.id(),
                        identity,
                        e
                    );
                    continue;
                }
                Ok(Ok(outcome)) => outcome,
            };

            if outcome.is_not_found() {
                debug!(
                    "Provider '{}' verified {} has no ranked playlists",
                    provider.id(),
                    identity
                );
            }

            let rank_set = outcome.into_rank_set();
            self.store.put(&rank_set).await?;
            return Ok(rank_set);
        }

        Err(RankError::Exhausted {
            identity: identity.to_string(),
        }
        .into())
    }
}
