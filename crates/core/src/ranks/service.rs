//! Rank service facade.
//!
//! Assembles the provider chain and the resolver, and exposes the two
//! operations the outside world calls: resolve (full fallback run,
//! persisting on success) and cached (read the store without touching any
//! upstream). The chat-command layer consuming this never sees providers
//! or fallback mechanics.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use rocketranks_rank_data::{PlayerIdentity, RankProvider, RankSet, TrackerProvider};

use super::resolver::{Resolver, DEFAULT_PROVIDER_TIMEOUT};
use super::store::RankStore;
use super::store_provider::StoreProvider;
use crate::errors::Result;

/// Configuration for assembling a [`RankService`].
#[derive(Debug, Clone)]
pub struct RankServiceConfig {
    /// Override for the tracker endpoint; `None` uses the live API.
    pub tracker_base_url: Option<String>,
    /// Deadline applied to each provider attempt.
    pub provider_timeout: Duration,
}

impl Default for RankServiceConfig {
    fn default() -> Self {
        Self {
            tracker_base_url: None,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }
}

/// Trait for consumers of rank resolution.
#[async_trait]
pub trait RankServiceTrait: Send + Sync {
    /// Resolve the player's current best-known ranks, trying every
    /// provider in priority order and persisting the first success.
    async fn resolve(&self, identity: &PlayerIdentity) -> Result<RankSet>;

    /// Return the last persisted rank set without re-resolving, or
    /// `None` if the player has never been resolved.
    async fn cached(&self, identity: &PlayerIdentity) -> Result<Option<RankSet>>;
}

/// Default service wiring: live tracker first, historical store last.
pub struct RankService {
    resolver: Resolver,
    store: Arc<dyn RankStore>,
}

impl RankService {
    pub fn new(store: Arc<dyn RankStore>) -> Self {
        Self::with_config(store, RankServiceConfig::default())
    }

    pub fn with_config(store: Arc<dyn RankStore>, config: RankServiceConfig) -> Self {
        let tracker = match &config.tracker_base_url {
            Some(base_url) => TrackerProvider::with_base_url(base_url),
            None => TrackerProvider::new(),
        };

        let providers: Vec<Arc<dyn RankProvider>> = vec![
            Arc::new(tracker),
            Arc::new(StoreProvider::new(store.clone())),
        ];

        let resolver =
            Resolver::new(providers, store.clone()).with_timeout(config.provider_timeout);

        Self { resolver, store }
    }
}

#[async_trait]
impl RankServiceTrait for RankService {
    async fn resolve(&self, identity: &PlayerIdentity) -> Result<RankSet> {
        self.resolver.resolve(identity).await
    }

    async fn cached(&self, identity: &PlayerIdentity) -> Result<Option<RankSet>> {
        self.store.get(identity).await
    }
}
