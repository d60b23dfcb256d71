//! Store-backed fallback provider.
//!
//! Adapts a [`RankStore`] into the [`RankProvider`] capability so the
//! historical store slots into the same fallback chain as the live
//! sources. It sits at the lowest priority: a stale cached answer is
//! better than no answer, but only once everything live has failed.

use async_trait::async_trait;
use std::sync::Arc;

use rocketranks_rank_data::{FetchOutcome, PlayerIdentity, RankDataError, RankProvider};

use super::store::RankStore;

pub const STORE_PROVIDER_ID: &str = "STORE";

/// Last-resort provider that answers from previously persisted rank sets.
pub struct StoreProvider {
    store: Arc<dyn RankStore>,
}

impl StoreProvider {
    pub fn new(store: Arc<dyn RankStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RankProvider for StoreProvider {
    fn id(&self) -> &'static str {
        STORE_PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        100
    }

    async fn fetch_ranks(
        &self,
        identity: &PlayerIdentity,
    ) -> Result<FetchOutcome, RankDataError> {
        let cached = self
            .store
            .get(identity)
            .await
            .map_err(|e| RankDataError::Provider {
                provider: STORE_PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        match cached {
            // Re-deriving the outcome from emptiness keeps a persisted
            // "verified unranked" answer authoritative on replay.
            Some(rank_set) => Ok(FetchOutcome::from_rank_set(rank_set)),
            None => Err(RankDataError::Provider {
                provider: STORE_PROVIDER_ID.to_string(),
                message: format!("no cached ranks for {}", identity),
            }),
        }
    }
}
