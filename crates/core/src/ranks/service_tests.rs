//! Contract tests for the resolver and the service facade.
//!
//! Providers and the store are mocked so every fallback path can be
//! exercised deterministically:
//!
//! 1. Providers are tried strictly in priority order, stopping at the
//!    first success.
//! 2. A failed provider is logged and recovered, never surfaced.
//! 3. `NotFound` is a terminal success: persisted, chain stopped.
//! 4. Exhaustion leaves the store untouched.
//! 5. Every provider attempt is bounded by the resolver's deadline.

#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::ranks::resolver::Resolver;
    use crate::ranks::service::{RankService, RankServiceConfig, RankServiceTrait};
    use crate::ranks::store::RankStore;
    use async_trait::async_trait;
    use rocketranks_rank_data::{
        FetchOutcome, Platform, PlayerIdentity, Playlist, Rank, RankDataError, RankProvider,
        RankSet,
    };
    use std::collections::{BTreeMap, HashMap};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // =========================================================================
    // Mock RankStore
    // =========================================================================

    #[derive(Default)]
    struct MockStore {
        entries: Mutex<HashMap<PlayerIdentity, RankSet>>,
        put_count: Mutex<usize>,
    }

    impl MockStore {
        fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        fn put_count(&self) -> usize {
            *self.put_count.lock().unwrap()
        }

        fn seed(&self, rank_set: RankSet) {
            self.entries
                .lock()
                .unwrap()
                .insert(rank_set.identity.clone(), rank_set);
        }
    }

    #[async_trait]
    impl RankStore for MockStore {
        async fn get(&self, identity: &PlayerIdentity) -> Result<Option<RankSet>> {
            Ok(self.entries.lock().unwrap().get(identity).cloned())
        }

        async fn put(&self, rank_set: &RankSet) -> Result<()> {
            *self.put_count.lock().unwrap() += 1;
            self.entries
                .lock()
                .unwrap()
                .insert(rank_set.identity.clone(), rank_set.clone());
            Ok(())
        }
    }

    // =========================================================================
    // Mock RankProvider
    // =========================================================================

    enum Behavior {
        Unavailable,
        Ranked(Vec<(Playlist, u32, i32)>),
        NotFound,
        Hang(Duration),
    }

    struct MockProvider {
        id: &'static str,
        priority: u8,
        behavior: Behavior,
        calls: Arc<Mutex<Vec<&'static str>>>,
    }

    impl MockProvider {
        fn new(
            id: &'static str,
            priority: u8,
            behavior: Behavior,
            calls: &Arc<Mutex<Vec<&'static str>>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                id,
                priority,
                behavior,
                calls: calls.clone(),
            })
        }
    }

    #[async_trait]
    impl RankProvider for MockProvider {
        fn id(&self) -> &'static str {
            self.id
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        async fn fetch_ranks(
            &self,
            identity: &PlayerIdentity,
        ) -> std::result::Result<FetchOutcome, RankDataError> {
            self.calls.lock().unwrap().push(self.id);
            match &self.behavior {
                Behavior::Unavailable => Err(RankDataError::Provider {
                    provider: self.id.to_string(),
                    message: "upstream down".to_string(),
                }),
                Behavior::Ranked(ranks) => {
                    let map: BTreeMap<Playlist, Rank> = ranks
                        .iter()
                        .map(|&(playlist, tier, mmr)| (playlist, Rank::new(playlist, tier, mmr)))
                        .collect();
                    Ok(FetchOutcome::Ranked(RankSet::new(identity.clone(), map)))
                }
                Behavior::NotFound => {
                    Ok(FetchOutcome::NotFound(RankSet::empty(identity.clone())))
                }
                Behavior::Hang(duration) => {
                    tokio::time::sleep(*duration).await;
                    Err(RankDataError::Timeout {
                        provider: self.id.to_string(),
                    })
                }
            }
        }
    }

    // =========================================================================
    // Test Helpers
    // =========================================================================

    fn identity() -> PlayerIdentity {
        PlayerIdentity::new("76561198000000000", Platform::Steam)
    }

    fn ranked_set(ranks: &[(Playlist, u32, i32)]) -> RankSet {
        let map: BTreeMap<Playlist, Rank> = ranks
            .iter()
            .map(|&(playlist, tier, mmr)| (playlist, Rank::new(playlist, tier, mmr)))
            .collect();
        RankSet::new(identity(), map)
    }

    // =========================================================================
    // Resolver Contract Tests
    // =========================================================================

    #[tokio::test]
    async fn test_stops_at_first_success() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        let a = MockProvider::new("A", 1, Behavior::Unavailable, &calls);
        let b = MockProvider::new(
            "B",
            2,
            Behavior::Ranked(vec![(Playlist::Duel, 11, 850)]),
            &calls,
        );
        let c = MockProvider::new("C", 3, Behavior::Ranked(vec![(Playlist::Rumble, 2, 400)]), &calls);

        let resolver = Resolver::new(vec![a, b, c], store.clone());
        let result = resolver.resolve(&identity()).await.unwrap();

        assert_eq!(result.get(Playlist::Duel).unwrap().tier, 11);
        // C is never reached once B succeeds.
        assert_eq!(*calls.lock().unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_providers_sorted_by_priority() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        // Registered out of order on purpose.
        let slow = MockProvider::new("FALLBACK", 100, Behavior::NotFound, &calls);
        let fast = MockProvider::new(
            "LIVE",
            1,
            Behavior::Ranked(vec![(Playlist::Standard, 8, 920)]),
            &calls,
        );

        let resolver = Resolver::new(vec![slow, fast], store);
        assert_eq!(resolver.provider_order(), vec!["LIVE", "FALLBACK"]);

        resolver.resolve(&identity()).await.unwrap();
        assert_eq!(*calls.lock().unwrap(), vec!["LIVE"]);
    }

    #[tokio::test]
    async fn test_exhausted_leaves_store_untouched() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        let a = MockProvider::new("A", 1, Behavior::Unavailable, &calls);
        let b = MockProvider::new("B", 2, Behavior::Unavailable, &calls);

        let resolver = Resolver::new(vec![a, b], store.clone());
        let err = resolver.resolve(&identity()).await.unwrap_err();

        assert!(err.is_exhausted());
        assert_eq!(store.put_count(), 0);
        assert_eq!(*calls.lock().unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_not_found_is_terminal_success() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        let a = MockProvider::new("A", 1, Behavior::NotFound, &calls);
        let b = MockProvider::new(
            "B",
            2,
            Behavior::Ranked(vec![(Playlist::Duel, 11, 850)]),
            &calls,
        );

        let resolver = Resolver::new(vec![a, b], store.clone());
        let result = resolver.resolve(&identity()).await.unwrap();

        // A confirmed empty answer is persisted and ends the chain.
        assert!(result.is_empty());
        assert_eq!(store.put_count(), 1);
        assert_eq!(*calls.lock().unwrap(), vec!["A"]);

        let cached = store.get(&identity()).await.unwrap().unwrap();
        assert!(cached.is_empty());
    }

    #[tokio::test]
    async fn test_success_is_persisted() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        let a = MockProvider::new(
            "A",
            1,
            Behavior::Ranked(vec![(Playlist::Doubles, 13, 1240)]),
            &calls,
        );

        let resolver = Resolver::new(vec![a], store.clone());
        let result = resolver.resolve(&identity()).await.unwrap();

        let cached = store.get(&identity()).await.unwrap().unwrap();
        assert_eq!(cached, result);
        assert_eq!(store.put_count(), 1);
    }

    #[tokio::test]
    async fn test_slow_provider_times_out_and_falls_through() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let store = MockStore::new();
        let slow = MockProvider::new("SLOW", 1, Behavior::Hang(Duration::from_secs(5)), &calls);
        let backup = MockProvider::new(
            "BACKUP",
            2,
            Behavior::Ranked(vec![(Playlist::Hoops, 4, 640)]),
            &calls,
        );

        let resolver = Resolver::new(vec![slow, backup], store.clone())
            .with_timeout(Duration::from_millis(50));
        let result = resolver.resolve(&identity()).await.unwrap();

        assert_eq!(result.get(Playlist::Hoops).unwrap().mmr, 640);
        assert_eq!(*calls.lock().unwrap(), vec!["SLOW", "BACKUP"]);
    }

    // =========================================================================
    // Service Facade Tests
    // =========================================================================

    #[tokio::test]
    async fn test_cached_reads_store_without_resolving() {
        let store = MockStore::new();
        store.seed(ranked_set(&[(Playlist::Duel, 11, 850)]));

        let service = RankService::new(store.clone());
        let cached = service.cached(&identity()).await.unwrap().unwrap();

        assert_eq!(cached.get(Playlist::Duel).unwrap().mmr, 850);
        // A pure read never writes back.
        assert_eq!(store.put_count(), 0);
    }

    #[tokio::test]
    async fn test_cached_miss_is_none() {
        let store = MockStore::new();
        let service = RankService::new(store);
        assert!(service.cached(&identity()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_stored_ranks() {
        let store = MockStore::new();
        store.seed(ranked_set(&[(Playlist::Standard, 9, 1010)]));

        // An unroutable tracker endpoint forces the chain down to the
        // store-backed provider.
        let config = RankServiceConfig {
            tracker_base_url: Some("http://127.0.0.1:9/profile".to_string()),
            provider_timeout: Duration::from_secs(2),
        };
        let service = RankService::with_config(store.clone(), config);

        let result = service.resolve(&identity()).await.unwrap();
        assert_eq!(result.get(Playlist::Standard).unwrap().tier, 9);
    }

    #[tokio::test]
    async fn test_resolve_exhausts_with_empty_store() {
        let store = MockStore::new();
        let config = RankServiceConfig {
            tracker_base_url: Some("http://127.0.0.1:9/profile".to_string()),
            provider_timeout: Duration::from_secs(2),
        };
        let service = RankService::with_config(store.clone(), config);

        let err = service.resolve(&identity()).await.unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(store.put_count(), 0);
    }
}
