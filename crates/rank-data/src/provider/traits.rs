//! Rank provider trait definition.
//!
//! A provider is the capability "given a player identity, return a
//! normalized rank set or fail". One implementation exists per upstream
//! source; the resolver in the core crate tries them in priority order.

use async_trait::async_trait;

use crate::errors::RankDataError;
use crate::models::{FetchOutcome, PlayerIdentity};

/// Trait for rank data providers.
///
/// # Contract
///
/// `fetch_ranks` must not panic for expected failure modes. Network
/// errors, non-2xx statuses, unparseable bodies and untranslatable
/// playlist names all return `Err` (unavailable, recoverable by
/// fallback). An empty but valid playlist list is a success:
/// [`FetchOutcome::NotFound`] with an empty rank set. Providers should be
/// conservative about emitting `NotFound`, since the resolver treats it
/// as authoritative and stops the fallback chain.
///
/// Implementations are stateless beyond their connection plumbing and may
/// take arbitrarily long; callers bound each invocation with a timeout.
#[async_trait]
pub trait RankProvider: Send + Sync {
    /// Unique identifier for this provider, used in log lines and error
    /// payloads. A constant string like "TRACKER".
    fn id(&self) -> &'static str;

    /// Provider priority for ordering. Lower values are tried first;
    /// default is 10. The historical store sits at the bottom of the
    /// range so it only answers when every live source has failed.
    fn priority(&self) -> u8 {
        10
    }

    /// Fetch and normalize the player's ranks.
    async fn fetch_ranks(
        &self,
        identity: &PlayerIdentity,
    ) -> Result<FetchOutcome, RankDataError>;
}
