//! Live tracker provider.
//!
//! Fetches a player's profile from the tracker API and normalizes the
//! playlist segments it contains.
//!
//! # Endpoint
//!
//! `GET {base_url}/{platform_code}/{account_id}` with
//! `Accept: application/json`. The tracker uses its own platform path
//! codes (`xbl`, `psn`) which differ from our storage names, so the
//! translation lives here.

mod models;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::errors::RankDataError;
use crate::models::{FetchOutcome, Platform, PlayerIdentity};
use crate::normalize::{self, RawPlaylistRank};
use crate::provider::RankProvider;

use models::ProfileResponse;

const BASE_URL: &str = "https://api.tracker.gg/api/v2/rocket-league/standard/profile";
const PROVIDER_ID: &str = "TRACKER";

/// Default HTTP request timeout. The resolver applies its own deadline on
/// top; this one only guards direct use of the provider.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// The tracker rejects bare API clients, so requests carry the same
// browser-shaped headers its own site sends.
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        ORIGIN,
        HeaderValue::from_static("https://rocketleague.tracker.network"),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://rocketleague.tracker.network/"),
    );
    headers.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/15.2 Safari/605.1.15",
        ),
    );
    headers
}

/// Provider backed by the live tracker API.
pub struct TrackerProvider {
    client: Client,
    base_url: String,
}

impl TrackerProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a provider pointing at a non-default endpoint. Used by
    /// tests and by deployments fronting the tracker with a proxy.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(default_headers())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Tracker path code for a platform.
    fn platform_code(platform: Platform) -> &'static str {
        match platform {
            Platform::Steam => "steam",
            Platform::Xbox => "xbl",
            Platform::Playstation => "psn",
            Platform::Epic => "epic",
        }
    }

    fn profile_url(&self, identity: &PlayerIdentity) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            Self::platform_code(identity.platform),
            identity.account_id
        )
    }

    async fn fetch_profile(&self, url: &str) -> Result<ProfileResponse, RankDataError> {
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(RankDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !response.status().is_success() {
            return Err(RankDataError::Http {
                provider: PROVIDER_ID.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| RankDataError::Parse {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for TrackerProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RankProvider for TrackerProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        1
    }

    async fn fetch_ranks(
        &self,
        identity: &PlayerIdentity,
    ) -> Result<FetchOutcome, RankDataError> {
        let url = self.profile_url(identity);
        let profile = self.fetch_profile(&url).await?;

        let raw: Vec<RawPlaylistRank> = profile
            .data
            .segments
            .iter()
            .filter(|s| s.is_playlist())
            .map(|s| s.to_raw())
            .collect::<Result<_, _>>()?;

        normalize::normalize(identity, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_and_priority() {
        let provider = TrackerProvider::new();
        assert_eq!(provider.id(), "TRACKER");
        assert_eq!(provider.priority(), 1);
    }

    #[test]
    fn test_platform_codes() {
        assert_eq!(TrackerProvider::platform_code(Platform::Steam), "steam");
        assert_eq!(TrackerProvider::platform_code(Platform::Xbox), "xbl");
        assert_eq!(TrackerProvider::platform_code(Platform::Playstation), "psn");
        assert_eq!(TrackerProvider::platform_code(Platform::Epic), "epic");
    }

    #[test]
    fn test_profile_url() {
        let provider = TrackerProvider::with_base_url("http://localhost:9999/profile");
        let identity = PlayerIdentity::new("76561198000000000", Platform::Playstation);
        assert_eq!(
            provider.profile_url(&identity),
            "http://localhost:9999/profile/psn/76561198000000000"
        );
    }

    #[test]
    fn test_profile_body_normalizes_end_to_end() {
        let json = r#"{
            "data": {
                "segments": [
                    {
                        "type": "playlist",
                        "metadata": {"name": "Ranked Duel 1v1"},
                        "stats": {"tier": {"value": 12}, "rating": {"value": 850}}
                    }
                ]
            }
        }"#;
        let profile: ProfileResponse = serde_json::from_str(json).unwrap();
        let identity = PlayerIdentity::new("76561198000000000", Platform::Steam);

        let raw: Vec<RawPlaylistRank> = profile
            .data
            .segments
            .iter()
            .filter(|s| s.is_playlist())
            .map(|s| s.to_raw().unwrap())
            .collect();
        let outcome = normalize::normalize(&identity, raw).unwrap();

        let rank_set = outcome.rank_set();
        let duel = rank_set.get(crate::models::Playlist::Duel).unwrap();
        assert_eq!(duel.tier, 11);
        assert_eq!(duel.mmr, 850);
    }
}
