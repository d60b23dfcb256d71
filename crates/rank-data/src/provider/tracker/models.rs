//! Wire models for the tracker API response.
//!
//! The profile endpoint returns a `data.segments` list mixing playlist
//! segments with overview and peripheral segments; only entries with
//! `type == "playlist"` carry rank data. Fields not needed for
//! normalization are left out and ignored by serde.

use serde::Deserialize;

use crate::errors::RankDataError;
use crate::normalize::RawPlaylistRank;

pub(super) const SEGMENT_TYPE_PLAYLIST: &str = "playlist";

#[derive(Debug, Deserialize)]
pub(super) struct ProfileResponse {
    pub data: ProfileData,
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileData {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Segment {
    #[serde(rename = "type")]
    pub segment_type: String,
    #[serde(default)]
    pub metadata: Option<SegmentMetadata>,
    #[serde(default)]
    pub stats: Option<SegmentStats>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SegmentMetadata {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SegmentStats {
    pub tier: Option<StatValue>,
    pub rating: Option<StatValue>,
}

#[derive(Debug, Deserialize)]
pub(super) struct StatValue {
    pub value: Option<f64>,
}

impl Segment {
    pub fn is_playlist(&self) -> bool {
        self.segment_type == SEGMENT_TYPE_PLAYLIST
    }

    /// Extract the raw playlist entry from a playlist segment. Any missing
    /// required field fails the whole response.
    pub fn to_raw(&self) -> Result<RawPlaylistRank, RankDataError> {
        let name = self
            .metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .ok_or_else(|| RankDataError::MissingField {
                field: "segments[].metadata.name".to_string(),
            })?;

        let tier = self
            .stats
            .as_ref()
            .and_then(|s| s.tier.as_ref())
            .and_then(|t| t.value)
            .ok_or_else(|| RankDataError::MissingField {
                field: "segments[].stats.tier.value".to_string(),
            })?;

        let mmr = self
            .stats
            .as_ref()
            .and_then(|s| s.rating.as_ref())
            .and_then(|r| r.value)
            .ok_or_else(|| RankDataError::MissingField {
                field: "segments[].stats.rating.value".to_string(),
            })?;

        Ok(RawPlaylistRank {
            name: name.to_string(),
            tier: tier as u32,
            mmr: mmr as i32,
        })
    }
}
