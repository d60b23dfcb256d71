//! Database model for persisted rank sets.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use std::collections::BTreeMap;

use rocketranks_rank_data::{PlayerIdentity, Playlist, Rank, RankSet};

use crate::errors::StorageError;

/// One row per player identity; the rank map is stored as JSON text and
/// the timestamp as RFC 3339 text.
#[derive(Queryable, Identifiable, Selectable, Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::rank_sets)]
#[diesel(primary_key(account_id, platform))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RankSetDB {
    pub account_id: String,
    pub platform: String,
    pub ranks: String,
    pub resolved_at: String,
}

impl TryFrom<RankSetDB> for RankSet {
    type Error = StorageError;

    fn try_from(db: RankSetDB) -> Result<Self, Self::Error> {
        let platform = db
            .platform
            .parse()
            .map_err(StorageError::SerializationError)?;

        let ranks: BTreeMap<Playlist, Rank> = serde_json::from_str(&db.ranks)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let resolved_at = DateTime::parse_from_rfc3339(&db.resolved_at)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        Ok(RankSet {
            identity: PlayerIdentity::new(db.account_id, platform),
            ranks,
            resolved_at,
        })
    }
}

impl From<&RankSet> for RankSetDB {
    fn from(rank_set: &RankSet) -> Self {
        RankSetDB {
            account_id: rank_set.identity.account_id.clone(),
            platform: rank_set.identity.platform.as_str().to_string(),
            // BTreeMap of unit-variant keys always serializes cleanly.
            ranks: serde_json::to_string(&rank_set.ranks)
                .expect("rank map serialization cannot fail"),
            resolved_at: rank_set.resolved_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocketranks_rank_data::Platform;

    fn sample() -> RankSet {
        let mut ranks = BTreeMap::new();
        ranks.insert(Playlist::Duel, Rank::new(Playlist::Duel, 11, 850));
        ranks.insert(Playlist::SnowDay, Rank::new(Playlist::SnowDay, 4, 633));
        RankSet::new(
            PlayerIdentity::new("76561198000000000", Platform::Steam),
            ranks,
        )
    }

    #[test]
    fn test_round_trip() {
        let original = sample();
        let row = RankSetDB::from(&original);
        assert_eq!(row.account_id, "76561198000000000");
        assert_eq!(row.platform, "steam");

        let restored = RankSet::try_from(row).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_rank_map_round_trips() {
        let original = RankSet::empty(PlayerIdentity::new("gamer123", Platform::Epic));
        let row = RankSetDB::from(&original);
        let restored = RankSet::try_from(row).unwrap();
        assert!(restored.is_empty());
        assert_eq!(restored.identity.platform, Platform::Epic);
    }

    #[test]
    fn test_corrupt_ranks_column_is_an_error() {
        let mut row = RankSetDB::from(&sample());
        row.ranks = "{not json".to_string();
        assert!(matches!(
            RankSet::try_from(row),
            Err(StorageError::SerializationError(_))
        ));
    }

    #[test]
    fn test_unknown_platform_is_an_error() {
        let mut row = RankSetDB::from(&sample());
        row.platform = "dreamcast".to_string();
        assert!(RankSet::try_from(row).is_err());
    }
}
