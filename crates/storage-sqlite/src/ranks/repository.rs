//! Repository implementing the core `RankStore` trait.

use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use rocketranks_core::ranks::RankStore;
use rocketranks_core::Result;
use rocketranks_rank_data::{PlayerIdentity, RankSet};

use super::model::RankSetDB;
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::rank_sets::dsl as rank_sets_dsl;

/// SQLite-backed rank set store.
///
/// `put` is a `REPLACE INTO` upsert on the `(account_id, platform)` key,
/// which gives last-write-wins semantics without any application-side
/// locking; SQLite serializes writers on its own.
pub struct RankSetRepository {
    pool: Arc<DbPool>,
}

impl RankSetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankStore for RankSetRepository {
    async fn get(&self, identity: &PlayerIdentity) -> Result<Option<RankSet>> {
        let mut conn = get_connection(&self.pool)?;

        let row = rank_sets_dsl::rank_sets
            .filter(rank_sets_dsl::account_id.eq(&identity.account_id))
            .filter(rank_sets_dsl::platform.eq(identity.platform.as_str()))
            .first::<RankSetDB>(&mut conn)
            .optional()
            .into_core()?;

        row.map(|db| RankSet::try_from(db).map_err(Into::into))
            .transpose()
    }

    async fn put(&self, rank_set: &RankSet) -> Result<()> {
        let row = RankSetDB::from(rank_set);
        let mut conn = get_connection(&self.pool)?;

        diesel::replace_into(rank_sets_dsl::rank_sets)
            .values(&row)
            .execute(&mut conn)
            .into_core()?;

        Ok(())
    }
}
