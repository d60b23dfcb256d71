//! Rocketranks Rank Data Crate
//!
//! Provider-agnostic fetching of competitive rank data. This crate knows
//! how to talk to upstream rank sources and how to fold their divergent
//! payloads into one canonical model; it knows nothing about storage or
//! about which provider should be preferred.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  PlayerIdentity  |  (account id + platform)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   RankProvider   |  (tracker API, or any fallback source)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    normalize     |  (name translation, tier rebasing, stamping)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   FetchOutcome   |  (Ranked | NotFound, both carrying a RankSet)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`PlayerIdentity`] - who to resolve ranks for
//! - [`RankSet`] - the canonical playlist -> rank mapping
//! - [`FetchOutcome`] - the success half of a provider call
//! - [`RankDataError`] - the failure half, all unavailable-class

pub mod errors;
pub mod models;
pub mod normalize;
pub mod provider;

pub use errors::RankDataError;
pub use models::{FetchOutcome, Platform, PlayerIdentity, Playlist, Rank, RankSet};
pub use provider::{RankProvider, TrackerProvider};
