pub mod rank;
pub mod types;

pub use rank::{FetchOutcome, PlayerIdentity, Rank, RankSet};
pub use types::{Platform, Playlist};
