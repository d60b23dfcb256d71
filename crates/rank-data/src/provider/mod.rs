pub mod tracker;
pub mod traits;

pub use tracker::TrackerProvider;
pub use traits::RankProvider;
