//! Rank-domain error types.

use thiserror::Error;

/// Errors produced by rank resolution and classification.
///
/// Neither variant is fatal to the process. `Exhausted` is the
/// caller-facing end state of a fallback chain that found no answer;
/// `NoRanks` signals a classifier misuse the caller should have
/// prevented by checking `unranked` first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// Every provider in the chain was unavailable. The store is left
    /// untouched and the caller decides how to surface the failure.
    #[error("All providers unavailable for {identity}")]
    Exhausted {
        /// Display form of the identity that could not be resolved
        identity: String,
    },

    /// The classifier was asked for a best rank but no playlist in the
    /// rank set matched the whitelist.
    #[error("No ranks match the playlist whitelist")]
    NoRanks,
}
