//! Rocketranks Core - Domain services and traits.
//!
//! This crate contains the rank resolution logic: the ordered-fallback
//! resolver, the classifier, and the storage trait implemented by the
//! `storage-sqlite` crate. It is database-agnostic.

pub mod errors;
pub mod ranks;

pub use errors::{DatabaseError, Error, Result};
pub use ranks::{RankService, RankServiceTrait, RankStore};
