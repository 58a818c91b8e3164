//! # Movie Catalog Module
//!
//! The in-memory record store: the `Movie` entity, the fixed seed collection,
//! and the linear-scan store primitives used by the HTTP dispatcher.

pub mod movie;
pub mod store;

pub use movie::{seed_movies, Movie};
pub use store::{MovieStore, SortDirection, SortKey};
