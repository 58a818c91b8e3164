//! In-memory movie store.
//!
//! Holds the authoritative ordered list of movie records and the linear-scan
//! access primitives the HTTP layer is built on. The collection is small and
//! mutation-rate is low, so no index is maintained; id lookups are O(n) over
//! collection order and the first match wins.

use super::movie::{seed_movies, Movie};

/// Sort key for catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Rating,
}

/// Sort direction for catalog views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// The movie record store.
///
/// Collection ordering is insertion order: create appends, delete removes in
/// place, update replaces in place. Sorted views operate on a snapshot and
/// never mutate stored order.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Creates a store holding the given records, in the given order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Creates a store seeded with the fixed startup collection.
    pub fn seeded() -> Self {
        Self::with_movies(seed_movies())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Full enumeration in collection order.
    pub fn list(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    /// First record in collection order whose id equals `id`.
    pub fn find(&self, id: i64) -> Option<Movie> {
        self.movies.iter().find(|m| m.id == id).cloned()
    }

    /// Appends a record. Id uniqueness is not checked.
    pub fn create(&mut self, movie: Movie) -> Movie {
        self.movies.push(movie.clone());
        movie
    }

    /// Replaces the first record matching `id` wholesale with `movie`.
    ///
    /// Returns the replacement on success, `None` when no record has that id.
    /// The record keeps its position in collection order.
    pub fn update(&mut self, id: i64, movie: Movie) -> Option<Movie> {
        let slot = self.movies.iter_mut().find(|m| m.id == id)?;
        *slot = movie.clone();
        Some(movie)
    }

    /// Removes the first record matching `id`.
    ///
    /// Returns `false` when no record has that id.
    pub fn delete(&mut self, id: i64) -> bool {
        match self.movies.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.movies.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Records whose title or director contains `query` as a case-insensitive
    /// substring, in collection order.
    ///
    /// Both fields are always checked; an empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&needle)
                    || m.director.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Snapshot of the collection ordered by the given key and direction.
    ///
    /// The sort is stable: ties in the key preserve relative collection order.
    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<Movie> {
        let mut snapshot = self.movies.clone();

        snapshot.sort_by(|a, b| {
            let ordering = match key {
                SortKey::Title => a.title.cmp(&b.title),
                SortKey::Rating => a
                    .rating
                    .partial_cmp(&b.rating)
                    .unwrap_or(std::cmp::Ordering::Equal),
            };

            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        snapshot
    }
}
