//! Movie HTTP Routes
//!
//! The dispatcher: maps each verb + path to a catalog operation and an HTTP
//! response. Bodies are validated against the movie schema before any store
//! access; each read-modify-write runs under a single write guard.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::Value;

use crate::catalog::{Movie, MovieStore, SortDirection, SortKey};
use crate::observability::Logger;
use crate::schema::validate_movie;

use super::errors::{ApiError, ApiResult};

/// Catalog state shared across handlers.
///
/// The store is injected rather than ambient, so tests can run against a
/// fresh catalog.
pub struct CatalogState {
    store: RwLock<MovieStore>,
}

impl CatalogState {
    pub fn new(store: MovieStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    pub fn seeded() -> Self {
        Self::new(MovieStore::seeded())
    }

    fn read(&self) -> ApiResult<RwLockReadGuard<'_, MovieStore>> {
        self.store
            .read()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))
    }

    fn write(&self) -> ApiResult<RwLockWriteGuard<'_, MovieStore>> {
        self.store
            .write()
            .map_err(|_| ApiError::Internal("store lock poisoned".to_string()))
    }
}

/// Shared state type
type SharedState = Arc<CatalogState>;

/// Build the movie router
pub fn movie_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/movies", get(list_handler).post(create_handler))
        .route("/movies/byid/:id", get(get_by_id_handler))
        .route("/movies/bystr/:query", get(search_handler))
        .route("/movies/sorted/bytitleasc", get(sorted_title_asc_handler))
        .route("/movies/sorted/bytitledesc", get(sorted_title_desc_handler))
        .route("/movies/sorted/byratingasc", get(sorted_rating_asc_handler))
        .route("/movies/sorted/byratingdesc", get(sorted_rating_desc_handler))
        .route("/movies/:id", put(update_handler))
        .route("/movies/:id", delete(delete_handler))
        .with_state(state)
}

/// List all movies in collection order
async fn list_handler(State(state): State<SharedState>) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.list()))
}

/// Get a single movie by id
async fn get_by_id_handler(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Movie>> {
    let movie = state.read()?.find(id).ok_or(ApiError::NotFound("GET"))?;
    Ok(Json(movie))
}

/// Filter movies by case-insensitive substring of title or director
async fn search_handler(
    State(state): State<SharedState>,
    Path(query): Path<String>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.search(&query)))
}

async fn sorted_title_asc_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.sorted(SortKey::Title, SortDirection::Asc)))
}

async fn sorted_title_desc_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.sorted(SortKey::Title, SortDirection::Desc)))
}

async fn sorted_rating_asc_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.sorted(SortKey::Rating, SortDirection::Asc)))
}

async fn sorted_rating_desc_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Movie>>> {
    Ok(Json(state.read()?.sorted(SortKey::Rating, SortDirection::Desc)))
}

/// Create a movie from a validated body
async fn create_handler(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let movie = validate_movie(&body)?;
    let created = state.write()?.create(movie);

    let id = created.id.to_string();
    Logger::info("MOVIE_CREATED", &[("id", id.as_str())]);

    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace a movie wholesale by id
async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Movie>> {
    let movie = validate_movie(&body)?;
    let updated = state
        .write()?
        .update(id, movie)
        .ok_or(ApiError::NotFound("PUT"))?;

    let id = id.to_string();
    Logger::info("MOVIE_UPDATED", &[("id", id.as_str())]);

    Ok(Json(updated))
}

/// Delete a movie by id
async fn delete_handler(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !state.write()?.delete(id) {
        return Err(ApiError::NotFound("DELETE"));
    }

    let id = id.to_string();
    Logger::info("MOVIE_DELETED", &[("id", id.as_str())]);

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let state = Arc::new(CatalogState::seeded());
        let _router = movie_routes(state);
        // Router constructs without route conflicts
    }

    #[test]
    fn test_state_exposes_injected_store() {
        let state = CatalogState::new(MovieStore::new());
        assert!(state.read().unwrap().is_empty());

        let state = CatalogState::seeded();
        assert_eq!(state.read().unwrap().len(), 12);
    }
}
