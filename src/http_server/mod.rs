//! # filmdb HTTP Server Module
//!
//! The request dispatcher: an axum router mapping verbs and paths to catalog
//! operations, with body validation at the boundary and a fixed error-to-status
//! mapping.
//!
//! # Endpoints
//!
//! - `GET /movies` - Full listing
//! - `GET /movies/byid/{id}` - Lookup by id
//! - `GET /movies/bystr/{query}` - Substring filter on title/director
//! - `GET /movies/sorted/bytitleasc|bytitledesc|byratingasc|byratingdesc` - Sorted views
//! - `POST /movies` - Create
//! - `PUT /movies/{id}` - Replace
//! - `DELETE /movies/{id}` - Remove

pub mod config;
pub mod errors;
pub mod movie_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use movie_routes::{movie_routes, CatalogState};
pub use server::HttpServer;
