//! # HTTP Server
//!
//! Axum-based HTTP server for the movie catalog API.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::catalog::MovieStore;
use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::movie_routes::{movie_routes, CatalogState};

/// HTTP server for the movie catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: MovieStore) -> Self {
        Self::with_config(store, HttpServerConfig::default())
    }

    /// Create a server over the given store with custom configuration
    pub fn with_config(store: MovieStore, config: HttpServerConfig) -> Self {
        let router = Self::build_router(store, &config);
        Self { config, router }
    }

    /// Build the router with CORS applied
    fn build_router(store: MovieStore, config: &HttpServerConfig) -> Router {
        let state = Arc::new(CatalogState::new(store));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        movie_routes(state).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let addr_str = addr.to_string();
        Logger::info("SERVER_START", &[("addr", addr_str.as_str())]);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(MovieStore::seeded());
        assert_eq!(server.socket_addr(), "0.0.0.0:8000");
        let _router = server.router();
    }

    #[test]
    fn test_server_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(MovieStore::seeded(), config);
        let _router = server.router();
    }
}
