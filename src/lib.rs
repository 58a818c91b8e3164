//! filmdb - A minimal, self-hostable in-memory movie catalog service

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod schema;
