//! trip-service: HTTP backend for a travel-journal application.
//!
//! MongoDB-backed CRUD for trips plus Prometheus metrics, a hello route,
//! and a health check. The database connection is established in the
//! background and never gates server startup.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
