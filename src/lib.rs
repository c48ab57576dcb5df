//! # LFC Goal Machine Rust Backend
//!
//! Backend for the LFC Goal Machine, an interactive web app that plots a
//! Liverpool FC player's age against the league goals the player scored in a
//! top-flight season. The historical scorer table and the dropdown option
//! list are loaded once from CSV at startup and shared read-only across
//! requests; every plot request is answered from memory. The backend exposes
//! a small REST API via Axum for the UI shell.
//!
//! ## Features
//!
//! - **Data Loading**: Parse the scorer table and dropdown catalog from CSV
//! - **Plot Pipeline**: Filter by selected players and build plot-ready
//!   series with locally weighted regression trend curves
//! - **About Info**: Derive the informational strings for the about page
//! - **HTTP API**: RESTful endpoints for the UI shell
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Domain types (scorer records, dropdown catalog)
//! - [`parsing`]: CSV loaders and load-time validation
//! - [`services`]: Plot pipeline, smoothing, and about-info derivation
//! - [`config`]: Environment-first application configuration
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
