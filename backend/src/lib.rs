//! # Calculator Rust Backend
//!
//! A small arithmetic service: four binary operations over JSON, with every
//! successful computation persisted as a calculation record that can be
//! listed, fetched and deleted.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`algorithms`]: Pure arithmetic (add, subtract, multiply, divide)
//! - [`models`]: Calculation records and the operation enum
//! - [`db`]: Repository trait, SQLite and in-memory implementations, factory
//! - [`services`]: Compute-then-persist orchestration used by the handlers
//! - [`config`]: Listen address configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Data flows one way:
//!
//! ```text
//! request -> decode -> compute -> persist -> encode -> response
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod algorithms;

pub mod config;
pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
