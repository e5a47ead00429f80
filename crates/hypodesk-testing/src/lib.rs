//! Testing infrastructure for hypodesk integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: the canonical topic and feed data sets
//! - `fake`: in-memory backend implementing the service traits
//! - `server`: the fake backend served over HTTP with tiny_http
//! - `assertions`: JSON output checks

pub mod assertions;
pub mod fake;
pub mod fixtures;
pub mod server;
pub mod world;

pub use fake::FakeBackend;
pub use server::MockServer;
pub use world::TestWorld;
