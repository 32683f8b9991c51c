//! Academic Record Lookup Service Library
//!
//! Looks up a student record by CPF in a published spreadsheet export
//! (CSV or TSV) or a local file, and serves the result over a small
//! HTTP API plus an embedded lookup page.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod lookup;
pub mod source;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
