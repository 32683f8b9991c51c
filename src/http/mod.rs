//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, layers)
//!     → request.rs (request ID generation/propagation)
//!     → handlers: GET / (page), POST /consulta (lookup), GET /health
//!     → response.rs (error taxonomy → status + {"error": msg})
//! ```

pub mod page;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ApiError;
pub use server::HttpServer;
