//! HTTP backend service for Devkit.
//!
//! Serves the `TextDiff` operation over JSON so the desktop UI shell (or any
//! other client) can compare texts without linking the engine directly.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::DevkitServer;
