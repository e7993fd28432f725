//! Request/response contract for the Devkit backend service.
//!
//! Defines the messages the UI shell exchanges with the backend for the
//! `TextDiff` operation, the JSON codec used to frame them, and the HTTP
//! endpoint paths.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod message;

pub use codec::JsonCodec;
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{TextDiffRequest, TextDiffResponse, MAX_MESSAGE_SIZE, PROTOCOL_VERSION};
