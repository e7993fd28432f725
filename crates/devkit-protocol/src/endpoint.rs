//! Routes served by the Devkit backend and the liveness payload.

use serde::{Deserialize, Serialize};

use crate::message::PROTOCOL_VERSION;

pub mod endpoints {
    /// Liveness check; answers while the process accepts requests.
    pub const HEALTH: &str = "/v1/health";
    /// Build and protocol details.
    pub const INFO: &str = "/v1/info";
    /// `POST` a `TextDiffRequest`, get a `TextDiffResponse` back.
    pub const TEXT_DIFF: &str = "/v1/text-diff";

    pub const ALL: [&str; 3] = [HEALTH, INFO, TEXT_DIFF];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: PROTOCOL_VERSION,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
