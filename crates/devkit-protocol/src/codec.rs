use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ProtocolError, ProtocolResult};
use crate::message::MAX_MESSAGE_SIZE;

/// Codec for encoding/decoding Devkit messages as JSON bodies.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a message as compact JSON.
    pub fn encode<T: Serialize>(msg: &T) -> ProtocolResult<Vec<u8>> {
        let body = serde_json::to_vec(msg)
            .map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        Self::check_size(body.len())?;
        Ok(body)
    }

    /// Encode a message as indented JSON, for terminals and files.
    pub fn encode_pretty<T: Serialize>(msg: &T) -> ProtocolResult<String> {
        let body = serde_json::to_string_pretty(msg)
            .map_err(|e| ProtocolError::Serialization(e.to_string()))?;
        Self::check_size(body.len())?;
        Ok(body)
    }

    /// Decode a message. The size limit is checked before parsing.
    pub fn decode<T: DeserializeOwned>(data: &[u8]) -> ProtocolResult<T> {
        Self::check_size(data.len())?;
        serde_json::from_slice(data).map_err(|e| {
            tracing::debug!("rejecting malformed message: {}", e);
            ProtocolError::Deserialization(e.to_string())
        })
    }

    fn check_size(size: usize) -> ProtocolResult<()> {
        if size > MAX_MESSAGE_SIZE {
            return Err(ProtocolError::MessageTooLarge { size, max: MAX_MESSAGE_SIZE });
        }
        Ok(())
    }
}
