//! The `{"$binary": {"base64": "...", "subType": "00"}}` envelope carrying resume
//! bytes inside JSON, on both the upload and the read path.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Generic binary subtype.
const GENERIC_SUBTYPE: &str = "00";

/// Standard alphabet, padding optional on decode.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error, PartialEq)]
pub enum EnvelopeError {
    #[error("Missing file data")]
    Missing,

    #[error("File data is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryEnvelope {
    #[serde(rename = "$binary")]
    pub binary: BinaryPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryPayload {
    pub base64: String,
    #[serde(rename = "subType", default = "generic_subtype")]
    pub sub_type: String,
}

fn generic_subtype() -> String {
    GENERIC_SUBTYPE.to_string()
}

impl BinaryEnvelope {
    pub fn wrap(bytes: &[u8]) -> Self {
        BinaryEnvelope {
            binary: BinaryPayload {
                base64: ENGINE.encode(bytes),
                sub_type: generic_subtype(),
            },
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, EnvelopeError> {
        decode_base64(&self.binary.base64)
    }
}

/// Extracts and decodes `$binary.base64` from an arbitrary JSON value.
///
/// Anything other than a string at that path counts as missing.
pub fn decode_envelope(value: Option<&Value>) -> Result<Vec<u8>, EnvelopeError> {
    let encoded = value
        .and_then(|v| v.pointer("/$binary/base64"))
        .and_then(Value::as_str)
        .ok_or(EnvelopeError::Missing)?;
    decode_base64(encoded)
}

fn decode_base64(encoded: &str) -> Result<Vec<u8>, EnvelopeError> {
    // Line-wrapped base64 is common in exported documents.
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(ENGINE.decode(compact.as_bytes())?)
}

/// Serde adapter for `Vec<u8>` fields carried as a [`BinaryEnvelope`].
pub mod binary {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::BinaryEnvelope;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        BinaryEnvelope::wrap(bytes).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        BinaryEnvelope::deserialize(deserializer)?
            .decode()
            .map_err(de::Error::custom)
    }
}
