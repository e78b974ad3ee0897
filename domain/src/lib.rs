//! Domain library for the clip processor.
//!
//! Holds the clip payload types, the validation error taxonomy, and the pure
//! normalization pipeline (slug, duration estimate, URL canonicalization).
//! Keep HTTP and other IO concerns out of this crate.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_json::Value;

/// Publication status of a clip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipStatus {
    #[default]
    Active,
    Inactive,
}

impl ClipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClipStatus::Active => "active",
            ClipStatus::Inactive => "inactive",
        }
    }

    /// Exact, case-sensitive match against the allowed values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ClipStatus::Active),
            "inactive" => Some(ClipStatus::Inactive),
            _ => None,
        }
    }
}

/// Clip fields after the boundary pass: every field is trimmed text, and a
/// missing or non-string value has become the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClipInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub status: String,
}

impl ClipInput {
    /// Build the input from an untyped JSON record.
    ///
    /// Objects and arrays are accepted; an array carries no clip fields, so
    /// it fails later on the title. `null` and scalars are rejected with
    /// [`ValidationError::MissingOrInvalidBody`].
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = match value {
            Value::Object(map) => Some(map),
            Value::Array(_) => None,
            _ => return Err(ValidationError::MissingOrInvalidBody),
        };
        let field = |name: &str| {
            map.and_then(|m| m.get(name))
                .map(validate::normalize_text)
                .unwrap_or_default()
        };
        Ok(Self {
            title: field("title"),
            description: field("description"),
            url: field("url"),
            status: field("status"),
        })
    }
}

/// Derived facts about a clip that are not part of its identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipMetadata {
    pub has_description: bool,
    pub source_host: Option<String>,
}

/// Result of a successful normalization. Only ever built whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedClip {
    pub slug: String,
    pub estimated_duration_seconds: u32,
    pub normalized_url: Option<String>,
    /// Length of the trimmed title in UTF-16 code units, so characters
    /// outside the BMP (emoji) count as two.
    pub title_length: usize,
    pub status: ClipStatus,
    pub metadata: ClipMetadata,
}

/// Reasons a clip payload is rejected. Checks run in declaration order and
/// the first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingOrInvalidBody,
    MissingTitle,
    InvalidStatus,
}

impl ValidationError {
    /// Human-readable message surfaced to API clients.
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingOrInvalidBody => "A JSON body with clip data is required.",
            ValidationError::MissingTitle => "The title field is required.",
            ValidationError::InvalidStatus => "The status field must be active or inactive.",
        }
    }

    /// Stable machine-readable code, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingOrInvalidBody => "missing_or_invalid_body",
            ValidationError::MissingTitle => "missing_title",
            ValidationError::InvalidStatus => "invalid_status",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Error for ValidationError {}

/// Return a short about/version line for the binary to print.
pub fn about() -> String {
    let pkg = env!("CARGO_PKG_NAME");
    let ver = env!("CARGO_PKG_VERSION");
    format!("{} v{} - clip normalizer", pkg, ver)
}

pub mod duration;
pub mod process;
pub mod slug;
pub mod validate;

pub use process::{normalize, process_clip};
