//! Response bodies of the generation endpoint
//!
//! A successful call returns the character sheet. A rejected call returns a
//! failure body with a `status` discriminator and a human readable message.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Value of the `status` field on a failure body.
pub const FAIL_STATUS: &str = "fail";

// =============================================================================
// Character sheet
// =============================================================================

/// A generated investigator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    // Identity
    pub first_name: String,
    pub last_name: String,
    /// `M` or `F`
    pub sex: String,
    pub age: i32,
    pub occupation: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    // Characteristics
    pub strength: i32,
    pub condition: i32,
    pub size: i32,
    pub dexterity: i32,
    pub appearance: i32,
    pub education: i32,
    pub intelligence: i32,
    pub power: i32,
    pub luck: i32,

    // Derived values
    /// Dice expression such as `+1D4`, or `0`
    pub damage_bonus: String,
    pub build: i32,
    /// Dodge base value, spelled the way the service spells it
    pub doge: i32,
    pub move_rate: i32,
    pub hit_points: i32,
    pub magic_points: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanity_points: Option<i32>,

    /// Skill name to percentage
    #[serde(default)]
    pub skills: BTreeMap<String, i32>,

    /// Fields this client does not know about yet
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl CharacterData {
    /// True for the `M` sex code.
    pub fn is_male(&self) -> bool {
        self.sex.eq_ignore_ascii_case("m")
    }
}

// =============================================================================
// Failure body
// =============================================================================

/// Rejection returned by the service.
///
/// Domain rejections carry `origin = "cochar"`, rate limiting carries
/// `origin = "flask_limiter"`. Argument parsing errors have neither `status`
/// nor `origin`, only a per-field `message` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub message: FailureMessage,
}

impl FailureBody {
    /// True if the JSON body carries the failure discriminator.
    pub fn is_failure(body: &Value) -> bool {
        body.get("status").and_then(Value::as_str) == Some(FAIL_STATUS)
    }

    /// Decode a failure body, accepting any JSON object with a `message`.
    pub fn from_value(body: &Value) -> Option<Self> {
        serde_json::from_value(body.clone()).ok()
    }
}

/// Server message: a sentence, or one sentence per rejected parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureMessage {
    Text(String),
    Fields(BTreeMap<String, String>),
    Other(Value),
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Fields(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(field, message)| format!("{field}: {message}"))
                    .collect();
                f.write_str(&parts.join("; "))
            }
            Self::Other(value) => write!(f, "{value}"),
        }
    }
}
