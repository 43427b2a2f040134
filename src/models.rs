use serde::Deserialize;
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

/// Kind of identifier a caller asks about.
///
/// The kind is checked at the boundary but does not change which provider
/// endpoint is queried; every kind runs the same lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierType {
    Email,
    Number,
    Username,
}

impl IdentifierType {
    pub const ALL: [IdentifierType; 3] = [
        IdentifierType::Email,
        IdentifierType::Number,
        IdentifierType::Username,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Email => "email",
            IdentifierType::Number => "number",
            IdentifierType::Username => "username",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentifierType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A validated breach check request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachQuery {
    pub kind: IdentifierType,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreachSource {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Breach details the provider attaches when it finds matches.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreachDetails {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub sources: Vec<BreachSource>,
}

/// The fields of the provider's public lookup response that drive the verdict.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderPayload {
    pub success: bool,
    /// Match count. Any JSON number is accepted; only `> 0` means a match.
    #[serde(default)]
    pub found: Option<Number>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A provider response as received, with the typed view decoded from it.
///
/// `raw` is what gets relayed to the caller as `details`, untouched.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub raw: Value,
    pub payload: ProviderPayload,
}

impl ProviderResponse {
    pub fn from_raw(raw: Value) -> Result<Self, serde_json::Error> {
        let payload = serde_json::from_value(raw.clone())?;
        Ok(ProviderResponse { raw, payload })
    }

    /// Best-effort decode of `fields` and `sources`. Shapes the provider
    /// changes on us are relayed as-is and only lose this summary.
    pub fn details(&self) -> Option<BreachDetails> {
        serde_json::from_value(self.raw.clone()).ok()
    }
}
