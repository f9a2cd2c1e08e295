use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// A single line on a receipt.
///
/// `price` is kept as submitted; the scoring rules parse it on demand so that a
/// malformed price only costs the points of the rule that reads it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A submitted purchase receipt, exactly as it arrives on the wire.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24-hour clock.
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Opaque identifier handed back for a processed receipt.
///
/// Backed by a random (v4) UUID and rendered in its lowercase hyphenated form,
/// which is safe to use as a URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Mints a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a receipt identifier: {0}")]
pub struct InvalidReceiptId(pub String);

impl FromStr for ReceiptId {
    type Err = InvalidReceiptId;

    /// Only the canonical form produced by `Display` is accepted, so every
    /// identifier has exactly one spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(s).map_err(|_| InvalidReceiptId(s.to_string()))?;
        if uuid.hyphenated().to_string() != s {
            return Err(InvalidReceiptId(s.to_string()));
        }
        Ok(Self(uuid))
    }
}
