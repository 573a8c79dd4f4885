//! Asset classification, lifecycle status and the public asset DTO.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Asset type
// ---------------------------------------------------------------------------

/// Kind of luxury good backing an asset.
///
/// `watch` and `jewelry` are the known categories. Any other string is
/// carried through verbatim so older or newer backends never break a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    #[default]
    Watch,
    Jewelry,
    Other(String),
}

impl AssetType {
    pub fn as_str(&self) -> &str {
        match self {
            AssetType::Watch => "watch",
            AssetType::Jewelry => "jewelry",
            AssetType::Other(s) => s,
        }
    }

    /// Human-readable label shown on asset cards.
    pub fn label(&self) -> &str {
        match self {
            AssetType::Watch => "Watch",
            AssetType::Jewelry => "Jewelry",
            AssetType::Other(s) => s,
        }
    }
}

impl From<String> for AssetType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "watch" => AssetType::Watch,
            "jewelry" => AssetType::Jewelry,
            _ => AssetType::Other(s),
        }
    }
}

impl From<&str> for AssetType {
    fn from(s: &str) -> Self {
        AssetType::from(s.to_string())
    }
}

impl From<AssetType> for String {
    fn from(t: AssetType) -> Self {
        match t {
            AssetType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Asset status
// ---------------------------------------------------------------------------

/// Lifecycle of a tokenized asset.
///
/// `registered -> fundraising -> funded -> closed`. Submissions are only
/// persisted once their token is deployed, so new assets start at
/// `fundraising`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Registered,
    Fundraising,
    Funded,
    #[serde(alias = "sold")]
    Closed,
}

impl AssetStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetStatus::Registered => "registered",
            AssetStatus::Fundraising => "fundraising",
            AssetStatus::Funded => "funded",
            AssetStatus::Closed => "closed",
        }
    }

    /// Badge text shown on asset cards. Anything that is neither
    /// fundraising nor funded reads as closed.
    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Fundraising => "Fundraising",
            AssetStatus::Funded => "Funded",
            AssetStatus::Registered | AssetStatus::Closed => "Closed",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registered" => Ok(AssetStatus::Registered),
            "fundraising" => Ok(AssetStatus::Fundraising),
            "funded" => Ok(AssetStatus::Funded),
            "closed" | "sold" => Ok(AssetStatus::Closed),
            other => Err(CoreError::Validation(format!(
                "Unknown asset status '{other}'"
            ))),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Public DTO
// ---------------------------------------------------------------------------

/// Asset as exposed by `GET /api/assets`.
///
/// Decimal amounts serialize as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    pub id: DbId,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub price_per_share: Decimal,
    pub total_supply: Decimal,
    pub remaining_supply: Decimal,
    pub status: AssetStatus,
}
