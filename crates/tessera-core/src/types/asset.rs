//! Asset kind classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The class of a depositable asset.
///
/// Physical metals are priced per gram through a [`RateTable`](crate::types::RateTable);
/// appraised assets (receivables, real estate, equipment) are priced per
/// monetary unit of appraised value, so their rate-table unit price is
/// normally 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Gold, quoted per gram.
    Gold,
    /// Silver, quoted per gram.
    Silver,
    /// A receivable, quoted at face value.
    Receivable,
    /// Real estate, quoted at appraised value.
    RealEstate,
    /// Medical equipment, quoted at appraised value.
    Equipment,
}

impl AssetKind {
    /// All asset kinds, in canonical order.
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Gold,
        AssetKind::Silver,
        AssetKind::Receivable,
        AssetKind::RealEstate,
        AssetKind::Equipment,
    ];

    /// Returns the canonical string identifier for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Receivable => "receivable",
            Self::RealEstate => "real_estate",
            Self::Equipment => "equipment",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = CoreError;

    /// Parses a kind from its string identifier, case-insensitively.
    /// Accepts both `real_estate` and `real-estate` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            "receivable" => Ok(Self::Receivable),
            "real_estate" | "real-estate" => Ok(Self::RealEstate),
            "equipment" => Ok(Self::Equipment),
            _ => Err(CoreError::UnknownAssetKind { kind: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_display_parse() {
        for kind in AssetKind::ALL {
            assert_eq!(kind.as_str().parse::<AssetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Gold".parse::<AssetKind>().unwrap(), AssetKind::Gold);
        assert_eq!(
            "real-estate".parse::<AssetKind>().unwrap(),
            AssetKind::RealEstate
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "platinum".parse::<AssetKind>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownAssetKind {
                kind: "platinum".to_string()
            }
        );
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&AssetKind::RealEstate).unwrap();
        assert_eq!(json, "\"real_estate\"");
        let kind: AssetKind = serde_json::from_str("\"gold\"").unwrap();
        assert_eq!(kind, AssetKind::Gold);
    }
}
