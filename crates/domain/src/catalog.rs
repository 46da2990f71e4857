//! The fixed catalog of donut kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShopError;

/// A kind of donut the shop bakes.
///
/// The set is closed. Declaration order is the canonical order used when
/// iterating counts and when breaking ties in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonutKind {
    BostonCream,
    Glazed,
    OldFashioned,
    ChocolateGlazed,
    VanillaFrosted,
    Pumpkin,
    Blueberry,
    Jelly,
    BavarianCream,
}

impl DonutKind {
    /// Every kind, in declaration order.
    pub const ALL: [DonutKind; 9] = [
        DonutKind::BostonCream,
        DonutKind::Glazed,
        DonutKind::OldFashioned,
        DonutKind::ChocolateGlazed,
        DonutKind::VanillaFrosted,
        DonutKind::Pumpkin,
        DonutKind::Blueberry,
        DonutKind::Jelly,
        DonutKind::BavarianCream,
    ];

    /// Returns the short code used in order descriptors.
    pub fn code(&self) -> &'static str {
        match self {
            DonutKind::BostonCream => "BC",
            DonutKind::Glazed => "G",
            DonutKind::OldFashioned => "OF",
            DonutKind::ChocolateGlazed => "CG",
            DonutKind::VanillaFrosted => "VF",
            DonutKind::Pumpkin => "P",
            DonutKind::Blueberry => "B",
            DonutKind::Jelly => "J",
            DonutKind::BavarianCream => "BA",
        }
    }

    /// Looks up a kind by its exact code.
    pub fn from_code(code: &str) -> Result<DonutKind, ShopError> {
        match code {
            "BC" => Ok(DonutKind::BostonCream),
            "G" => Ok(DonutKind::Glazed),
            "OF" => Ok(DonutKind::OldFashioned),
            "CG" => Ok(DonutKind::ChocolateGlazed),
            "VF" => Ok(DonutKind::VanillaFrosted),
            "P" => Ok(DonutKind::Pumpkin),
            "B" => Ok(DonutKind::Blueberry),
            "J" => Ok(DonutKind::Jelly),
            "BA" => Ok(DonutKind::BavarianCream),
            _ => Err(ShopError::UnknownCode {
                code: code.to_string(),
            }),
        }
    }

    /// Returns the upper-case name, e.g. `BOSTON_CREAM`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DonutKind::BostonCream => "BOSTON_CREAM",
            DonutKind::Glazed => "GLAZED",
            DonutKind::OldFashioned => "OLD_FASHIONED",
            DonutKind::ChocolateGlazed => "CHOCOLATE_GLAZED",
            DonutKind::VanillaFrosted => "VANILLA_FROSTED",
            DonutKind::Pumpkin => "PUMPKIN",
            DonutKind::Blueberry => "BLUEBERRY",
            DonutKind::Jelly => "JELLY",
            DonutKind::BavarianCream => "BAVARIAN_CREAM",
        }
    }
}

impl std::fmt::Display for DonutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonutKind {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DonutKind::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_round_trips() {
        for kind in DonutKind::ALL {
            assert_eq!(DonutKind::from_code(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = DonutKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DonutKind::ALL.len());
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(
            DonutKind::from_code("XX"),
            Err(ShopError::UnknownCode {
                code: "XX".to_string()
            })
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(DonutKind::from_code("bc").is_err());
        assert!(DonutKind::from_code("BC ").is_err());
        assert!(DonutKind::from_code("").is_err());
    }

    #[test]
    fn test_serializes_as_upper_snake_case() {
        let json = serde_json::to_string(&DonutKind::BostonCream).unwrap();
        assert_eq!(json, "\"BOSTON_CREAM\"");
        assert_eq!(DonutKind::BavarianCream.to_string(), "BAVARIAN_CREAM");
    }
}
