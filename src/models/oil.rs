use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SoapError;

/// A saponifiable oil known to the calculator.
///
/// The set is closed; declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OilType {
    Olive,
    Coconut,
    Almond,
    Palm,
    Avocado,
    Shea,
    Sesame,
    Neem,
}

impl OilType {
    /// Every oil, in canonical order.
    pub const ALL: [OilType; 8] = [
        OilType::Olive,
        OilType::Coconut,
        OilType::Almond,
        OilType::Palm,
        OilType::Avocado,
        OilType::Shea,
        OilType::Sesame,
        OilType::Neem,
    ];

    /// Lowercase key used in recipe files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            OilType::Olive => "olive",
            OilType::Coconut => "coconut",
            OilType::Almond => "almond",
            OilType::Palm => "palm",
            OilType::Avocado => "avocado",
            OilType::Shea => "shea",
            OilType::Sesame => "sesame",
            OilType::Neem => "neem",
        }
    }

    /// Human-readable label for forms and tables.
    pub fn label(self) -> &'static str {
        match self {
            OilType::Olive => "Olive Oil",
            OilType::Coconut => "Coconut Oil",
            OilType::Almond => "Almond Oil",
            OilType::Palm => "Palm Oil",
            OilType::Avocado => "Avocado Oil",
            OilType::Shea => "Shea Butter",
            OilType::Sesame => "Til (Sesame)",
            OilType::Neem => "Sacred Neem",
        }
    }
}

impl fmt::Display for OilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OilType {
    type Err = SoapError;

    /// Case-insensitive; never falls back to a default oil.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        OilType::ALL
            .into_iter()
            .find(|oil| oil.key() == wanted)
            .ok_or_else(|| SoapError::unknown_oil(s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("olive".parse::<OilType>().unwrap(), OilType::Olive);
        assert_eq!(" Shea ".parse::<OilType>().unwrap(), OilType::Shea);
        assert_eq!("NEEM".parse::<OilType>().unwrap(), OilType::Neem);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "lard".parse::<OilType>().unwrap_err();
        assert!(matches!(err, SoapError::UnknownOil { ref name, .. } if name == "lard"));
    }

    #[test]
    fn test_key_roundtrips_through_display() {
        for oil in OilType::ALL {
            assert_eq!(oil.to_string().parse::<OilType>().unwrap(), oil);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&OilType::Avocado).unwrap();
        assert_eq!(json, "\"avocado\"");
    }
}
