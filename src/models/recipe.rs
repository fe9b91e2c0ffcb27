use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::OilType;

/// A named soap template.
///
/// Only the ratios between the reference oil weights matter; their absolute
/// scale is arbitrary. Everything except `id` and `oils` is display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Reference weights in grams, only for the oils the recipe uses.
    pub oils: BTreeMap<OilType, f64>,

    #[serde(default)]
    pub meditation: String,

    #[serde(default)]
    pub herbs: String,

    #[serde(default)]
    pub essential_oil: String,

    #[serde(default)]
    pub chakra: String,

    #[serde(default)]
    pub element: String,

    #[serde(default)]
    pub process: String,
}

impl Recipe {
    /// Sum of the reference oil weights.
    pub fn reference_total(&self) -> f64 {
        self.oils.values().sum()
    }

    /// Share of the batch taken by one oil, or 0 when unused.
    pub fn proportion(&self, oil: OilType) -> f64 {
        let total = self.reference_total();
        if total > 0.0 {
            self.oils.get(&oil).copied().unwrap_or(0.0) / total
        } else {
            0.0
        }
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }
}
