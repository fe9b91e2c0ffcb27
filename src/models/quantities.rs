use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SoapError};
use crate::models::OilType;

/// Largest mass a single oil entry may hold (one tonne).
///
/// Keeps every derived figure, including the x100 rounding step, far from
/// `f64` overflow.
pub const MAX_OIL_GRAMS: f64 = 1_000_000_000.0;

/// Grams of every known oil in a batch.
///
/// Total over [`OilType::ALL`]: an oil that is not used holds `0.0`.
/// Entries are always finite and within `0.0..=MAX_OIL_GRAMS`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "BTreeMap<OilType, f64>", try_from = "BTreeMap<OilType, f64>")]
pub struct OilQuantities {
    grams: [f64; OilType::ALL.len()],
}

impl OilQuantities {
    /// All oils at zero.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Grams of one oil.
    #[inline]
    pub fn get(&self, oil: OilType) -> f64 {
        self.grams[oil as usize]
    }

    /// Set one oil, rejecting negative, non-finite or oversized masses.
    pub fn set(&mut self, oil: OilType, grams: f64) -> Result<()> {
        if !(0.0..=MAX_OIL_GRAMS).contains(&grams) {
            return Err(SoapError::InvalidQuantity {
                oil: oil.key().to_string(),
                value: grams,
            });
        }
        self.grams[oil as usize] = grams;
        Ok(())
    }

    /// Set one oil, forcing `grams` into `0.0..=MAX_OIL_GRAMS`. NaN stores 0.
    pub(crate) fn set_clamped(&mut self, oil: OilType, grams: f64) {
        self.grams[oil as usize] = if grams.is_nan() {
            0.0
        } else {
            grams.clamp(0.0, MAX_OIL_GRAMS)
        };
    }

    /// Copy with one oil replaced.
    pub fn with(mut self, oil: OilType, grams: f64) -> Result<Self> {
        self.set(oil, grams)?;
        Ok(self)
    }

    /// `(oil, grams)` pairs in canonical order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (OilType, f64)> + '_ {
        OilType::ALL.into_iter().map(|oil| (oil, self.get(oil)))
    }

    /// Only the oils with a positive mass.
    pub fn used(&self) -> impl Iterator<Item = (OilType, f64)> + '_ {
        self.iter().filter(|(_, grams)| *grams > 0.0)
    }

    /// Sum of all oil masses.
    pub fn total(&self) -> f64 {
        self.grams.iter().sum()
    }

    /// True when no oil has been entered.
    pub fn is_empty(&self) -> bool {
        self.grams.iter().all(|g| *g == 0.0)
    }
}

impl From<OilQuantities> for BTreeMap<OilType, f64> {
    fn from(q: OilQuantities) -> Self {
        q.iter().collect()
    }
}

impl TryFrom<BTreeMap<OilType, f64>> for OilQuantities {
    type Error = SoapError;

    /// Missing oils become zero.
    fn try_from(map: BTreeMap<OilType, f64>) -> Result<Self> {
        let mut q = OilQuantities::zeroed();
        for (oil, grams) in map {
            q.set(oil, grams)?;
        }
        Ok(q)
    }
}
