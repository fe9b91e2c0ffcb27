use crate::models::OilType;

/// Water mass per gram of oil (6 oz water per 16 oz oil).
///
/// A formulation choice, not derived from SAP data. Lower ratios give a
/// stronger lye solution and a faster trace.
pub const WATER_TO_OIL_RATIO: f64 = 6.0 / 16.0;

/// Oil whose SAP value estimates lye when no oils have been entered.
pub const FALLBACK_OIL: OilType = OilType::Olive;

/// Decimal places kept in results and scaled recipe weights.
pub const RESULT_DECIMALS: i32 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Batch size bounds (enforced by the session, not by the engine)
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_BATCH_SIZE: f64 = 100.0;

pub const MAX_BATCH_SIZE: f64 = 5000.0;

/// Batch size granularity in grams.
pub const BATCH_SIZE_STEP: f64 = 50.0;

pub const DEFAULT_BATCH_SIZE: f64 = 500.0;

/// Round half away from zero to [`RESULT_DECIMALS`] places.
#[inline]
pub fn round_result(value: f64) -> f64 {
    let factor = 10_f64.powi(RESULT_DECIMALS);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(WATER_TO_OIL_RATIO, 0.375);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_result(1.005), 1.0); // stored as 1.00499...
        assert_eq!(round_result(2.345678), 2.35);
        assert_eq!(round_result(0.125), 0.13);
        assert_eq!(round_result(-0.125), -0.13);
        assert_eq!(round_result(0.0), 0.0);
    }

    #[test]
    fn test_default_batch_within_bounds() {
        assert!((MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&DEFAULT_BATCH_SIZE));
    }
}
