use tracing::debug;

use crate::engine::constants::{round_result, FALLBACK_OIL, WATER_TO_OIL_RATIO};
use crate::models::{FormulationResult, OilQuantities, MAX_OIL_GRAMS};
use crate::reference::get_sap_value;

/// Unrounded lye mass for a set of oils.
pub fn lye_for(oils: &OilQuantities) -> f64 {
    oils.iter()
        .map(|(oil, grams)| grams * get_sap_value(oil))
        .sum()
}

/// Water mass for a total oil weight, unrounded.
#[inline]
pub fn water_for(total_oils: f64) -> f64 {
    WATER_TO_OIL_RATIO * total_oils
}

/// Lye, water and total oil mass for the given oils.
///
/// Each figure is rounded independently from unrounded intermediates, so
/// `water == round(ratio * sum(oils))` regardless of how `total_oils` rounds.
pub fn compute_formulation(oils: &OilQuantities) -> FormulationResult {
    let total = oils.total();
    let lye = lye_for(oils);
    let water = water_for(total);

    let result = FormulationResult::new(
        round_result(lye),
        round_result(water),
        round_result(total),
    );
    debug!(?result, "computed formulation");
    result
}

/// Like [`compute_formulation`], but estimates from the batch size when no
/// oils have been entered.
///
/// With an empty oil set the whole batch is treated as [`FALLBACK_OIL`].
/// A non-positive, NaN or oversized (above [`MAX_OIL_GRAMS`]) batch size then
/// yields an all-zero result.
pub fn compute_formulation_with_fallback(
    oils: &OilQuantities,
    batch_size: f64,
) -> FormulationResult {
    if oils.total() > 0.0 {
        return compute_formulation(oils);
    }

    if batch_size.is_nan() || batch_size <= 0.0 || batch_size > MAX_OIL_GRAMS {
        debug!(batch_size, "no oils and no usable batch size");
        return FormulationResult::default();
    }

    let lye = batch_size * get_sap_value(FALLBACK_OIL);
    let result = FormulationResult::new(
        round_result(lye),
        round_result(water_for(batch_size)),
        round_result(batch_size),
    );
    debug!(?result, fallback = %FALLBACK_OIL, "estimated formulation from batch size");
    result
}
