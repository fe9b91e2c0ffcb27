use tracing::debug;

use crate::engine::constants::round_result;
use crate::error::{Result, SoapError};
use crate::models::{OilQuantities, Recipe, MAX_OIL_GRAMS};

/// Scale a recipe's reference oils to `target_batch_size` grams.
///
/// The result starts from all-zero quantities, so oils the recipe does not
/// use are always 0 even if a previous recipe used them. A target that
/// would push any oil past [`MAX_OIL_GRAMS`] is an invalid batch size.
pub fn scale_recipe(recipe: &Recipe, target_batch_size: f64) -> Result<OilQuantities> {
    if !(target_batch_size.is_finite() && target_batch_size > 0.0) {
        return Err(SoapError::InvalidBatchSize(target_batch_size));
    }

    if let Some((oil, weight)) = recipe
        .oils
        .iter()
        .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
    {
        return Err(SoapError::InvalidRecipe(format!(
            "'{}' has an invalid weight for {}: {}",
            recipe.id, oil, weight
        )));
    }

    let reference_total = recipe.reference_total();
    if !(reference_total.is_finite() && reference_total > 0.0) {
        return Err(SoapError::InvalidRecipe(format!(
            "'{}' has no oil weight to scale",
            recipe.id
        )));
    }

    let scale_factor = target_batch_size / reference_total;
    debug!(recipe = %recipe.id, reference_total, scale_factor, "scaling recipe");

    let mut scaled = OilQuantities::zeroed();
    for (oil, weight) in &recipe.oils {
        let grams = round_result(weight * scale_factor);
        if !grams.is_finite() || grams > MAX_OIL_GRAMS {
            return Err(SoapError::InvalidBatchSize(target_batch_size));
        }
        scaled.set(*oil, grams)?;
    }
    Ok(scaled)
}
