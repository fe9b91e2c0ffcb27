use tracing::{debug, info};

use crate::engine::{
    self, compute_formulation, compute_formulation_with_fallback, BATCH_SIZE_STEP,
    DEFAULT_BATCH_SIZE, MAX_BATCH_SIZE, MIN_BATCH_SIZE,
};
use crate::error::{Result, SoapError};
use crate::models::{FormulationResult, OilQuantities, OilType};
use crate::reference::RecipeCatalog;

/// How a session turns its state into results.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Estimate from the batch size while no oils are entered.
    pub fallback: bool,

    /// Recompute when only the batch size changes.
    pub recalc_on_batch_change: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback: false,
            recalc_on_batch_change: true,
        }
    }
}

/// The mutable side of the calculator: current oils, batch size and the
/// latest results. The engine functions it calls are pure.
#[derive(Debug, Clone)]
pub struct FormulationSession {
    oils: OilQuantities,
    batch_size: f64,
    results: FormulationResult,
    active_recipe: Option<String>,
    config: SessionConfig,
}

impl FormulationSession {
    /// Fresh session: no oils, default batch size.
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            oils: OilQuantities::zeroed(),
            batch_size: DEFAULT_BATCH_SIZE,
            results: FormulationResult::default(),
            active_recipe: None,
            config,
        };
        session.recalculate();
        session
    }

    pub fn oils(&self) -> &OilQuantities {
        &self.oils
    }

    pub fn batch_size(&self) -> f64 {
        self.batch_size
    }

    pub fn results(&self) -> &FormulationResult {
        &self.results
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Id of the recipe loaded last, until an oil is edited by hand.
    pub fn active_recipe(&self) -> Option<&str> {
        self.active_recipe.as_deref()
    }

    /// Set the batch size, clamped to the slider range and snapped to its step.
    ///
    /// Returns the size actually stored.
    pub fn set_batch_size(&mut self, grams: f64) -> Result<f64> {
        if !(grams.is_finite() && grams > 0.0) {
            return Err(SoapError::InvalidBatchSize(grams));
        }
        let snapped = (grams / BATCH_SIZE_STEP).round() * BATCH_SIZE_STEP;
        self.batch_size = snapped.clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE);
        debug!(requested = grams, stored = self.batch_size, "batch size set");

        if self.config.recalc_on_batch_change {
            self.recalculate();
        }
        Ok(self.batch_size)
    }

    /// Apply raw text typed into one oil's field and recompute.
    pub fn update_oil(&mut self, oil: OilType, raw_value: &str) -> &FormulationResult {
        self.oils = engine::update_oil(&self.oils, oil, raw_value);
        self.active_recipe = None;
        self.recalculate()
    }

    /// Replace every oil with a recipe scaled to the current batch size.
    pub fn load_recipe(&mut self, catalog: &RecipeCatalog, id: &str) -> Result<&FormulationResult> {
        let recipe = catalog.get(id)?;
        self.oils = engine::scale_recipe(recipe, self.batch_size)?;
        self.active_recipe = Some(recipe.id.clone());
        info!(recipe = %recipe.id, batch_size = self.batch_size, "loaded recipe");
        Ok(self.recalculate())
    }

    /// Zero every oil.
    pub fn reset(&mut self) -> &FormulationResult {
        self.oils = OilQuantities::zeroed();
        self.active_recipe = None;
        self.recalculate()
    }

    /// Recompute results from the current oils and batch size.
    pub fn recalculate(&mut self) -> &FormulationResult {
        self.results = if self.config.fallback {
            compute_formulation_with_fallback(&self.oils, self.batch_size)
        } else {
            compute_formulation(&self.oils)
        };
        &self.results
    }
}

impl Default for FormulationSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
