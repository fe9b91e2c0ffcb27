use serde::Serialize;

/// Lye, water and oil masses for one batch, in grams rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulationResult {
    /// Sodium hydroxide.
    pub lye: f64,

    pub water: f64,

    pub total_oils: f64,
}

impl FormulationResult {
    pub fn new(lye: f64, water: f64, total_oils: f64) -> Self {
        Self {
            lye,
            water,
            total_oils,
        }
    }

    /// True when nothing has been formulated yet.
    pub fn is_zero(&self) -> bool {
        self.lye == 0.0 && self.water == 0.0 && self.total_oils == 0.0
    }
}
