/// Comparison parameters.
///
/// Neither field is range-checked here; front-ends constrain them before
/// calling [`compute`](crate::compute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffParams {
    /// A pixel differs when its scaled magnitude is strictly greater than this.
    pub threshold: u8,
    /// Multiplier applied to the raw RGB distance before thresholding.
    pub sensitivity: f64,
}

impl Default for DiffParams {
    fn default() -> Self {
        Self {
            threshold: 10,
            sensitivity: 1.0,
        }
    }
}

impl DiffParams {
    pub fn new(threshold: u8, sensitivity: f64) -> Self {
        Self {
            threshold,
            sensitivity,
        }
    }

    /// Build params from a percentage sensitivity (100 = 1.0x, 500 = 5.0x).
    pub fn from_percent(threshold: u8, sensitivity_percent: u32) -> Self {
        Self::new(threshold, percent_to_multiplier(sensitivity_percent))
    }
}

pub fn percent_to_multiplier(percent: u32) -> f64 {
    f64::from(percent) / 100.0
}
