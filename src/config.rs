use crate::consts;
use crate::error::SetupError;

/// Startup settings for the renderer.
///
/// The shader source and its iteration ceiling are fixed; only the page
/// integration and the animation cadence are tunable.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Id of the `<canvas>` element to render into.
    pub canvas_id: String,
    /// Windows whose smaller side is below this are skipped.
    pub min_dimension: u32,
    /// Duration of one palette cycle, in milliseconds.
    pub palette_period_ms: f64,
    /// Console log level installed at startup.
    pub log_level: log::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: consts::CANVAS_ID.to_owned(),
            min_dimension: consts::MIN_VIEWPORT_DIMENSION,
            palette_period_ms: consts::PALETTE_PERIOD_MS,
            log_level: log::Level::Info,
        }
    }
}

impl Config {
    /// Reject settings the frame loop cannot run with.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.canvas_id.is_empty() {
            return Err(SetupError::InvalidConfig("canvas id is empty"));
        }
        if self.min_dimension == 0 {
            return Err(SetupError::InvalidConfig("minimum viewport dimension must be positive"));
        }
        if !self.palette_period_ms.is_finite() || self.palette_period_ms <= 0.0 {
            return Err(SetupError::InvalidConfig("palette period must be a positive number of milliseconds"));
        }
        Ok(())
    }
}
