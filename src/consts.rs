//! Numeric constants shared by the shader mirror and the frame loop.

// ── Escape-time iteration ───────────────────────────────────────

/// Iteration ceiling of the escape loop. Must match `ITER_MAX` in the fragment shader.
pub const ITERATION_CEILING: u32 = 100;

/// A point has escaped once |z| exceeds this.
pub const ESCAPE_RADIUS: f32 = 2.0;

// ── Parameter mapping ───────────────────────────────────────────

/// Julia parameter when the pointer sits at the bottom-left corner.
pub const PARAMETER_ORIGIN: [f32; 2] = [-0.5, 0.55];

/// Parameter-plane extent swept by the full pointer range.
pub const PARAMETER_SPAN: [f32; 2] = [0.2, 0.15];

// ── Defaults for `Config` ───────────────────────────────────────

/// Smallest usable window dimension, in CSS pixels.
pub const MIN_VIEWPORT_DIMENSION: u32 = 100;

/// One full palette cycle, in milliseconds.
pub const PALETTE_PERIOD_MS: f64 = 10_000.0;

/// Id of the canvas element looked up (or created) at startup.
pub const CANVAS_ID: &str = "c";
