//! Palette mapping: escape value plus time shift to an RGB hue wheel.

/// Linear RGBA color with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Palette shift after `elapsed_ms` of animation: the fraction of the current
/// cycle, always in `[0, 1)`.
#[must_use]
pub fn shift_at(elapsed_ms: f64, period_ms: f64) -> f32 {
    let cycles = elapsed_ms / period_ms;
    let shift = (cycles - cycles.floor()) as f32;
    // f64 fractions just below 1 round up when narrowed
    if shift >= 1.0 {
        0.0
    } else {
        shift
    }
}

/// Position on the six-segment hue wheel, in `[0, 6]`.
#[must_use]
pub fn hue_position(escape: f32, shift: f32) -> f32 {
    let t = escape + shift;
    (t - t.floor()) * 6.0
}

/// Color for a normalized escape value (`k / ceiling`) under `shift`.
///
/// Red peaks around `s ∈ [4, 6] ∪ [0, 1]`, green around `[1, 3]` and blue
/// around `[3, 5]`; each ramp is clamped to `[0, 1]` and alpha is opaque.
#[must_use]
pub fn color(escape: f32, shift: f32) -> Rgba {
    let s = hue_position(escape, shift);
    Rgba {
        r: (2.0 - s).max(s - 4.0).clamp(0.0, 1.0),
        g: (2.0 - (2.0 - s).abs()).clamp(0.0, 1.0),
        b: (2.0 - (4.0 - s).abs()).clamp(0.0, 1.0),
        a: 1.0,
    }
}
