//! Fixed GLSL ES 3.0 sources and the full-viewport quad they are drawn over.
//!
//! [`crate::julia`] and [`crate::palette`] mirror the fragment stage on the
//! host; keep the formulas in sync when touching either side.

use std::fmt;

/// Name of the clip-space position attribute in the vertex stage.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Passes the 2D clip-space position through unchanged.
pub const VERTEX_SOURCE: &str = r"#version 300 es
in vec2 position;

void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

/// Escape-time Julia iteration followed by the shifted hue ramp.
pub const FRAGMENT_SOURCE: &str = r"#version 300 es
precision mediump float;

#define ITER_MAX 100
#define FITER_MAX 100.0

uniform float width;
uniform float height;
uniform vec2 mousePos;
uniform float paletteShift;

out vec4 fragColor;

void main() {
    vec2 resolution = vec2(width, height);
    vec2 z = (gl_FragCoord.xy - 0.5 * resolution) / min(width, height) * 2.0;
    vec2 c0 = vec2(-0.5, 0.55) + vec2(0.2, 0.15) * (mousePos / resolution);

    float k = FITER_MAX;
    for (int i = 0; i < ITER_MAX; ++i) {
        if (length(z) > 2.0) {
            k = float(i);
            break;
        }
        z = vec2(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c0;
    }

    float s = mod(k / FITER_MAX + paletteShift, 1.0) * 6.0;
    vec3 rgb = vec3(max(2.0 - s, s - 4.0), 2.0 - abs(2.0 - s), 2.0 - abs(4.0 - s));
    fragColor = vec4(clamp(rgb, 0.0, 1.0), 1.0);
}
";

/// Rectangle covering the whole canvas, drawn as a 4-vertex triangle strip.
pub const QUAD_VERTICES: [f32; 8] = [
    -1.0, 1.0, // top left
    -1.0, -1.0, // bottom left
    1.0, 1.0, // top right
    1.0, -1.0, // bottom right
];

/// Floats per vertex in [`QUAD_VERTICES`].
pub const QUAD_COMPONENTS: i32 = 2;

/// Vertices in [`QUAD_VERTICES`].
pub const QUAD_VERTEX_COUNT: i32 = 4;

/// Pipeline stage a shader source belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Source text compiled for this stage.
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            ShaderStage::Vertex => VERTEX_SOURCE,
            ShaderStage::Fragment => FRAGMENT_SOURCE,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}
