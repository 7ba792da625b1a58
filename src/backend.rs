//! The rasterization backend as seen by the frame loop.

/// The four uniform slots of the fragment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uniform {
    Width,
    Height,
    MousePos,
    PaletteShift,
}

impl Uniform {
    pub const ALL: [Uniform; 4] = [
        Uniform::Width,
        Uniform::Height,
        Uniform::MousePos,
        Uniform::PaletteShift,
    ];

    /// Identifier of the slot in the GLSL source.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Uniform::Width => "width",
            Uniform::Height => "height",
            Uniform::MousePos => "mousePos",
            Uniform::PaletteShift => "paletteShift",
        }
    }
}

/// Draw-time primitives of a linked shader program.
///
/// Program compilation, buffer upload and slot lookup happen when the
/// implementor is constructed; these calls cannot fail afterwards.
pub trait Backend {
    /// Set the rasterization rectangle to `(0, 0, width, height)`.
    fn set_viewport(&mut self, width: u32, height: u32);

    fn set_float(&mut self, uniform: Uniform, value: f32);

    fn set_vec2(&mut self, uniform: Uniform, value: [f32; 2]);

    /// Draw the full-viewport quad once.
    fn draw_quad(&mut self);
}
