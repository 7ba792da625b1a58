use crate::backend::{Backend, Uniform};
use crate::pointer::PointerPos;
use crate::viewport::Viewport;

/// Everything the frame loop and the input handlers share.
///
/// The pointer handler is the only writer of `pointer`; the frame driver only
/// reads it. All callers run on the browser's single event thread.
pub struct RenderContext<S, B> {
    pub(crate) surface: S,
    pub(crate) backend: B,
    pub(crate) min_dimension: u32,
    pub(crate) viewport: Option<Viewport>,
    pub(crate) pointer: Option<PointerPos>,
    pub(crate) resize_pending: bool,
}

impl<S, B> RenderContext<S, B> {
    pub fn new(surface: S, backend: B, min_dimension: u32) -> Self {
        Self {
            surface,
            backend,
            min_dimension,
            viewport: None,
            pointer: None,
            resize_pending: false,
        }
    }

    /// Last successfully applied viewport, if any.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Latest canvas-local pointer position, if known.
    pub fn pointer(&self) -> Option<PointerPos> {
        self.pointer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mark the viewport stale after the window changed size.
    pub fn request_resize(&mut self) {
        self.resize_pending = true;
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_pending
    }
}

impl<S, B: Backend> RenderContext<S, B> {
    /// Push the per-frame uniforms and draw the quad.
    ///
    /// Does nothing until a viewport has been applied.
    pub fn present(&mut self, palette_shift: f32) {
        let Some(viewport) = self.viewport else {
            return;
        };
        let pointer = self.pointer.unwrap_or_else(|| viewport.midpoint());

        self.backend
            .set_vec2(Uniform::MousePos, pointer.to_backend(viewport.height));
        self.backend.set_float(Uniform::PaletteShift, palette_shift);
        self.backend.draw_quad();
    }
}
