use crate::backend::{Backend, Uniform};
use crate::context::RenderContext;
use crate::error::ViewportUnusable;
use crate::host::Surface;
use crate::pointer::PointerPos;

/// Canvas extents matching the window, plus derived constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub mid_x: f64,
    pub mid_y: f64,
}

impl Viewport {
    /// Viewport for a window of `width` x `height`, unless its smaller side is
    /// below `min_dimension`.
    pub fn from_window(width: u32, height: u32, min_dimension: u32) -> Result<Self, ViewportUnusable> {
        if width.min(height) < min_dimension {
            return Err(ViewportUnusable { width, height, min: min_dimension });
        }
        Ok(Self {
            width,
            height,
            mid_x: f64::from(width) / 2.0,
            mid_y: f64::from(height) / 2.0,
        })
    }

    /// Default pointer position before any pointer event.
    #[must_use]
    pub fn midpoint(&self) -> PointerPos {
        PointerPos::new(self.mid_x, self.mid_y)
    }
}

impl<S: Surface, B: Backend> RenderContext<S, B> {
    /// Size the canvas to the window and push `width`/`height` to the backend.
    ///
    /// An unusable window changes nothing, so half-finished resizes are skipped
    /// and retried. Repeated calls with the same window size write the same
    /// values.
    pub fn reconfigure(&mut self) -> Result<Viewport, ViewportUnusable> {
        let (window_width, window_height) = self.surface.window_size();
        let viewport = Viewport::from_window(window_width, window_height, self.min_dimension)?;

        self.surface.resize_canvas(viewport.width, viewport.height);
        let left = (f64::from(window_width) - f64::from(viewport.width)) / 2.0;
        let top = (f64::from(window_height) - f64::from(viewport.height)) / 2.0;
        self.surface.place_canvas(left, top);

        if self.pointer.is_none() {
            self.pointer = Some(viewport.midpoint());
        }

        self.backend.set_viewport(viewport.width, viewport.height);
        self.backend.set_float(Uniform::Width, viewport.width as f32);
        self.backend.set_float(Uniform::Height, viewport.height as f32);

        log::debug!("viewport configured at {}x{}", viewport.width, viewport.height);
        self.viewport = Some(viewport);
        self.resize_pending = false;
        Ok(viewport)
    }
}
