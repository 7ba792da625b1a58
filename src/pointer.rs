use crate::context::RenderContext;

/// Pointer position in canvas-local CSS pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPos {
    pub x: f64,
    pub y: f64,
}

impl PointerPos {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `mousePos` uniform value: backend coordinates have Y pointing up.
    #[must_use]
    pub fn to_backend(self, height: u32) -> [f32; 2] {
        [self.x as f32, (f64::from(height) - self.y) as f32]
    }
}

/// Rendered geometry of the canvas, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOffset {
    pub rect_left: f64,
    pub rect_top: f64,
    pub padding_left: f64,
    pub padding_top: f64,
    pub border_left: f64,
    pub border_top: f64,
}

impl CanvasOffset {
    /// Convert client coordinates to canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, client_x: f64, client_y: f64) -> PointerPos {
        PointerPos {
            x: client_x - self.padding_left - self.border_left - self.rect_left,
            y: client_y - self.padding_top - self.border_top - self.rect_top,
        }
    }
}

/// Integer part of a computed CSS length such as `"12px"` or `"1.5px"`.
///
/// Anything without a leading number counts as zero.
#[must_use]
pub fn parse_css_px(value: &str) -> f64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse::<i64>().map_or(0.0, |v| v as f64)
}

impl<S, B> RenderContext<S, B> {
    /// Record a pointer move. Only the latest position is kept.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, offset: &CanvasOffset) {
        self.pointer = Some(offset.to_local(client_x, client_y));
    }
}
