use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use super::js_error;
use crate::error::SetupError;
use crate::host::Surface;
use crate::pointer::{parse_css_px, CanvasOffset};

/// The browser window and the canvas rendered into.
pub struct DomSurface {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl DomSurface {
    pub fn new(window: Window, canvas: HtmlCanvasElement) -> Self {
        Self { window, canvas }
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for DomSurface {
    fn window_size(&self) -> (u32, u32) {
        (
            css_pixels(self.window.inner_width()),
            css_pixels(self.window.inner_height()),
        )
    }

    fn resize_canvas(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn place_canvas(&mut self, left: f64, top: f64) {
        let style = self.canvas.style();
        for (property, value) in [("left", left), ("top", top)] {
            if let Err(e) = style.set_property(property, &format!("{value}px")) {
                log::warn!("cannot set canvas {property}: {e:?}");
            }
        }
    }
}

fn css_pixels(value: Result<JsValue, JsValue>) -> u32 {
    value
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(0, |v| v.max(0.0) as u32)
}

/// Canvas with the given id, created and appended to `<body>` when absent.
pub(super) fn acquire_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, SetupError> {
    if let Some(element) = document.get_element_by_id(id) {
        return element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SetupError::NotACanvas(id.to_owned()));
    }

    let canvas = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SetupError::CreateFailed("canvas"))?;
    canvas.set_id(id);

    let style = canvas.style();
    style.set_property("position", "absolute").map_err(js_error)?;
    style.set_property("cursor", "move").map_err(js_error)?;

    let body = document
        .body()
        .ok_or_else(|| SetupError::Js("document has no body".to_owned()))?;
    body.append_child(&canvas).map_err(js_error)?;
    log::debug!("created canvas #{id}");
    Ok(canvas)
}

/// Current bounding box, padding and border of the canvas.
pub(super) fn canvas_offset(window: &Window, canvas: &HtmlCanvasElement) -> Result<CanvasOffset, JsValue> {
    let style = window
        .get_computed_style(canvas)?
        .ok_or_else(|| JsValue::from_str("canvas has no computed style"))?;
    let px = |name: &str| -> Result<f64, JsValue> { Ok(parse_css_px(&style.get_property_value(name)?)) };
    let rect = canvas.get_bounding_client_rect();

    Ok(CanvasOffset {
        rect_left: rect.left(),
        rect_top: rect.top(),
        padding_left: px("padding-left")?,
        padding_top: px("padding-top")?,
        border_left: px("border-left-width")?,
        border_top: px("border-top-width")?,
    })
}
