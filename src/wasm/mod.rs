//! Browser glue: WebGL2 backend, DOM surface and the animation-frame loop.

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::error::SetupError;

mod dom;
mod gl;
mod render;

pub use dom::DomSurface;
pub use gl::WebGlBackend;
pub use render::start;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = Config::default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("logger not installed: {e}").into());
    }

    start(config)?;
    Ok(())
}

impl From<SetupError> for JsValue {
    fn from(e: SetupError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

fn js_error(e: JsValue) -> SetupError {
    SetupError::Js(format!("{e:?}"))
}
