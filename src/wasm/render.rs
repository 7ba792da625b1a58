use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MouseEvent, WebGl2RenderingContext as GL, Window};

use super::dom::{self, DomSurface};
use super::gl::WebGlBackend;
use super::js_error;
use crate::config::Config;
use crate::context::RenderContext;
use crate::error::SetupError;
use crate::frame::FrameDriver;
use crate::host::Scheduler;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Requests animation frames for the closure stored in `slot`.
#[derive(Clone)]
struct AnimationFrames {
    window: Window,
    slot: FrameSlot,
}

impl Scheduler for AnimationFrames {
    fn request_frame(&mut self) {
        let slot = self.slot.borrow();
        let Some(callback) = slot.as_ref() else {
            log::error!("frame callback missing, animation stopped");
            return;
        };
        if let Err(e) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {e:?}");
        }
    }
}

/// Set up the shader program and input listeners, then start the frame loop.
///
/// Every fatal error surfaces here, before any frame is scheduled.
pub fn start(config: Config) -> Result<(), SetupError> {
    config.validate()?;

    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;
    let canvas = dom::acquire_canvas(&document, &config.canvas_id)?;

    let gl: GL = canvas
        .get_context("webgl2")
        .map_err(js_error)?
        .ok_or(SetupError::NoContext)?
        .dyn_into()
        .map_err(|_| SetupError::NoContext)?;
    let backend = WebGlBackend::new(gl)?;
    log::info!("julia shader program ready");

    let surface = DomSurface::new(window.clone(), canvas);
    let pointer_target = surface.canvas().clone();
    let ctx = Rc::new(RefCell::new(RenderContext::new(surface, backend, config.min_dimension)));

    // Pointer moves overwrite the latest position; the frame loop samples it.
    let on_move = {
        let ctx = ctx.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            match dom::canvas_offset(&window, &pointer_target) {
                Ok(offset) => ctx.borrow_mut().pointer_moved(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    &offset,
                ),
                Err(e) => log::warn!("canvas geometry unavailable: {e:?}"),
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    window
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_move.forget();

    let on_resize = {
        let ctx = ctx.clone();
        Closure::wrap(Box::new(move || ctx.borrow_mut().request_resize()) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(js_error)?;
    on_resize.forget();

    // Animation loop
    // `slot` holds the animation-frame closure so the scheduler can hand it
    // back to `request_animation_frame` from inside itself.
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let mut kickoff = AnimationFrames {
        window,
        slot: slot.clone(),
    };
    let mut driver = FrameDriver::new(kickoff.clone(), config.palette_period_ms);
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let mut ctx = ctx.borrow_mut();
        driver.on_frame(&mut *ctx, now_ms);
    }) as Box<dyn FnMut(f64)>));

    kickoff.request_frame();
    Ok(())
}
