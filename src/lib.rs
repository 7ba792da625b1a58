//! Interactive Julia set rendered by a WebGL2 fragment shader.
//!
//! The pointer position picks the Julia parameter and a time-driven shift
//! rotates the palette. Everything outside the browser glue is plain Rust and
//! builds on the host, so the frame state machine, viewport handling and the
//! coloring math can be tested without a display.

pub mod backend;
pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod frame;
pub mod host;
pub mod julia;
pub mod palette;
pub mod pointer;
pub mod shader;
pub mod viewport;

pub use backend::{Backend, Uniform};
pub use config::Config;
pub use context::RenderContext;
pub use error::{SetupError, ViewportUnusable};
pub use frame::{AnimationState, FrameDriver, Phase};
pub use host::{Scheduler, Surface};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
