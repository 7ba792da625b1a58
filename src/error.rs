use thiserror::Error;

use crate::shader::ShaderStage;

/// Fatal failure while preparing the page or the shader program.
///
/// Raised before the first frame is scheduled; there is no recovery.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} exists but is not a canvas")]
    NotACanvas(String),

    #[error("WebGL2 not supported")]
    NoContext,

    #[error("failed to create {0}")]
    CreateFailed(&'static str),

    #[error("{stage} shader compile failed with: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program link failed with: {0}")]
    ProgramLink(String),

    #[error("cannot find attribute {0}")]
    MissingAttribute(&'static str),

    #[error("cannot find uniform {0}")]
    MissingUniform(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("browser call failed: {0}")]
    Js(String),
}

/// The window is too small to be worth rendering.
///
/// Recoverable: nothing was changed and the caller tries again on a later frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("viewport {width}x{height} is below the {min}px usability threshold")]
pub struct ViewportUnusable {
    pub width: u32,
    pub height: u32,
    pub min: u32,
}
