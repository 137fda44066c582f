use std::path::PathBuf;

use thiserror::Error;

use crate::renderer::ShaderStage;

/// Coordinate axis, as reported by normalization errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::X => "x",
            Axis::Y => "y",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    /// The step size divides by `count - 1`
    #[error("at least 2 points are required, got {0}")]
    TooFewPoints(usize),

    #[error("{axis} axis has zero span (every value is {value})")]
    DegenerateSpan { axis: Axis, value: f32 },

    #[error("{axis} axis span from {min} to {max} overflows")]
    SpanOverflow { axis: Axis, min: f32, max: f32 },

    #[error("function returned a non-finite value at sample {index}")]
    NonFinite { index: usize },

    #[error("failed to write {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create window")]
    CreateWindow(#[from] winit::error::OsError),

    #[error("failed to create surface")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("failed to request device")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("{stage} shader failed to compile: {message}")]
    ShaderCompile { stage: ShaderStage, message: String },

    #[error("render pipeline failed to link: {0}")]
    PipelineLink(String),
}

pub type Result<T> = std::result::Result<T, Error>;
