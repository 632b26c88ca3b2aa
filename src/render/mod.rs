pub mod common;
pub mod native;
pub(crate) mod shared;

pub use common::{CameraParams, PipelineKind};
pub use native::Renderer;
