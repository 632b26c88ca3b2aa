//! Real-time viewer for a hand-authored campus map.
//!
//! The map is a handful of extruded building outlines, a ground plane and an
//! island shoreline, lit by one orbiting point light and one directional
//! light. Everything except [`render`] is plain data and math so that the
//! scene, input handling and lighting can be tested without a GPU.

pub mod app;
pub mod camera;
mod campus;
pub mod input;
pub mod lighting;
pub mod mesh;
pub mod render;
pub mod scene;
pub mod state;

pub use camera::{Camera, CameraPreset};
pub use input::{Command, ControlState, KeyCode, NamedKey};
pub use lighting::{Light, Material};
pub use mesh::{Mesh, MeshError, NormalPolicy};
pub use render::{CameraParams, PipelineKind, Renderer};
pub use scene::{Prop, Scene, Surface};
pub use state::{FrameState, ShadingMode};
