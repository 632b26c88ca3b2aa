use glam::{Mat4, Vec3};

use crate::scene::{Prop, Surface};
use crate::state::{FrameState, ShadingMode};

/// Camera parameters consumed by the renderer's uniform buffer.
#[derive(Clone, Debug)]
pub struct CameraParams {
    pub view_proj: Mat4,
    pub position: Vec3,
}

impl CameraParams {
    pub fn from_state(state: &FrameState, aspect: f32) -> Self {
        Self {
            view_proj: state.camera.view_proj(aspect),
            position: state.camera.eye,
        }
    }
}

/// Which of the renderer's pipelines draws a prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Outline,
    Gouraud,
    Phong,
}

impl PipelineKind {
    pub fn for_prop(prop: &Prop, shading: ShadingMode) -> Self {
        Self::for_surface(&prop.surface, shading)
    }

    pub fn for_surface(surface: &Surface, shading: ShadingMode) -> Self {
        match (surface, shading) {
            (Surface::Unlit, _) => Self::Outline,
            (Surface::Lit(_), ShadingMode::Gouraud) => Self::Gouraud,
            (Surface::Lit(_), ShadingMode::Phong) => Self::Phong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::NormalPolicy;
    use crate::scene::Scene;

    fn kinds(scene: &Scene, shading: ShadingMode) -> Vec<PipelineKind> {
        scene
            .props
            .iter()
            .map(|prop| PipelineKind::for_prop(prop, shading))
            .collect()
    }

    #[test]
    fn outlines_ignore_shading_mode() {
        let scene = Scene::campus(NormalPolicy::default()).unwrap();
        let island = scene.prop("Island").unwrap();
        assert_eq!(
            PipelineKind::for_prop(island, ShadingMode::Phong),
            PipelineKind::Outline
        );
        assert_eq!(
            PipelineKind::for_prop(island, ShadingMode::Gouraud),
            PipelineKind::Outline
        );
    }

    #[test]
    fn shading_mode_switches_every_lit_prop() {
        let scene = Scene::campus(NormalPolicy::default()).unwrap();
        let phong = kinds(&scene, ShadingMode::Phong);
        let gouraud = kinds(&scene, ShadingMode::Gouraud);
        assert_eq!(phong.iter().filter(|k| **k == PipelineKind::Phong).count(), 5);
        assert_eq!(
            gouraud.iter().filter(|k| **k == PipelineKind::Gouraud).count(),
            5
        );
    }

    #[test]
    fn double_toggle_restores_draw_configuration() {
        let scene = Scene::campus(NormalPolicy::default()).unwrap();
        let mut state = scene.initial_state(ShadingMode::Phong);
        let before = kinds(&scene, state.shading);
        state.toggle_shading();
        assert_ne!(kinds(&scene, state.shading), before);
        state.toggle_shading();
        assert_eq!(kinds(&scene, state.shading), before);
    }

    #[test]
    fn camera_params_follow_the_eye() {
        let scene = Scene::campus(NormalPolicy::default()).unwrap();
        let state = scene.initial_state(ShadingMode::Phong);
        let params = CameraParams::from_state(&state, 1.0);
        assert_eq!(params.position, state.camera.eye);
        assert_eq!(params.view_proj, state.camera.view_proj(1.0));
    }
}
