use log::debug;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, CameraPreset};
use crate::input::{ControlState, Subject};
use crate::lighting::Light;

/// World units a held key moves the eye or target per frame.
pub const MOVE_SPEED: f32 = 0.0002;
/// Radians the orbiting light advances per frame.
pub const ORBIT_STEP: f32 = 0.0005;
/// The orbit angle restarts at zero once it passes this value.
pub const ORBIT_WRAP: f32 = 360.0;
/// Radius of the orbiting light's circle around the origin.
pub const ORBIT_RADIUS: f32 = 1.0 / 3.0;

/// How lit props are shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Lighting evaluated per fragment.
    #[default]
    Phong,
    /// Lighting evaluated per vertex and interpolated.
    Gouraud,
}

impl ShadingMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Phong => Self::Gouraud,
            Self::Gouraud => Self::Phong,
        }
    }
}

/// Everything that changes from one frame to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub camera: Camera,
    pub shading: ShadingMode,
    pub lights: [Light; 2],
    presets: [CameraPreset; 4],
    preset_index: usize,
    orbit_angle: f32,
}

impl FrameState {
    /// Starts on the first preset.
    pub fn new(presets: [CameraPreset; 4], lights: [Light; 2], shading: ShadingMode) -> Self {
        Self {
            camera: presets[0].camera(),
            shading,
            lights,
            presets,
            preset_index: 0,
            orbit_angle: 0.0,
        }
    }

    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Applies one frame of input and animation.
    pub fn advance(&mut self, controls: &mut ControlState) {
        self.camera.eye += controls.direction(Subject::Eye) * MOVE_SPEED;
        self.camera.target += controls.direction(Subject::Target) * MOVE_SPEED;

        for _ in 0..controls.take_preset_requests() {
            self.next_preset();
        }
        for _ in 0..controls.take_shading_toggles() {
            self.toggle_shading();
        }

        self.orbit_light();
    }

    /// Jumps to the following preset, wrapping after the last one.
    pub fn next_preset(&mut self) {
        self.preset_index = (self.preset_index + 1) % self.presets.len();
        self.camera.apply(&self.presets[self.preset_index]);
        debug!(
            "camera preset {} eye={:?} target={:?}",
            self.preset_index, self.camera.eye, self.camera.target
        );
    }

    pub fn toggle_shading(&mut self) {
        self.shading = self.shading.toggled();
        debug!("shading mode {:?}", self.shading);
    }

    fn orbit_light(&mut self) {
        let light = &mut self.lights[0];
        light.position.x = self.orbit_angle.sin() * ORBIT_RADIUS;
        light.position.y = self.orbit_angle.cos() * ORBIT_RADIUS;

        self.orbit_angle += ORBIT_STEP;
        if self.orbit_angle > ORBIT_WRAP {
            self.orbit_angle = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::input::{KeyCode, NamedKey};

    fn presets() -> [CameraPreset; 4] {
        [
            CameraPreset {
                eye: Vec3::new(0.5, 0.0, 0.5),
                target: Vec3::ZERO,
            },
            CameraPreset {
                eye: Vec3::new(0.5, 0.15, 0.25),
                target: Vec3::new(0.3, 0.1, 0.0),
            },
            CameraPreset {
                eye: Vec3::new(0.15, 0.0, 0.25),
                target: Vec3::new(0.05, -0.06, 0.0),
            },
            CameraPreset {
                eye: Vec3::new(0.33, -0.1, 0.25),
                target: Vec3::new(0.24, 0.13, 0.0),
            },
        ]
    }

    fn lights() -> [Light; 2] {
        [
            Light::point(Vec3::new(0.33, 0.33, 0.25), Vec3::ONE, 5.0),
            Light::directional(Vec3::splat(0.5), Vec3::ONE, 0.1),
        ]
    }

    fn state() -> FrameState {
        FrameState::new(presets(), lights(), ShadingMode::Phong)
    }

    #[test]
    fn four_preset_cycles_return_to_start() {
        let mut state = state();
        let start = state.camera;
        for _ in 0..4 {
            state.next_preset();
        }
        assert_eq!(state.camera, start);
        assert_eq!(state.preset_index(), 0);
    }

    #[test]
    fn preset_request_jumps_to_next_pair() {
        let mut state = state();
        let mut controls = ControlState::new();
        controls.set_key_up(KeyCode::Named(NamedKey::Space));
        state.advance(&mut controls);
        assert_eq!(state.preset_index(), 1);
        assert_eq!(state.camera.eye, presets()[1].eye);
        assert_eq!(state.camera.target, presets()[1].target);

        state.advance(&mut controls);
        assert_eq!(state.preset_index(), 1);
    }

    #[test]
    fn double_toggle_restores_shading() {
        let mut state = state();
        let mut controls = ControlState::new();
        controls.set_key_up(KeyCode::Named(NamedKey::Tab));
        state.advance(&mut controls);
        assert_eq!(state.shading, ShadingMode::Gouraud);
        controls.set_key_up(KeyCode::Named(NamedKey::Tab));
        state.advance(&mut controls);
        assert_eq!(state.shading, ShadingMode::Phong);
    }

    #[test]
    fn held_keys_translate_eye_and_target() {
        let mut state = state();
        let start = state.camera;
        let mut controls = ControlState::new();
        controls.set_key_down(KeyCode::Character('S'));
        controls.set_key_down(KeyCode::Named(NamedKey::RightCtrl));
        state.advance(&mut controls);
        state.advance(&mut controls);
        assert!(state
            .camera
            .eye
            .abs_diff_eq(start.eye + Vec3::X * 2.0 * MOVE_SPEED, 1e-6));
        assert!(state
            .camera
            .target
            .abs_diff_eq(start.target + Vec3::Z * 2.0 * MOVE_SPEED, 1e-6));
        assert_eq!(state.camera.up, start.up);
    }

    #[test]
    fn first_light_orbits_the_origin() {
        let mut state = state();
        let mut controls = ControlState::new();
        state.advance(&mut controls);
        let light = state.lights[0].position;
        assert!((light.x - 0.0).abs() < 1e-6);
        assert!((light.y - ORBIT_RADIUS).abs() < 1e-6);
        assert_eq!(light.z, 0.25);
        assert_eq!(light.w, 1.0);
        assert!((state.orbit_angle() - ORBIT_STEP).abs() < 1e-7);

        for _ in 0..1000 {
            state.advance(&mut controls);
        }
        let light = state.lights[0].position;
        let radius = (light.x * light.x + light.y * light.y).sqrt();
        assert!((radius - ORBIT_RADIUS).abs() < 1e-5);
        assert_eq!(state.lights[1], lights()[1]);
    }

    #[test]
    fn orbit_angle_wraps() {
        let mut state = state();
        state.orbit_angle = ORBIT_WRAP;
        state.advance(&mut ControlState::new());
        assert_eq!(state.orbit_angle(), 0.0);
    }
}
