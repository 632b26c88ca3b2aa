use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Vertical field of view. The map is viewed through a lens whose half
/// angle is `PI - 2.5` radians.
pub const FOV_Y_RADIANS: f32 = 2.0 * std::f32::consts::PI - 5.0;
pub const Z_NEAR: f32 = 0.001;
pub const Z_FAR: f32 = 1000.0;

/// Eye, look-at target and up vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Map north (+X) points down the screen.
    pub const UP: Vec3 = Vec3::NEG_X;

    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Self::UP,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Combined projection and view matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(FOV_Y_RADIANS, aspect.max(0.01), Z_NEAR, Z_FAR);
        projection * self.view()
    }

    /// Moves the camera onto a preset, keeping the up vector.
    pub fn apply(&mut self, preset: &CameraPreset) {
        self.eye = preset.eye;
        self.target = preset.target;
    }
}

/// A stored eye/target pair the user can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPreset {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPreset {
    pub fn camera(&self) -> Camera {
        Camera::new(self.eye, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4Swizzles;

    #[test]
    fn target_projects_to_screen_center() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 0.25), Vec3::ZERO);
        let clip = camera.view_proj(1.0) * Vec3::ZERO.extend(1.0);
        let ndc = clip.xyz() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn north_points_down_the_screen() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 0.25), Vec3::ZERO);
        let clip = camera.view_proj(1.0) * Vec3::new(0.05, 0.0, 0.0).extend(1.0);
        assert!(clip.y / clip.w < 0.0);
    }

    #[test]
    fn distant_points_stay_inside_the_depth_range() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 0.25), Vec3::ZERO);
        let clip = camera.view_proj(1.0) * Vec3::new(0.0, 0.0, -500.0).extend(1.0);
        let depth = clip.z / clip.w;
        assert!(depth > 0.0 && depth < 1.0, "depth {depth} was clipped");
    }

    #[test]
    fn applying_a_preset_keeps_up_vector() {
        let mut camera = Camera::new(Vec3::ONE, Vec3::ZERO);
        camera.apply(&CameraPreset {
            eye: Vec3::new(0.5, 0.0, 0.5),
            target: Vec3::Y,
        });
        assert_eq!(camera.eye, Vec3::new(0.5, 0.0, 0.5));
        assert_eq!(camera.target, Vec3::Y);
        assert_eq!(camera.up, Camera::UP);
    }
}
