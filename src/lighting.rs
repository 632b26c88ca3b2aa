//! Material and light definitions plus a CPU mirror of the shader's lighting
//! equation.

use glam::{Vec3, Vec4, Vec4Swizzles};
use serde::{Deserialize, Serialize};

/// Phong reflectance coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
}

impl Material {
    pub const COPPER: Self = Self {
        ambient: Vec3::new(0.191250, 0.073500, 0.022500),
        diffuse: Vec3::new(0.703800, 0.270480, 0.082800),
        specular: Vec3::new(0.256777, 0.137622, 0.086014),
        shininess: 12.8,
    };

    pub const SILVER: Self = Self {
        ambient: Vec3::new(0.192250, 0.192250, 0.192250),
        diffuse: Vec3::new(0.507540, 0.507540, 0.507540),
        specular: Vec3::new(0.508273, 0.508273, 0.508273),
        shininess: 51.2,
    };

    pub const GOLD: Self = Self {
        ambient: Vec3::new(0.247250, 0.199500, 0.074500),
        diffuse: Vec3::new(0.751640, 0.606480, 0.226480),
        specular: Vec3::new(0.628281, 0.555802, 0.366065),
        shininess: 51.2,
    };
}

/// A light in homogeneous coordinates: `w == 1` is a point light at `xyz`,
/// `w == 0` shines along `xyz` from infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec4,
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    pub fn point(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position: position.extend(1.0),
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            position: direction.extend(0.0),
            color,
            intensity,
        }
    }

    pub fn is_directional(&self) -> bool {
        self.position.w == 0.0
    }

    /// Color scaled by intensity, as handed to the shader.
    pub fn radiance(&self) -> Vec3 {
        self.color * self.intensity
    }

    /// Unit vector from `point` towards the light.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        if self.is_directional() {
            self.position.xyz().normalize_or_zero()
        } else {
            (self.position.xyz() - point).normalize_or_zero()
        }
    }
}

/// Diffuse plus specular reflectance for one light, before scaling by the
/// light's radiance. Zero when the surface faces away from the light.
pub fn reflectance(normal: Vec3, to_light: Vec3, to_eye: Vec3, material: &Material) -> Vec3 {
    let facing = normal.dot(to_light);
    if facing <= 0.0 {
        return Vec3::ZERO;
    }
    let reflected = reflect(-to_light, normal).normalize_or_zero();
    let diffuse = material.diffuse * facing.max(0.0);
    let specular =
        material.specular * reflected.dot(to_eye).max(0.0).powf(material.shininess);
    diffuse + specular
}

/// Full lighting equation for a surface point, clamped to `[0, 1]`.
///
/// Ambient light is the sum of every light's radiance times the material's
/// ambient term; each light then adds its radiance times [`reflectance`].
pub fn shade(
    base_color: Vec3,
    position: Vec3,
    normal: Vec3,
    eye: Vec3,
    lights: &[Light],
    material: &Material,
) -> Vec3 {
    let normal = normal.normalize_or_zero();
    let to_eye = (eye - position).normalize_or_zero();
    let ambient: Vec3 = lights.iter().map(Light::radiance).sum::<Vec3>() * material.ambient;
    let direct: Vec3 = lights
        .iter()
        .map(|light| {
            light.radiance()
                * reflectance(normal, light.direction_from(position), to_eye, material)
        })
        .sum();
    (base_color * (ambient + direct)).clamp(Vec3::ZERO, Vec3::ONE)
}

fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}
