use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::CameraPreset;
use crate::campus;
use crate::lighting::{Light, Material};
use crate::mesh::{gather_points, Mesh, MeshError, NormalPolicy};
use crate::state::{FrameState, ShadingMode};

/// Building outlines are authored at 9.25 times map scale.
const BUILDING_SCALE: f32 = 9.25;
const BUILDING_OFFSET: Vec3 = Vec3::new(0.175, 0.06, 0.0);
const ISLAND_OFFSET: Vec3 = Vec3::new(-1.25, -2.4, 0.0);

/// How a prop is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Surface {
    /// Flat-colored closed line loop.
    Unlit,
    /// Filled triangles lit with the given material.
    Lit(Material),
}

/// One renderable shape of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub mesh: Mesh,
    /// One per vertex; all zero for unlit props.
    pub normals: Vec<Vec3>,
    pub surface: Surface,
    pub color: Vec3,
    pub center: Vec3,
    pub model: Mat4,
}

impl Prop {
    /// Creates a prop, deriving vertex normals when it is lit.
    pub fn new(
        name: impl Into<String>,
        mesh: Mesh,
        surface: Surface,
        color: Vec3,
        center: Vec3,
        policy: NormalPolicy,
    ) -> Self {
        let normals = match surface {
            Surface::Unlit => vec![Vec3::ZERO; mesh.vertex_count()],
            Surface::Lit(_) => mesh.vertex_normals(policy),
        };
        Self {
            name: name.into(),
            mesh,
            normals,
            surface,
            color,
            center,
            model: Mat4::IDENTITY,
        }
    }

    pub fn is_outline(&self) -> bool {
        matches!(self.surface, Surface::Unlit)
    }

    /// Interleaved position/normal data for the vertex buffer.
    pub fn vertex_data(&self) -> Vec<f32> {
        self.mesh.vertex_data(&self.normals)
    }

    /// Index data for the draw call; outlines are closed into a loop.
    pub fn draw_indices(&self) -> Vec<u32> {
        if self.is_outline() {
            self.mesh.closed_loop_indices()
        } else {
            self.mesh.indices.clone()
        }
    }
}

/// The complete campus map: props, lights and camera presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub props: Vec<Prop>,
    pub lights: [Light; 2],
    pub presets: [CameraPreset; 4],
}

impl Scene {
    /// Builds the campus map from its literal geometry.
    pub fn campus(policy: NormalPolicy) -> Result<Self, MeshError> {
        let island = Prop::new(
            "Island",
            Mesh::outline(
                campus::ISLAND_BOUNDARY
                    .iter()
                    .map(|point| Vec3::from_array(*point) + ISLAND_OFFSET)
                    .collect(),
            ),
            Surface::Unlit,
            Vec3::ONE,
            Vec3::ZERO,
            policy,
        );

        let ground = Prop::new(
            "Ground",
            Mesh::triangles(
                campus::GROUND_CORNERS
                    .iter()
                    .map(|point| Vec3::from_array(*point))
                    .collect(),
                campus::GROUND_TRIANGLES.to_vec(),
            )?,
            Surface::Lit(Material::SILVER),
            Vec3::splat(0.1),
            Vec3::ZERO,
            policy,
        );

        let cube = Prop::new(
            "Cube",
            Mesh::triangles(
                gather_points(campus::CUBE_CORNERS, campus::CUBE_VERTEX_ORDER, |point| {
                    point
                })?,
                campus::CUBE_TRIANGLES.to_vec(),
            )?,
            Surface::Lit(Material::COPPER),
            Vec3::new(1.0, 0.2, 0.2),
            Vec3::ZERO,
            policy,
        );

        let ecdc_a = Prop::new(
            "ECDC-A",
            building(
                campus::ECDC_A_FOOTPRINT,
                campus::ECDC_A_VERTEX_ORDER,
                campus::ECDC_A_TRIANGLES,
            )?,
            Surface::Lit(Material::COPPER),
            Vec3::new(0.1, 0.1, 0.5),
            place_on_map(Vec3::new(1.083, 0.862, 0.0)),
            policy,
        );

        let ecdc_b = Prop::new(
            "ECDC-B",
            building(
                campus::ECDC_B_FOOTPRINT,
                campus::ECDC_B_VERTEX_ORDER,
                campus::ECDC_B_TRIANGLES,
            )?,
            Surface::Lit(Material::SILVER),
            Vec3::new(0.1, 0.5, 0.1),
            place_on_map(Vec3::new(0.595, 0.681, 0.0)),
            policy,
        );

        let bay_hall = Prop::new(
            "Bay Hall",
            building(
                campus::BAY_HALL_FOOTPRINT,
                campus::BAY_HALL_VERTEX_ORDER,
                campus::BAY_HALL_TRIANGLES,
            )?,
            Surface::Lit(Material::GOLD),
            Vec3::new(0.1, 0.1, 0.5),
            place_on_map(Vec3::new(-1.134, -1.105, 0.0)),
            policy,
        );

        let presets = [
            CameraPreset {
                eye: Vec3::new(0.5, 0.0, 0.5),
                target: island.center,
            },
            CameraPreset {
                eye: Vec3::new(0.5, 0.15, 0.25),
                target: ecdc_a.center,
            },
            CameraPreset {
                eye: Vec3::new(0.15, 0.0, 0.25),
                target: bay_hall.center,
            },
            CameraPreset {
                eye: Vec3::new(0.33, -0.1, 0.25),
                target: ecdc_b.center,
            },
        ];

        let lights = [
            Light::point(Vec3::new(0.33, 0.33, 0.25), Vec3::ONE, 5.0),
            Light::directional(Vec3::splat(0.5), Vec3::ONE, 0.1),
        ];

        Ok(Self {
            props: vec![island, ground, cube, ecdc_a, ecdc_b, bay_hall],
            lights,
            presets,
        })
    }

    pub fn prop(&self, name: &str) -> Option<&Prop> {
        self.props.iter().find(|prop| prop.name == name)
    }

    /// Frame state positioned on the first camera preset.
    pub fn initial_state(&self, shading: ShadingMode) -> FrameState {
        FrameState::new(self.presets, self.lights, shading)
    }
}

fn place_on_map(point: Vec3) -> Vec3 {
    point / BUILDING_SCALE + BUILDING_OFFSET
}

fn building(points: &[[f32; 3]], order: &[u32], triangles: &[u32]) -> Result<Mesh, MeshError> {
    let positions = gather_points(points, order, place_on_map)?;
    Mesh::triangles(positions, triangles.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> Scene {
        Scene::campus(NormalPolicy::default()).unwrap()
    }

    #[test]
    fn campus_has_six_props_in_draw_order() {
        let scene = campus();
        let names: Vec<_> = scene.props.iter().map(|prop| prop.name.as_str()).collect();
        assert_eq!(
            names,
            ["Island", "Ground", "Cube", "ECDC-A", "ECDC-B", "Bay Hall"]
        );
    }

    #[test]
    fn island_is_an_unlit_outline() {
        let scene = campus();
        let island = scene.prop("Island").unwrap();
        assert!(island.is_outline());
        assert_eq!(island.mesh.vertex_count(), 192);
        assert!(island.normals.iter().all(|normal| *normal == Vec3::ZERO));
        let indices = island.draw_indices();
        assert_eq!(indices.len(), 193);
        assert_eq!(indices.first(), indices.last());
    }

    #[test]
    fn building_meshes_match_their_outlines() {
        let scene = campus();
        let counts: Vec<_> = ["Cube", "ECDC-A", "ECDC-B", "Bay Hall"]
            .iter()
            .map(|name| {
                let prop = scene.prop(name).unwrap();
                (prop.mesh.vertex_count(), prop.mesh.triangle_count())
            })
            .collect();
        assert_eq!(counts, [(20, 10), (164, 118), (82, 58), (128, 82)]);
    }

    #[test]
    fn lit_props_have_unit_normals() {
        for policy in [NormalPolicy::Incremental, NormalPolicy::Summed] {
            let scene = Scene::campus(policy).unwrap();
            for prop in scene.props.iter().filter(|prop| !prop.is_outline()) {
                assert_eq!(prop.normals.len(), prop.mesh.vertex_count());
                for normal in &prop.normals {
                    assert!(
                        (normal.length() - 1.0).abs() < 1e-4,
                        "{} has a non-unit normal {normal:?}",
                        prop.name
                    );
                }
            }
        }
    }

    #[test]
    fn ground_faces_up() {
        let scene = campus();
        for normal in &scene.prop("Ground").unwrap().normals {
            assert!(normal.abs_diff_eq(Vec3::Z, 1e-6));
        }
    }

    #[test]
    fn presets_target_prop_centers() {
        let scene = campus();
        let targets: Vec<_> = scene.presets.iter().map(|preset| preset.target).collect();
        let centers: Vec<_> = ["Island", "ECDC-A", "Bay Hall", "ECDC-B"]
            .iter()
            .map(|name| scene.prop(name).unwrap().center)
            .collect();
        assert_eq!(targets, centers);
    }

    #[test]
    fn initial_state_starts_on_first_preset() {
        let scene = campus();
        let state = scene.initial_state(ShadingMode::Phong);
        assert_eq!(state.camera.eye, scene.presets[0].eye);
        assert_eq!(state.camera.target, scene.presets[0].target);
        assert_eq!(state.lights, scene.lights);
    }
}
