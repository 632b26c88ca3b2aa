use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Floats per interleaved vertex: `position.xyz` followed by `normal.xyz`.
pub const VERTEX_STRIDE: usize = 6;

/// Errors raised while assembling a mesh from literal data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("index list has {0} entries, which is not a whole number of triangles")]
    RaggedTriangles(usize),
    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("vertex order references point {index} but the outline has {point_count} points")]
    UnknownPoint { index: u32, point_count: usize },
}

/// How face normals are folded into a vertex normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NormalPolicy {
    /// Renormalize the running sum after every face. Later faces weigh as
    /// much as everything accumulated before them, so the result depends on
    /// triangle order.
    #[default]
    Incremental,
    /// Sum every unit face normal and normalize once.
    Summed,
}

/// Vertex positions plus an index list, either triangles or a polyline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Builds a triangle mesh, rejecting ragged or out-of-range index lists.
    pub fn triangles(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::RaggedTriangles(indices.len()));
        }
        let mesh = Self { positions, indices };
        mesh.check_indices()?;
        Ok(mesh)
    }

    /// Builds a polyline visiting every position in order.
    pub fn outline(positions: Vec<Vec3>) -> Self {
        let indices = (0..positions.len() as u32).collect();
        Self { positions, indices }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Index list that revisits the first vertex, closing the loop for
    /// line-strip topologies.
    pub fn closed_loop_indices(&self) -> Vec<u32> {
        let mut indices = self.indices.clone();
        if let Some(&first) = self.indices.first() {
            indices.push(first);
        }
        indices
    }

    /// Computes one normal per vertex from the faces that touch it.
    ///
    /// For each triangle a vertex belongs to, the face normal is
    /// `normalize(cross(B - A, C - A))` where `B` and `C` follow `A` in
    /// winding order. Degenerate triangles and corners pointing past the
    /// position list contribute nothing; vertices no triangle references
    /// keep a zero normal.
    pub fn vertex_normals(&self, policy: NormalPolicy) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for triangle in self.indices.chunks_exact(3) {
            for corner in 0..3 {
                let a = triangle[corner] as usize;
                // A vertex listed twice in one triangle only counts once.
                if triangle[..corner].contains(&triangle[corner]) {
                    continue;
                }
                let b = triangle[(corner + 1) % 3] as usize;
                let c = triangle[(corner + 2) % 3] as usize;
                let (Some(&origin), Some(&pb), Some(&pc)) = (
                    self.positions.get(a),
                    self.positions.get(b),
                    self.positions.get(c),
                ) else {
                    continue;
                };
                let face = (pb - origin).cross(pc - origin).normalize_or_zero();
                if face == Vec3::ZERO {
                    continue;
                }
                normals[a] = match policy {
                    NormalPolicy::Incremental => (normals[a] + face).normalize_or_zero(),
                    NormalPolicy::Summed => normals[a] + face,
                };
            }
        }

        if policy == NormalPolicy::Summed {
            for normal in &mut normals {
                *normal = normal.normalize_or_zero();
            }
        }
        normals
    }

    /// Interleaves positions with the given normals into a vertex buffer.
    /// Missing normals are written as zero.
    pub fn vertex_data(&self, normals: &[Vec3]) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.positions.len() * VERTEX_STRIDE);
        for (i, position) in self.positions.iter().enumerate() {
            let normal = normals.get(i).copied().unwrap_or(Vec3::ZERO);
            data.extend_from_slice(&position.to_array());
            data.extend_from_slice(&normal.to_array());
        }
        data
    }

    fn check_indices(&self) -> Result<(), MeshError> {
        let vertex_count = self.positions.len();
        for (i, &index) in self.indices.iter().enumerate() {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    triangle: i / 3,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Expands outline points into a vertex list following `order`, applying
/// `place` to every point.
pub fn gather_points(
    points: &[[f32; 3]],
    order: &[u32],
    place: impl Fn(Vec3) -> Vec3,
) -> Result<Vec<Vec3>, MeshError> {
    order
        .iter()
        .map(|&index| {
            points
                .get(index as usize)
                .map(|point| place(Vec3::from_array(*point)))
                .ok_or(MeshError::UnknownPoint {
                    index,
                    point_count: points.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(actual: Vec3, expected: Vec3) {
        assert!(
            actual.abs_diff_eq(expected, EPS),
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn corner_mesh() -> Mesh {
        // Three triangles meeting at the origin whose faces point along
        // +X, +Y and +Z, in that order.
        Mesh::triangles(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
            vec![0, 2, 3, 0, 3, 1, 0, 1, 2],
        )
        .unwrap()
    }

    #[test]
    fn single_triangle_uses_face_normal_everywhere() {
        let mesh = Mesh::triangles(
            vec![Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0)],
            vec![0, 1, 2],
        )
        .unwrap();
        for policy in [NormalPolicy::Incremental, NormalPolicy::Summed] {
            for normal in mesh.vertex_normals(policy) {
                assert_close(normal, Vec3::Z);
            }
        }
    }

    #[test]
    fn coplanar_triangles_share_the_face_normal() {
        let mesh = Mesh::triangles(
            vec![
                Vec3::new(0.5, 0.5, 0.0),
                Vec3::new(-0.5, 0.5, 0.0),
                Vec3::new(-0.5, -0.5, 0.0),
                Vec3::new(0.5, -0.5, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap();
        for policy in [NormalPolicy::Incremental, NormalPolicy::Summed] {
            let normals = mesh.vertex_normals(policy);
            assert_eq!(normals.len(), 4);
            for normal in normals {
                assert_close(normal, Vec3::Z);
            }
        }
    }

    #[test]
    fn incremental_policy_favours_later_faces() {
        let normal = corner_mesh().vertex_normals(NormalPolicy::Incremental)[0];
        assert_close(normal, Vec3::new(0.5, 0.5, std::f32::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn summed_policy_weighs_faces_equally() {
        let normal = corner_mesh().vertex_normals(NormalPolicy::Summed)[0];
        assert_close(normal, Vec3::ONE.normalize());
    }

    #[test]
    fn degenerate_and_unused_vertices_keep_zero_normals() {
        let mesh = Mesh::triangles(
            vec![Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0), Vec3::Y],
            vec![0, 1, 2],
        )
        .unwrap();
        for normal in mesh.vertex_normals(NormalPolicy::Incremental) {
            assert_eq!(normal, Vec3::ZERO);
        }
    }

    #[test]
    fn rejects_bad_index_lists() {
        assert_eq!(
            Mesh::triangles(vec![Vec3::ZERO; 3], vec![0, 1]),
            Err(MeshError::RaggedTriangles(2))
        );
        assert_eq!(
            Mesh::triangles(vec![Vec3::ZERO; 3], vec![0, 1, 2, 0, 2, 3]),
            Err(MeshError::IndexOutOfRange {
                triangle: 1,
                index: 3,
                vertex_count: 3,
            })
        );
    }

    #[test]
    fn hand_built_mesh_with_stray_index_skips_that_face() {
        let mesh = Mesh {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            indices: vec![0, 1, 2, 0, 1, 7],
        };
        let normals = mesh.vertex_normals(NormalPolicy::Incremental);
        assert_eq!(normals.len(), 3);
        for normal in normals {
            assert_close(normal, Vec3::Z);
        }
    }

    #[test]
    fn outline_loop_returns_to_start() {
        let mesh = Mesh::outline(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(mesh.closed_loop_indices(), vec![0, 1, 2, 0]);
        assert!(Mesh::default().closed_loop_indices().is_empty());
    }

    #[test]
    fn vertex_data_interleaves_positions_and_normals() {
        let mesh = Mesh::outline(vec![Vec3::new(1.0, 2.0, 3.0), Vec3::X]);
        let data = mesh.vertex_data(&[Vec3::Z]);
        assert_eq!(data.len(), 2 * VERTEX_STRIDE);
        assert_eq!(&data[..6], &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
        assert_eq!(&data[6..], &[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn gather_points_follows_vertex_order() {
        let points = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
        let gathered = gather_points(&points, &[1, 0, 1], |p| p * 2.0).unwrap();
        assert_eq!(gathered, vec![Vec3::new(2.0, 0.0, 0.0), Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)]);
        assert_eq!(
            gather_points(&points, &[2], |p| p),
            Err(MeshError::UnknownPoint {
                index: 2,
                point_count: 2,
            })
        );
    }
}
