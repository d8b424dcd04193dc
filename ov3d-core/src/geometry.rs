/// Indexed mesh geometry and per-vertex normal derivation
use nalgebra::{Point3, Vector3};

/// How accumulated vertex normals are finished after the accumulation pass.
///
/// A vertex shared by k faces collects one unit-length contribution per
/// adjacent face, so the raw sum has magnitude up to k.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalPolicy {
    /// Leave the per-vertex sums as accumulated. Shading then weights each
    /// vertex by its face-adjacency count.
    #[default]
    Accumulated,
    /// Normalize each nonzero sum once after all faces are processed, giving
    /// unit-length smooth-shading normals.
    Renormalized,
}

/// A triangulated mesh as three parallel sequences: positions, flattened
/// triangle indices (three per face, in file order), and one derived normal
/// per vertex. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    indices: Vec<u32>,
    normals: Vec<Vector3<f32>>,
}

impl Mesh {
    /// Assemble a mesh from already-validated parts. Every index must lie in
    /// `0..vertices.len()` and `normals.len()` must equal `vertices.len()`.
    pub(crate) fn from_parts(
        vertices: Vec<Point3<f32>>,
        indices: Vec<u32>,
        normals: Vec<Vector3<f32>>,
    ) -> Self {
        debug_assert_eq!(vertices.len(), normals.len());
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self {
            vertices,
            indices,
            normals,
        }
    }

    /// Vertex positions, in file order.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Flattened triangle indices, three per face.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Derived per-vertex normals, indexed identically to `vertices`.
    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Calculate the unit face normal of a triangle using the right-hand rule.
/// A degenerate (zero-area) triangle yields the zero vector.
pub fn face_normal(v1: &Point3<f32>, v2: &Point3<f32>, v3: &Point3<f32>) -> Vector3<f32> {
    let edge1 = v2 - v1;
    let edge2 = v3 - v1;
    let cross = edge1.cross(&edge2);
    let len = cross.norm();
    if len > 1e-12 {
        cross / len
    } else {
        Vector3::zeros()
    }
}

/// Accumulate face normals into a per-vertex normal sequence sized to the
/// full vertex list, then finish it according to `policy`.
pub(crate) fn accumulate_normals(
    vertices: &[Point3<f32>],
    indices: &[u32],
    policy: NormalPolicy,
) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zeros(); vertices.len()];

    for face in indices.chunks_exact(3) {
        let (i1, i2, i3) = (face[0] as usize, face[1] as usize, face[2] as usize);
        let normal = face_normal(&vertices[i1], &vertices[i2], &vertices[i3]);
        normals[i1] += normal;
        normals[i2] += normal;
        normals[i3] += normal;
    }

    if policy == NormalPolicy::Renormalized {
        for normal in &mut normals {
            let len = normal.norm();
            if len > 1e-12 {
                *normal /= len;
            }
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_face_normal_right_hand_rule() {
        let v = unit_triangle();
        let normal = face_normal(&v[0], &v[1], &v[2]);
        assert!((normal - Vector3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((normal.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_face_normal_degenerate_is_zero() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let q = Point3::new(4.0, 5.0, 6.0);
        // Two coincident corners span no area.
        let normal = face_normal(&p, &q, &p);
        assert_eq!(normal, Vector3::zeros());
    }

    #[test]
    fn test_accumulate_shared_vertex() {
        // Two faces sharing the edge (0,0,0)-(1,0,0): one in the XY plane,
        // one in the XZ plane.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
        ];
        let indices = vec![0, 1, 2, 0, 1, 3];

        let n1 = face_normal(&vertices[0], &vertices[1], &vertices[2]);
        let n2 = face_normal(&vertices[0], &vertices[1], &vertices[3]);

        let accumulated = accumulate_normals(&vertices, &indices, NormalPolicy::Accumulated);
        assert_eq!(accumulated.len(), 4);
        assert!((accumulated[0] - (n1 + n2)).norm() < 1e-6);
        assert!((accumulated[1] - (n1 + n2)).norm() < 1e-6);
        assert!((accumulated[2] - n1).norm() < 1e-6);

        let renormalized = accumulate_normals(&vertices, &indices, NormalPolicy::Renormalized);
        assert!((renormalized[0] - (n1 + n2).normalize()).norm() < 1e-6);
        assert!((renormalized[2] - n1).norm() < 1e-6);
    }

    #[test]
    fn test_accumulate_covers_unreferenced_vertices() {
        // A vertex no face touches still gets a (zero) normal slot.
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(9.0, 9.0, 9.0),
        ];
        let normals = accumulate_normals(&vertices, &[0, 1, 2], NormalPolicy::Accumulated);
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[3], Vector3::zeros());
    }

    #[test]
    fn test_mesh_queries() {
        let vertices = unit_triangle();
        let normals = accumulate_normals(&vertices, &[0, 1, 2], NormalPolicy::Accumulated);
        let mesh = Mesh::from_parts(vertices, vec![0, 1, 2], normals);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        assert!(!mesh.is_empty());
        assert!(Mesh::default().is_empty());
    }
}
