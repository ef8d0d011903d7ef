//! Mesh data structures and functionality

use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3f>,
    pub faces: Vec<[usize; 3]>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3f>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Add a vertex to the mesh
    pub fn add_vertex(&mut self, vertex: Point3f) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a face to the mesh
    pub fn add_face(&mut self, face: [usize; 3]) {
        self.faces.push(face);
    }

    /// Faces whose indices all point at existing vertices
    pub fn valid_faces(&self) -> impl Iterator<Item = &[usize; 3]> + '_ {
        let n = self.vertices.len();
        self.faces.iter().filter(move |f| f.iter().all(|&i| i < n))
    }

    /// Apply a transform to every vertex
    pub fn apply_transform(&mut self, transform: &Transform3D) {
        for v in &mut self.vertices {
            *v = transform.transform_point(v);
        }
    }

    /// Clear the mesh
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bounded;
    use approx::assert_relative_eq;

    fn triangle() -> TriangleMesh {
        TriangleMesh::from_vertices_and_faces(
            vec![
                Point3f::new(0.0, 0.0, 0.0),
                Point3f::new(1.0, 0.0, 0.0),
                Point3f::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_out_of_range_faces_are_skipped() {
        let mut mesh = triangle();
        mesh.add_face([0, 1, 7]);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.valid_faces().count(), 1);
    }

    #[test]
    fn test_apply_translation_moves_extent() {
        let mut mesh = triangle();
        mesh.apply_transform(&Transform3D::translation(Vector3f::new(1.0, 2.0, 3.0)));
        let extent = mesh.extent();
        assert_relative_eq!(extent.min, Point3f::new(1.0, 2.0, 3.0));
        assert_relative_eq!(extent.max, Point3f::new(2.0, 3.0, 3.0));
    }

    #[test]
    fn test_clear() {
        let mut mesh = triangle();
        mesh.clear();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }
}
