//! Named geometry groups.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Aabb;

/// A mesh face: a triangle or a planar quad.
///
/// Indices are 0-based into the owning group's vertex list. The OBJ
/// exporter converts them to file-global 1-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Face {
    /// Triangle, CCW winding viewed from outside.
    Tri([u32; 3]),
    /// Planar quad, CCW winding viewed from outside.
    Quad([u32; 4]),
}

impl Face {
    /// The face's vertex indices.
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        match self {
            Self::Tri(idx) => idx,
            Self::Quad(idx) => idx,
        }
    }
}

/// A self-contained, named group of vertices and faces.
///
/// Each pipeline component (hull, each turret, superstructure, each
/// funnel) produces one group. Groups have independent 0-based index
/// spaces; combining them is the exporter's job, via a running vertex
/// offset.
///
/// # Example
///
/// ```
/// use hull_types::{Face, GroupGeometry, Point3};
///
/// let mut group = GroupGeometry::new("hull");
/// group.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// group.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// group.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// group.faces.push(Face::Tri([0, 1, 2]));
///
/// assert_eq!(group.vertex_count(), 3);
/// assert_eq!(group.face_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupGeometry {
    /// Group name, unique within one assembled mesh.
    pub name: String,
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Faces indexing into `vertices`.
    pub faces: Vec<Face>,
}

impl GroupGeometry {
    /// Create an empty group with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty group with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(name: impl Into<String>, vertex_count: usize, face_count: usize) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices in the group.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces in the group.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the group has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Bounding box of the group's vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }

    /// Append another group's geometry into this one.
    ///
    /// The other group's face indices are shifted by this group's
    /// current vertex count. The name is kept from `self`.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: u32 indices cap vertex counts at ~4 billion by design
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        for face in &other.faces {
            let shifted = match face {
                Face::Tri([a, b, c]) => Face::Tri([a + offset, b + offset, c + offset]),
                Face::Quad([a, b, c, d]) => {
                    Face::Quad([a + offset, b + offset, c + offset, d + offset])
                }
            };
            self.faces.push(shifted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(name: &str, x0: f64) -> GroupGeometry {
        let mut g = GroupGeometry::new(name);
        g.vertices.push(Point3::new(x0, 0.0, 0.0));
        g.vertices.push(Point3::new(x0 + 1.0, 0.0, 0.0));
        g.vertices.push(Point3::new(x0, 1.0, 0.0));
        g.faces.push(Face::Tri([0, 1, 2]));
        g
    }

    #[test]
    fn new_group_is_empty() {
        let g = GroupGeometry::new("hull");
        assert!(g.is_empty());
        assert_eq!(g.name, "hull");
    }

    #[test]
    fn merge_offsets_indices() {
        let mut a = triangle("a", 0.0);
        let b = triangle("b", 5.0);
        a.merge(&b);

        assert_eq!(a.vertex_count(), 6);
        assert_eq!(a.face_count(), 2);
        assert_eq!(a.faces[1], Face::Tri([3, 4, 5]));
    }

    #[test]
    fn merge_offsets_quads() {
        let mut a = triangle("a", 0.0);
        let mut b = GroupGeometry::new("b");
        b.vertices.extend([
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ]);
        b.faces.push(Face::Quad([0, 1, 2, 3]));
        a.merge(&b);

        assert_eq!(a.faces[1], Face::Quad([3, 4, 5, 6]));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let g = triangle("a", 2.0);
        let bounds = g.bounds();
        assert!((bounds.min.x - 2.0).abs() < f64::EPSILON);
        assert!((bounds.max.x - 3.0).abs() < f64::EPSILON);
    }
}
