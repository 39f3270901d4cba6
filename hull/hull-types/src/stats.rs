//! Derived mesh summary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, GroupGeometry};

/// Read-only summary of an assembled mesh.
///
/// Computed in a single pass over all groups; no semantic validation is
/// performed here.
///
/// # Example
///
/// ```
/// use hull_types::{Face, GroupGeometry, MeshStats, Point3};
///
/// let mut group = GroupGeometry::new("hull");
/// group.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// group.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// group.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// group.faces.push(Face::Tri([0, 1, 2]));
///
/// let stats = MeshStats::from_groups(std::slice::from_ref(&group));
/// assert_eq!(stats.vertex_count, 3);
/// assert_eq!(stats.group_names, vec!["hull".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshStats {
    /// Total vertex count across all groups.
    pub vertex_count: usize,
    /// Total face count across all groups.
    pub face_count: usize,
    /// Group names in declaration order.
    pub group_names: Vec<String>,
    /// Bounding box over all vertices.
    pub bounds: Aabb,
}

impl MeshStats {
    /// Summarize a sequence of geometry groups.
    #[must_use]
    pub fn from_groups(groups: &[GroupGeometry]) -> Self {
        let mut vertex_count = 0;
        let mut face_count = 0;
        let mut group_names = Vec::with_capacity(groups.len());
        let mut bounds = Aabb::empty();

        for group in groups {
            vertex_count += group.vertex_count();
            face_count += group.face_count();
            group_names.push(group.name.clone());
            bounds = bounds.union(&group.bounds());
        }

        Self {
            vertex_count,
            face_count,
            group_names,
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, Point3};

    #[test]
    fn stats_accumulate_across_groups() {
        let mut a = GroupGeometry::new("hull");
        a.vertices.push(Point3::new(0.0, 0.0, 0.0));
        a.vertices.push(Point3::new(1.0, 0.0, 0.0));
        a.vertices.push(Point3::new(0.0, 1.0, 0.0));
        a.faces.push(Face::Tri([0, 1, 2]));

        let mut b = GroupGeometry::new("turret_0");
        b.vertices.push(Point3::new(5.0, 5.0, 5.0));
        b.vertices.push(Point3::new(6.0, 5.0, 5.0));
        b.vertices.push(Point3::new(5.0, 6.0, 5.0));
        b.vertices.push(Point3::new(6.0, 6.0, 5.0));
        b.faces.push(Face::Quad([0, 1, 3, 2]));

        let stats = MeshStats::from_groups(&[a, b]);
        assert_eq!(stats.vertex_count, 7);
        assert_eq!(stats.face_count, 2);
        assert_eq!(stats.group_names, vec!["hull", "turret_0"]);
        assert!((stats.bounds.max.x - 6.0).abs() < f64::EPSILON);
        assert!((stats.bounds.min.x - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_gives_empty_stats() {
        let stats = MeshStats::from_groups(&[]);
        assert_eq!(stats.vertex_count, 0);
        assert_eq!(stats.face_count, 0);
        assert!(stats.group_names.is_empty());
        assert!(stats.bounds.is_empty());
    }
}
