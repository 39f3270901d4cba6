//! OBJ text serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use hull_types::{GroupGeometry, MeshStats};

use crate::error::ObjResult;

/// Header metadata written as comments at the top of the file.
#[derive(Debug, Clone)]
pub struct ObjMetadata {
    /// Name emitted on the `o` object line.
    pub object_name: String,
    /// Comment lines emitted after the generator line, one `#` each.
    pub comments: Vec<String>,
}

impl Default for ObjMetadata {
    fn default() -> Self {
        Self {
            object_name: "ship".to_string(),
            comments: Vec::new(),
        }
    }
}

impl ObjMetadata {
    /// Metadata with the given object name.
    #[must_use]
    pub fn named(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            comments: Vec::new(),
        }
    }
}

/// An exported OBJ document with its derived statistics.
#[derive(Debug, Clone)]
pub struct ObjExport {
    /// The OBJ text.
    pub text: String,
    /// Summary computed during export.
    pub stats: MeshStats,
}

/// Serialize geometry groups to OBJ text.
///
/// Groups are concatenated in call order. A running vertex offset maps
/// each group's 0-based face indices to file-global 1-based indices.
/// Vertex coordinates are written with 6 decimal places; triangles
/// emit three indices per `f` line, quads four.
///
/// # Example
///
/// ```
/// use hull_obj::{export_obj, ObjMetadata};
/// use hull_types::{Face, GroupGeometry, Point3};
///
/// let mut a = GroupGeometry::new("hull");
/// a.vertices.push(Point3::new(0.0, 0.0, 0.0));
/// a.vertices.push(Point3::new(1.0, 0.0, 0.0));
/// a.vertices.push(Point3::new(0.0, 1.0, 0.0));
/// a.faces.push(Face::Tri([0, 1, 2]));
///
/// let mut b = GroupGeometry::new("turret_0");
/// b.vertices.push(Point3::new(2.0, 0.0, 0.0));
/// b.vertices.push(Point3::new(3.0, 0.0, 0.0));
/// b.vertices.push(Point3::new(2.0, 1.0, 0.0));
/// b.faces.push(Face::Tri([0, 1, 2]));
///
/// let export = export_obj(&[a, b], &ObjMetadata::default());
/// // Second group's face references offset indices
/// assert!(export.text.contains("f 4 5 6"));
/// assert_eq!(export.stats.vertex_count, 6);
/// ```
#[must_use]
pub fn export_obj(groups: &[GroupGeometry], metadata: &ObjMetadata) -> ObjExport {
    let stats = MeshStats::from_groups(groups);

    let mut text = String::with_capacity(estimate_size(&stats));
    text.push_str(&format!("# {}\n", metadata.object_name));
    text.push_str("# generated by hull-obj\n");
    for comment in &metadata.comments {
        text.push_str(&format!("# {comment}\n"));
    }
    text.push_str(&format!("o {}\n", metadata.object_name));

    let mut offset: usize = 0;
    for group in groups {
        text.push_str(&format!("g {}\n", group.name));

        for v in &group.vertices {
            text.push_str(&format!("v {:.6} {:.6} {:.6}\n", v.x, v.y, v.z));
        }

        for face in &group.faces {
            text.push('f');
            for &index in face.indices() {
                text.push_str(&format!(" {}", index as usize + offset + 1));
            }
            text.push('\n');
        }

        offset += group.vertex_count();
    }

    ObjExport { text, stats }
}

/// Serialize groups and write them to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_obj<P: AsRef<Path>>(
    groups: &[GroupGeometry],
    metadata: &ObjMetadata,
    path: P,
) -> ObjResult<MeshStats> {
    let export = export_obj(groups, metadata);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(export.text.as_bytes())?;
    writer.flush()?;
    Ok(export.stats)
}

/// Rough byte estimate: ~40 bytes per vertex line, ~20 per face line.
fn estimate_size(stats: &MeshStats) -> usize {
    stats.vertex_count * 40 + stats.face_count * 20 + 128
}
