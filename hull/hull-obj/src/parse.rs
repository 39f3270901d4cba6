//! Minimal OBJ parser.
//!
//! Reads the subset of Wavefront OBJ this crate writes, plus the
//! common variations any standard writer produces: `v`/`f`/`g`/`o`
//! lines, comments, blank lines, `f` entries with `/vt/vn` suffixes,
//! and negative (relative) indices. Normals, texture coordinates, and
//! materials are skipped.

use std::fs;
use std::path::Path;

use hull_types::{Face, GroupGeometry, Point3};

use crate::error::{ObjError, ObjResult};

/// Parse OBJ text into geometry groups.
///
/// Vertices are assigned to the group active at their declaration;
/// faces are rebased from file-global 1-based indices to the owning
/// group's 0-based index space. Content before any `g` line lands in a
/// group named `default`.
///
/// # Errors
///
/// Returns an error if:
/// - A `v` or `f` line is malformed
/// - A face index is zero, out of range, or refers to a vertex outside
///   the group being parsed
/// - A face has fewer than 3 or more than 4 corners
///
/// # Example
///
/// ```
/// use hull_obj::parse_obj;
///
/// let text = "g tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let groups = parse_obj(text).unwrap();
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].face_count(), 1);
/// ```
pub fn parse_obj(text: &str) -> ObjResult<Vec<GroupGeometry>> {
    let mut groups: Vec<GroupGeometry> = Vec::new();
    let mut group_offset = 0usize; // global index of current group's first vertex
    let mut total_vertices = 0usize;

    for (line_index, raw_line) in text.lines().enumerate() {
        let line_no = line_index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };

        match keyword {
            "v" => {
                let group = current_group(&mut groups, &mut group_offset, total_vertices);
                let point = parse_vertex(tokens, line_no)?;
                group.vertices.push(point);
                total_vertices += 1;
            }
            "f" => {
                let indices = parse_face_indices(tokens, line_no, total_vertices)?;
                let group = current_group(&mut groups, &mut group_offset, total_vertices);
                let face = rebase_face(&indices, group_offset, group.vertex_count(), line_no)?;
                group.faces.push(face);
            }
            "g" | "o" => {
                let name = tokens.collect::<Vec<_>>().join(" ");
                if keyword == "g" {
                    groups.push(GroupGeometry::new(if name.is_empty() {
                        "default".to_string()
                    } else {
                        name
                    }));
                    group_offset = total_vertices;
                }
                // `o` names the object; geometry grouping is carried by `g`
            }
            // Normals, texture coordinates, materials, smoothing groups
            "vn" | "vt" | "vp" | "s" | "mtllib" | "usemtl" | "l" => {}
            other => {
                return Err(ObjError::parse(
                    line_no,
                    format!("unrecognized keyword `{other}`"),
                ));
            }
        }
    }

    Ok(groups)
}

/// Load and parse an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Vec<GroupGeometry>> {
    let text = fs::read_to_string(path)?;
    parse_obj(&text)
}

fn current_group<'a>(
    groups: &'a mut Vec<GroupGeometry>,
    group_offset: &mut usize,
    total_vertices: usize,
) -> &'a mut GroupGeometry {
    if groups.is_empty() {
        groups.push(GroupGeometry::new("default"));
        *group_offset = total_vertices;
    }
    let last = groups.len() - 1;
    &mut groups[last]
}

fn parse_vertex<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> ObjResult<Point3<f64>> {
    let mut coords = [0.0f64; 3];
    for coord in &mut coords {
        let token = tokens
            .next()
            .ok_or_else(|| ObjError::parse(line_no, "vertex needs 3 coordinates"))?;
        *coord = token
            .parse()
            .map_err(|_| ObjError::parse(line_no, format!("bad coordinate `{token}`")))?;
    }
    // A 4th `w` component is legal; ignore it
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

/// Parse face corner tokens into 0-based global vertex indices.
fn parse_face_indices<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
    total_vertices: usize,
) -> ObjResult<Vec<usize>> {
    let mut indices = Vec::with_capacity(4);

    for token in tokens {
        // `f v`, `f v/vt`, `f v//vn`, `f v/vt/vn` all start with the
        // vertex index
        let vertex_token = token.split('/').next().unwrap_or(token);
        let written: i64 = vertex_token
            .parse()
            .map_err(|_| ObjError::parse(line_no, format!("bad face index `{token}`")))?;

        let resolved = match written {
            0 => {
                return Err(ObjError::IndexOutOfRange {
                    line: line_no,
                    index: written,
                    max: total_vertices,
                })
            }
            // Negative indices count back from the most recent vertex
            n if n < 0 => {
                let back = usize::try_from(-n).unwrap_or(usize::MAX);
                total_vertices.checked_sub(back).ok_or(ObjError::IndexOutOfRange {
                    line: line_no,
                    index: written,
                    max: total_vertices,
                })?
            }
            n => {
                let index = usize::try_from(n).unwrap_or(usize::MAX) - 1;
                if index >= total_vertices {
                    return Err(ObjError::IndexOutOfRange {
                        line: line_no,
                        index: written,
                        max: total_vertices,
                    });
                }
                index
            }
        };
        indices.push(resolved);
    }

    if indices.len() < 3 || indices.len() > 4 {
        return Err(ObjError::parse(
            line_no,
            format!("face needs 3 or 4 corners, got {}", indices.len()),
        ));
    }

    Ok(indices)
}

/// Rebase 0-based global indices into the owning group's index space.
#[allow(clippy::cast_possible_truncation)]
// Truncation: group-local indices fit u32 by the same design limit as
// the rest of the pipeline
fn rebase_face(
    indices: &[usize],
    group_offset: usize,
    group_len: usize,
    line_no: usize,
) -> ObjResult<Face> {
    let mut local = [0u32; 4];
    for (slot, &global) in local.iter_mut().zip(indices) {
        let rebased = global.checked_sub(group_offset).filter(|&i| i < group_len);
        match rebased {
            Some(i) => *slot = i as u32,
            None => {
                return Err(ObjError::parse(
                    line_no,
                    "face references a vertex outside its group",
                ))
            }
        }
    }

    Ok(match indices.len() {
        3 => Face::Tri([local[0], local[1], local[2]]),
        _ => Face::Quad(local),
    })
}
