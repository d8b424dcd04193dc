/// OBJ file parser for the triangulated subset (`v` and `f` directives)
use nalgebra::Point3;
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{i64 as index_value, multispace0, multispace1},
    number::complete::float,
    sequence::preceded,
    IResult,
};
use std::fs;
use std::path::Path;

use crate::error::ObjError;
use crate::geometry::{accumulate_normals, Mesh, NormalPolicy};

/// Parse an OBJ document from memory.
///
/// Recognized directives are `v x y z` (vertex position) and `f a b c`
/// (triangular face). Face references may carry `/`-separated texture and
/// normal sub-indices, which are ignored; only derived normals are produced,
/// never normals read from the file. Positive references are 1-based;
/// negative references count backward from the vertices seen so far. Any
/// other directive, and blank lines, are skipped.
///
/// Malformed `v`/`f` lines and out-of-range face references fail the whole
/// load with an error naming the offending line.
pub fn parse_obj(input: &str, policy: NormalPolicy) -> Result<Mesh, ObjError> {
    let mut vertices = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line_number = number + 1;
        match line.split_whitespace().next() {
            Some("v") => {
                let (_, position) = parse_vertex_line(line).map_err(|_| {
                    ObjError::MalformedLine {
                        line: line_number,
                        directive: "v",
                    }
                })?;
                vertices.push(position);
            }
            Some("f") => {
                let (_, references) = parse_face_line(line).map_err(|_| {
                    ObjError::MalformedLine {
                        line: line_number,
                        directive: "f",
                    }
                })?;
                for reference in references {
                    let index = resolve_index(reference, vertices.len()).ok_or(
                        ObjError::IndexOutOfRange {
                            line: line_number,
                            reference,
                            vertex_count: vertices.len(),
                        },
                    )?;
                    indices.push(index as u32);
                }
            }
            // Comments, `vn`/`vt`/`o`/`mtllib`/... and blank lines.
            _ => {}
        }
    }

    let normals = accumulate_normals(&vertices, &indices, policy);
    Ok(Mesh::from_parts(vertices, indices, normals))
}

/// Load an OBJ file from disk. A missing file is reported as the typed
/// [`ObjError::FileNotFound`] so the caller decides whether that is fatal.
pub fn load_obj<P: AsRef<Path>>(path: P, policy: NormalPolicy) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ObjError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    parse_obj(&contents, policy)
}

/// Load an OBJ file, degrading to an empty mesh instead of failing.
///
/// Any load error is reported on stderr and swallowed; the caller gets a
/// mesh with zero vertices, indices, and normals and can render nothing
/// rather than crash.
pub fn load_obj_or_empty<P: AsRef<Path>>(path: P, policy: NormalPolicy) -> Mesh {
    match load_obj(path, policy) {
        Ok(mesh) => mesh,
        Err(err) => {
            eprintln!("Error loading mesh: {}", err);
            Mesh::default()
        }
    }
}

/// Resolve one face-vertex reference against the vertices seen so far.
/// `1` maps to index 0; `-1` maps to the most recently added vertex.
fn resolve_index(reference: i64, vertex_count: usize) -> Option<usize> {
    let resolved = if reference > 0 {
        reference - 1
    } else {
        vertex_count as i64 + reference
    };
    if resolved >= 0 && resolved < vertex_count as i64 {
        Some(resolved as usize)
    } else {
        None
    }
}

fn parse_vertex_line(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, _) = preceded(multispace0, tag("v"))(input)?;
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn parse_face_line(input: &str) -> IResult<&str, [i64; 3]> {
    let (input, _) = preceded(multispace0, tag("f"))(input)?;
    let (input, a) = parse_face_reference(input)?;
    let (input, b) = parse_face_reference(input)?;
    let (input, c) = parse_face_reference(input)?;
    Ok((input, [a, b, c]))
}

fn parse_face_reference(input: &str) -> IResult<&str, i64> {
    let (input, index) = preceded(multispace1, index_value)(input)?;
    // Optional /texture/normal sub-indices, ignored.
    let (input, _) = take_till(|c: char| c.is_whitespace())(input)?;
    Ok((input, index))
}
