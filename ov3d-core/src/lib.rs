/// OV3D Core Library - mesh ingestion and orbit-camera transforms
///
/// This library provides the stateless core for the viewer: OBJ-subset
/// parsing with derived per-vertex normals, the indexed mesh data model,
/// and the orbiting camera's view/projection pipeline. Rendering backends
/// consume the mesh buffers and matrices; they are not part of this crate.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod obj;

// Re-export commonly used types
pub use camera::CameraRig;
pub use error::ObjError;
pub use geometry::{face_normal, Mesh, NormalPolicy};
pub use obj::{load_obj, load_obj_or_empty, parse_obj};
