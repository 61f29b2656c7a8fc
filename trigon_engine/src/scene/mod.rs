//! Scene management module
//!
//! Provides the triangle demo scene: fixed geometry, embedded shader
//! sources, and the GPU resource lifecycle around them.

mod geometry;
mod shaders;
mod triangle_scene;

pub use geometry::{
    vertex_buffer_size, vertex_bytes, COMPONENTS_PER_VERTEX, TRIANGLE_VERTICES, VERTEX_COUNT,
};
pub use shaders::{
    ShaderSources, TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER, VERTEX_ATTRIB_LOCATION,
    VERTEX_ATTRIB_NAME,
};
pub use triangle_scene::{Lifecycle, SceneConfig, TriangleScene};
