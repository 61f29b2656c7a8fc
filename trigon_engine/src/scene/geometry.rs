/// Fixed triangle geometry uploaded at scene initialization

/// Triangle vertex positions in normalized device coordinates,
/// three components (x, y, z) per vertex
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.0, 0.5, 0.0, // top
];

/// Number of vertices in the triangle
pub const VERTEX_COUNT: i32 = 3;

/// Number of float components per vertex (x, y, z)
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Vertex data as raw bytes, ready for upload
pub fn vertex_bytes() -> &'static [u8] {
    bytemuck::cast_slice(&TRIANGLE_VERTICES)
}

/// Size in bytes of the vertex data
///
/// Computed as vertex count times components per vertex times the
/// 4-byte float size, matching what `vertex_bytes()` yields.
pub fn vertex_buffer_size() -> usize {
    VERTEX_COUNT as usize * COMPONENTS_PER_VERTEX * std::mem::size_of::<f32>()
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
