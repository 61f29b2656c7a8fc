/// GraphicsDevice trait - main GPU resource and command interface

use crate::error::Result;
use crate::graphics_device::{BufferTarget, BufferUsage, ProgramDesc, ShaderDesc, VertexAttribDesc};

// ============================================================================
// Resource handles
// ============================================================================

/// Handle to a compiled shader stage
///
/// Handles are plain identifiers issued by the device that created them.
/// They are only meaningful for that device and carry no ownership; the
/// device tracks the underlying GPU object until `delete_shader()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Handle to a linked shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Handle to a buffer object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Handle to a vertex array object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(pub u32);

// ============================================================================
// Common types
// ============================================================================

/// Graphics device configuration
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Enable per-call error checks in the backend
    pub enable_debug_checks: bool,
    /// Application name
    pub app_name: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            enable_debug_checks: cfg!(debug_assertions),
            app_name: "Trigon Application".to_string(),
        }
    }
}

/// Information about the adapter backing a device
#[derive(Debug, Clone)]
pub struct AdapterInfo {
    /// Vendor string (e.g., "Intel")
    pub vendor: String,
    /// Renderer string (e.g., "Mesa Intel(R) UHD Graphics 620")
    pub renderer: String,
    /// API version string
    pub version: String,
    /// Shading language version string
    pub shading_language_version: String,
}

/// Graphics device statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceStats {
    /// Number of draw calls issued
    pub draw_calls: u32,
    /// Number of triangles drawn
    pub triangles: u32,
    /// Number of buffer uploads performed
    pub buffer_uploads: u32,
    /// Total bytes uploaded to buffer objects
    pub bytes_uploaded: u64,
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

// ============================================================================
// GraphicsDevice trait
// ============================================================================

/// Main graphics device trait
///
/// This is the central interface for creating GPU resources and recording
/// rendering commands. Implemented by backend-specific devices (e.g.,
/// GlGraphicsDevice). A device is scoped to one rendering context; callers
/// receive it explicitly and must not share handles across devices.
pub trait GraphicsDevice: Send + Sync {
    /// Get information about the adapter backing this device
    fn adapter_info(&self) -> AdapterInfo;

    /// Compile a shader stage from source
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader descriptor (stage and source text)
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderCompile` with the stage and the raw driver
    /// diagnostic when translation fails.
    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderHandle>;

    /// Delete a compiled shader stage
    ///
    /// Deleting a shader that is attached to a linked program is safe;
    /// the underlying object lives until the program releases it.
    fn delete_shader(&mut self, shader: ShaderHandle) -> Result<()>;

    /// Link compiled shader stages into a program
    ///
    /// Attribute names listed in the descriptor are bound to their
    /// locations before linking.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderLink` with the raw driver diagnostic when
    /// linking fails.
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<ProgramHandle>;

    /// Select a program for subsequent draw calls (None releases the binding)
    fn use_program(&mut self, program: Option<ProgramHandle>) -> Result<()>;

    /// Delete a linked program
    fn delete_program(&mut self, program: ProgramHandle) -> Result<()>;

    /// Create a vertex array object
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle>;

    /// Bind a vertex array object (None releases the binding)
    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) -> Result<()>;

    /// Delete a vertex array object
    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()>;

    /// Create a buffer object
    fn create_buffer(&mut self) -> Result<BufferHandle>;

    /// Bind a buffer object to a target (None releases the binding)
    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) -> Result<()>;

    /// Upload data to the buffer bound at `target`
    ///
    /// # Arguments
    ///
    /// * `target` - Binding point of the destination buffer
    /// * `data` - Raw bytes to upload
    /// * `usage` - Expected update frequency hint
    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()>;

    /// Delete a buffer object
    fn delete_buffer(&mut self, buffer: BufferHandle) -> Result<()>;

    /// Describe how the bound buffer feeds a vertex attribute
    ///
    /// Applies to the currently bound vertex array and array buffer.
    fn vertex_attrib_pointer(&mut self, desc: &VertexAttribDesc) -> Result<()>;

    /// Enable a vertex attribute location in the bound vertex array
    fn enable_vertex_attrib(&mut self, location: u32) -> Result<()>;

    /// Set the color used by `clear_color_buffer()`
    fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()>;

    /// Clear the color buffer of the current render target
    fn clear_color_buffer(&mut self) -> Result<()>;

    /// Draw primitives from the bound vertex array
    ///
    /// # Arguments
    ///
    /// * `topology` - Primitive topology to assemble
    /// * `first` - Index of the first vertex
    /// * `count` - Number of vertices to draw
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) -> Result<()>;

    /// Set the viewport transform
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()>;

    /// Read back a rectangle of pixels from the current color buffer
    ///
    /// Pixels are returned as tightly packed RGBA8 rows, bottom row first.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Lower-left corner of the rectangle
    /// * `width`, `height` - Rectangle size in pixels
    ///
    /// # Returns
    ///
    /// A vector of `width * height * 4` bytes
    fn read_pixels(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<Vec<u8>>;

    /// Get statistics about the device
    fn stats(&self) -> DeviceStats;
}
