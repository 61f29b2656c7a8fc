/// Buffer targets, usage hints, and vertex attribute formats

/// Binding point for a buffer object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferTarget {
    /// Vertex attribute data
    Array,
    /// Index data
    ElementArray,
}

/// Expected update frequency for uploaded buffer data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Uploaded once, drawn many times
    StaticDraw,
    /// Updated repeatedly, drawn many times
    DynamicDraw,
    /// Updated every use
    StreamDraw,
}

/// Vertex attribute data format
///
/// Defines the data type and component count for one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum AttribFormat {
    R32_SFLOAT,          // float (4 bytes)
    R32G32_SFLOAT,       // vec2 (8 bytes)
    R32G32B32_SFLOAT,    // vec3 (12 bytes)
    R32G32B32A32_SFLOAT, // vec4 (16 bytes)
}

impl AttribFormat {
    /// Returns the number of components per vertex
    pub fn component_count(&self) -> i32 {
        match self {
            AttribFormat::R32_SFLOAT => 1,
            AttribFormat::R32G32_SFLOAT => 2,
            AttribFormat::R32G32B32_SFLOAT => 3,
            AttribFormat::R32G32B32A32_SFLOAT => 4,
        }
    }

    /// Returns size in bytes for this format
    pub fn size_bytes(&self) -> u32 {
        match self {
            AttribFormat::R32_SFLOAT => 4,
            AttribFormat::R32G32_SFLOAT => 8,
            AttribFormat::R32G32B32_SFLOAT => 12,
            AttribFormat::R32G32B32A32_SFLOAT => 16,
        }
    }
}

/// Descriptor for one vertex attribute of the bound array buffer
#[derive(Debug, Clone, Copy)]
pub struct VertexAttribDesc {
    /// Attribute location in the vertex shader
    pub location: u32,
    /// Data format of the attribute
    pub format: AttribFormat,
    /// Whether integer data is normalized to [0, 1] / [-1, 1]
    pub normalized: bool,
    /// Byte distance between consecutive vertices (0 means tightly packed)
    pub stride: i32,
    /// Byte offset of the first component in the buffer
    pub offset: i32,
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
