/// Shader and program descriptors

use crate::graphics_device::ShaderHandle;

/// Shader stage in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// Human-readable stage name for diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::Fragment => "Fragment",
        }
    }
}

/// Descriptor for compiling a shader stage
#[derive(Debug, Clone)]
pub struct ShaderDesc<'a> {
    /// Stage this shader belongs to
    pub stage: ShaderStage,
    /// Shader source text
    pub source: &'a str,
}

/// Binding of a vertex attribute name to a location
///
/// Applied before linking so the location is stable regardless of
/// what the driver would assign on its own.
#[derive(Debug, Clone)]
pub struct AttribBinding {
    /// Attribute name as written in the vertex shader
    pub name: String,
    /// Location to bind the attribute to
    pub location: u32,
}

/// Descriptor for linking a program from compiled stages
#[derive(Debug, Clone)]
pub struct ProgramDesc {
    /// Compiled vertex shader
    pub vertex: ShaderHandle,
    /// Compiled fragment shader
    pub fragment: ShaderHandle,
    /// Attribute name/location bindings applied before linking
    pub attrib_bindings: Vec<AttribBinding>,
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
