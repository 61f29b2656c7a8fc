/// Embedded GLSL sources for the triangle scene

/// Vertex shader: forwards the position attribute unchanged
pub const TRIANGLE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;

void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

/// Fragment shader: flat orange fill
pub const TRIANGLE_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

/// Name of the vertex position attribute in the vertex shader
pub const VERTEX_ATTRIB_NAME: &str = "aPos";

/// Location the position attribute is bound to before linking
pub const VERTEX_ATTRIB_LOCATION: u32 = 0;

/// Shader source pair compiled at scene initialization
///
/// Defaults to the embedded triangle sources. Tests substitute malformed
/// sources here to drive the compile failure paths.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    /// Vertex stage source text
    pub vertex: String,
    /// Fragment stage source text
    pub fragment: String,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            vertex: TRIANGLE_VERTEX_SHADER.to_string(),
            fragment: TRIANGLE_FRAGMENT_SHADER.to_string(),
        }
    }
}
