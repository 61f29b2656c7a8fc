/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// The mock records every call as a formatted string so tests can assert
/// on call order and arguments. Shader translation is simulated: sources
/// that do not start with a `#version` directive fail to compile, and a
/// link failure can be primed via `fail_next_link`.

use crate::error::{Error, Result};
use crate::graphics_device::{
    AdapterInfo, BufferHandle, BufferTarget, BufferUsage, DeviceStats, GraphicsDevice,
    PrimitiveTopology, ProgramDesc, ProgramHandle, ShaderDesc, ShaderHandle, VertexArrayHandle,
    VertexAttribDesc,
};
use crate::{trigon_bail, trigon_error};

/// Mock graphics device that records calls without a GPU
#[derive(Debug)]
pub struct MockGraphicsDevice {
    /// Every call made to the device, in order, with arguments
    pub calls: Vec<String>,
    /// Next handle value to issue (handles are never reused)
    pub next_handle: u32,
    /// When set, the next create_program() fails with a link error
    pub fail_next_link: bool,
    /// Last color set via set_clear_color()
    pub clear_color: [f32; 4],
    /// Accumulated statistics
    pub stats: DeviceStats,
}

impl MockGraphicsDevice {
    /// Create a new mock device with an empty call log
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            next_handle: 1,
            fail_next_link: false,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            stats: DeviceStats::default(),
        }
    }

    /// Position of the first call equal to `call`, if any
    pub fn call_index(&self, call: &str) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    /// Number of calls equal to `call`
    pub fn call_count(&self, call: &str) -> usize {
        self.calls.iter().filter(|c| c.as_str() == call).count()
    }

    fn alloc_handle(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn format_binding_list(desc: &ProgramDesc) -> String {
        desc.attrib_bindings
            .iter()
            .map(|b| format!("{}->{}", b.name, b.location))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn adapter_info(&self) -> AdapterInfo {
        AdapterInfo {
            vendor: "Trigon".to_string(),
            renderer: "MockGraphicsDevice".to_string(),
            version: "3.3 Mock".to_string(),
            shading_language_version: "3.30 Mock".to_string(),
        }
    }

    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderHandle> {
        self.calls.push(format!("create_shader({})", desc.stage.name()));

        // Simulated compiler: a well-formed source starts with a version directive
        if !desc.source.trim_start().starts_with("#version") {
            let diagnostic = "0:1(1): error: syntax error, unexpected NEW_IDENTIFIER".to_string();
            trigon_error!(
                "trigon::mock",
                "{} shader compilation failed: {}",
                desc.stage.name(),
                diagnostic
            );
            return Err(Error::ShaderCompile {
                stage: desc.stage,
                diagnostic,
            });
        }

        Ok(ShaderHandle(self.alloc_handle()))
    }

    fn delete_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        self.calls.push(format!("delete_shader({})", shader.0));
        Ok(())
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<ProgramHandle> {
        self.calls.push(format!(
            "create_program(vs={}, fs={}, bindings=[{}])",
            desc.vertex.0,
            desc.fragment.0,
            Self::format_binding_list(desc)
        ));

        if self.fail_next_link {
            self.fail_next_link = false;
            let diagnostic =
                "error: fragment shader input not written by vertex shader".to_string();
            trigon_error!("trigon::mock", "Shader program link failed: {}", diagnostic);
            return Err(Error::ShaderLink { diagnostic });
        }

        Ok(ProgramHandle(self.alloc_handle()))
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) -> Result<()> {
        match program {
            Some(p) => self.calls.push(format!("use_program({})", p.0)),
            None => self.calls.push("use_program(None)".to_string()),
        }
        Ok(())
    }

    fn delete_program(&mut self, program: ProgramHandle) -> Result<()> {
        self.calls.push(format!("delete_program({})", program.0));
        Ok(())
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        self.calls.push("create_vertex_array".to_string());
        Ok(VertexArrayHandle(self.alloc_handle()))
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) -> Result<()> {
        match vertex_array {
            Some(v) => self.calls.push(format!("bind_vertex_array({})", v.0)),
            None => self.calls.push("bind_vertex_array(None)".to_string()),
        }
        Ok(())
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()> {
        self.calls.push(format!("delete_vertex_array({})", vertex_array.0));
        Ok(())
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        self.calls.push("create_buffer".to_string());
        Ok(BufferHandle(self.alloc_handle()))
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) -> Result<()> {
        match buffer {
            Some(b) => self.calls.push(format!("bind_buffer({:?}, {})", target, b.0)),
            None => self.calls.push(format!("bind_buffer({:?}, None)", target)),
        }
        Ok(())
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()> {
        self.calls.push(format!(
            "buffer_data({:?}, {} bytes, {:?})",
            target,
            data.len(),
            usage
        ));
        self.stats.buffer_uploads += 1;
        self.stats.bytes_uploaded += data.len() as u64;
        Ok(())
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) -> Result<()> {
        self.calls.push(format!("delete_buffer({})", buffer.0));
        Ok(())
    }

    fn vertex_attrib_pointer(&mut self, desc: &VertexAttribDesc) -> Result<()> {
        self.calls.push(format!(
            "vertex_attrib_pointer(loc={}, {:?}, normalized={}, stride={}, offset={})",
            desc.location, desc.format, desc.normalized, desc.stride, desc.offset
        ));
        Ok(())
    }

    fn enable_vertex_attrib(&mut self, location: u32) -> Result<()> {
        self.calls.push(format!("enable_vertex_attrib({})", location));
        Ok(())
    }

    fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()> {
        self.calls.push(format!("set_clear_color({:?})", color));
        self.clear_color = color;
        Ok(())
    }

    fn clear_color_buffer(&mut self) -> Result<()> {
        self.calls.push("clear_color_buffer".to_string());
        Ok(())
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) -> Result<()> {
        self.calls.push(format!("draw_arrays({:?}, {}, {})", topology, first, count));
        self.stats.draw_calls += 1;
        if topology == PrimitiveTopology::Triangles {
            self.stats.triangles += (count / 3).max(0) as u32;
        }
        Ok(())
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        self.calls.push(format!("set_viewport({}, {}, {}, {})", x, y, width, height));
        Ok(())
    }

    fn read_pixels(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<Vec<u8>> {
        self.calls.push(format!("read_pixels({}, {}, {}, {})", x, y, width, height));

        if width < 0 || height < 0 {
            trigon_bail!(
                "trigon::mock",
                "read_pixels() called with negative size {}x{}",
                width,
                height
            );
        }

        // The mock has no rasterizer; every pixel reads back as the clear color
        let pixel: Vec<u8> = self
            .clear_color
            .iter()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect();
        let count = width as usize * height as usize;
        Ok(pixel.repeat(count))
    }

    fn stats(&self) -> DeviceStats {
        self.stats
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
