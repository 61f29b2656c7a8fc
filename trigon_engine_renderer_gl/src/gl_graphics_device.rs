/// GlGraphicsDevice - OpenGL implementation of GraphicsDevice trait

use glow::HasContext;
use rustc_hash::FxHashMap;

use trigon_engine::trigon::device::{
    AdapterInfo, AttribFormat, BufferHandle, BufferTarget, BufferUsage, DeviceConfig, DeviceStats,
    GraphicsDevice, PrimitiveTopology, ProgramDesc, ProgramHandle, ShaderDesc, ShaderHandle,
    ShaderStage, VertexArrayHandle, VertexAttribDesc,
};
use trigon_engine::trigon::{Error, Result};
use trigon_engine::{trigon_bail, trigon_debug, trigon_err, trigon_error, trigon_info};

/// OpenGL device implementation
///
/// Wraps a loaded OpenGL 3.3 core context and tracks the GL objects
/// issued through it. Handles returned to callers are plain integers;
/// the matching GL objects live in the maps below until deleted.
pub struct GlGraphicsDevice {
    /// Loaded OpenGL function pointers
    gl: glow::Context,
    config: DeviceConfig,
    /// Adapter strings queried once at creation
    adapter_info: AdapterInfo,

    /// Live GL objects by handle value (handle values are never reused)
    shaders: FxHashMap<u32, glow::Shader>,
    programs: FxHashMap<u32, glow::Program>,
    buffers: FxHashMap<u32, glow::Buffer>,
    vertex_arrays: FxHashMap<u32, glow::VertexArray>,

    next_handle: u32,
    stats: DeviceStats,
}

impl GlGraphicsDevice {
    /// Wrap a loaded OpenGL context
    ///
    /// The context must be current on the calling thread for this call
    /// and for every later call on the device.
    ///
    /// # Arguments
    ///
    /// * `gl` - Function pointers loaded from the current context
    /// * `config` - Device configuration
    ///
    /// # Errors
    ///
    /// Fails when the driver reports an OpenGL version below 3.3.
    pub fn new(gl: glow::Context, config: DeviceConfig) -> Result<Self> {
        let (major, minor) = unsafe {
            (
                gl.get_parameter_i32(glow::MAJOR_VERSION),
                gl.get_parameter_i32(glow::MINOR_VERSION),
            )
        };
        if (major, minor) < (3, 3) {
            trigon_bail!(
                "trigon::gl",
                "OpenGL 3.3 required, driver reports {}.{}",
                major,
                minor
            );
        }

        let adapter_info = unsafe {
            AdapterInfo {
                vendor: gl.get_parameter_string(glow::VENDOR),
                renderer: gl.get_parameter_string(glow::RENDERER),
                version: gl.get_parameter_string(glow::VERSION),
                shading_language_version: gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            }
        };
        trigon_info!(
            "trigon::gl",
            "OpenGL device for '{}': {} / {}",
            config.app_name,
            adapter_info.vendor,
            adapter_info.renderer
        );
        trigon_info!(
            "trigon::gl",
            "OpenGL {}, GLSL {}",
            adapter_info.version,
            adapter_info.shading_language_version
        );

        Ok(Self {
            gl,
            config,
            adapter_info,
            shaders: FxHashMap::default(),
            programs: FxHashMap::default(),
            buffers: FxHashMap::default(),
            vertex_arrays: FxHashMap::default(),
            next_handle: 1,
            stats: DeviceStats::default(),
        })
    }

    fn alloc_handle(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn shader(&self, handle: ShaderHandle) -> Result<glow::Shader> {
        self.shaders
            .get(&handle.0)
            .copied()
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown shader handle {}", handle.0))
    }

    fn program(&self, handle: ProgramHandle) -> Result<glow::Program> {
        self.programs
            .get(&handle.0)
            .copied()
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown program handle {}", handle.0))
    }

    fn buffer(&self, handle: BufferHandle) -> Result<glow::Buffer> {
        self.buffers
            .get(&handle.0)
            .copied()
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown buffer handle {}", handle.0))
    }

    fn vertex_array(&self, handle: VertexArrayHandle) -> Result<glow::VertexArray> {
        self.vertex_arrays
            .get(&handle.0)
            .copied()
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown vertex array handle {}", handle.0))
    }

    /// Poll the GL error queue after `operation` when debug checks are on
    #[cfg(feature = "gl-debug")]
    fn debug_check(&self, operation: &str) -> Result<()> {
        if self.config.enable_debug_checks {
            crate::gl_debug::check_gl_error(&self.gl, operation)
        } else {
            Ok(())
        }
    }

    /// Debug checks compiled out; see the `gl-debug` feature
    #[cfg(not(feature = "gl-debug"))]
    fn debug_check(&self, _operation: &str) -> Result<()> {
        Ok(())
    }
}

impl GraphicsDevice for GlGraphicsDevice {
    fn adapter_info(&self) -> AdapterInfo {
        self.adapter_info.clone()
    }

    fn create_shader(&mut self, desc: &ShaderDesc) -> Result<ShaderHandle> {
        let shader = unsafe {
            let shader = self.gl.create_shader(stage_to_gl(desc.stage)).map_err(|e| {
                trigon_err!(
                    "trigon::gl",
                    "Failed to create {} shader object: {}",
                    desc.stage.name(),
                    e
                )
            })?;
            self.gl.shader_source(shader, desc.source);
            self.gl.compile_shader(shader);

            if !self.gl.get_shader_compile_status(shader) {
                let diagnostic = self.gl.get_shader_info_log(shader);
                self.gl.delete_shader(shader);
                trigon_error!(
                    "trigon::gl",
                    "{} shader compilation failed: {}",
                    desc.stage.name(),
                    diagnostic
                );
                return Err(Error::ShaderCompile {
                    stage: desc.stage,
                    diagnostic,
                });
            }
            shader
        };

        if let Err(err) = self.debug_check("create_shader") {
            unsafe { self.gl.delete_shader(shader) };
            return Err(err);
        }

        let handle = ShaderHandle(self.alloc_handle());
        self.shaders.insert(handle.0, shader);
        trigon_debug!(
            "trigon::gl",
            "Compiled {} shader (handle {})",
            desc.stage.name(),
            handle.0
        );
        Ok(handle)
    }

    fn delete_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        let object = self
            .shaders
            .remove(&shader.0)
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown shader handle {}", shader.0))?;
        unsafe { self.gl.delete_shader(object) };
        Ok(())
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<ProgramHandle> {
        let vertex = self.shader(desc.vertex)?;
        let fragment = self.shader(desc.fragment)?;

        let program = unsafe {
            let program = self
                .gl
                .create_program()
                .map_err(|e| trigon_err!("trigon::gl", "Failed to create program object: {}", e))?;
            self.gl.attach_shader(program, vertex);
            self.gl.attach_shader(program, fragment);

            // Attribute locations must be in place before the link
            for binding in &desc.attrib_bindings {
                self.gl
                    .bind_attrib_location(program, binding.location, &binding.name);
            }

            self.gl.link_program(program);
            if !self.gl.get_program_link_status(program) {
                let diagnostic = self.gl.get_program_info_log(program);
                self.gl.detach_shader(program, vertex);
                self.gl.detach_shader(program, fragment);
                self.gl.delete_program(program);
                trigon_error!("trigon::gl", "Program link failed: {}", diagnostic);
                return Err(Error::ShaderLink { diagnostic });
            }

            // The linked program keeps its binaries; the stage objects can
            // be deleted by the caller at any point from here on
            self.gl.detach_shader(program, vertex);
            self.gl.detach_shader(program, fragment);
            program
        };

        if let Err(err) = self.debug_check("create_program") {
            unsafe { self.gl.delete_program(program) };
            return Err(err);
        }

        let handle = ProgramHandle(self.alloc_handle());
        self.programs.insert(handle.0, program);
        trigon_debug!("trigon::gl", "Linked program (handle {})", handle.0);
        Ok(handle)
    }

    fn use_program(&mut self, program: Option<ProgramHandle>) -> Result<()> {
        let object = match program {
            Some(handle) => Some(self.program(handle)?),
            None => None,
        };
        unsafe { self.gl.use_program(object) };
        Ok(())
    }

    fn delete_program(&mut self, program: ProgramHandle) -> Result<()> {
        let object = self
            .programs
            .remove(&program.0)
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown program handle {}", program.0))?;
        unsafe { self.gl.delete_program(object) };
        Ok(())
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        let vertex_array = unsafe {
            self.gl
                .create_vertex_array()
                .map_err(|e| trigon_err!("trigon::gl", "Failed to create vertex array: {}", e))?
        };

        let handle = VertexArrayHandle(self.alloc_handle());
        self.vertex_arrays.insert(handle.0, vertex_array);
        trigon_debug!("trigon::gl", "Created vertex array (handle {})", handle.0);
        Ok(handle)
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) -> Result<()> {
        let object = match vertex_array {
            Some(handle) => Some(self.vertex_array(handle)?),
            None => None,
        };
        unsafe { self.gl.bind_vertex_array(object) };
        Ok(())
    }

    fn delete_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()> {
        let object = self.vertex_arrays.remove(&vertex_array.0).ok_or_else(|| {
            trigon_err!("trigon::gl", "Unknown vertex array handle {}", vertex_array.0)
        })?;
        unsafe { self.gl.delete_vertex_array(object) };
        Ok(())
    }

    fn create_buffer(&mut self) -> Result<BufferHandle> {
        let buffer = unsafe {
            self.gl
                .create_buffer()
                .map_err(|e| trigon_err!("trigon::gl", "Failed to create buffer: {}", e))?
        };

        let handle = BufferHandle(self.alloc_handle());
        self.buffers.insert(handle.0, buffer);
        trigon_debug!("trigon::gl", "Created buffer (handle {})", handle.0);
        Ok(handle)
    }

    fn bind_buffer(&mut self, target: BufferTarget, buffer: Option<BufferHandle>) -> Result<()> {
        let object = match buffer {
            Some(handle) => Some(self.buffer(handle)?),
            None => None,
        };
        unsafe { self.gl.bind_buffer(target_to_gl(target), object) };
        Ok(())
    }

    fn buffer_data(&mut self, target: BufferTarget, data: &[u8], usage: BufferUsage) -> Result<()> {
        unsafe {
            self.gl
                .buffer_data_u8_slice(target_to_gl(target), data, usage_to_gl(usage));
        }
        self.debug_check("buffer_data")?;

        self.stats.buffer_uploads += 1;
        self.stats.bytes_uploaded += data.len() as u64;
        trigon_debug!(
            "trigon::gl",
            "Uploaded {} bytes to {:?} buffer",
            data.len(),
            target
        );
        Ok(())
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) -> Result<()> {
        let object = self
            .buffers
            .remove(&buffer.0)
            .ok_or_else(|| trigon_err!("trigon::gl", "Unknown buffer handle {}", buffer.0))?;
        unsafe { self.gl.delete_buffer(object) };
        Ok(())
    }

    fn vertex_attrib_pointer(&mut self, desc: &VertexAttribDesc) -> Result<()> {
        unsafe {
            self.gl.vertex_attrib_pointer_f32(
                desc.location,
                desc.format.component_count(),
                attrib_type_to_gl(desc.format),
                desc.normalized,
                desc.stride,
                desc.offset,
            );
        }
        self.debug_check("vertex_attrib_pointer")
    }

    fn enable_vertex_attrib(&mut self, location: u32) -> Result<()> {
        unsafe { self.gl.enable_vertex_attrib_array(location) };
        Ok(())
    }

    fn set_clear_color(&mut self, color: [f32; 4]) -> Result<()> {
        unsafe { self.gl.clear_color(color[0], color[1], color[2], color[3]) };
        Ok(())
    }

    fn clear_color_buffer(&mut self) -> Result<()> {
        unsafe { self.gl.clear(glow::COLOR_BUFFER_BIT) };
        Ok(())
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: i32, count: i32) -> Result<()> {
        unsafe {
            self.gl.draw_arrays(topology_to_gl(topology), first, count);
        }
        self.debug_check("draw_arrays")?;

        self.stats.draw_calls += 1;
        if topology == PrimitiveTopology::Triangles {
            self.stats.triangles += (count / 3).max(0) as u32;
        }
        Ok(())
    }

    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<()> {
        unsafe { self.gl.viewport(x, y, width, height) };
        Ok(())
    }

    fn read_pixels(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<Vec<u8>> {
        if width < 0 || height < 0 {
            trigon_bail!(
                "trigon::gl",
                "read_pixels() called with negative size {}x{}",
                width,
                height
            );
        }

        let mut pixels = vec![0u8; width as usize * height as usize * 4];
        unsafe {
            self.gl.read_pixels(
                x,
                y,
                width,
                height,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(&mut pixels),
            );
        }
        self.debug_check("read_pixels")?;
        Ok(pixels)
    }

    fn stats(&self) -> DeviceStats {
        self.stats
    }
}

impl Drop for GlGraphicsDevice {
    fn drop(&mut self) {
        // Release anything the caller left alive so no GL object outlives
        // the device
        unsafe {
            for (_, program) in self.programs.drain() {
                self.gl.delete_program(program);
            }
            for (_, shader) in self.shaders.drain() {
                self.gl.delete_shader(shader);
            }
            for (_, buffer) in self.buffers.drain() {
                self.gl.delete_buffer(buffer);
            }
            for (_, vertex_array) in self.vertex_arrays.drain() {
                self.gl.delete_vertex_array(vertex_array);
            }
        }
    }
}

// ===== Enum conversions =====

fn stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

fn target_to_gl(target: BufferTarget) -> u32 {
    match target {
        BufferTarget::Array => glow::ARRAY_BUFFER,
        BufferTarget::ElementArray => glow::ELEMENT_ARRAY_BUFFER,
    }
}

fn usage_to_gl(usage: BufferUsage) -> u32 {
    match usage {
        BufferUsage::StaticDraw => glow::STATIC_DRAW,
        BufferUsage::DynamicDraw => glow::DYNAMIC_DRAW,
        BufferUsage::StreamDraw => glow::STREAM_DRAW,
    }
}

fn topology_to_gl(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::Points => glow::POINTS,
        PrimitiveTopology::Lines => glow::LINES,
        PrimitiveTopology::LineStrip => glow::LINE_STRIP,
        PrimitiveTopology::Triangles => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
        PrimitiveTopology::TriangleFan => glow::TRIANGLE_FAN,
    }
}

/// Component data type for a vertex attribute format
///
/// Every format the engine defines today is float-based.
fn attrib_type_to_gl(format: AttribFormat) -> u32 {
    match format {
        AttribFormat::R32_SFLOAT
        | AttribFormat::R32G32_SFLOAT
        | AttribFormat::R32G32B32_SFLOAT
        | AttribFormat::R32G32B32A32_SFLOAT => glow::FLOAT,
    }
}

#[cfg(test)]
#[path = "gl_format_tests.rs"]
mod tests;
