//! Triangle scene - GPU resource lifecycle for the fixed-triangle demo
//!
//! A TriangleScene owns the program, vertex array, and vertex buffer for
//! one rendering context. It moves through a strict lifecycle:
//! Uninitialized until init() succeeds, Initialized while render() may be
//! called, Destroyed after destroy(). A failed init() releases everything
//! it created and leaves the scene Uninitialized, so a later init() call
//! is still legal.

use crate::error::{Error, Result};
use crate::graphics_device::{
    AttribBinding, AttribFormat, BufferHandle, BufferTarget, BufferUsage, GraphicsDevice,
    PrimitiveTopology, ProgramDesc, ProgramHandle, ShaderDesc, ShaderStage, VertexArrayHandle,
    VertexAttribDesc,
};
use crate::host::RenderHost;
use crate::scene::shaders::ShaderSources;
use crate::scene::{geometry, shaders};
use crate::{trigon_debug, trigon_error, trigon_info, trigon_warn};

/// Triangle scene configuration
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Scene name used in logs
    pub name: String,
    /// Color the framebuffer is cleared to each frame
    pub clear_color: [f32; 4],
    /// Shader sources compiled at initialization
    pub shaders: ShaderSources,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "triangle".to_string(),
            clear_color: [0.2, 0.3, 0.3, 1.0],
            shaders: ShaderSources::default(),
        }
    }
}

/// Externally observable lifecycle state of a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// No GPU resources exist yet
    Uninitialized,
    /// GPU resources are ready and render() may be called
    Initialized,
    /// GPU resources have been released
    Destroyed,
}

/// GPU resources owned by an initialized scene
#[derive(Debug, Clone, Copy)]
struct GpuResources {
    program: ProgramHandle,
    vertex_array: VertexArrayHandle,
    vertex_buffer: BufferHandle,
}

enum SceneState {
    Uninitialized,
    Initialized(GpuResources),
    Destroyed,
}

/// Scene drawing one fixed triangle
///
/// Resource handles are only valid for the device that init() ran on;
/// callers must pass the same device to every lifecycle method.
pub struct TriangleScene {
    config: SceneConfig,
    state: SceneState,
    frames_rendered: u64,
}

impl TriangleScene {
    /// Create a scene with the default configuration
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create a scene with a custom configuration
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            config,
            state: SceneState::Uninitialized,
            frames_rendered: 0,
        }
    }

    /// Externally observable lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        match self.state {
            SceneState::Uninitialized => Lifecycle::Uninitialized,
            SceneState::Initialized(_) => Lifecycle::Initialized,
            SceneState::Destroyed => Lifecycle::Destroyed,
        }
    }

    /// True once init() has succeeded and destroy() has not run
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, SceneState::Initialized(_))
    }

    /// Number of frames rendered since initialization
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Scene configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Create all GPU resources for the scene
    ///
    /// Runs once per rendering context: compiles both shader stages, links
    /// them into a program with the position attribute bound to its fixed
    /// location, then uploads the triangle vertices into a buffer whose
    /// layout is captured by a vertex array object.
    ///
    /// # Errors
    ///
    /// * `Error::ShaderCompile` - a stage failed to compile; the error
    ///   names the stage and carries the driver diagnostic
    /// * `Error::ShaderLink` - the program failed to link
    /// * `Error::InvalidState` - the scene is not Uninitialized
    ///
    /// On any failure the resources created so far are released and the
    /// scene stays Uninitialized.
    pub fn init(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        match self.state {
            SceneState::Uninitialized => {}
            SceneState::Initialized(_) => {
                let message = "init() called on an initialized scene".to_string();
                trigon_error!("trigon::scene", "{}", message);
                return Err(Error::InvalidState(message));
            }
            SceneState::Destroyed => {
                let message = "init() called on a destroyed scene".to_string();
                trigon_error!("trigon::scene", "{}", message);
                return Err(Error::InvalidState(message));
            }
        }

        let info = device.adapter_info();
        trigon_info!(
            "trigon::scene",
            "Initializing scene '{}' on {} ({}, GLSL {})",
            self.config.name,
            info.renderer,
            info.version,
            info.shading_language_version
        );

        let resources = self.create_resources(device)?;
        self.state = SceneState::Initialized(resources);

        trigon_info!("trigon::scene", "Scene '{}' initialized", self.config.name);
        Ok(())
    }

    /// Draw one frame
    ///
    /// Clears the color buffer, re-binds the vertex array and program,
    /// draws the three triangle vertices, and releases both bindings.
    /// Allocates nothing and issues the identical call sequence every
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidState` when the scene is not Initialized;
    /// no draw is issued in that case.
    pub fn render(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        let resources = match self.state {
            SceneState::Initialized(resources) => resources,
            SceneState::Uninitialized => {
                let message = "render() called before init()".to_string();
                trigon_error!("trigon::scene", "{}", message);
                return Err(Error::InvalidState(message));
            }
            SceneState::Destroyed => {
                let message = "render() called on a destroyed scene".to_string();
                trigon_error!("trigon::scene", "{}", message);
                return Err(Error::InvalidState(message));
            }
        };

        device.set_clear_color(self.config.clear_color)?;
        device.clear_color_buffer()?;

        device.bind_vertex_array(Some(resources.vertex_array))?;
        device.use_program(Some(resources.program))?;
        device.draw_arrays(PrimitiveTopology::Triangles, 0, geometry::VERTEX_COUNT)?;
        device.use_program(None)?;
        device.bind_vertex_array(None)?;

        self.frames_rendered += 1;
        Ok(())
    }

    /// Release all GPU resources
    ///
    /// Called when the rendering context goes away. Safe in any state;
    /// repeated calls are ignored.
    pub fn destroy(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        match std::mem::replace(&mut self.state, SceneState::Destroyed) {
            SceneState::Initialized(resources) => {
                device.delete_buffer(resources.vertex_buffer)?;
                device.delete_vertex_array(resources.vertex_array)?;
                device.delete_program(resources.program)?;
                trigon_info!(
                    "trigon::scene",
                    "Scene '{}' destroyed after {} frame(s)",
                    self.config.name,
                    self.frames_rendered
                );
                Ok(())
            }
            SceneState::Uninitialized => {
                trigon_debug!(
                    "trigon::scene",
                    "destroy() called before init(), nothing to release"
                );
                Ok(())
            }
            SceneState::Destroyed => {
                trigon_warn!("trigon::scene", "Redundant destroy() call ignored");
                Ok(())
            }
        }
    }

    fn create_resources(&self, device: &mut dyn GraphicsDevice) -> Result<GpuResources> {
        let vertex = device.create_shader(&ShaderDesc {
            stage: ShaderStage::Vertex,
            source: &self.config.shaders.vertex,
        })?;

        let fragment = match device.create_shader(&ShaderDesc {
            stage: ShaderStage::Fragment,
            source: &self.config.shaders.fragment,
        }) {
            Ok(handle) => handle,
            Err(err) => {
                let _ = device.delete_shader(vertex);
                return Err(err);
            }
        };

        let program = match device.create_program(&ProgramDesc {
            vertex,
            fragment,
            attrib_bindings: vec![AttribBinding {
                name: shaders::VERTEX_ATTRIB_NAME.to_string(),
                location: shaders::VERTEX_ATTRIB_LOCATION,
            }],
        }) {
            Ok(handle) => handle,
            Err(err) => {
                let _ = device.delete_shader(fragment);
                let _ = device.delete_shader(vertex);
                return Err(err);
            }
        };

        // The linked program keeps its stages alive; the standalone
        // shader objects are no longer needed.
        let vs_released = device.delete_shader(vertex);
        let fs_released = device.delete_shader(fragment);
        if let Err(err) = vs_released.and(fs_released) {
            let _ = device.delete_program(program);
            return Err(err);
        }

        if let Err(err) = device.use_program(Some(program)) {
            let _ = device.delete_program(program);
            return Err(err);
        }

        let (vertex_array, vertex_buffer) = match Self::create_geometry(device) {
            Ok(handles) => handles,
            Err(err) => {
                let _ = device.use_program(None);
                let _ = device.delete_program(program);
                return Err(err);
            }
        };

        // Release order: vertex array, then buffer, then program
        let released = device
            .bind_vertex_array(None)
            .and(device.bind_buffer(BufferTarget::Array, None))
            .and(device.use_program(None));
        if let Err(err) = released {
            let _ = device.delete_buffer(vertex_buffer);
            let _ = device.delete_vertex_array(vertex_array);
            let _ = device.delete_program(program);
            return Err(err);
        }

        Ok(GpuResources {
            program,
            vertex_array,
            vertex_buffer,
        })
    }

    /// Create the vertex array and buffer, upload the triangle data, and
    /// describe the position attribute
    ///
    /// The vertex array is created and bound before the buffer so it
    /// captures the attribute/buffer association.
    fn create_geometry(
        device: &mut dyn GraphicsDevice,
    ) -> Result<(VertexArrayHandle, BufferHandle)> {
        let vertex_array = device.create_vertex_array()?;
        if let Err(err) = device.bind_vertex_array(Some(vertex_array)) {
            let _ = device.delete_vertex_array(vertex_array);
            return Err(err);
        }

        let vertex_buffer = match device.create_buffer() {
            Ok(handle) => handle,
            Err(err) => {
                let _ = device.bind_vertex_array(None);
                let _ = device.delete_vertex_array(vertex_array);
                return Err(err);
            }
        };

        if let Err(err) = Self::upload_geometry(device, vertex_buffer) {
            let _ = device.bind_buffer(BufferTarget::Array, None);
            let _ = device.bind_vertex_array(None);
            let _ = device.delete_buffer(vertex_buffer);
            let _ = device.delete_vertex_array(vertex_array);
            return Err(err);
        }

        Ok((vertex_array, vertex_buffer))
    }

    fn upload_geometry(device: &mut dyn GraphicsDevice, vertex_buffer: BufferHandle) -> Result<()> {
        device.bind_buffer(BufferTarget::Array, Some(vertex_buffer))?;

        trigon_debug!(
            "trigon::scene",
            "Uploading {} bytes of vertex data",
            geometry::vertex_buffer_size()
        );
        device.buffer_data(
            BufferTarget::Array,
            geometry::vertex_bytes(),
            BufferUsage::StaticDraw,
        )?;

        device.vertex_attrib_pointer(&VertexAttribDesc {
            location: shaders::VERTEX_ATTRIB_LOCATION,
            format: AttribFormat::R32G32B32_SFLOAT,
            normalized: false,
            stride: 0,
            offset: 0,
        })?;
        device.enable_vertex_attrib(shaders::VERTEX_ATTRIB_LOCATION)?;

        Ok(())
    }
}

impl Default for TriangleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderHost for TriangleScene {
    fn on_context_ready(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.init(device)
    }

    fn on_repaint(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.render(device)
    }

    fn on_context_lost(&mut self, device: &mut dyn GraphicsDevice) -> Result<()> {
        self.destroy(device)
    }
}

#[cfg(test)]
#[path = "triangle_scene_tests.rs"]
mod tests;
