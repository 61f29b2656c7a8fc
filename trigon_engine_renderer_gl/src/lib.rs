/*!
# Trigon Engine - OpenGL Renderer Backend

OpenGL implementation of the Trigon rendering engine.

This crate implements the `trigon_engine` GraphicsDevice trait on top of
OpenGL 3.3 core using the glow bindings. The host owns the windowing
layer: it creates the GL context, makes it current on the calling thread
and hands the loaded function pointers to [`GlGraphicsDevice::new`].
*/

mod gl_graphics_device;

#[cfg(feature = "gl-debug")]
mod gl_debug;

pub use gl_graphics_device::GlGraphicsDevice;
