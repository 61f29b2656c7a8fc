//! Host interface between a windowing toolkit and a scene
//!
//! The windowing layer owns the rendering context and drives the scene
//! through these hooks without knowing what the scene draws.

use crate::error::Result;
use crate::graphics_device::GraphicsDevice;

/// Render host trait
///
/// Implemented by objects whose GPU resources are tied to one rendering
/// context. The device is handed in explicitly on every hook; hosts must
/// not stash it or share handles across devices.
pub trait RenderHost {
    /// Called once when the rendering context becomes ready
    ///
    /// This is where GPU resources are created. Returning an error leaves
    /// the host without resources; the window layer decides whether to
    /// surface the error or shut down.
    fn on_context_ready(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;

    /// Called for every repaint request
    fn on_repaint(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;

    /// Called when the rendering context is about to go away
    ///
    /// Releases GPU resources while the context can still be used.
    fn on_context_lost(&mut self, device: &mut dyn GraphicsDevice) -> Result<()>;
}
