/*!
# Trigon Engine

Core traits and types for the Trigon rendering engine.

This crate provides the platform-agnostic API for rendering a fixed
triangle using trait-based dynamic polymorphism. Backend implementations
(OpenGL today) provide concrete devices that implement these traits.

## Architecture

- **GraphicsDevice**: GPU resource and command trait
- **TriangleScene**: Owns the program, vertex array, and vertex buffer for one rendering context
- **RenderHost**: Hooks through which the windowing layer drives a scene lifecycle

Backend implementations provide concrete types that implement these traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod host;
pub mod graphics_device;
pub mod scene;

// Main trigon namespace module
pub mod trigon {
    // Error types
    pub use crate::error::{Error, Result};

    // Host interface
    pub use crate::host::RenderHost;

    // Logging sub-module (types only; the trigon_* macros live at the
    // crate root via #[macro_export])
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        pub use crate::log::{log, log_detailed, reset_logger, set_logger};
    }

    // Device sub-module with all device types
    pub mod device {
        pub use crate::graphics_device::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}
