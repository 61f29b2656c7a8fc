/// OpenGL error polling - turns glGetError codes into readable reports
///
/// Compiled in only with the `gl-debug` feature. The device calls
/// [`check_gl_error`] after state-changing operations when
/// `enable_debug_checks` is set in its configuration.

use glow::HasContext;
use trigon_engine::trigon::Result;
use trigon_engine::trigon_err;

/// Human-readable name for a glGetError code
pub(crate) fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        _ => "GL_UNKNOWN_ERROR",
    }
}

/// Drain the GL error queue after `operation`
///
/// The queue can hold more than one code, so all of them are collected
/// into a single error.
pub(crate) fn check_gl_error(gl: &glow::Context, operation: &str) -> Result<()> {
    let mut names: Vec<&'static str> = Vec::new();
    loop {
        let code = unsafe { gl.get_error() };
        if code == glow::NO_ERROR {
            break;
        }
        names.push(error_name(code));
    }

    if names.is_empty() {
        Ok(())
    } else {
        Err(trigon_err!(
            "trigon::gl",
            "{} raised {}",
            operation,
            names.join(", ")
        ))
    }
}
