//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};
use crate::graphics_device::ShaderStage;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_shader_compile_error_display() {
    let err = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        diagnostic: "0:3(1): error: syntax error, unexpected NEW_IDENTIFIER".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Vertex shader compilation failed"));
    assert!(display.contains("syntax error"));
}

#[test]
fn test_shader_compile_error_display_fragment() {
    let err = Error::ShaderCompile {
        stage: ShaderStage::Fragment,
        diagnostic: "undeclared identifier".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Fragment shader compilation failed"));
    assert!(display.contains("undeclared identifier"));
}

#[test]
fn test_shader_link_error_display() {
    let err = Error::ShaderLink {
        diagnostic: "error: vertex shader output not read by fragment shader".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Shader program link failed"));
    assert!(display.contains("not read by fragment shader"));
}

#[test]
fn test_invalid_state_display() {
    let err = Error::InvalidState("render() called before init()".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid state"));
    assert!(display.contains("render() called before init()"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Failed to create buffer object".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("Failed to create buffer object"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidState("test".to_string());
    // Verify Error implements std::error::Error trait
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err1 = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        diagnostic: "test".to_string(),
    };
    let debug1 = format!("{:?}", err1);
    assert!(debug1.contains("ShaderCompile"));
    assert!(debug1.contains("Vertex"));

    let err2 = Error::ShaderLink {
        diagnostic: "test".to_string(),
    };
    let debug2 = format!("{:?}", err2);
    assert!(debug2.contains("ShaderLink"));

    let err3 = Error::InvalidState("state".to_string());
    let debug3 = format!("{:?}", err3);
    assert!(debug3.contains("InvalidState"));

    let err4 = Error::BackendError("backend".to_string());
    let debug4 = format!("{:?}", err4);
    assert!(debug4.contains("BackendError"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::ShaderCompile {
        stage: ShaderStage::Fragment,
        diagnostic: "diag".to_string(),
    };
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));

    let err3 = Error::ShaderLink {
        diagnostic: "diag".to_string(),
    };
    let err4 = err3.clone();
    assert_eq!(format!("{}", err3), format!("{}", err4));

    let err5 = Error::InvalidState("state".to_string());
    let err6 = err5.clone();
    assert_eq!(format!("{}", err5), format!("{}", err6));

    let err7 = Error::BackendError("backend".to_string());
    let err8 = err7.clone();
    assert_eq!(format!("{}", err7), format!("{}", err8));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_result_type_ok() {
    fn returns_ok() -> Result<i32> {
        Ok(42)
    }

    let result = returns_ok();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_err() {
    fn returns_error() -> Result<i32> {
        Err(Error::InvalidState("not initialized".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(format!("{}", e).contains("not initialized"));
    }
}

// ============================================================================
// ERROR PROPAGATION TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<i32> {
        Err(Error::BackendError("inner failure".to_string()))
    }

    fn outer() -> Result<i32> {
        inner()?;
        Ok(42)
    }

    let result = outer();
    assert!(result.is_err());
}

#[test]
fn test_error_carries_stage() {
    // The compile variant must identify which stage failed
    let err = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        diagnostic: "bad token".to_string(),
    };

    match err {
        Error::ShaderCompile { stage, .. } => assert_eq!(stage, ShaderStage::Vertex),
        _ => panic!("expected ShaderCompile"),
    }
}

#[test]
fn test_error_message_content() {
    // Error messages must surface the raw driver diagnostic text
    let err1 = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        diagnostic: "0:1(1): error: syntax error, unexpected $end".to_string(),
    };
    assert!(format!("{}", err1).contains("0:1(1)"));

    let err2 = Error::ShaderLink {
        diagnostic: "error: unresolved symbol `foo`".to_string(),
    };
    assert!(format!("{}", err2).contains("unresolved symbol"));
}
