// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the error types for the rendering subsystem.

use std::fmt;

/// An error related to the compilation of a shader module.
#[derive(Debug)]
pub enum ShaderError {
    /// The shader source failed to compile into a backend-specific module.
    CompilationError {
        /// A descriptive label for the shader.
        label: String,
        /// Detailed error messages from the shader compiler.
        details: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::CompilationError { label, details } => {
                write!(f, "Shader compilation failed for '{label}': {details}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

/// A high-level error raised by a [`RenderSystem`](super::RenderSystem).
#[derive(Debug)]
pub enum RenderError {
    /// `render` was called before `init` succeeded.
    NotInitialized,
    /// The graphics context or a pipeline could not be created.
    InitializationFailed(String),
    /// The surface had no texture to draw into this frame.
    SurfaceAcquisitionFailed(String),
    /// A shader failed to compile.
    Shader(ShaderError),
    /// The backend reported something it should never report.
    Internal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::NotInitialized => f.write_str("Render system used before init"),
            RenderError::InitializationFailed(msg) => write!(f, "Renderer init failed: {msg}"),
            RenderError::SurfaceAcquisitionFailed(msg) => write!(f, "No frame to draw into: {msg}"),
            RenderError::Shader(err) => write!(f, "Shader error: {err}"),
            RenderError::Internal(msg) => write!(f, "Renderer internal error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Shader(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Shader(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn shader_error_display() {
        let err = ShaderError::CompilationError {
            label: "Ground Shader".to_string(),
            details: "unknown identifier `in.colour`".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Shader compilation failed for 'Ground Shader': unknown identifier `in.colour`"
        );
    }

    #[test]
    fn render_error_wraps_shader_error() {
        let err: RenderError = ShaderError::CompilationError {
            label: "Flat Color Shader".to_string(),
            details: "bad".to_string(),
        }
        .into();
        assert_eq!(
            format!("{err}"),
            "Shader error: Shader compilation failed for 'Flat Color Shader': bad"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn render_error_display() {
        let err = RenderError::SurfaceAcquisitionFailed("Timeout".to_string());
        assert_eq!(
            format!("{err}"),
            "No frame to draw into: Timeout"
        );
        assert!(err.source().is_none());
    }
}
