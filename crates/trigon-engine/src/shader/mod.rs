//! Embedded GLSL sources, shader compilation and program link.

mod compile;
mod program;

pub use compile::{compile_stage, print_program_info_log, print_shader_info_log};
pub use program::{build_program, ShaderProgram};

pub const VERTEX_SOURCE: &str = include_str!("shaders/triangle.vert");
pub const FRAGMENT_SOURCE: &str = include_str!("shaders/triangle.frag");

/// Vertex input read from the vertex buffer.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Fragment output bound to color slot 0.
pub const COLOR_OUTPUT: &str = "outColor";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex",
            ShaderStage::Fragment => "Fragment",
        }
    }
}
