use std::io::Write;

use crate::gl::{Diagnostics, GlApi, ResourceError};
use crate::gl_call;

use super::{
    compile_stage, print_program_info_log, ShaderStage, COLOR_OUTPUT, FRAGMENT_SOURCE,
    POSITION_ATTRIBUTE, VERTEX_SOURCE,
};

/// Linked triangle program plus the shader objects attached to it.
///
/// The shader objects stay alive until teardown.
pub struct ShaderProgram<G: GlApi> {
    pub program: G::Program,
    pub vertex: G::Shader,
    pub fragment: G::Shader,
    /// Location of `position`, `None` if the linked program does not expose it.
    pub position: Option<u32>,
}

impl<G: GlApi> std::fmt::Debug for ShaderProgram<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("program", &self.program)
            .field("vertex", &self.vertex)
            .field("fragment", &self.fragment)
            .field("position", &self.position)
            .finish()
    }
}

/// Compiles both embedded stages, links them with `outColor` on color slot 0,
/// makes the program current and resolves the `position` location.
///
/// Compile and link failures are reported, not returned.
pub fn build_program<G: GlApi>(
    gl: &G,
    diag: &mut Diagnostics<'_>,
) -> Result<ShaderProgram<G>, ResourceError> {
    let vertex = compile_stage(gl, diag, ShaderStage::Vertex, VERTEX_SOURCE)?;
    let fragment = compile_stage(gl, diag, ShaderStage::Fragment, FRAGMENT_SOURCE)?;

    let program = gl_call!(diag, gl, create_program())
        .map_err(|e| ResourceError::new("program", e))?;
    gl_call!(diag, gl, attach_shader(program, vertex));
    gl_call!(diag, gl, attach_shader(program, fragment));
    gl_call!(diag, gl, bind_frag_data_location(program, 0, COLOR_OUTPUT));
    gl_call!(diag, gl, link_program(program));

    if !gl_call!(diag, gl, program_link_status(program)) {
        let _ = writeln!(diag.errors(), "Program link failed");
        print_program_info_log(gl, diag.log(), program);
        log::warn!("shader program failed to link; continuing");
    }

    gl_call!(diag, gl, use_program(Some(program)));

    let position = gl_call!(diag, gl, attrib_location(program, POSITION_ATTRIBUTE));
    if position.is_none() {
        let _ = writeln!(
            diag.errors(),
            "attribute `{POSITION_ATTRIBUTE}` not found in linked program"
        );
    }

    Ok(ShaderProgram {
        program,
        vertex,
        fragment,
        position,
    })
}
