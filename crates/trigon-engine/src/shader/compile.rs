use std::io::Write;

use crate::gl::{Diagnostics, GlApi, ResourceError};
use crate::gl_call;

use super::ShaderStage;

/// Creates a shader of `stage`, attaches `source` and compiles it.
///
/// A failed compile is reported (header on the error stream, info log on the
/// log stream) and the shader is still returned: a broken stage leaves the
/// program unlinked but execution carries on.
pub fn compile_stage<G: GlApi>(
    gl: &G,
    diag: &mut Diagnostics<'_>,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ResourceError> {
    let shader = gl_call!(diag, gl, create_shader(stage.gl_enum()))
        .map_err(|e| ResourceError::new("shader", e))?;
    gl_call!(diag, gl, shader_source(shader, source));
    gl_call!(diag, gl, compile_shader(shader));

    let compiled = gl_call!(diag, gl, shader_compile_status(shader));
    if !compiled {
        let _ = writeln!(diag.errors(), "{} shader failed", stage.label());
        print_shader_info_log(gl, diag.log(), shader);
        log::warn!("{} shader failed to compile; continuing", stage.label());
    }

    Ok(shader)
}

/// Writes the shader's info log to `out` when it holds more than the
/// terminator. Returns whether anything was written.
pub fn print_shader_info_log<G: GlApi>(gl: &G, out: &mut dyn Write, shader: G::Shader) -> bool {
    let len = gl.shader_info_log_length(shader);
    if len <= 1 {
        return false;
    }

    let log = gl.shader_info_log(shader);
    let _ = writeln!(out, "Shader Info Log:\n{log}");
    true
}

/// Program counterpart of [`print_shader_info_log`].
pub fn print_program_info_log<G: GlApi>(gl: &G, out: &mut dyn Write, program: G::Program) -> bool {
    let log = gl.program_info_log(program);
    if log.is_empty() {
        return false;
    }

    let _ = writeln!(out, "Program Info Log:\n{log}");
    true
}
