use std::fmt;
use std::io::Write;

use super::GlApi;

/// A GL object could not be created.
///
/// glow reports a failed `glGen*`/`glCreate*` as an error string instead of a
/// zero handle; `what` names the object kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceError {
    pub what: &'static str,
    pub reason: String,
}

impl ResourceError {
    pub fn new(what: &'static str, reason: impl Into<String>) -> Self {
        Self { what, reason: reason.into() }
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to create {}: {}", self.what, self.reason)
    }
}

impl std::error::Error for ResourceError {}

/// Symbolic name of a `glGetError` code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "Unknown GL error",
    }
}

/// Drains the GL error queue, writing one line per pending code to `out`.
///
/// Polling stops at the first `GL_NO_ERROR`. Write failures are ignored: this
/// is diagnostics only and never changes control flow.
///
/// Returns the number of codes drained.
pub fn report_errors<G>(gl: &G, out: &mut dyn Write, call: &str, file: &str, line: u32) -> usize
where
    G: GlApi + ?Sized,
{
    drain_errors(gl, out, "", call, file, line)
}

/// [`report_errors`] with `prefix` written in front of the call text.
pub(crate) fn drain_errors<G>(
    gl: &G,
    out: &mut dyn Write,
    prefix: &str,
    call: &str,
    file: &str,
    line: u32,
) -> usize
where
    G: GlApi + ?Sized,
{
    let mut drained = 0;

    loop {
        let code = gl.get_error();
        if code == glow::NO_ERROR {
            break;
        }

        let _ = writeln!(
            out,
            "OpenGL Error in {file} at line {line} calling {prefix}{call}: {} ({code:#x})",
            error_name(code),
        );
        drained += 1;
    }

    drained
}
