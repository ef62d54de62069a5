use std::io::Write;

use super::{drain_errors, GlApi};

/// Error draining is compiled into debug builds only. In release builds
/// [`Diagnostics::call`] folds down to the bare call whatever the mode.
const REPORTING_COMPILED_IN: bool = cfg!(debug_assertions);

/// Whether wrapped GL calls drain the error queue around the call.
///
/// `Enabled` only takes effect in debug builds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorReporting {
    /// Drain and report before and after every wrapped call.
    Enabled,
    /// Wrapped calls are plain calls.
    Disabled,
}

impl ErrorReporting {
    /// Enabled in debug builds, disabled in release builds.
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            ErrorReporting::Enabled
        } else {
            ErrorReporting::Disabled
        }
    }
}

impl Default for ErrorReporting {
    fn default() -> Self {
        Self::for_build()
    }
}

/// Source location and text of a wrapped GL call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CallSite {
    pub call: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    #[inline]
    pub const fn new(call: &'static str, file: &'static str, line: u32) -> Self {
        Self { call, file, line }
    }
}

/// Diagnostic streams plus the error-reporting mode.
///
/// `errors` receives GL error lines and failure headers (stderr in the
/// binary), `log` receives info-log text (stdout in the binary).
pub struct Diagnostics<'a> {
    reporting: ErrorReporting,
    errors: &'a mut dyn Write,
    log: &'a mut dyn Write,
}

impl<'a> Diagnostics<'a> {
    pub fn new(reporting: ErrorReporting, errors: &'a mut dyn Write, log: &'a mut dyn Write) -> Self {
        Self { reporting, errors, log }
    }

    /// Diagnostic (stderr) stream.
    pub fn errors(&mut self) -> &mut dyn Write {
        &mut *self.errors
    }

    /// Info-log (stdout) stream.
    pub fn log(&mut self) -> &mut dyn Write {
        &mut *self.log
    }

    /// Performs `f` on `gl`, draining the error queue before and after it when
    /// reporting is enabled. Errors found before the call are attributed to
    /// `>>BEFORE<< <call>`.
    ///
    /// In release builds, or with reporting disabled, this is exactly `f(gl)`.
    #[inline(always)]
    pub fn call<G, R, F>(&mut self, gl: &G, site: CallSite, f: F) -> R
    where
        G: GlApi + ?Sized,
        F: FnOnce(&G) -> R,
    {
        if !REPORTING_COMPILED_IN || self.reporting == ErrorReporting::Disabled {
            return f(gl);
        }

        let CallSite { call, file, line } = site;
        drain_errors(gl, &mut *self.errors, ">>BEFORE<< ", call, file, line);

        let result = f(gl);

        drain_errors(gl, &mut *self.errors, "", call, file, line);
        result
    }
}

/// Wraps one `GlApi` method call in [`Diagnostics::call`], capturing the call
/// text and source location.
///
/// ```ignore
/// let vbo = gl_call!(diag, gl, create_buffer())?;
/// gl_call!(diag, gl, bind_buffer(glow::ARRAY_BUFFER, Some(vbo)));
/// ```
#[macro_export]
macro_rules! gl_call {
    ($diag:expr, $gl:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        $diag.call(
            $gl,
            $crate::gl::CallSite::new(
                concat!(stringify!($method), "(", stringify!($($arg),*), ")"),
                file!(),
                line!(),
            ),
            |gl| gl.$method($($arg),*),
        )
    };
}
