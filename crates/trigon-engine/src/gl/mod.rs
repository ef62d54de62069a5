//! OpenGL call surface and per-call error diagnostics.
//!
//! - `GlApi` is the exact set of GL entry points the triangle sequence uses
//! - `GlowApi` implements it on top of a loaded `glow` function table
//! - `Diagnostics` + `gl_call!` drain `glGetError` around every call in debug builds

mod api;
mod checked;
mod error;

#[cfg(test)]
pub(crate) mod mock;

pub use api::{GlApi, GlowApi};
pub use checked::{CallSite, Diagnostics, ErrorReporting};
pub use error::{error_name, report_errors, ResourceError};

pub(crate) use error::drain_errors;
