use std::fmt;
use std::io;

use crate::gl::{Diagnostics, ErrorReporting, GlApi, ResourceError};
use crate::window::{BootstrapError, Platform, WindowConfig, WindowRuntime};

use super::{run_until_closed, TriangleScene};

/// Failure that ends the program with a non-zero exit code.
#[derive(Debug)]
pub enum RunError {
    Bootstrap(BootstrapError),
    Resource(ResourceError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Bootstrap(e) => fmt::Display::fmt(e, f),
            RunError::Resource(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Bootstrap(e) => Some(e),
            RunError::Resource(e) => Some(e),
        }
    }
}

impl From<BootstrapError> for RunError {
    fn from(e: BootstrapError) -> Self {
        RunError::Bootstrap(e)
    }
}

impl From<ResourceError> for RunError {
    fn from(e: ResourceError) -> Self {
        RunError::Resource(e)
    }
}

/// Opens the window described by `config` and draws the triangle until it is
/// closed.
///
/// GL error lines go to stderr (debug builds only), info logs to stdout.
pub fn run(config: &WindowConfig) -> Result<(), RunError> {
    let (platform, gl) = WindowRuntime::open(config)?;

    let mut stderr = io::stderr();
    let mut stdout = io::stdout();
    let mut diag = Diagnostics::new(ErrorReporting::for_build(), &mut stderr, &mut stdout);

    run_scene(platform, &gl, &mut diag)?;
    Ok(())
}

/// Creates the scene, runs the loop, destroys the scene and terminates the
/// platform exactly once.
///
/// If a GL object cannot be created the platform is still terminated before
/// the error is returned. Returns the number of frames drawn.
pub fn run_scene<P, G>(
    mut platform: P,
    gl: &G,
    diag: &mut Diagnostics<'_>,
) -> Result<u64, ResourceError>
where
    P: Platform,
    G: GlApi,
{
    let scene = match TriangleScene::create(gl, diag) {
        Ok(scene) => scene,
        Err(e) => {
            log::error!("{e}");
            platform.terminate();
            return Err(e);
        }
    };

    log::info!("entering render loop");
    let frames = run_until_closed(&mut platform, gl, diag, &scene);
    log::info!("render loop finished after {frames} frames");

    scene.destroy(gl, diag);
    platform.terminate();

    Ok(frames)
}
