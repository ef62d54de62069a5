use crate::gl::{Diagnostics, GlApi};
use crate::window::Platform;

use super::TriangleScene;

/// Render loop state. `Closed` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closed,
}

impl LoopState {
    /// Reads the platform close flag.
    pub fn observe<P: Platform>(platform: &P) -> Self {
        if platform.should_close() {
            LoopState::Closed
        } else {
            LoopState::Running
        }
    }
}

/// Draws `scene` once per iteration until the close flag is observed.
///
/// Each iteration: clear + indexed draw, present, poll events. The flag is
/// checked before every iteration, so nothing is drawn once it is set.
/// Returns the number of frames presented.
pub fn run_until_closed<P, G>(
    platform: &mut P,
    gl: &G,
    diag: &mut Diagnostics<'_>,
    scene: &TriangleScene<G>,
) -> u64
where
    P: Platform,
    G: GlApi,
{
    let mut frames = 0u64;

    while LoopState::observe(platform) == LoopState::Running {
        scene.draw(gl, diag);
        platform.swap_buffers();
        platform.poll_events();
        frames += 1;
    }

    frames
}
