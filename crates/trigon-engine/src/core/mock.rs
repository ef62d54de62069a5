//! Scripted `Platform` for headless tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::gl::mock::{GlCall, RecordingGl};
use crate::window::Platform;

/// What the platform saw. Shared so it survives `terminate(self)`.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    pub close_checks: usize,
    pub swaps: usize,
    pub polls: usize,
    pub terminations: usize,
    pub events: Vec<&'static str>,
    pub draws_at_swap: Vec<usize>,
    /// GL calls recorded when `terminate` ran.
    pub gl_calls_at_terminate: Option<usize>,
}

/// Reports "open" for the first `open_checks` close-flag queries, then "closed".
pub(crate) struct ScriptedPlatform<'a> {
    gl: &'a RecordingGl,
    open_checks: usize,
    trace: Rc<RefCell<Trace>>,
}

impl<'a> ScriptedPlatform<'a> {
    pub(crate) fn new(gl: &'a RecordingGl, open_checks: usize) -> (Self, Rc<RefCell<Trace>>) {
        let trace = Rc::new(RefCell::new(Trace::default()));
        let p = Self {
            gl,
            open_checks,
            trace: Rc::clone(&trace),
        };
        (p, trace)
    }
}

impl Platform for ScriptedPlatform<'_> {
    fn should_close(&self) -> bool {
        let mut t = self.trace.borrow_mut();
        t.close_checks += 1;
        t.close_checks > self.open_checks
    }

    fn swap_buffers(&mut self) {
        let draws = self.gl.count(|c| matches!(c, GlCall::DrawElements { .. }));
        let mut t = self.trace.borrow_mut();
        t.swaps += 1;
        t.events.push("swap");
        t.draws_at_swap.push(draws);
    }

    fn poll_events(&mut self) {
        let mut t = self.trace.borrow_mut();
        t.polls += 1;
        t.events.push("poll");
    }

    fn terminate(self) {
        let mut t = self.trace.borrow_mut();
        t.terminations += 1;
        t.events.push("terminate");
        t.gl_calls_at_terminate = Some(self.gl.calls().len());
    }
}
