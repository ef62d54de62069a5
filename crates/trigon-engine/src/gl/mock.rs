//! Recording `GlApi` for headless tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::GlApi;

/// One recorded state-changing GL call. Queries are not recorded.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData(u32, Vec<u8>, u32),
    DeleteBuffer(u32),
    CreateShader { stage: u32, shader: u32 },
    ShaderSource(u32, String),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    BindFragDataLocation(u32, u32, String),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    Clear(u32),
    DrawElements {
        mode: u32,
        count: i32,
        element_type: u32,
        offset: i32,
    },
}

/// In-memory GL: hands out sequential non-zero handles, records every call,
/// and serves `glGetError` from a scripted queue.
pub(crate) struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    errors: RefCell<VecDeque<u32>>,
    error_polls: Cell<usize>,
    next_handle: Cell<u32>,
    error_after_next_call: Cell<Option<u32>>,

    failing_stages: RefCell<Vec<u32>>,
    shader_log: RefCell<(i32, String)>,
    link_fails: Cell<bool>,
    program_log: RefCell<String>,
    attrib_location: Cell<Option<u32>>,
    fail_create_program: Cell<bool>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            errors: RefCell::new(VecDeque::new()),
            error_polls: Cell::new(0),
            next_handle: Cell::new(1),
            error_after_next_call: Cell::new(None),
            failing_stages: RefCell::new(Vec::new()),
            shader_log: RefCell::new((0, String::new())),
            link_fails: Cell::new(false),
            program_log: RefCell::new(String::new()),
            attrib_location: Cell::new(Some(0)),
            fail_create_program: Cell::new(false),
        }
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn get_error_calls(&self) -> usize {
        self.error_polls.get()
    }

    /// Queues codes for `get_error`, in polling order.
    pub(crate) fn push_errors(&self, codes: impl IntoIterator<Item = u32>) {
        self.errors.borrow_mut().extend(codes);
    }

    /// Queues `code` right after the next recorded call.
    pub(crate) fn fail_next_call_with(&self, code: u32) {
        self.error_after_next_call.set(Some(code));
    }

    pub(crate) fn fail_compile(&self, stage: u32) {
        self.failing_stages.borrow_mut().push(stage);
    }

    /// Every shader reports this info-log length and text.
    pub(crate) fn set_shader_log(&self, length: i32, text: &str) {
        *self.shader_log.borrow_mut() = (length, text.to_owned());
    }

    pub(crate) fn fail_link(&self, log: &str) {
        self.link_fails.set(true);
        *self.program_log.borrow_mut() = log.to_owned();
    }

    pub(crate) fn set_attrib_location(&self, location: Option<u32>) {
        self.attrib_location.set(location);
    }

    pub(crate) fn fail_create_program(&self) {
        self.fail_create_program.set(true);
    }

    pub(crate) fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
        if let Some(code) = self.error_after_next_call.take() {
            self.errors.borrow_mut().push_back(code);
        }
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get();
        self.next_handle.set(h + 1);
        h
    }

    fn stage_of(&self, shader: u32) -> Option<u32> {
        self.calls.borrow().iter().find_map(|c| match c {
            GlCall::CreateShader { stage, shader: s } if *s == shader => Some(*stage),
            _ => None,
        })
    }
}

impl GlApi for RecordingGl {
    type VertexArray = u32;
    type Buffer = u32;
    type Shader = u32;
    type Program = u32;

    fn get_error(&self) -> u32 {
        self.error_polls.set(self.error_polls.get() + 1);
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let h = self.handle();
        self.record(GlCall::CreateVertexArray(h));
        Ok(h)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let h = self.handle();
        self.record(GlCall::CreateBuffer(h));
        Ok(h)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData(target, data.to_vec(), usage));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn create_shader(&self, stage: u32) -> Result<u32, String> {
        let shader = self.handle();
        self.record(GlCall::CreateShader { stage, shader });
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(GlCall::ShaderSource(shader, source.to_owned()));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        match self.stage_of(shader) {
            Some(stage) => !self.failing_stages.borrow().contains(&stage),
            None => false,
        }
    }

    fn shader_info_log_length(&self, _shader: u32) -> i32 {
        self.shader_log.borrow().0
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        self.shader_log.borrow().1.clone()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.fail_create_program.get() {
            return Err("out of program names".to_owned());
        }
        let h = self.handle();
        self.record(GlCall::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader(program, shader));
    }

    fn bind_frag_data_location(&self, program: u32, color: u32, name: &str) {
        self.record(GlCall::BindFragDataLocation(program, color, name.to_owned()));
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.link_fails.get()
    }

    fn program_info_log(&self, _program: u32) -> String {
        self.program_log.borrow().clone()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn attrib_location(&self, _program: u32, _name: &str) -> Option<u32> {
        self.attrib_location.get()
    }

    fn delete_program(&self, program: u32) {
        self.record(GlCall::DeleteProgram(program));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(GlCall::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}
