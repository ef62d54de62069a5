use std::fmt;

use glow::HasContext;

/// GL entry points used by the triangle sequence.
///
/// Method names follow the GL call they forward to. Handle types are opaque
/// and non-zero by construction; creation failures surface as `Err`.
pub trait GlApi {
    type VertexArray: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    /// `glGetError`: pops one pending error code, `GL_NO_ERROR` when empty.
    fn get_error(&self) -> u32;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    /// `GL_INFO_LOG_LENGTH`, counting the terminating NUL.
    fn shader_info_log_length(&self, shader: Self::Shader) -> i32;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn bind_frag_data_location(&self, program: Self::Program, color: u32, name: &str);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    /// `None` when the linked program has no active attribute `name`.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn delete_program(&self, program: Self::Program);

    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn clear(&self, mask: u32);
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}

/// `GlApi` backed by a loaded `glow` function table.
///
/// Every method forwards to the raw GL call. Calls are only sound while the
/// context the table was loaded for is current on the calling thread; that is
/// the contract of [`GlowApi::new`].
pub struct GlowApi {
    gl: glow::Context,
}

impl GlowApi {
    /// Wraps a loaded function table.
    ///
    /// # Safety
    /// The GL context `gl` was loaded for must be current on this thread for
    /// as long as the returned value is used.
    pub unsafe fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Version reported by the loaded context.
    pub fn version(&self) -> &glow::Version {
        self.gl.version()
    }
}

impl fmt::Debug for GlowApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlowApi")
            .field("version", self.gl.version())
            .finish()
    }
}

type Ctx = glow::Context;

impl GlApi for GlowApi {
    type VertexArray = <Ctx as HasContext>::VertexArray;
    type Buffer = <Ctx as HasContext>::Buffer;
    type Shader = <Ctx as HasContext>::Shader;
    type Program = <Ctx as HasContext>::Program;

    fn get_error(&self) -> u32 {
        unsafe { self.gl.get_error() }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { self.gl.create_vertex_array() }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { self.gl.create_buffer() }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { self.gl.bind_buffer(target, buffer) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.gl.buffer_data_u8_slice(target, data, usage) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn create_shader(&self, stage: u32) -> Result<Self::Shader, String> {
        unsafe { self.gl.create_shader(stage) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { self.gl.shader_source(shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.compile_shader(shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.gl.get_shader_compile_status(shader) }
    }

    fn shader_info_log_length(&self, shader: Self::Shader) -> i32 {
        // glow hides GL_INFO_LOG_LENGTH; rebuild it from the log text.
        let log = self.shader_info_log(shader);
        if log.is_empty() {
            0
        } else {
            i32::try_from(log.len() + 1).unwrap_or(i32::MAX)
        }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn bind_frag_data_location(&self, program: Self::Program, color: u32, name: &str) {
        unsafe { self.gl.bind_frag_data_location(program, color, name) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { self.gl.link_program(program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.gl.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { self.gl.get_attrib_location(program, name) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
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
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, data_type, normalized, stride, offset)
        }
    }

    fn clear(&self, mask: u32) {
        unsafe { self.gl.clear(mask) }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { self.gl.draw_elements(mode, count, element_type, offset) }
    }
}
