use crate::geometry::{self, GeometryBuffers, Vertex};
use crate::gl::{Diagnostics, GlApi, ResourceError};
use crate::gl_call;
use crate::shader::{self, ShaderProgram};

/// Every GL object the triangle needs, owned by the top-level control flow.
pub struct TriangleScene<G: GlApi> {
    pub geometry: GeometryBuffers<G>,
    pub shaders: ShaderProgram<G>,
}

impl<G: GlApi> TriangleScene<G> {
    /// Uploads geometry, builds the program and wires `position` to the
    /// vertex buffer.
    pub fn create(gl: &G, diag: &mut Diagnostics<'_>) -> Result<Self, ResourceError> {
        let geometry = geometry::upload(gl, diag)?;
        let shaders = shader::build_program(gl, diag)?;

        if let Some(location) = shaders.position {
            Vertex::configure_attribute(gl, diag, location, geometry.vertex_buffer);
        }

        log::debug!("triangle scene created: {geometry:?} {shaders:?}");
        Ok(Self { geometry, shaders })
    }

    /// Clears the color buffer and issues the single indexed draw.
    pub fn draw(&self, gl: &G, diag: &mut Diagnostics<'_>) {
        gl_call!(diag, gl, clear(glow::COLOR_BUFFER_BIT));
        gl_call!(
            diag,
            gl,
            draw_elements(glow::TRIANGLES, geometry::index_count(), glow::UNSIGNED_INT, 0)
        );
    }

    /// Deletes program, fragment shader, vertex shader, index buffer, vertex
    /// buffer and vertex layout object, in that order. A failing deletion is
    /// only reported.
    pub fn destroy(self, gl: &G, diag: &mut Diagnostics<'_>) {
        let TriangleScene { geometry, shaders } = self;

        gl_call!(diag, gl, delete_program(shaders.program));
        gl_call!(diag, gl, delete_shader(shaders.fragment));
        gl_call!(diag, gl, delete_shader(shaders.vertex));
        gl_call!(diag, gl, delete_buffer(geometry.index_buffer));
        gl_call!(diag, gl, delete_buffer(geometry.vertex_buffer));
        gl_call!(diag, gl, delete_vertex_array(geometry.vertex_array));

        log::debug!("triangle scene destroyed");
    }
}
