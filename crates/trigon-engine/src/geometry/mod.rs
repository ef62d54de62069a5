//! Fixed triangle geometry and its upload into a vertex layout object.
//!
//! Positions are clip-space `(x, y)` pairs; the index list describes one
//! counter-clockwise triangle.

use bytemuck::{Pod, Zeroable};

use crate::gl::{Diagnostics, GlApi, ResourceError};
use crate::gl_call;

/// Clip-space vertex (position only).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    /// Components per vertex in the `position` stream.
    pub const COMPONENTS: i32 = 2;

    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }

    /// Enables `location` and points it at `vertex_buffer`: 2 × `f32`, not
    /// normalized, tightly packed, offset 0. Leaves `GL_ARRAY_BUFFER` unbound.
    pub fn configure_attribute<G: GlApi>(
        gl: &G,
        diag: &mut Diagnostics<'_>,
        location: u32,
        vertex_buffer: G::Buffer,
    ) {
        gl_call!(diag, gl, enable_vertex_attrib_array(location));
        gl_call!(diag, gl, bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer)));
        gl_call!(
            diag,
            gl,
            vertex_attrib_pointer_f32(location, Vertex::COMPONENTS, glow::FLOAT, false, 0, 0)
        );
        gl_call!(diag, gl, bind_buffer(glow::ARRAY_BUFFER, None));
    }
}

pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(0.0, 0.5),
    Vertex::new(0.5, -0.5),
    Vertex::new(-0.5, -0.5),
];

pub const TRIANGLE_INDICES: [u32; 3] = [0, 1, 2];

/// Index count passed to `glDrawElements`.
pub const fn index_count() -> i32 {
    TRIANGLE_INDICES.len() as i32
}

/// Triangles described by the index list (`GL_TRIANGLES` topology).
pub const fn triangle_count() -> usize {
    TRIANGLE_INDICES.len() / 3
}

/// GL objects holding the uploaded triangle.
pub struct GeometryBuffers<G: GlApi> {
    pub vertex_array: G::VertexArray,
    pub vertex_buffer: G::Buffer,
    pub index_buffer: G::Buffer,
}

impl<G: GlApi> std::fmt::Debug for GeometryBuffers<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeometryBuffers")
            .field("vertex_array", &self.vertex_array)
            .field("vertex_buffer", &self.vertex_buffer)
            .field("index_buffer", &self.index_buffer)
            .finish()
    }
}

/// Creates and binds the vertex layout object, then uploads vertices and
/// indices as `GL_STATIC_DRAW`.
///
/// The index buffer stays bound to the layout object; the array buffer is
/// unbound again after upload.
pub fn upload<G: GlApi>(
    gl: &G,
    diag: &mut Diagnostics<'_>,
) -> Result<GeometryBuffers<G>, ResourceError> {
    let vertex_array = gl_call!(diag, gl, create_vertex_array())
        .map_err(|e| ResourceError::new("vertex array", e))?;
    gl_call!(diag, gl, bind_vertex_array(Some(vertex_array)));

    let vertex_buffer = gl_call!(diag, gl, create_buffer())
        .map_err(|e| ResourceError::new("vertex buffer", e))?;
    gl_call!(diag, gl, bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer)));
    gl_call!(
        diag,
        gl,
        buffer_data(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(&TRIANGLE_VERTICES),
            glow::STATIC_DRAW
        )
    );
    gl_call!(diag, gl, bind_buffer(glow::ARRAY_BUFFER, None));

    let index_buffer = gl_call!(diag, gl, create_buffer())
        .map_err(|e| ResourceError::new("index buffer", e))?;
    gl_call!(diag, gl, bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer)));
    gl_call!(
        diag,
        gl,
        buffer_data(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(&TRIANGLE_INDICES),
            glow::STATIC_DRAW
        )
    );

    log::debug!(
        "uploaded {} vertices / {} indices",
        TRIANGLE_VERTICES.len(),
        TRIANGLE_INDICES.len()
    );

    Ok(GeometryBuffers {
        vertex_array,
        vertex_buffer,
        index_buffer,
    })
}
