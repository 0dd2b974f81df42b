use super::glutils::*;
use super::math::Vec3;
use crate::error::{Error, Result};
use gl::*;

/// Static position-only geometry: a vertex array object, its vertex buffer
/// and an optional element buffer. All three are deleted on drop.
#[derive(Debug)]
pub struct Mesh {
    vao: u32,
    vbo: u32,
    ebo: u32,
    vertex_count: usize,
    index_count: Option<usize>,
}

impl Mesh {
    pub fn new(vertices: &[Vec3], indices: Option<&[u32]>) -> Result<Mesh> {
        let mut mesh = Mesh {
            vao: 0,
            vbo: 0,
            ebo: 0,
            vertex_count: vertices.len(),
            index_count: indices.map(<[u32]>::len),
        };

        unsafe { gl::GenVertexArrays(1, &mut mesh.vao) };
        unsafe { gl::GenBuffers(1, &mut mesh.vbo) };
        if mesh.vao == 0 || mesh.vbo == 0 {
            return Err(Error::Gl("vertex array or buffer creation failed".to_string()));
        }

        unsafe { gl::BindVertexArray(mesh.vao) };
        unsafe { gl::BindBuffer(ARRAY_BUFFER, mesh.vbo) };
        gl_buffer_data_arr_stat(vertices);
        gl_vertex_attrib_ptr_enab(0, Vec3::COMPONENTS, 0, 0);

        if let Some(indices) = indices {
            unsafe { gl::GenBuffers(1, &mut mesh.ebo) };
            if mesh.ebo == 0 {
                return Err(Error::Gl("element buffer creation failed".to_string()));
            }
            // element buffer binding is recorded in the vertex array
            unsafe { gl::BindBuffer(ELEMENT_ARRAY_BUFFER, mesh.ebo) };
            gl_buffer_data_element_stat(indices);
        }

        unsafe { gl::BindBuffer(ARRAY_BUFFER, 0) };
        unsafe { gl::BindVertexArray(0) };
        check_gl_err()?;

        log::debug!(
            "uploaded mesh vao={} vertices={} indices={:?}",
            mesh.vao,
            mesh.vertex_count,
            mesh.index_count
        );
        Ok(mesh)
    }

    pub fn vertex_array(&self) -> u32 {
        self.vao
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> Option<usize> {
        self.index_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            if self.ebo != 0 {
                gl::DeleteBuffers(1, &self.ebo);
            }
        }
    }
}
