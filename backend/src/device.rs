use gl::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PolygonMode {
    Fill,
    Line,
}

/// The drawing commands the frame step issues.
pub trait GraphicsDevice {
    fn set_polygon_mode(&mut self, mode: PolygonMode);
    fn clear(&mut self, color: [f32; 4]);
    fn use_program(&mut self, program: u32);
    fn bind_vertex_array(&mut self, vertex_array: u32);
    /// Non-indexed triangle list draw of `count` vertices.
    fn draw_arrays(&mut self, count: i32);
    /// Indexed triangle list draw of `count` `u32` indices.
    fn draw_elements(&mut self, count: i32);
}

/// Issues the commands on the current GL context.
#[derive(Debug, Default)]
pub struct GlDevice;

impl GraphicsDevice for GlDevice {
    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        let mode = match mode {
            PolygonMode::Fill => FILL,
            PolygonMode::Line => LINE,
        };
        unsafe { gl::PolygonMode(FRONT_AND_BACK, mode) };
    }

    fn clear(&mut self, [r, g, b, a]: [f32; 4]) {
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(COLOR_BUFFER_BIT);
        }
    }

    fn use_program(&mut self, program: u32) {
        unsafe { gl::UseProgram(program) };
    }

    fn bind_vertex_array(&mut self, vertex_array: u32) {
        unsafe { gl::BindVertexArray(vertex_array) };
    }

    fn draw_arrays(&mut self, count: i32) {
        unsafe { gl::DrawArrays(TRIANGLES, 0, count) };
    }

    fn draw_elements(&mut self, count: i32) {
        unsafe { gl::DrawElements(TRIANGLES, count, UNSIGNED_INT, std::ptr::null()) };
    }
}
