use crate::device::{GraphicsDevice, PolygonMode};
use crate::mesh::Mesh;
use crate::mode::{DrawMode, RenderMode};
use crate::shaders::Program;

pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.5, 0.3, 1.0, 1.0];

/// One program drawing one vertex array.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Batch {
    pub program: u32,
    pub vertex_array: u32,
    /// Vertices submitted by a non-indexed draw. Always whole triangles.
    pub vertex_count: i32,
    /// Indices submitted by an indexed draw, `None` if there is no element
    /// buffer.
    pub index_count: Option<i32>,
}

impl Batch {
    /// Non-indexed draws cover the whole triangles present in the vertex
    /// buffer, so a 4-vertex quad draws its first triangle.
    pub fn new(program: &Program, mesh: &Mesh) -> Batch {
        Batch {
            program: program.id(),
            vertex_array: mesh.vertex_array(),
            vertex_count: triangle_vertices(mesh.vertex_count()),
            index_count: mesh.index_count().map(clamp_count),
        }
    }
}

fn triangle_vertices(count: usize) -> i32 {
    clamp_count(count - count % 3)
}

fn clamp_count(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub batches: Vec<Batch>,
    /// When false every batch is drawn non-indexed each frame, whatever the
    /// draw mode.
    pub follows_draw_mode: bool,
    pub clear_color: [f32; 4],
}

impl Scene {
    pub fn new(batches: Vec<Batch>, follows_draw_mode: bool) -> Scene {
        Scene {
            batches,
            follows_draw_mode,
            clear_color: DEFAULT_CLEAR_COLOR,
        }
    }
}

/// Renders one frame of `scene` in `mode`. Returns the number of draw calls
/// issued.
pub fn render_frame<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    scene: &Scene,
    mode: RenderMode,
) -> usize {
    device.set_polygon_mode(if mode.wireframe {
        PolygonMode::Line
    } else {
        PolygonMode::Fill
    });
    device.clear(scene.clear_color);

    let mut draws = 0;
    for batch in &scene.batches {
        device.use_program(batch.program);
        device.bind_vertex_array(batch.vertex_array);

        let draw = if scene.follows_draw_mode {
            mode.draw
        } else {
            Some(DrawMode::Arrays)
        };
        match (draw, batch.index_count) {
            (Some(DrawMode::Arrays), _) => {
                device.draw_arrays(batch.vertex_count);
                draws += 1;
            }
            (Some(DrawMode::Elements), Some(count)) => {
                device.draw_elements(count);
                draws += 1;
            }
            (Some(DrawMode::Elements), None) | (None, _) => {}
        }
    }
    log::trace!("frame: {:?}, {} draw call(s)", mode, draws);
    draws
}
