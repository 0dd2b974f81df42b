use backend::math::Vec3;
use backend::mesh::Mesh;
use backend::render::{Batch, Scene};
use backend::shaders::{Program, Shader, ShaderStage};

use crate::glsl;

/// Quad corners: top right, bottom right, bottom left, top left.
pub const QUAD_VERTICES: [Vec3; 4] = [
    Vec3::new(0.2, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(-0.1, -0.9, 0.0),
    Vec3::new(-0.5, 0.5, 0.0),
];

#[rustfmt::skip]
pub const QUAD_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

pub const FIRST_TRIANGLE: [Vec3; 3] = [
    Vec3::new(0.1, -0.5, 0.0),
    Vec3::new(0.45, -0.5, 0.0),
    Vec3::new(0.1, 0.5, 0.0),
];

pub const SECOND_TRIANGLE: [Vec3; 3] = [
    Vec3::new(-0.1, -0.5, 0.0),
    Vec3::new(-0.45, -0.5, 0.0),
    Vec3::new(-0.1, 0.5, 0.0),
];

/// A scene together with the GL objects its batches refer to. Dropping it
/// releases them.
pub struct Loaded {
    pub scene: Scene,
    _programs: Vec<Program>,
    _meshes: Vec<Mesh>,
}

/// One program, one indexed quad. What gets drawn follows the draw mode.
pub fn hello_triangle() -> backend::Result<Loaded> {
    let program = Program::from_sources(glsl::VERTEX, glsl::FRAGMENT)?;
    let quad = Mesh::new(&QUAD_VERTICES, Some(&QUAD_INDICES))?;

    let scene = Scene::new(vec![Batch::new(&program, &quad)], true);
    Ok(Loaded {
        scene,
        _programs: vec![program],
        _meshes: vec![quad],
    })
}

/// Two triangles in separate vertex arrays, orange and yellow, both drawn
/// every frame.
pub fn hello_triangle_exercise() -> backend::Result<Loaded> {
    let vertex = Shader::compile(ShaderStage::Vertex, glsl::VERTEX)?;
    let orange = Shader::compile(ShaderStage::Fragment, glsl::FRAGMENT_ORANGE)?;
    let yellow = Shader::compile(ShaderStage::Fragment, glsl::FRAGMENT_YELLOW)?;

    let program_orange = Program::link(&[&vertex, &orange])?;
    let program_yellow = Program::link(&[&vertex, &yellow])?;

    let first = Mesh::new(&FIRST_TRIANGLE, None)?;
    let second = Mesh::new(&SECOND_TRIANGLE, None)?;

    let scene = Scene::new(
        vec![
            Batch::new(&program_orange, &first),
            Batch::new(&program_yellow, &second),
        ],
        false,
    );
    Ok(Loaded {
        scene,
        _programs: vec![program_orange, program_yellow],
        _meshes: vec![first, second],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_stay_in_range() {
        assert_eq!(QUAD_INDICES.len() % 3, 0);
        assert!(QUAD_INDICES
            .iter()
            .all(|i| (*i as usize) < QUAD_VERTICES.len()));
    }

    #[test]
    fn exercise_triangles_mirror_each_other() {
        for (a, b) in FIRST_TRIANGLE.iter().zip(SECOND_TRIANGLE.iter()) {
            assert_eq!(a.x, -b.x);
            assert_eq!(a.y, b.y);
        }
    }

    #[test]
    fn geometry_is_in_clip_space() {
        let all = QUAD_VERTICES
            .iter()
            .chain(FIRST_TRIANGLE.iter())
            .chain(SECOND_TRIANGLE.iter());
        for v in all {
            assert!(v.x.abs() <= 1.0 && v.y.abs() <= 1.0 && v.z == 0.0);
        }
    }
}
