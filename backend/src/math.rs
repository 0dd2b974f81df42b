#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    /// Number of `f32` components, used as the vertex attribute size.
    pub const COMPONENTS: u32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_is_tightly_packed() {
        assert_eq!(
            std::mem::size_of::<Vec3>(),
            Vec3::COMPONENTS as usize * std::mem::size_of::<f32>()
        );
        let verts = [Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0)];
        assert_eq!(std::mem::size_of_val(&verts), 24);
    }
}
