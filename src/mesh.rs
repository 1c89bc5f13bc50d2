use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Position-only vertex (hello-triangle chapters).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, Pod, Zeroable)]
pub struct FlatVertex {
    pub pos: Vec3,
}

impl FlatVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Position + RGB color vertex (shaders chapter).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: Vec3,
    pub color: Vec3,
}

impl ColorVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Position + texture coordinate vertex (texture/transform chapters).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, Pod, Zeroable)]
pub struct TexVertex {
    pub pos: Vec3,
    pub uv: Vec2,
}

impl TexVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Position + normal + texture coordinate vertex (3D chapters).
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, Pod, Zeroable)]
pub struct LitVertex {
    pub pos: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl LitVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub const fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

pub const TRIANGLE: [FlatVertex; 3] = [
    FlatVertex { pos: Vec3::new(-0.5, -0.5, 0.0) },
    FlatVertex { pos: Vec3::new(0.5, -0.5, 0.0) },
    FlatVertex { pos: Vec3::new(0.0, 0.5, 0.0) },
];

pub const RECTANGLE: [FlatVertex; 4] = [
    FlatVertex { pos: Vec3::new(0.5, 0.5, 0.0) },
    FlatVertex { pos: Vec3::new(0.5, -0.5, 0.0) },
    FlatVertex { pos: Vec3::new(-0.5, -0.5, 0.0) },
    FlatVertex { pos: Vec3::new(-0.5, 0.5, 0.0) },
];

pub const RECTANGLE_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

pub const COLOR_TRIANGLE: [ColorVertex; 3] = [
    ColorVertex { pos: Vec3::new(-0.5, -0.5, 0.0), color: Vec3::new(1.0, 0.0, 0.0) },
    ColorVertex { pos: Vec3::new(0.5, -0.5, 0.0), color: Vec3::new(0.0, 1.0, 0.0) },
    ColorVertex { pos: Vec3::new(0.0, 0.5, 0.0), color: Vec3::new(0.0, 0.0, 1.0) },
];

pub const TEX_RECTANGLE: [TexVertex; 4] = [
    TexVertex { pos: Vec3::new(0.5, 0.5, 0.0), uv: Vec2::new(1.0, 0.0) },
    TexVertex { pos: Vec3::new(0.5, -0.5, 0.0), uv: Vec2::new(1.0, 1.0) },
    TexVertex { pos: Vec3::new(-0.5, -0.5, 0.0), uv: Vec2::new(0.0, 1.0) },
    TexVertex { pos: Vec3::new(-0.5, 0.5, 0.0), uv: Vec2::new(0.0, 0.0) },
];

macro_rules! lit {
    ($px:expr, $py:expr, $pz:expr, $nx:expr, $ny:expr, $nz:expr, $u:expr, $v:expr) => {
        LitVertex {
            pos: Vec3::new($px, $py, $pz),
            normal: Vec3::new($nx, $ny, $nz),
            uv: Vec2::new($u, $v),
        }
    };
}

/// The classic unit cube: 36 vertices, outward face normals, per-face UVs.
pub const CUBE: [LitVertex; 36] = [
    // back face (-Z)
    lit!(-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0),
    lit!(0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0),
    lit!(0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 0.0),
    lit!(0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 1.0, 1.0),
    lit!(-0.5, -0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 0.0),
    lit!(-0.5, 0.5, -0.5, 0.0, 0.0, -1.0, 0.0, 1.0),
    // front face (+Z)
    lit!(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0),
    lit!(0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 0.0),
    lit!(0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0),
    lit!(0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 1.0, 1.0),
    lit!(-0.5, 0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 1.0),
    lit!(-0.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.0, 0.0),
    // left face (-X)
    lit!(-0.5, 0.5, 0.5, -1.0, 0.0, 0.0, 1.0, 0.0),
    lit!(-0.5, 0.5, -0.5, -1.0, 0.0, 0.0, 1.0, 1.0),
    lit!(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0),
    lit!(-0.5, -0.5, -0.5, -1.0, 0.0, 0.0, 0.0, 1.0),
    lit!(-0.5, -0.5, 0.5, -1.0, 0.0, 0.0, 0.0, 0.0),
    lit!(-0.5, 0.5, 0.5, -1.0, 0.0, 0.0, 1.0, 0.0),
    // right face (+X)
    lit!(0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0, 0.0),
    lit!(0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0),
    lit!(0.5, 0.5, -0.5, 1.0, 0.0, 0.0, 1.0, 1.0),
    lit!(0.5, -0.5, -0.5, 1.0, 0.0, 0.0, 0.0, 1.0),
    lit!(0.5, 0.5, 0.5, 1.0, 0.0, 0.0, 1.0, 0.0),
    lit!(0.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.0, 0.0),
    // bottom face (-Y)
    lit!(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0),
    lit!(0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 1.0, 1.0),
    lit!(0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0),
    lit!(0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 1.0, 0.0),
    lit!(-0.5, -0.5, 0.5, 0.0, -1.0, 0.0, 0.0, 0.0),
    lit!(-0.5, -0.5, -0.5, 0.0, -1.0, 0.0, 0.0, 1.0),
    // top face (+Y)
    lit!(-0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 1.0),
    lit!(0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 1.0, 0.0),
    lit!(0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 1.0, 1.0),
    lit!(0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 1.0, 0.0),
    lit!(-0.5, 0.5, -0.5, 0.0, 1.0, 0.0, 0.0, 1.0),
    lit!(-0.5, 0.5, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0),
];

/// The ten scattered cube positions from the coordinate-systems chapter.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_indices_are_in_range() {
        for &i in &RECTANGLE_INDICES {
            assert!((i as usize) < RECTANGLE.len());
        }
    }

    #[test]
    fn cube_covers_six_faces() {
        assert_eq!(CUBE.len(), 36);
        // each axis direction appears on exactly 6 vertices
        for normal in [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ] {
            let count = CUBE.iter().filter(|v| v.normal == normal).count();
            assert_eq!(count, 6, "face {normal:?}");
        }
    }

    #[test]
    fn cube_normals_are_unit_length() {
        for v in &CUBE {
            assert!((v.normal.length() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn cube_uvs_stay_in_unit_square() {
        for v in &CUBE {
            assert!((0.0..=1.0).contains(&v.uv.x));
            assert!((0.0..=1.0).contains(&v.uv.y));
        }
    }
}
