use crate::scene::{Lighting, Mat4, Material, Vec3};
use bytemuck::{Pod, Zeroable};

/// Vertex data for GPU rendering
/// Each vertex has a 3D position and a unit normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    /// Vertex buffer layout descriptor for wgpu
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position attribute
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal attribute
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Uniform data passed to shaders
/// Every member is a vec4 or mat4 so the layout matches WGSL without padding
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// 4x4 view-projection matrix (column-major)
    pub view_proj: [[f32; 4]; 4],
    /// 4x4 model matrix (column-major)
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model matrix
    pub normal: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// Direction toward the directional light, w unused
    pub light_dir: [f32; 4],
    /// Eye position, w unused
    pub camera_pos: [f32; 4],
    /// x: ambient intensity, y: directional intensity, z: shininess
    pub params: [f32; 4],
}

impl Uniforms {
    pub fn new(
        view_proj: Mat4,
        model: Mat4,
        normal: Mat4,
        eye: Vec3,
        material: &Material,
        lighting: &Lighting,
    ) -> Self {
        let light_dir = lighting.direction.normalize_or_zero();
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            normal: normal.to_cols_array_2d(),
            color: material.color.to_array(),
            light_dir: light_dir.extend(0.0).to_array(),
            camera_pos: eye.extend(1.0).to_array(),
            params: [lighting.ambient, lighting.directional, material.shininess, 0.0],
        }
    }

    pub fn identity() -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view_proj: identity,
            model: identity,
            normal: identity,
            color: [1.0; 4],
            light_dir: [0.0, 0.0, 1.0, 0.0],
            camera_pos: [0.0, 0.0, 1.0, 1.0],
            params: [1.0, 0.0, 1.0, 0.0],
        }
    }
}

/// A batch of vertices and indices ready for GPU upload
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(index_capacity),
        }
    }

    /// Add a mesh to this mesh, offsetting indices appropriately
    pub fn extend(&mut self, other: &Mesh) {
        let index_offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|i| i + index_offset));
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_uniform_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>(), 256);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_mesh_extend_offsets_indices() {
        let tri = Mesh {
            vertices: vec![Vertex::new(Vec3::ZERO, Vec3::Z); 3],
            indices: vec![0, 1, 2],
        };
        let mut mesh = Mesh::new();
        mesh.extend(&tri);
        mesh.extend(&tri);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.triangle_count(), 2);
    }
}
