use super::types::{Color, Transform3D};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global mesh ID counter
static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(1);

fn generate_mesh_id() -> u64 {
    NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Parametric geometry of a decorative model
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Axis-aligned box centered on the origin
    Box { width: f32, height: f32, depth: f32 },

    /// UV sphere
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },

    /// (p, q) torus knot
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Geometry {
    pub fn cube(size: f32) -> Self {
        Self::Box {
            width: size,
            height: size,
            depth: size,
        }
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn torus_knot(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Self {
        Self::TorusKnot {
            radius,
            tube,
            tubular_segments,
            radial_segments,
            p,
            q,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Geometry::Box { .. } => "box",
            Geometry::Sphere { .. } => "sphere",
            Geometry::TorusKnot { .. } => "torus knot",
        }
    }
}

/// Phong surface parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub shininess: f32,
}

impl Material {
    pub fn phong(color: Color, shininess: f32) -> Self {
        Self { color, shininess }
    }
}

/// A renderable model in the scene graph
#[derive(Clone, Debug, PartialEq)]
pub struct MeshNode {
    pub id: u64,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform3D,
    /// Whether the GPU copy of the geometry is stale
    pub dirty: bool,
}

impl MeshNode {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self {
            id: generate_mesh_id(),
            geometry,
            material,
            transform: Transform3D::identity(),
            dirty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_ids_are_unique() {
        let a = MeshNode::new(Geometry::cube(1.0), Material::phong(Color::white(), 30.0));
        let b = MeshNode::new(Geometry::cube(1.0), Material::phong(Color::white(), 30.0));
        assert_ne!(a.id, b.id);
        assert!(a.dirty);
    }
}
