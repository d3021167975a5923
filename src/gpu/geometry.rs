use super::vertex::{Mesh, Vertex};
use crate::scene::{Geometry, Vec3};
use std::f32::consts::{PI, TAU};

/// Triangulate a parametric geometry into an indexed mesh with per-vertex normals
///
/// Triangles wind counter-clockwise seen from outside the surface.
pub fn tessellate(geometry: &Geometry) -> Mesh {
    match *geometry {
        Geometry::Box { width, height, depth } => box_mesh(width, height, depth),
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        } => sphere_mesh(radius, width_segments.max(3), height_segments.max(2)),
        Geometry::TorusKnot {
            radius,
            tube,
            tubular_segments,
            radial_segments,
            p,
            q,
        } => torus_knot_mesh(
            radius,
            tube,
            tubular_segments.max(3),
            radial_segments.max(3),
            p.max(1),
            q,
        ),
    }
}

/// Four vertices per face so each face keeps a flat normal
fn box_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut mesh = Mesh::with_capacity(24, 36);
    for (normal, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let center = normal * half;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = center + u * half * su + v * half * sv;
            mesh.vertices.push(Vertex::new(position, normal));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

fn sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let columns = width_segments + 1;
    let mut mesh = Mesh::with_capacity(
        (columns * (height_segments + 1)) as usize,
        (width_segments * (height_segments * 2 - 2) * 3) as usize,
    );

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let position = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.vertices
                .push(Vertex::new(position, position.normalize_or_zero()));
        }
    }

    let index = |ix: u32, iy: u32| iy * columns + ix;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = index(ix + 1, iy);
            let b = index(ix, iy);
            let c = index(ix, iy + 1);
            let d = index(ix + 1, iy + 1);
            // Pole rows collapse to a single triangle per quad
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

fn torus_knot_mesh(radius: f32, tube: f32, tubular_segments: u32, radial_segments: u32, p: u32, q: u32) -> Mesh {
    let p = p as f32;
    let q = q as f32;
    let curve = |u: f32| {
        let q_over_p = q / p * u;
        let cs = q_over_p.cos();
        Vec3::new(
            radius * (2.0 + cs) * 0.5 * u.cos(),
            radius * (2.0 + cs) * 0.5 * u.sin(),
            radius * q_over_p.sin() * 0.5,
        )
    };

    let ring = radial_segments + 1;
    let mut mesh = Mesh::with_capacity(
        ((tubular_segments + 1) * ring) as usize,
        (tubular_segments * radial_segments * 6) as usize,
    );

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * p * TAU;
        let p1 = curve(u);
        let p2 = curve(u + 0.01);

        // Frame along the curve
        let tangent = p2 - p1;
        let mut normal = p2 + p1;
        let binormal = tangent.cross(normal).normalize_or_zero();
        normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let position = p1 + normal * cx + binormal * cy;
            mesh.vertices
                .push(Vertex::new(position, (position - p1).normalize_or_zero()));
        }
    }

    for j in 1..=tubular_segments {
        for i in 1..=radial_segments {
            let a = ring * (j - 1) + (i - 1);
            let b = ring * j + (i - 1);
            let c = ring * j + i;
            let d = ring * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Theme;

    fn assert_well_formed(mesh: &Mesh) {
        assert!(!mesh.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count), "index out of range");
        for vertex in &mesh.vertices {
            let length = Vec3::from_array(vertex.normal).length();
            assert!((length - 1.0).abs() < 1e-4, "normal length {}", length);
        }
    }

    #[test]
    fn test_box_counts_and_normals() {
        let mesh = tessellate(&Geometry::cube(1.0));
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert_well_formed(&mesh);
        for vertex in &mesh.vertices {
            let p = Vec3::from_array(vertex.position);
            assert!((p.abs() - Vec3::splat(0.5)).length() < 1e-6);
        }
    }

    #[test]
    fn test_box_faces_wind_outward() {
        let mesh = tessellate(&Geometry::cube(2.0));
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
            let face_normal = (b - a).cross(c - a);
            let normal = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
            assert!(face_normal.dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_sphere_counts() {
        let mesh = tessellate(&Theme::Modern.geometry());
        assert_eq!(mesh.vertices.len(), 33 * 33);
        assert_eq!(mesh.triangle_count(), 32 * 62);
        assert_well_formed(&mesh);
        for vertex in &mesh.vertices {
            let r = Vec3::from_array(vertex.position).length();
            assert!((r - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_torus_knot_counts() {
        let mesh = tessellate(&Theme::Creative.geometry());
        assert_eq!(mesh.vertices.len(), 101 * 17);
        assert_eq!(mesh.indices.len(), 100 * 16 * 6);
        assert_well_formed(&mesh);
    }

    #[test]
    fn test_degenerate_segments_are_raised() {
        let mesh = tessellate(&Geometry::sphere(1.0, 0, 0));
        assert_well_formed(&mesh);
    }
}
