use bytemuck::{Pod, Zeroable};
pub use glam::{Mat4, Quat, Vec3};

/// RGBA color with f32 components (0.0 - 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Color from a packed 0xRRGGBB literal
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }

    /// Parse a hex color string (e.g., "#44aa88" or "44aa88")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_rgb_u32)
    }

    /// Convert to hex string (e.g., "#44aa88")
    pub fn to_hex(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Convert to array for GPU upload
    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

/// 3D transform with position, Euler rotation (radians, XYZ order) and scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3D {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform3D {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix: translate * rotate * scale
    pub fn to_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }

    /// Inverse-transpose of the model matrix, for transforming normals
    pub fn normal_matrix(&self) -> Mat4 {
        self.to_matrix().inverse().transpose()
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex_parsing() {
        let color = Color::from_hex("#44aa88").unwrap();
        assert!((color.r - 0.267).abs() < 0.01);
        assert!((color.g - 0.667).abs() < 0.01);
        assert!((color.b - 0.533).abs() < 0.01);
        assert_eq!(color, Color::from_rgb_u32(0x44aa88));
    }

    #[test]
    fn test_color_hex_roundtrip() {
        let original = "#aa8844";
        assert_eq!(Color::from_hex(original).unwrap().to_hex(), original);
        assert!(Color::from_hex("#fff").is_none());
    }

    #[test]
    fn test_transform_identity() {
        let t = Transform3D::identity();
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(t.to_matrix().transform_point3(point), point);
    }

    #[test]
    fn test_transform_translation_and_scale() {
        let t = Transform3D::identity()
            .with_position(Vec3::new(0.0, 1.0, 0.0))
            .with_scale(Vec3::splat(2.0));
        let p = t.to_matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    }
}
