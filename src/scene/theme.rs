use super::mesh::{Geometry, Material};
use super::types::Color;

/// Visual theme of the portfolio, selecting the decorative model
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Modern,
    Minimal,
    Creative,
    /// Any unrecognised theme name
    Fallback,
}

impl Theme {
    /// Unknown names map to `Fallback` rather than failing
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "modern" => Theme::Modern,
            "minimal" => Theme::Minimal,
            "creative" => Theme::Creative,
            other => {
                log::debug!("Unknown theme '{}', using default model", other);
                Theme::Fallback
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Minimal => "minimal",
            Theme::Creative => "creative",
            Theme::Fallback => "default",
        }
    }

    /// Themes offered by the portfolio editor
    pub const SELECTABLE: [Theme; 3] = [Theme::Modern, Theme::Minimal, Theme::Creative];

    pub fn geometry(&self) -> Geometry {
        match self {
            Theme::Modern => Geometry::sphere(1.0, 32, 32),
            Theme::Minimal | Theme::Fallback => Geometry::cube(1.0),
            Theme::Creative => Geometry::torus_knot(0.8, 0.3, 100, 16, 2, 3),
        }
    }

    pub fn material(&self) -> Material {
        match self {
            Theme::Modern => Material::phong(Color::from_rgb_u32(0x44aa88), 100.0),
            Theme::Minimal => Material::phong(Color::from_rgb_u32(0x4488aa), 30.0),
            Theme::Creative => Material::phong(Color::from_rgb_u32(0xaa8844), 60.0),
            Theme::Fallback => Material::phong(Color::from_rgb_u32(0x44aa88), 30.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!(Theme::parse("Creative"), Theme::Creative);
        assert_eq!(Theme::parse(" minimal "), Theme::Minimal);
        assert_eq!(Theme::parse("brutalist"), Theme::Fallback);
    }

    #[test]
    fn test_theme_models() {
        assert_eq!(Theme::Modern.geometry(), Geometry::sphere(1.0, 32, 32));
        assert_eq!(Theme::Modern.material().shininess, 100.0);
        assert_eq!(Theme::Minimal.material().color.to_hex(), "#4488aa");
        assert_eq!(Theme::Creative.geometry().name(), "torus knot");
        assert_eq!(Theme::Fallback.geometry(), Geometry::cube(1.0));
        assert_eq!(Theme::Fallback.material().color.to_hex(), "#44aa88");
        assert_eq!(Theme::Fallback.material().shininess, 30.0);
    }
}
