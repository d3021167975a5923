use super::mesh::{Geometry, Material, MeshNode};
use super::theme::Theme;
use super::types::{Color, Transform3D, Vec3};
use std::collections::HashSet;

/// Rotation added to the active model on each animation frame, in radians
pub const ROTATION_STEP: f32 = 0.01;

/// Scene lighting: one ambient term plus one directional light, both white
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Position the directional light shines from, toward the origin
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: 0.5,
            directional: 1.0,
            direction: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

/// Scene graph for the decorative 3D preview
/// Holds mesh nodes with dirty tracking; at most one of them is the themed model
pub struct SceneGraph {
    /// All meshes in the scene
    meshes: Vec<MeshNode>,
    /// IDs of meshes whose geometry must be re-uploaded
    dirty_meshes: HashSet<u64>,
    /// Whether the scene needs re-rendering
    scene_dirty: bool,
    /// The themed model, if any
    active_model: Option<(Theme, u64)>,
    pub background: Color,
    pub lighting: Lighting,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create a new empty scene graph
    pub fn new() -> Self {
        Self {
            meshes: Vec::new(),
            dirty_meshes: HashSet::new(),
            scene_dirty: true,
            active_model: None,
            background: Color::from_rgb_u32(0xf0f0f0),
            lighting: Lighting::default(),
        }
    }

    /// Add a mesh to the scene and return its ID
    pub fn add_mesh(&mut self, mesh: MeshNode) -> u64 {
        let id = mesh.id;
        self.dirty_meshes.insert(id);
        self.scene_dirty = true;
        self.meshes.push(mesh);
        id
    }

    /// Create and add a new mesh with the given geometry and material
    pub fn create_mesh(&mut self, geometry: Geometry, material: Material) -> u64 {
        self.add_mesh(MeshNode::new(geometry, material))
    }

    /// Remove a mesh by ID
    pub fn remove_mesh(&mut self, id: u64) -> Option<MeshNode> {
        let pos = self.meshes.iter().position(|m| m.id == id)?;
        self.dirty_meshes.remove(&id);
        if self.active_model.is_some_and(|(_, active)| active == id) {
            self.active_model = None;
        }
        self.scene_dirty = true;
        Some(self.meshes.remove(pos))
    }

    pub fn get_mesh(&self, id: u64) -> Option<&MeshNode> {
        self.meshes.iter().find(|m| m.id == id)
    }

    pub fn meshes(&self) -> &[MeshNode] {
        &self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Update a mesh's transform
    pub fn set_transform(&mut self, id: u64, transform: Transform3D) {
        if let Some(mesh) = self.meshes.iter_mut().find(|m| m.id == id) {
            mesh.transform = transform;
            self.scene_dirty = true;
        }
    }

    // === Themed model ===

    /// Replace the themed model with the one for `theme`
    ///
    /// The previous model is removed before the new one is added, so the
    /// scene never holds two. Re-applying the active theme keeps the
    /// current model and its rotation.
    pub fn set_theme(&mut self, theme: Theme) -> u64 {
        if let Some((active, id)) = self.active_model {
            if active == theme {
                return id;
            }
            self.remove_mesh(id);
        }
        let id = self.create_mesh(theme.geometry(), theme.material());
        self.active_model = Some((theme, id));
        log::debug!("Scene model switched to {} ({})", theme.as_str(), theme.geometry().name());
        id
    }

    pub fn theme(&self) -> Option<Theme> {
        self.active_model.map(|(theme, _)| theme)
    }

    pub fn active_model(&self) -> Option<&MeshNode> {
        self.active_model.and_then(|(_, id)| self.get_mesh(id))
    }

    /// Advance the idle animation by one frame
    pub fn advance_frame(&mut self) {
        let Some((_, id)) = self.active_model else {
            return;
        };
        if let Some(mesh) = self.meshes.iter_mut().find(|m| m.id == id) {
            mesh.transform.rotation.x += ROTATION_STEP;
            mesh.transform.rotation.y += ROTATION_STEP;
            self.scene_dirty = true;
        }
    }

    // === Dirty tracking ===

    pub fn is_dirty(&self) -> bool {
        self.scene_dirty
    }

    /// IDs of meshes whose geometry has not been uploaded yet
    pub fn dirty_mesh_ids(&self) -> &HashSet<u64> {
        &self.dirty_meshes
    }

    /// Clear dirty flags after rendering
    pub fn clear_dirty(&mut self) {
        self.dirty_meshes.clear();
        self.scene_dirty = false;
        for mesh in &mut self.meshes {
            mesh.dirty = false;
        }
    }

    /// Mark entire scene as dirty (force full re-upload)
    pub fn mark_dirty(&mut self) {
        self.scene_dirty = true;
        for mesh in &mut self.meshes {
            mesh.dirty = true;
            self.dirty_meshes.insert(mesh.id);
        }
    }
}
