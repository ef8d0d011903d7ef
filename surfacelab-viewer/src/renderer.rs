//! Rendering collaborator
//!
//! The controller drives a [`SceneRenderer`]; drawing pixels is the
//! renderer's business. [`HeadlessRenderer`] keeps the scene state in memory
//! and is used by the CLI and the tests.

use crate::camera::Camera;
use crate::surface::{EffectiveShading, SurfaceMaterial};
use surfacelab_core::{Transform3D, TriangleMesh};
use surfacelab_materials::MaterialKind;

/// Handle of an environment map attached to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvironmentId(pub u64);

/// Scene state the viewer controller pushes to
pub trait SceneRenderer {
    /// Environment map currently attached to the scene, if any
    fn environment(&self) -> Option<EnvironmentId>;

    /// Replace the displayed mesh and its model transform
    fn install_mesh(&mut self, mesh: TriangleMesh, transform: Transform3D);

    /// Show `material` on the installed mesh
    fn apply_material(&mut self, material: &SurfaceMaterial);

    /// Free the GPU resources of a material that is no longer shown
    fn release_material(&mut self, material: SurfaceMaterial);

    fn set_camera(&mut self, camera: &Camera);

    fn set_key_light(&mut self, intensity: f32);
}

/// What a headless renderer remembers of an applied material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialRecord {
    pub kind: MaterialKind,
    pub resolution: u32,
    pub shading: EffectiveShading,
    pub environment: Option<EnvironmentId>,
}

impl From<&SurfaceMaterial> for MaterialRecord {
    fn from(material: &SurfaceMaterial) -> Self {
        Self {
            kind: material.kind(),
            resolution: material.pixels().resolution(),
            shading: material.shading(),
            environment: material.environment(),
        }
    }
}

/// In-memory renderer that records every call
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    environment: Option<EnvironmentId>,
    mesh: Option<TriangleMesh>,
    transform: Transform3D,
    camera: Option<Camera>,
    key_light: Option<f32>,
    material: Option<MaterialRecord>,
    applied: Vec<MaterialRecord>,
    released: Vec<MaterialRecord>,
    mesh_installs: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an environment map already attached
    pub fn with_environment(environment: EnvironmentId) -> Self {
        Self {
            environment: Some(environment),
            ..Self::default()
        }
    }

    pub fn set_environment(&mut self, environment: Option<EnvironmentId>) {
        self.environment = environment;
    }

    pub fn mesh(&self) -> Option<&TriangleMesh> {
        self.mesh.as_ref()
    }

    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn key_light(&self) -> Option<f32> {
        self.key_light
    }

    /// Material currently shown
    pub fn material(&self) -> Option<&MaterialRecord> {
        self.material.as_ref()
    }

    /// Every `apply_material` call, oldest first
    pub fn applied(&self) -> &[MaterialRecord] {
        &self.applied
    }

    /// Every released material, oldest first
    pub fn released(&self) -> &[MaterialRecord] {
        &self.released
    }

    pub fn mesh_installs(&self) -> usize {
        self.mesh_installs
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn environment(&self) -> Option<EnvironmentId> {
        self.environment
    }

    fn install_mesh(&mut self, mesh: TriangleMesh, transform: Transform3D) {
        self.mesh = Some(mesh);
        self.transform = transform;
        self.mesh_installs += 1;
    }

    fn apply_material(&mut self, material: &SurfaceMaterial) {
        let record = MaterialRecord::from(material);
        self.material = Some(record);
        self.applied.push(record);
    }

    fn release_material(&mut self, material: SurfaceMaterial) {
        let record = MaterialRecord::from(&material);
        if self.material.as_ref() == Some(&record) {
            self.material = None;
        }
        self.released.push(record);
        drop(material.into_pixels());
    }

    fn set_camera(&mut self, camera: &Camera) {
        self.camera = Some(camera.clone());
    }

    fn set_key_light(&mut self, intensity: f32) {
        self.key_light = Some(intensity);
    }
}
