//! Viewer controller
//!
//! Owns the viewer state (loaded model, active surface, slider positions,
//! camera) and turns UI events into renderer calls. Every event is applied
//! completely or not at all: presets are synthesized and models framed before
//! the renderer is touched.
//!
//! Model loads are asynchronous. Selecting a model issues a [`LoadTicket`];
//! a completion is only applied if its ticket is still the latest, so a slow
//! load can never overwrite a model selected after it.

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::events::ViewerEvent;
use crate::loading::{
    BackgroundLoader, LoadGeneration, LoadMessage, LoadRequest, LoadTicket, MeshLoader,
};
use crate::renderer::SceneRenderer;
use crate::sink::{LogCrateSink, LogSink};
use crate::surface::{ActiveSurfaceState, SliderChannel, SliderSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use surfacelab_core::{Bounded, Extent, FrameResult, Result, Transform3D, TriangleMesh};
use surfacelab_materials::{resolve_preset_with, MaterialKind};

/// A model that finished loading and is installed in the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    pub name: String,
    pub extent: Extent,
    pub frame: FrameResult,
    pub vertex_count: usize,
    pub face_count: usize,
}

#[derive(Debug, Clone)]
struct PendingLoad {
    ticket: LoadTicket,
    model: String,
    progress: f32,
}

pub struct ViewerController<R, S = LogCrateSink> {
    renderer: R,
    sink: S,
    config: ViewerConfig,
    generation: LoadGeneration,
    pending: Option<PendingLoad>,
    model: Option<LoadedModel>,
    surface: Option<ActiveSurfaceState>,
    preset_kind: MaterialKind,
    sliders: SliderSettings,
    camera: Camera,
    rng: StdRng,
}

impl<R: SceneRenderer> ViewerController<R, LogCrateSink> {
    /// Controller that reports through the `log` crate
    pub fn with_renderer(renderer: R, config: ViewerConfig) -> Self {
        Self::new(renderer, LogCrateSink, config)
    }
}

impl<R: SceneRenderer, S: LogSink> ViewerController<R, S> {
    pub fn new(renderer: R, sink: S, config: ViewerConfig) -> Self {
        Self {
            renderer,
            sink,
            preset_kind: config.default_preset,
            config,
            generation: LoadGeneration::new(),
            pending: None,
            model: None,
            surface: None,
            sliders: SliderSettings::default(),
            camera: Camera::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed for texture synthesis
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Dispatch one UI event. Selecting a model returns the load to start.
    pub fn handle_event(&mut self, event: ViewerEvent) -> Result<Option<LoadRequest>> {
        match event {
            ViewerEvent::ModelSelected(name) => self.select_model(&name).map(Some),
            ViewerEvent::PresetSelected(kind) => {
                self.select_preset(kind);
                Ok(None)
            }
            ViewerEvent::SliderChanged(channel, value) => {
                self.set_slider(channel, value)?;
                Ok(None)
            }
        }
    }

    /// Start a new model load, superseding any load still in flight.
    ///
    /// Nothing visible changes until [`complete_load`](Self::complete_load)
    /// is called with the returned ticket.
    pub fn select_model(&mut self, name: &str) -> Result<LoadRequest> {
        let path = self.config.model_path(name)?.to_path_buf();
        let ticket = self.generation.next();

        if let Some(previous) = self.pending.take() {
            log::debug!("load of '{}' superseded by '{}'", previous.model, name);
        }
        self.pending = Some(PendingLoad {
            ticket,
            model: name.to_string(),
            progress: 0.0,
        });

        self.sink.log(&format!("loading model '{}'", name), false);
        Ok(LoadRequest {
            ticket,
            model: name.to_string(),
            path,
        })
    }

    /// Select a model and hand its load to `loader`
    pub fn request_model<L>(
        &mut self,
        name: &str,
        loader: &BackgroundLoader<L>,
    ) -> Result<LoadTicket>
    where
        L: MeshLoader + Send + Sync + 'static,
    {
        let request = self.select_model(name)?;
        if let Err(e) = loader.spawn(&request) {
            self.pending = None;
            return Err(e);
        }
        Ok(request.ticket)
    }

    /// Record load progress; ignored unless `ticket` is the current load
    pub fn load_progress(&mut self, ticket: LoadTicket, fraction: f32) {
        match self.pending.as_mut() {
            Some(pending) if pending.ticket == ticket => {
                pending.progress = fraction.clamp(0.0, 1.0);
                log::trace!("'{}' {:.0}% loaded", pending.model, pending.progress * 100.0);
            }
            _ => log::trace!("progress for stale ticket {} dropped", ticket.generation()),
        }
    }

    /// Apply a finished load. Returns `true` when the mesh was installed.
    ///
    /// Stale tickets are dropped. A failed load is reported to the log sink
    /// and leaves the current model and surface in place.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: Result<TriangleMesh>) -> bool {
        let pending = match self.pending.take() {
            Some(pending)
                if pending.ticket == ticket && self.generation.is_current(ticket) =>
            {
                pending
            }
            other => {
                self.pending = other;
                log::debug!("discarding completion of stale load ticket {}", ticket.generation());
                return false;
            }
        };

        let mesh = match result {
            Ok(mesh) => mesh,
            Err(e) => {
                self.sink.log(&format!("failed to load model '{}': {}", pending.model, e), true);
                return false;
            }
        };

        let extent = mesh.extent();
        let frame = self.config.framing.frame(&extent);
        let state = self.build_surface(self.preset_kind);

        self.release_surface();
        let loaded = LoadedModel {
            name: pending.model,
            extent,
            frame,
            vertex_count: mesh.vertex_count(),
            face_count: mesh.face_count(),
        };
        self.renderer.install_mesh(mesh, Transform3D::translation(frame.recenter_offset));
        self.camera.frame(&frame);
        self.renderer.set_camera(&self.camera);
        self.show_surface(state);

        self.sink.log(
            &format!(
                "loaded model '{}' ({} vertices, {} faces) with {} preset",
                loaded.name, loaded.vertex_count, loaded.face_count, self.preset_kind
            ),
            false,
        );
        self.model = Some(loaded);
        true
    }

    /// Switch the material of the loaded model.
    ///
    /// Without a loaded model the renderer is left alone; the kind is still
    /// remembered and used for the next model.
    pub fn select_preset(&mut self, kind: MaterialKind) {
        self.preset_kind = kind;
        if self.model.is_none() {
            self.sink.log(&format!("no model loaded, {} preset not applied", kind), false);
            return;
        }

        let state = self.build_surface(kind);
        self.release_surface();
        self.show_surface(state);
        log::debug!("applied {} preset", kind);
    }

    /// Move a slider. Non-finite values are rejected, others clamped to [0, 1].
    pub fn set_slider(&mut self, channel: SliderChannel, value: f32) -> Result<()> {
        let value = self.sliders.set(channel, value)?;

        if let Some(surface) = self.surface.as_mut() {
            let shading = surface.set_slider(channel, value)?;
            self.renderer.apply_material(surface.material());
            if channel == SliderChannel::Shadow {
                self.renderer.set_key_light(shading.light_intensity);
            }
        }
        Ok(())
    }

    /// Apply everything the loader has delivered so far; call once per frame
    pub fn poll<L>(&mut self, loader: &BackgroundLoader<L>) -> usize
    where
        L: MeshLoader + Send + Sync + 'static,
    {
        let mut installed = 0;
        for message in loader.drain() {
            if self.apply_message(message) {
                installed += 1;
            }
        }
        installed
    }

    /// Apply one loader message. Returns `true` when a mesh was installed.
    pub fn apply_message(&mut self, message: LoadMessage) -> bool {
        match message {
            LoadMessage::Progress(ticket, fraction) => {
                self.load_progress(ticket, fraction);
                false
            }
            LoadMessage::Finished(ticket, result) => self.complete_load(ticket, result),
        }
    }

    /// Orbit the camera around the model
    pub fn orbit_camera(&mut self, horizontal: f32, vertical: f32) {
        self.camera.orbit(horizontal, vertical);
        self.renderer.set_camera(&self.camera);
    }

    pub fn zoom_camera(&mut self, amount: f32) {
        self.camera.zoom(amount);
        self.renderer.set_camera(&self.camera);
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    pub fn surface(&self) -> Option<&ActiveSurfaceState> {
        self.surface.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn preset_kind(&self) -> MaterialKind {
        self.preset_kind
    }

    pub fn sliders(&self) -> SliderSettings {
        self.sliders
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket and progress of the load in flight
    pub fn pending_load(&self) -> Option<(LoadTicket, f32)> {
        self.pending.as_ref().map(|p| (p.ticket, p.progress))
    }

    pub fn into_parts(self) -> (R, S) {
        (self.renderer, self.sink)
    }

    fn build_surface(&mut self, kind: MaterialKind) -> ActiveSurfaceState {
        let preset = resolve_preset_with(kind, self.config.texture_resolution, &mut self.rng);
        let environment = self
            .renderer
            .environment()
            .or_else(|| self.surface.as_ref().and_then(ActiveSurfaceState::environment));
        ActiveSurfaceState::new(preset, self.sliders, environment, self.config.key_light_intensity)
    }

    fn release_surface(&mut self) {
        if let Some(old) = self.surface.take() {
            self.renderer.release_material(old.into_material());
        }
    }

    fn show_surface(&mut self, state: ActiveSurfaceState) {
        self.renderer.apply_material(state.material());
        self.renderer.set_key_light(state.effective().light_intensity);
        self.surface = Some(state);
    }
}
