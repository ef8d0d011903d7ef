//! Mesh loading off the controller thread, fenced by load generations

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use surfacelab_core::{Error, Result, TriangleMesh};

/// Identifies one model request. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Monotonic source of load tickets
#[derive(Debug, Default)]
pub struct LoadGeneration {
    current: u64,
}

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one
    pub fn next(&mut self) -> LoadTicket {
        self.current += 1;
        LoadTicket(self.current)
    }

    /// Most recently issued ticket
    pub fn latest(&self) -> Option<LoadTicket> {
        (self.current > 0).then_some(LoadTicket(self.current))
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.current
    }
}

/// A model the host should load on behalf of the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub model: String,
    pub path: PathBuf,
}

/// Anything that turns a path into a mesh
pub trait MeshLoader {
    /// Load the mesh at `path`, reporting progress in [0, 1]
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<TriangleMesh>;
}

/// Loads meshes from disk by file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FileMeshLoader;

impl MeshLoader for FileMeshLoader {
    fn load(&self, path: &Path, progress: &mut dyn FnMut(f32)) -> Result<TriangleMesh> {
        let mesh = surfacelab_io::read_mesh_with_progress(path, progress)?;
        if mesh.is_empty() {
            return Err(Error::Load(format!("{} contains no triangles", path.display())));
        }
        Ok(mesh)
    }
}

/// Messages sent from loader workers back to the controller thread
#[derive(Debug)]
pub enum LoadMessage {
    Progress(LoadTicket, f32),
    Finished(LoadTicket, Result<TriangleMesh>),
}

/// Runs each load request on its own worker thread.
///
/// Results come back through a channel and are applied by whoever drains it,
/// normally `ViewerController::poll` once per frame.
pub struct BackgroundLoader<L> {
    loader: Arc<L>,
    sender: flume::Sender<LoadMessage>,
    receiver: flume::Receiver<LoadMessage>,
}

impl<L: MeshLoader + Send + Sync + 'static> BackgroundLoader<L> {
    pub fn new(loader: L) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            loader: Arc::new(loader),
            sender,
            receiver,
        }
    }

    /// Start loading `request.path` in the background
    pub fn spawn(&self, request: &LoadRequest) -> Result<()> {
        let loader = Arc::clone(&self.loader);
        let sender = self.sender.clone();
        let ticket = request.ticket;
        let path = request.path.clone();

        thread::Builder::new()
            .name(format!("mesh-loader-{}", ticket.generation()))
            .spawn(move || {
                let progress_sender = sender.clone();
                let mut progress = |fraction: f32| {
                    // The controller may have gone away; nothing to report to then
                    let _ = progress_sender.send(LoadMessage::Progress(ticket, fraction));
                };
                let result = loader
                    .load(&path, &mut progress)
                    .map_err(|e| match e {
                        Error::Load(_) => e,
                        other => Error::Load(format!("{}: {}", path.display(), other)),
                    });
                let _ = sender.send(LoadMessage::Finished(ticket, result));
            })?;

        log::debug!(
            "spawned loader for {} (ticket {})",
            request.path.display(),
            ticket.generation()
        );
        Ok(())
    }

    /// Messages that have already arrived, without blocking
    pub fn drain(&self) -> Vec<LoadMessage> {
        self.receiver.try_iter().collect()
    }

    /// Wait up to `timeout` for the next message
    pub fn recv_timeout(&self, timeout: Duration) -> Option<LoadMessage> {
        self.receiver.recv_timeout(timeout).ok()
    }
}
