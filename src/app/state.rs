use crate::api::Product;
use crate::error::ApiError;
use crate::utils::file_size::human_size;
use derivative::Derivative;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Admin,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Menu, Screen::Admin];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Menu => "☕ Menu",
            Screen::Admin => "🛠 Admin",
        }
    }
}

/// Results posted back by background requests.
#[derive(Debug)]
pub enum TaskEvent {
    UploadFinished(Result<(), ApiError>),
    ProductsFetched {
        generation: u64,
        result: Result<Vec<Product>, ApiError>,
    },
}

/// Channel ends shared between the UI thread and background tasks.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct TaskState {
    #[derivative(Debug = "ignore")]
    pub sender: Sender<TaskEvent>,
    #[derivative(Debug = "ignore")]
    pub receiver: Receiver<TaskEvent>,
    pub inflight_fetch: Option<AbortHandle>,
}

impl Default for TaskState {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            inflight_fetch: None,
        }
    }
}

impl TaskState {
    /// Records a new listing fetch, aborting the one it supersedes.
    pub fn replace_fetch(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.inflight_fetch.replace(handle) {
            previous.abort();
        }
    }

    pub fn fetch_settled(&mut self) {
        self.inflight_fetch = None;
    }
}

/// "name (size)" label for a picked file.
pub fn describe_file(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::metadata(path) {
        Ok(meta) => format!("{} ({})", name, human_size(meta.len())),
        Err(_) => name,
    }
}
