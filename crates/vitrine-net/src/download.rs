//! Fire-and-forget image saving.
//!
//! This module provides [`ImageSaver`], the download action behind the
//! lightbox's save button: fetch the displayed image's bytes, derive a
//! filesystem-safe name from its caption, and write the file. The action is
//! deliberately decoupled from navigation state: each click spawns an
//! independent task, and a failure is logged and reported through the event
//! signal without touching the interaction flow. There is no retry.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_net::{ImageSaver, DownloadEvent};
//!
//! let saver = ImageSaver::new();
//!
//! saver.events().connect(|event| {
//!     match event {
//!         DownloadEvent::Finished { path, .. } => {
//!             println!("Saved to {}", path.display());
//!         }
//!         DownloadEvent::Error { message, .. } => {
//!             println!("Save failed: {}", message);
//!         }
//!         _ => {}
//!     }
//! });
//!
//! // Inside a Tokio runtime:
//! let id = saver.save("https://example.com/photo.jpg", "/tmp", "Sunset over the bay")?;
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;
use vitrine_core::Signal;

use crate::error::{NetError, Result};

/// Unique identifier for a save operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DownloadId(u64);

impl DownloadId {
    fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Current state of a save operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadState {
    /// Queued but not started.
    Pending,
    /// Actively transferring data.
    Downloading,
    /// Completed successfully.
    Completed,
    /// Failed with an error.
    Failed,
    /// Cancelled by the user.
    Cancelled,
}

/// Events emitted by the image saver.
#[derive(Clone, Debug)]
pub enum DownloadEvent {
    /// The fetch started.
    Started {
        /// The save ID.
        id: DownloadId,
    },
    /// The file was written.
    Finished {
        /// The save ID.
        id: DownloadId,
        /// Path to the saved file.
        path: PathBuf,
    },
    /// The save failed.
    Error {
        /// The save ID.
        id: DownloadId,
        /// Error message.
        message: String,
    },
    /// The save was cancelled.
    Cancelled {
        /// The save ID.
        id: DownloadId,
    },
}

impl DownloadEvent {
    /// Get the save ID associated with this event.
    pub fn id(&self) -> DownloadId {
        match self {
            Self::Started { id } => *id,
            Self::Finished { id, .. } => *id,
            Self::Error { id, .. } => *id,
            Self::Cancelled { id } => *id,
        }
    }
}

/// Internal per-save state.
struct SaveTask {
    state: DownloadState,
    cancel_tx: Option<oneshot::Sender<()>>,
}

/// Saves lightbox images to disk, one independent async task per request.
///
/// Must be used inside a Tokio runtime: [`save`](Self::save) spawns the
/// fetch-and-write task with `tokio::spawn`.
pub struct ImageSaver {
    client: reqwest::Client,
    saves: Arc<Mutex<HashMap<DownloadId, SaveTask>>>,
    event: Arc<Signal<DownloadEvent>>,
}

impl Default for ImageSaver {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSaver {
    /// Create a new saver with a default HTTP client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a saver with a custom HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            saves: Arc::new(Mutex::new(HashMap::new())),
            event: Arc::new(Signal::new()),
        }
    }

    /// The event signal (started, finished, error, cancelled).
    pub fn events(&self) -> &Signal<DownloadEvent> {
        &self.event
    }

    /// Fetch the image at `url` and write it under `dir`, named after
    /// `caption`.
    ///
    /// The file stem is the caption slug (see [`file_stem_from_caption`]);
    /// the extension comes from the response's Content-Type subtype, falling
    /// back to `jpg`. The fetch runs on a spawned task; its outcome is
    /// reported only through [`events`](Self::events); a failed fetch is
    /// logged and swallowed, never surfaced to the caller.
    ///
    /// Returns a [`DownloadId`] usable with [`cancel`](Self::cancel) and
    /// [`state`](Self::state). The only synchronous failure is an invalid
    /// URL.
    pub fn save(
        &self,
        url: impl Into<String>,
        dir: impl AsRef<Path>,
        caption: impl Into<String>,
    ) -> Result<DownloadId> {
        let url = url.into();
        url::Url::parse(&url)?;

        let dir = dir.as_ref().to_path_buf();
        let caption = caption.into();
        let id = DownloadId::new();
        let (cancel_tx, cancel_rx) = oneshot::channel();

        self.saves.lock().insert(
            id,
            SaveTask {
                state: DownloadState::Pending,
                cancel_tx: Some(cancel_tx),
            },
        );

        let client = self.client.clone();
        let saves = self.saves.clone();
        let event = self.event.clone();

        tokio::spawn(async move {
            {
                let mut saves = saves.lock();
                match saves.get_mut(&id) {
                    // Cancelled before the task got scheduled
                    Some(task) if task.state == DownloadState::Cancelled => return,
                    Some(task) => task.state = DownloadState::Downloading,
                    None => return,
                }
            }
            event.emit(DownloadEvent::Started { id });

            let result = tokio::select! {
                result = fetch_and_write(&client, &url, &dir, &caption) => result,
                _ = cancel_rx => {
                    // State and event already handled by cancel()
                    return;
                }
            };

            match result {
                Ok(path) => {
                    if let Some(task) = saves.lock().get_mut(&id) {
                        task.state = DownloadState::Completed;
                    }
                    tracing::debug!(target: "vitrine_net::download", ?path, "image saved");
                    event.emit(DownloadEvent::Finished { id, path });
                }
                Err(err) => {
                    if let Some(task) = saves.lock().get_mut(&id) {
                        task.state = DownloadState::Failed;
                    }
                    tracing::warn!(target: "vitrine_net::download", %url, error = %err, "download failed");
                    event.emit(DownloadEvent::Error {
                        id,
                        message: err.to_string(),
                    });
                }
            }
        });

        Ok(id)
    }

    /// Cancel an in-flight save.
    ///
    /// Returns `true` if the save was cancelled.
    pub fn cancel(&self, id: DownloadId) -> bool {
        let mut saves = self.saves.lock();
        if let Some(task) = saves.get_mut(&id)
            && matches!(
                task.state,
                DownloadState::Pending | DownloadState::Downloading
            )
        {
            if let Some(tx) = task.cancel_tx.take() {
                let _ = tx.send(());
            }
            task.state = DownloadState::Cancelled;
            drop(saves);
            self.event.emit(DownloadEvent::Cancelled { id });
            return true;
        }
        false
    }

    /// Get the current state of a save.
    pub fn state(&self, id: DownloadId) -> Option<DownloadState> {
        self.saves.lock().get(&id).map(|t| t.state)
    }

    /// Remove a completed, failed, or cancelled save from the tracker.
    pub fn remove(&self, id: DownloadId) -> bool {
        let mut saves = self.saves.lock();
        if let Some(task) = saves.get(&id)
            && matches!(
                task.state,
                DownloadState::Completed | DownloadState::Failed | DownloadState::Cancelled
            )
        {
            saves.remove(&id);
            return true;
        }
        false
    }
}

/// Fetch `url` and write the bytes under `dir` with a caption-derived name.
async fn fetch_and_write(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
    caption: &str,
) -> Result<PathBuf> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NetError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let extension = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(extension_from_content_type)
        .unwrap_or_else(|| "jpg".to_string());

    let bytes = response.bytes().await?;

    let filename = format!("{}.{}", file_stem_from_caption(caption), extension);
    let path = dir.join(filename);
    tokio::fs::write(&path, &bytes).await?;
    Ok(path)
}

/// Derive a filesystem-safe file stem from an image caption.
///
/// Lowercases the caption, collapses every run of non-alphanumeric
/// characters to a single `-`, and trims leading/trailing separators. A
/// caption with no usable characters yields `image`.
///
/// # Example
///
/// ```
/// use vitrine_net::file_stem_from_caption;
///
/// assert_eq!(file_stem_from_caption("Sunset over the bay!"), "sunset-over-the-bay");
/// assert_eq!(file_stem_from_caption(""), "image");
/// ```
pub fn file_stem_from_caption(caption: &str) -> String {
    let mut stem = String::new();
    let mut pending_separator = false;
    for ch in caption.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !stem.is_empty() {
                stem.push('-');
            }
            pending_separator = false;
            stem.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    if stem.is_empty() {
        "image".to_string()
    } else {
        stem
    }
}

/// The file extension for a Content-Type header value.
///
/// Takes the subtype of the media type (`image/png` → `png`), ignoring any
/// parameters; falls back to `jpg` when the subtype is missing or empty.
fn extension_from_content_type(content_type: &str) -> String {
    let media_type = content_type.split(';').next().unwrap_or("").trim();
    match media_type.split('/').nth(1) {
        Some(subtype) if !subtype.is_empty() => subtype.to_string(),
        _ => "jpg".to_string(),
    }
}
