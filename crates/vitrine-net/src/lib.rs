//! Networking for Vitrine.
//!
//! This crate provides the lightbox's one network-facing action: saving the
//! displayed image to disk. Each save is an independent, cancellable async
//! task whose outcome is reported through a signal; failures are logged and
//! swallowed, never surfaced to the interaction flow.
//!
//! # Modules
//!
//! - [`download`]: [`ImageSaver`] and its events
//! - [`error`]: [`NetError`] and the crate [`Result`] alias

pub mod download;
pub mod error;

pub use download::{DownloadEvent, DownloadId, DownloadState, ImageSaver, file_stem_from_caption};
pub use error::{NetError, Result};
