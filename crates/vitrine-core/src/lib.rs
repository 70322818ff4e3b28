//! Core systems for Vitrine.
//!
//! This crate provides the foundational component of the Vitrine gallery
//! widget kit:
//!
//! - **Signal/Slot System**: Type-safe notifications from widget state to
//!   the presentation layer
//!
//! # Signal/Slot Example
//!
//! ```
//! use vitrine_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let index_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = index_changed.connect(|index| {
//!     println!("Current index is now: {}", index);
//! });
//!
//! // Emit the signal
//! index_changed.emit(2);
//!
//! // Disconnect when done
//! index_changed.disconnect(conn_id);
//! ```

pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
