//! Foundation types for the logbook console.
//!
//! This crate contains the types shared by all logbook crates: the raw
//! input event model, the event-stream chunker, and error types.

pub mod error;
pub mod event;

pub use error::{LogbookError, Result};
pub use event::{RawEvent, chunk_events};
