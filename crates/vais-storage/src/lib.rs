//! # vais-storage
//!
//! Storage port for VAIS persisted records.
//!
//! This crate provides:
//! - The [`KeyValueStore`] trait, a string key-value port shaped like the
//!   browser's `localStorage`
//! - [`MemoryStore`], an in-memory backend
//! - [`FileStore`], a directory-of-files backend
//! - JSON record helpers with shallow merge-patch semantics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filesystem;
pub mod memory;
mod proptests;
pub mod record;
pub mod traits;

pub use error::{Error, Result};
pub use filesystem::FileStore;
pub use memory::MemoryStore;
pub use record::{load_record, merge_objects, merge_patch, merge_record, save_record};
pub use traits::{KeyValueStore, SharedStore};
