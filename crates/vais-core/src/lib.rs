//! VAIS Core: shared error type and in-process event bus.
//!
//! This crate has no internal VAIS dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`events`]: Same-process publish/subscribe

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]

pub mod error;
pub mod events;

pub use error::{Error, Result};
pub use events::{EventBus, Subscription};
