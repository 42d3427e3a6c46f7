//! Integration test suite for vais-state.
//!
//! Exercises the record stores together over real backends, the way the
//! client uses them across pages.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
mod integration;
