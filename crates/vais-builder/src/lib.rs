//! # vais-builder
//!
//! The block-based visual builder shared by the email and landing-page
//! editors.
//!
//! - [`block`]: the block model and its kinds
//! - [`factory`]: default constructors, one per kind
//! - [`field`]: typed single-attribute edits
//! - [`canvas`]: the ordered block list
//! - [`render`]: node-tree rendering and HTML output
//! - [`panels`]: block and section template catalogs

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod block;
pub mod canvas;
pub mod error;
pub mod factory;
pub mod field;
pub mod id;
pub mod panels;
mod proptests;
pub mod render;
pub mod style;

pub use block::{Block, BlockContent, BlockKind, SocialPlatform};
pub use canvas::Canvas;
pub use error::{BuilderError, Result};
pub use factory::*;
pub use field::BlockField;
pub use id::BlockId;
pub use panels::{BlocksPanel, SectionsPanel};
pub use render::{Node, RenderMode, render_block, render_canvas};
pub use style::{Alignment, BlockStyle, Border, WidthUnit};
