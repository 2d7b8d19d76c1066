//! View model data for the out-of-scope rendering layer.
//!
//! Rendering itself is not part of this crate; what the core exposes is the
//! data a renderer needs, recomputed from state on every change. See
//! [`model`] for the types and `app::state` for the selectors that build
//! them.

pub mod model;

pub use model::{FilterPanel, PageView};
