//! Pure query layer: filtering, cascading options, pagination.
//!
//! Everything in this module is a deterministic function from cached
//! collections and per-view state to derived data. No function here performs
//! I/O, consults a clock, errors, or retains state between calls; the event
//! handler re-runs them on every state change instead of memoizing.
//!
//! # Modules
//!
//! - `filter`: Filter state types and the predicate conjunction
//! - `cascade`: Dependent option list resolution and selection arbitration
//! - `paginate`: Fixed-size pagination with deterministic clamping

pub mod cascade;
pub mod filter;
pub mod paginate;

pub use cascade::{category_options, district_options, locality_options, reconcile_selection, FilterOption};
pub use filter::{apply, FilterChoice, FilterState};
pub use paginate::{paginate, Page};
