//! Fetch boundary: the one asynchronous edge of the core.
//!
//! Everything else in the crate is synchronous, pure recomputation; backend
//! fetches alone cross a scheduling boundary. This module defines that
//! boundary as a message protocol plus a worker that executes requests
//! against the [`Backend`](crate::backend::Backend) trait, leaving thread or
//! task placement to the embedding runtime.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types, one request per entity kind
//! - `handler`: Worker executing requests and normalizing failures

pub mod handler;
pub mod messages;

pub use handler::FetchWorker;
pub use messages::{FetchRequest, FetchResponse};
