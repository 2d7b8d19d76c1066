//! Actions representing side effects to be executed by the embedding runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions bridge the pure state transformations of the core and the one
//! effectful operation it needs: dispatching a fetch request to the worker.
//! The runtime executes them in order; an empty vector means the event was
//! absorbed entirely by state changes.

use crate::worker::FetchRequest;

/// Commands emitted by the event handler for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a fetch request to the fetch worker.
    ///
    /// Emitted only after the cache granted the in-flight slot for the
    /// request's target collection, so the runtime can dispatch it without
    /// re-checking the single-in-flight discipline.
    PostToWorker(FetchRequest),
}
