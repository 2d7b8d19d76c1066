//! Fetch worker: executes fetch requests against the backend.
//!
//! The worker owns the [`Backend`] trait object and turns every
//! [`FetchRequest`] into exactly one [`FetchResponse`], success or failure.
//! It never panics and never drops a request: a backend error becomes a
//! `Failed` response routed to the requesting collection, so the cache's
//! loading flag is always released.
//!
//! The worker is deliberately free of scheduling concerns. The embedding
//! runtime decides where it runs (a thread, a task, inline in tests) and how
//! responses travel back to the event handler.

use crate::backend::{Backend, ListingQuery};
use crate::domain::error::Result;
use crate::domain::EntityKind;

use super::messages::{FetchRequest, FetchResponse};

/// Executes fetch requests against a boxed backend.
pub struct FetchWorker {
    backend: Box<dyn Backend>,
}

impl FetchWorker {
    /// Creates a worker over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Standardizes success and failure handling for backend calls.
    ///
    /// Failures are logged and converted into a `Failed` response for the
    /// requesting collection; the worker itself never returns an error.
    fn handle_backend_result<T, F>(target: EntityKind, result: Result<T>, on_success: F) -> FetchResponse
    where
        F: FnOnce(T) -> FetchResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(target_kind = ?target, "backend fetch successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(target_kind = ?target, error = %e, "backend fetch failed");
                FetchResponse::Failed {
                    target,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Processes one fetch request and returns its response.
    ///
    /// This is the single entry point; it dispatches on the request variant
    /// under a debug span. Listing requests always ask the backend for
    /// approved items, the only status listing views ever display.
    pub fn handle_request(&self, request: &FetchRequest) -> FetchResponse {
        let span = tracing::debug_span!("worker_handle_request", request_type = ?request);
        let _guard = span.entered();

        match request {
            FetchRequest::Listings { kind, limit } => {
                let query = ListingQuery {
                    limit: *limit,
                    ..ListingQuery::approved(*kind)
                };
                Self::handle_backend_result(
                    request.target(),
                    self.backend.list_listings(&query),
                    |listings| FetchResponse::ListingsLoaded { kind: *kind, listings },
                )
            }

            FetchRequest::Districts => Self::handle_backend_result(
                EntityKind::Districts,
                self.backend.list_districts(),
                |districts| FetchResponse::DistrictsLoaded { districts },
            ),

            FetchRequest::Localities => Self::handle_backend_result(
                EntityKind::Localities,
                self.backend.list_localities(),
                |localities| FetchResponse::LocalitiesLoaded { localities },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::JsonBackend;
    use crate::domain::{ListingKind, VitrinaError};
    use crate::domain::{District, Listing, Locality};

    const FIXTURE: &str = r#"{
        "version": 1,
        "listings": [
            {"id": "m-1", "kind": "photo", "title": "Fort ruins", "status": "approved"},
            {"id": "m-2", "kind": "photo", "title": "Watchtower", "status": "pending"}
        ],
        "districts": [{"id": "d-1", "name": "North Coast"}]
    }"#;

    /// Backend that fails every operation, for failure-path tests.
    struct FailingBackend;

    impl Backend for FailingBackend {
        fn list_listings(&self, _query: &ListingQuery) -> crate::domain::Result<Vec<Listing>> {
            Err(VitrinaError::Backend("connection refused".to_string()))
        }

        fn list_districts(&self) -> crate::domain::Result<Vec<District>> {
            Err(VitrinaError::Backend("connection refused".to_string()))
        }

        fn list_localities(&self) -> crate::domain::Result<Vec<Locality>> {
            Err(VitrinaError::Backend("connection refused".to_string()))
        }
    }

    #[test]
    fn listing_request_fetches_only_approved_items() {
        let worker = FetchWorker::new(Box::new(JsonBackend::from_json_str(FIXTURE).unwrap()));
        let response = worker.handle_request(&FetchRequest::for_kind(EntityKind::Photos));

        match response {
            FetchResponse::ListingsLoaded { kind, listings } => {
                assert_eq!(kind, ListingKind::Photo);
                assert_eq!(listings.len(), 1);
                assert_eq!(listings[0].id, "m-1");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn district_request_loads_reference_collection() {
        let worker = FetchWorker::new(Box::new(JsonBackend::from_json_str(FIXTURE).unwrap()));
        let response = worker.handle_request(&FetchRequest::Districts);
        assert!(matches!(response, FetchResponse::DistrictsLoaded { ref districts } if districts.len() == 1));
    }

    #[test]
    fn backend_error_becomes_a_failed_response_for_the_target() {
        let worker = FetchWorker::new(Box::new(FailingBackend));
        let response = worker.handle_request(&FetchRequest::for_kind(EntityKind::News));

        match response {
            FetchResponse::Failed { target, message } => {
                assert_eq!(target, EntityKind::News);
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
}
