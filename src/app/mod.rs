//! Application layer coordinating view state, events, and actions.
//!
//! This module sits between the embedding runtime (which renders views and
//! schedules the fetch worker) and the cache/query layers. It implements the
//! event-driven flow that keeps every listing page consistent with the shared
//! cache.
//!
//! # Architecture
//!
//! ```text
//! View layer → Events → Event Handler → State Mutations → Actions → Fetch Worker
//!                            ↑                                          ↓
//!                            └────────── Backend Responses ─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and the enforced transition rules
//! - [`state`]: Per-view state container and view model selectors
//!
//! # Example
//!
//! ```
//! use vitrina::app::{handle_event, Event, ListingView};
//! use vitrina::cache::DirectoryCache;
//! use vitrina::domain::ListingKind;
//! use vitrina::Config;
//!
//! let config = Config::default();
//! let mut cache = DirectoryCache::new();
//! let mut view = ListingView::with_config(ListingKind::Photo, &config);
//!
//! let (_, actions) = handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale)?;
//! assert_eq!(actions.len(), 3); // cold cache: photos + districts + localities
//! # Ok::<(), vitrina::domain::VitrinaError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{ListingView, PageState};
