//! Furl Collapsing Headers
//!
//! Scroll-driven headers that shrink, fade and morph their controls as the
//! content beneath them scrolls. The scroll offset is the single input:
//!
//! - **Progress**: offset mapped onto `[-1, 0]` across an 80pt collapse distance
//! - **Visuals**: opacity, offset, padding and scale of every header element
//! - **Search bar**: a two-state machine with a scroll-driven dismissal rule
//! - **Variants**: the generic `Standard` header and the banner-backed `Momo` header
//!
//! Rendering is the host's job; this crate computes the numbers and a view
//! tree describing them.
//!
//! # Example
//!
//! ```rust
//! use furl_core::scroll::{ScrollConfig, ScrollContainer};
//! use furl_header::{HeaderController, HeaderMetrics, HeaderVariant};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let header = Rc::new(RefCell::new(
//!     HeaderController::new(HeaderVariant::Standard, HeaderMetrics::default()).unwrap(),
//! ));
//! let mut scroll = ScrollContainer::new("SCROLL", ScrollConfig::default()).unwrap();
//! scroll.subscribe(HeaderController::observer(&header));
//!
//! scroll.scroll_by(-80.0);
//! scroll.layout();
//! assert!(header.borrow().progress().is_fully_collapsed());
//! ```

pub mod actions;
pub mod controller;
pub mod metrics;
pub mod progress;
pub mod search;
pub mod tree;
pub mod variant;
pub mod visuals;

pub use actions::{ActionHandler, FeatureAction, HeaderAction, LogActions};
pub use controller::HeaderController;
pub use metrics::{HeaderMetrics, MetricsError};
pub use progress::{collapse_progress, Progress};
pub use search::{DismissPolicy, SearchBar, SearchState};
pub use tree::{NodeKind, ViewNode};
pub use variant::{FeatureButton, HeaderVariant};
pub use visuals::HeaderVisuals;
