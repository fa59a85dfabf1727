//! Furl Core Runtime
//!
//! Foundational primitives for scroll-driven headers:
//!
//! - **Coordinate Spaces**: named reference frames that descendants measure against
//! - **Offset Reporting**: measure-then-publish of a view's top edge, last write wins
//! - **Scroll Containers**: clamp scroll deltas and publish the content offset each layout pass
//! - **State Machines**: small typed statecharts with guarded transitions
//!
//! # Example
//!
//! ```rust
//! use furl_core::scroll::{ScrollConfig, ScrollContainer};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut scroll = ScrollContainer::new("SCROLL", ScrollConfig::default())?;
//! let seen = Rc::new(Cell::new(0.0f32));
//! let sink = seen.clone();
//! scroll.subscribe(move |offset: f32| sink.set(offset));
//!
//! scroll.scroll_by(-40.0);
//! scroll.layout();
//! assert_eq!(seen.get(), -40.0);
//! # Ok::<(), furl_core::ScrollConfigError>(())
//! ```

pub mod coordinate;
pub mod fsm;
pub mod geometry;
pub mod reporter;
pub mod scroll;

pub use coordinate::{CoordinateSpaceError, CoordinateSpaces};
pub use fsm::{StateMachine, Transition};
pub use geometry::Rect;
pub use reporter::{OffsetObserver, OffsetReporter, SubscriptionId};
pub use scroll::{ScrollConfig, ScrollConfigError, ScrollContainer};
