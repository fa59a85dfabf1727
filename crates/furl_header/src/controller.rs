//! Header controller
//!
//! Owns the per-header state (scroll offset and search-bar expansion) and
//! turns it into [`HeaderVisuals`] on demand. Offsets arrive through
//! [`OffsetObserver`], usually from a scroll container's reporter; taps arrive
//! through [`HeaderController::trigger`].
//!
//! # Example
//!
//! ```rust
//! use furl_header::{HeaderController, HeaderMetrics, HeaderVariant};
//!
//! let mut header = HeaderController::new(HeaderVariant::Momo, HeaderMetrics::default())?;
//! header.set_scroll_offset(-40.0);
//!
//! let visuals = header.visuals();
//! assert_eq!(visuals.progress.value(), -0.5);
//! assert_eq!(visuals.features.offset_y, -32.5);
//! # Ok::<(), furl_header::MetricsError>(())
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use furl_animation::Tween;
use furl_core::reporter::OffsetObserver;

use crate::actions::{ActionHandler, HeaderAction, LogActions};
use crate::metrics::{HeaderMetrics, MetricsError};
use crate::progress::Progress;
use crate::search::{DismissPolicy, SearchBar, SearchState};
use crate::tree::{self, ViewNode};
use crate::variant::HeaderVariant;
use crate::visuals::HeaderVisuals;

/// State and behaviour of one on-screen header
pub struct HeaderController {
    variant: HeaderVariant,
    metrics: HeaderMetrics,
    scroll_offset: f32,
    search: SearchBar,
    /// Search blend: 0 collapsed, 1 expanded
    transition: Tween,
    actions: Box<dyn ActionHandler>,
}

impl HeaderController {
    /// Create a controller at rest. Fails if `metrics` does not validate.
    pub fn new(variant: HeaderVariant, metrics: HeaderMetrics) -> Result<Self, MetricsError> {
        metrics.validate()?;
        Ok(Self {
            variant,
            metrics,
            scroll_offset: 0.0,
            search: SearchBar::new(DismissPolicy::default(), metrics.collapse_distance),
            transition: Tween::new(0.0, metrics.transition_ms, metrics.transition_easing),
            actions: Box::new(LogActions),
        })
    }

    /// Replace the dismissal policy. Resets the search bar to collapsed.
    pub fn with_dismiss_policy(mut self, policy: DismissPolicy) -> Self {
        self.search = SearchBar::new(policy, self.metrics.collapse_distance);
        self.transition.set_immediate(0.0);
        self
    }

    /// Route avatar and feature taps to `handler` instead of the log
    pub fn with_action_handler(mut self, handler: impl ActionHandler + 'static) -> Self {
        self.actions = Box::new(handler);
        self
    }

    pub fn variant(&self) -> HeaderVariant {
        self.variant
    }

    pub fn metrics(&self) -> &HeaderMetrics {
        &self.metrics
    }

    pub fn dismiss_policy(&self) -> DismissPolicy {
        self.search.policy()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn progress(&self) -> Progress {
        Progress::from_offset(self.scroll_offset, &self.metrics)
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn is_search_expanded(&self) -> bool {
        self.search.is_expanded()
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search
    }

    /// Store the latest measured offset and apply the dismissal rule
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
        if self.search.scrolled_to(offset) {
            self.sync_transition();
        }
    }

    /// Tap on the collapsed-state search icon. Returns `true` if the bar opened.
    pub fn tap_search(&mut self) -> bool {
        let opened = self.search.tap_search(self.scroll_offset);
        if opened {
            self.sync_transition();
        }
        opened
    }

    /// Tap on the dismiss button. Returns `true` if the bar closed.
    pub fn tap_dismiss(&mut self) -> bool {
        let closed = self.search.tap_dismiss();
        if closed {
            self.sync_transition();
        }
        closed
    }

    /// Dispatch a tap on any header control
    pub fn trigger(&mut self, action: HeaderAction) {
        match action {
            HeaderAction::OpenSearch => {
                self.tap_search();
            }
            HeaderAction::DismissSearch => {
                self.tap_dismiss();
            }
            HeaderAction::Avatar => self.actions.avatar_tapped(),
            HeaderAction::Feature(feature) => self.actions.feature_tapped(feature),
        }
    }

    fn sync_transition(&mut self) {
        let target = if self.search.is_expanded() { 1.0 } else { 0.0 };
        tracing::debug!(
            variant = %self.variant,
            state = ?self.search.state(),
            "search bar transition"
        );
        self.transition.retarget(target);
    }

    /// Advance the search transition. Returns `true` while it is still running.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.transition.tick(dt_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Current search blend, eased, in `[0, 1]`
    pub fn search_blend(&self) -> f32 {
        self.transition.value()
    }

    /// Visuals of the frame on screen now, mid-transition included
    pub fn visuals(&self) -> HeaderVisuals {
        HeaderVisuals::compute(
            self.variant,
            &self.metrics,
            self.scroll_offset,
            self.search_blend(),
        )
    }

    /// Visuals once the search transition has finished
    pub fn settled_visuals(&self) -> HeaderVisuals {
        HeaderVisuals::settled(
            self.variant,
            &self.metrics,
            self.scroll_offset,
            self.search.is_expanded(),
        )
    }

    pub fn view_tree(&self) -> ViewNode {
        tree::build(self.variant, &self.visuals())
    }

    /// An observer feeding offsets into a shared controller.
    ///
    /// Holds a weak reference, so it goes quiet once the header is dropped.
    pub fn observer(this: &Rc<RefCell<Self>>) -> impl FnMut(f32) + 'static {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(this);
        move |offset: f32| {
            if let Some(header) = weak.upgrade() {
                header.borrow_mut().set_scroll_offset(offset);
            }
        }
    }
}

impl OffsetObserver for HeaderController {
    fn offset_changed(&mut self, offset: f32) {
        self.set_scroll_offset(offset);
    }
}

impl fmt::Debug for HeaderController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderController")
            .field("variant", &self.variant)
            .field("scroll_offset", &self.scroll_offset)
            .field("search", &self.search.state())
            .field("search_blend", &self.transition.value())
            .finish()
    }
}
