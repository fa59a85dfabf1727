//! Search-bar expansion state
//!
//! Two states driven by taps and by scrolling. The [`DismissPolicy`] names the
//! scroll region where an expanded search bar cannot stay open: entering it
//! forces the bar closed, and tapping the search icon there is ignored.

use furl_core::fsm::{StateMachine, Transition};
use serde::{Deserialize, Serialize};

use crate::progress::past_collapse_threshold;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchState {
    #[default]
    Collapsed,
    Expanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchEvent {
    TapSearch,
    TapDismiss,
    /// Scrolled into the region where expansion is not allowed
    ScrollLock,
}

/// Where the search bar is forced closed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DismissPolicy {
    /// Closed once the content scrolls past the collapse distance
    #[default]
    WhileCollapsed,
    /// Closed whenever the header is not fully collapsed
    WhileExpanded,
}

impl DismissPolicy {
    /// Whether an expanded search bar must close at `offset`
    pub fn locks(self, offset: f32, collapse_distance: f32) -> bool {
        let past = past_collapse_threshold(offset, collapse_distance);
        match self {
            DismissPolicy::WhileCollapsed => past,
            DismissPolicy::WhileExpanded => !past,
        }
    }
}

/// The search bar's state machine plus its dismissal rule
#[derive(Debug)]
pub struct SearchBar {
    machine: StateMachine<SearchState, SearchEvent, bool>,
    policy: DismissPolicy,
    collapse_distance: f32,
}

impl SearchBar {
    pub fn new(policy: DismissPolicy, collapse_distance: f32) -> Self {
        let machine = StateMachine::builder(SearchState::Collapsed)
            .transition(
                Transition::new(
                    SearchState::Collapsed,
                    SearchEvent::TapSearch,
                    SearchState::Expanded,
                )
                .with_guard(|locked: &bool| !*locked),
            )
            .on(
                SearchState::Expanded,
                SearchEvent::TapDismiss,
                SearchState::Collapsed,
            )
            .on(
                SearchState::Expanded,
                SearchEvent::ScrollLock,
                SearchState::Collapsed,
            )
            .build();

        Self {
            machine,
            policy,
            collapse_distance,
        }
    }

    pub fn state(&self) -> SearchState {
        self.machine.current_state()
    }

    pub fn is_expanded(&self) -> bool {
        self.machine.is_in(SearchState::Expanded)
    }

    pub fn policy(&self) -> DismissPolicy {
        self.policy
    }

    fn locked(&self, offset: f32) -> bool {
        self.policy.locks(offset, self.collapse_distance)
    }

    /// Tap on the search icon at the current scroll offset. Returns `true` if the bar opened.
    pub fn tap_search(&mut self, offset: f32) -> bool {
        let locked = self.locked(offset);
        let opened = self.machine.send(SearchEvent::TapSearch, &locked).is_some();
        if !opened && locked {
            tracing::debug!(offset, policy = ?self.policy, "search expansion refused");
        }
        opened
    }

    /// Tap on the dismiss button. Returns `true` if the bar closed.
    pub fn tap_dismiss(&mut self) -> bool {
        self.machine.send(SearchEvent::TapDismiss, &false).is_some()
    }

    /// Apply the dismissal rule after a scroll update. Returns `true` if the bar was forced closed.
    pub fn scrolled_to(&mut self, offset: f32) -> bool {
        let locked = self.locked(offset);
        if !locked {
            return false;
        }
        let closed = self.machine.send(SearchEvent::ScrollLock, &locked).is_some();
        if closed {
            tracing::debug!(offset, "search bar forced closed by scroll");
        }
        closed
    }

    /// Recent transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &(SearchState, SearchEvent, SearchState)> {
        self.machine.history()
    }
}
