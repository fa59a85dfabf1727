//! State Machine Runtime
//!
//! Small flat statecharts for widget interaction states.
//! Supports:
//! - Typed states and events (any `Copy + Eq + Hash` type)
//! - Guards evaluated against a caller-supplied context
//! - Bounded transition history for debugging

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Number of transitions kept in the history ring
pub const HISTORY_LIMIT: usize = 32;

/// A guard that decides whether a transition may fire given the context
pub type Guard<C> = Box<dyn Fn(&C) -> bool>;

/// A transition in the state machine
pub struct Transition<S, E, C = ()> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard<C>>,
}

impl<S, E, C> Transition<S, E, C> {
    /// Create a transition without guard
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
            guard: None,
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn(&C) -> bool + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    fn allows(&self, ctx: &C) -> bool {
        self.guard.as_ref().map_or(true, |guard| guard(ctx))
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E, C = ()> {
    initial_state: S,
    transitions: Vec<Transition<S, E, C>>,
}

impl<S, E, C> StateMachineBuilder<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add an unguarded transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E, C> {
        let mut table: FxHashMap<(S, E), SmallVec<[Transition<S, E, C>; 1]>> =
            FxHashMap::default();
        for transition in self.transitions {
            table
                .entry((transition.from_state, transition.event))
                .or_default()
                .push(transition);
        }
        StateMachine {
            current_state: self.initial_state,
            table,
            history: VecDeque::new(),
        }
    }
}

/// A state machine instance
///
/// Transitions sharing a `(state, event)` pair are tried in declaration order;
/// the first one whose guard passes fires.
pub struct StateMachine<S, E, C = ()> {
    current_state: S,
    table: FxHashMap<(S, E), SmallVec<[Transition<S, E, C>; 1]>>,
    history: VecDeque<(S, E, S)>,
}

impl<S, E, C> StateMachine<S, E, C>
where
    S: Copy + Eq + Hash,
    E: Copy + Eq + Hash,
{
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E, C> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Most recent transitions, oldest first
    pub fn history(&self) -> impl Iterator<Item = &(S, E, S)> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn find(&self, event: E, ctx: &C) -> Option<&Transition<S, E, C>> {
        self.table
            .get(&(self.current_state, event))?
            .iter()
            .find(|t| t.allows(ctx))
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E, ctx: &C) -> bool {
        self.find(event, ctx).is_some()
    }

    /// Send an event. Returns the new state if a transition fired.
    pub fn send(&mut self, event: E, ctx: &C) -> Option<S> {
        let from = self.current_state;
        let to = self.find(event, ctx)?.to_state;

        self.current_state = to;
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back((from, event, to));
        Some(to)
    }
}

impl<S: fmt::Debug, E, C> fmt::Debug for StateMachine<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current_state", &self.current_state)
            .field("transitions", &self.table.len())
            .finish()
    }
}
