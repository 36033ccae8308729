//! Construction sugar for machines and descriptors.
//!
//! This module provides the one-shot [`MachineConfig`] value, the fluent
//! [`StateMachineBuilder`], and positional helper functions for callers
//! who have all the parts in hand.

pub mod error;
pub mod machine;

pub use error::ConfigError;
pub use machine::{MachineConfig, StateMachineBuilder};

use crate::core::{State, Transition};
use crate::machine::StateMachine;

/// Construct a machine from positional parts.
///
/// Equivalent to building a [`MachineConfig`] with the same fields.
///
/// # Example
///
/// ```rust
/// use machina::builder::new_state_machine;
/// use machina::Transition;
///
/// let mut machine = new_state_machine(
///     ["locked", "unlocked"],
///     [Transition::new("locked", "unlocked")],
///     Some("locked"),
///     false,
/// )
/// .unwrap();
///
/// assert!(machine.goto("unlocked"));
/// ```
pub fn new_state_machine<S, T>(
    states: S,
    transitions: T,
    initial_state: Option<&str>,
    initial_on_enter: bool,
) -> Result<StateMachine, ConfigError>
where
    S: IntoIterator,
    S::Item: Into<State>,
    T: IntoIterator<Item = Transition>,
{
    MachineConfig {
        states: states.into_iter().map(Into::into).collect(),
        transitions: transitions.into_iter().collect(),
        initial_state: initial_state.map(str::to_string),
        initial_on_enter,
    }
    .build()
}

/// Build a full state descriptor from a name and both lifecycle hooks.
///
/// For partial shapes, use [`State::new`] and its fluent methods.
///
/// # Example
///
/// ```rust
/// use machina::builder::state;
///
/// let busy = state("busy", |_prev| {}, |_next| {});
/// assert!(busy.on_enter.is_some());
/// assert!(busy.on_exit.is_some());
/// ```
pub fn state<E, X>(name: impl Into<String>, on_enter: E, on_exit: X) -> State
where
    E: Fn(Option<&str>) + Send + Sync + 'static,
    X: Fn(&str) + Send + Sync + 'static,
{
    State::new(name).on_enter(on_enter).on_exit(on_exit)
}

/// Build a full transition descriptor from its endpoints and hook.
///
/// For a hookless edge, use [`Transition::new`].
///
/// # Example
///
/// ```rust
/// use machina::builder::transition;
///
/// let edge = transition("locked", "unlocked", |_from, _to| {});
/// assert!(edge.on_transition.is_some());
/// ```
pub fn transition<F>(
    from: impl Into<String>,
    to: impl Into<String>,
    on_transition: F,
) -> Transition
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    Transition::new(from, to).on_transition(on_transition)
}
