//! The state registry and the `goto` transition engine.
//!
//! [`StateMachine`] owns the state table, the transition table, and the
//! current-state reference. `goto` is the single state-change operation:
//! it validates the target, dispatches the on-exit, on-transition, and
//! on-enter hooks in that fixed order, then commits the new state.

pub mod error;

pub use error::MachineError;

use crate::builder::{ConfigError, MachineConfig};
use crate::core::{State, Transition, TransitionHook};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// A registry of named states and directed transitions with one current
/// state.
///
/// The machine owns all descriptors. States live in a name-keyed table;
/// transitions live in a two-level table (source name, then destination
/// name), created lazily per source. The current state is a name
/// reference into the state table, or nothing before the machine has
/// been started.
///
/// All hook dispatch happens inline in the calling thread; `goto`
/// returns only after every hook it fired has returned. The machine has
/// no internal locking: for multi-threaded use, wrap the whole machine
/// in one exclusive lock so each `goto` runs as a single critical
/// section.
///
/// # Example
///
/// ```rust
/// use machina::{StateMachine, Transition};
///
/// let mut machine = StateMachine::new();
/// machine.add_states(["idle", "busy"]);
/// machine.add_transition(Transition::new("idle", "busy"));
///
/// assert!(machine.goto("idle"));
/// assert!(machine.goto("busy"));
/// assert!(!machine.goto("unknown"));
/// assert_eq!(machine.current_state_name(), Some("busy"));
/// ```
pub struct StateMachine {
    states: HashMap<String, State>,
    transitions: HashMap<String, HashMap<String, Option<TransitionHook>>>,
    current: Option<String>,
}

impl StateMachine {
    /// Create an empty machine with no states and no current state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            transitions: HashMap::new(),
            current: None,
        }
    }

    /// Build a machine from a [`MachineConfig`].
    ///
    /// Registers the configured states and transitions in order, then
    /// applies the initial state if one is named. Fails with
    /// [`ConfigError::UnknownInitialState`] when the named initial state
    /// is not among the registered ones.
    ///
    /// With `initial_on_enter` set, the initial state's on-enter hook
    /// fires during construction and receives the initial state's own
    /// name as the previous state, not `None`. Callers rely on that
    /// argument; an absent hook is skipped like everywhere else.
    pub fn from_config(config: MachineConfig) -> Result<Self, ConfigError> {
        let mut machine = StateMachine::new();
        machine.add_states(config.states);
        for transition in config.transitions {
            machine.add_transition(transition);
        }

        if let Some(initial) = config.initial_state {
            if !machine.states.contains_key(&initial) {
                return Err(ConfigError::UnknownInitialState { name: initial });
            }
            machine.current = Some(initial.clone());
            if config.initial_on_enter {
                if let Some(hook) = machine
                    .states
                    .get(&initial)
                    .and_then(|state| state.on_enter.as_ref())
                {
                    // The entered state doubles as the previous-state
                    // argument here.
                    hook(Some(initial.as_str()));
                }
            }
            debug!(initial = %initial, "initial state set");
        }

        Ok(machine)
    }

    /// Register a state, overwriting any previous descriptor with the
    /// same name. The transition table is not touched.
    ///
    /// Accepts anything that converts into a [`State`]: a bare name or a
    /// full descriptor.
    pub fn add_state(&mut self, state: impl Into<State>) -> &mut Self {
        let state = state.into();
        self.states.insert(state.name.clone(), state);
        self
    }

    /// Register states in sequence order; later elements overwrite
    /// earlier ones on name collision.
    pub fn add_states<I>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        for state in states {
            self.add_state(state);
        }
        self
    }

    /// Replace the on-enter hook of an already-registered state.
    ///
    /// Fails with [`MachineError::UnknownState`] when `name` is not in
    /// the state table; no placeholder entry is created.
    pub fn set_on_enter<F>(&mut self, name: &str, hook: F) -> Result<(), MachineError>
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| MachineError::UnknownState {
                name: name.to_string(),
            })?;
        state.on_enter = Some(Box::new(hook));
        Ok(())
    }

    /// Replace the on-exit hook of an already-registered state.
    ///
    /// Fails with [`MachineError::UnknownState`] when `name` is not in
    /// the state table; no placeholder entry is created.
    pub fn set_on_exit<F>(&mut self, name: &str, hook: F) -> Result<(), MachineError>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| MachineError::UnknownState {
                name: name.to_string(),
            })?;
        state.on_exit = Some(Box::new(hook));
        Ok(())
    }

    /// Register a transition for its ordered `(from, to)` pair,
    /// replacing any earlier registration for the same pair. The inner
    /// destination table is created lazily on the first transition out
    /// of a source.
    pub fn add_transition(&mut self, transition: Transition) {
        let Transition {
            from,
            to,
            on_transition,
        } = transition;
        self.transitions
            .entry(from)
            .or_default()
            .insert(to, on_transition);
    }

    /// Look up the hook registered for the ordered `(from, to)` pair.
    ///
    /// Returns `Ok(None)` when the pair has no registration or a
    /// hookless one. Fails with [`MachineError::InvalidArgument`] when
    /// either argument is not state-name-shaped: state names are
    /// non-empty, so an empty string can only be a mistaken argument.
    pub fn get_transition(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<&TransitionHook>, MachineError> {
        if from.is_empty() || to.is_empty() {
            return Err(MachineError::InvalidArgument {
                reason: "empty string cannot name a state, call with the state names".to_string(),
            });
        }
        Ok(self
            .transitions
            .get(from)
            .and_then(|targets| targets.get(to))
            .and_then(|slot| slot.as_ref()))
    }

    /// True when `name` is in the state table.
    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Attempt to move the machine to the named state.
    ///
    /// Returns `false` without side effects when `target` is not
    /// registered; a rejected move is a normal outcome, never an error.
    /// Otherwise dispatches synchronously, in order, each step only if
    /// the relevant hook is registered:
    ///
    /// 1. the current state's on-exit hook, argument: the target's name;
    /// 2. the transition hook registered for the ordered (current,
    ///    target) pair, when the machine has a current state;
    /// 3. the target's on-enter hook, argument: the previous state's
    ///    name, or `None` when the machine had no current state.
    ///
    /// The current-state reference is committed after the hooks run, and
    /// `goto` returns `true`.
    ///
    /// A self-transition (`target` equals the current state's name) is a
    /// full transition: all three hooks fire, in the same order, with
    /// the same state on both sides.
    pub fn goto(&mut self, target: &str) -> bool {
        if !self.states.contains_key(target) {
            trace!(to = target, "goto rejected: state not registered");
            return false;
        }
        let from_name = self.current.clone();

        if let Some(from) = from_name.as_deref().and_then(|name| self.states.get(name)) {
            if let Some(hook) = &from.on_exit {
                hook(target);
            }
        }

        if let Some(from) = from_name.as_deref() {
            let hook = self
                .transitions
                .get(from)
                .and_then(|targets| targets.get(target))
                .and_then(|slot| slot.as_ref());
            if let Some(hook) = hook {
                hook(from, target);
            }
        }

        if let Some(hook) = self
            .states
            .get(target)
            .and_then(|state| state.on_enter.as_ref())
        {
            hook(from_name.as_deref());
        }

        self.current = Some(target.to_string());
        trace!(from = ?from_name, to = target, "state changed");
        true
    }

    /// The descriptor of the current state, or `None` before the
    /// machine has been started. Never fails.
    ///
    /// The reference resolves by name: overwriting the current state's
    /// descriptor through [`add_state`](Self::add_state) changes what
    /// this returns without unsetting it.
    pub fn current_state(&self) -> Option<&State> {
        self.current
            .as_deref()
            .and_then(|name| self.states.get(name))
    }

    /// The name of the current state, or `None` before the machine has
    /// been started.
    pub fn current_state_name(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("StateMachine")
            .field("states", &names)
            .field("current", &self.current)
            .finish()
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::builder::MachineConfig;
    use std::sync::{Arc, Mutex};

    #[test]
    fn full_transition_dispatches_exactly_four_hooks_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let enter_a = Arc::clone(&order);
        let exit_a = Arc::clone(&order);
        let cross = Arc::clone(&order);
        let enter_b = Arc::clone(&order);

        let mut machine = MachineConfig {
            states: vec![
                State::new("a")
                    .on_enter(move |_| enter_a.lock().unwrap().push("enter a"))
                    .on_exit(move |_| exit_a.lock().unwrap().push("exit a")),
                State::new("b").on_enter(move |_| enter_b.lock().unwrap().push("enter b")),
            ],
            transitions: vec![Transition::new("a", "b")
                .on_transition(move |_, _| cross.lock().unwrap().push("a to b"))],
            initial_state: Some("a".to_string()),
            initial_on_enter: true,
        }
        .build()
        .unwrap();

        assert!(machine.goto("b"));
        assert_eq!(
            *order.lock().unwrap(),
            ["enter a", "exit a", "a to b", "enter b"]
        );
    }

    #[test]
    fn cat_walkthrough_logs_in_documented_order() {
        let logged = Arc::new(Mutex::new(Vec::new()));
        let fell_asleep = Arc::clone(&logged);
        let not_asleep = Arc::clone(&logged);
        let transitioned = Arc::clone(&logged);
        let woke_up = Arc::clone(&logged);

        let mut cat = MachineConfig {
            states: vec![
                State::new("sleepy")
                    .on_enter(move |_| {
                        fell_asleep.lock().unwrap().push("The cat fell asleep");
                    })
                    .on_exit(move |_| {
                        not_asleep
                            .lock()
                            .unwrap()
                            .push("The cat was no longer asleep!");
                    }),
                State::new("awake").on_enter(move |_| {
                    woke_up.lock().unwrap().push("The cat woke up!");
                }),
            ],
            transitions: vec![Transition::new("sleepy", "awake").on_transition(move |_, _| {
                transitioned
                    .lock()
                    .unwrap()
                    .push("The cat transitioned from asleep to awake");
            })],
            initial_state: Some("sleepy".to_string()),
            initial_on_enter: true,
        }
        .build()
        .unwrap();

        assert!(cat.goto("awake"));
        assert_eq!(
            *logged.lock().unwrap(),
            [
                "The cat fell asleep",
                "The cat was no longer asleep!",
                "The cat transitioned from asleep to awake",
                "The cat woke up!",
            ]
        );
    }

    #[test]
    fn cat_walkthrough_without_initial_state_reaches_the_same_log() {
        let logged = Arc::new(Mutex::new(Vec::new()));
        let fell_asleep = Arc::clone(&logged);
        let not_asleep = Arc::clone(&logged);
        let transitioned = Arc::clone(&logged);
        let woke_up = Arc::clone(&logged);

        let mut cat = MachineConfig {
            states: vec![
                State::new("sleepy")
                    .on_enter(move |_| {
                        fell_asleep.lock().unwrap().push("The cat fell asleep");
                    })
                    .on_exit(move |_| {
                        not_asleep
                            .lock()
                            .unwrap()
                            .push("The cat was no longer asleep!");
                    }),
                State::new("awake").on_enter(move |_| {
                    woke_up.lock().unwrap().push("The cat woke up!");
                }),
            ],
            transitions: vec![Transition::new("sleepy", "awake").on_transition(move |_, _| {
                transitioned
                    .lock()
                    .unwrap()
                    .push("The cat transitioned from asleep to awake");
            })],
            ..Default::default()
        }
        .build()
        .unwrap();

        assert!(cat.goto("sleepy"));
        assert!(cat.goto("awake"));
        assert_eq!(
            *logged.lock().unwrap(),
            [
                "The cat fell asleep",
                "The cat was no longer asleep!",
                "The cat transitioned from asleep to awake",
                "The cat woke up!",
            ]
        );
    }

    #[test]
    fn hooks_receive_neighbor_state_names_across_a_walk() {
        let entered_from = Arc::new(Mutex::new(Vec::new()));
        let exited_to = Arc::new(Mutex::new(Vec::new()));
        let enter_log = Arc::clone(&entered_from);
        let exit_log = Arc::clone(&exited_to);

        let mut machine = StateMachine::new();
        machine.add_state("a");
        machine.add_state(
            State::new("b")
                .on_enter(move |prev| {
                    enter_log.lock().unwrap().push(prev.map(str::to_string));
                })
                .on_exit(move |next| {
                    exit_log.lock().unwrap().push(next.to_string());
                }),
        );
        machine.add_state("c");

        assert!(machine.goto("a"));
        assert!(machine.goto("b"));
        assert!(machine.goto("c"));

        assert_eq!(*entered_from.lock().unwrap(), [Some("a".to_string())]);
        assert_eq!(*exited_to.lock().unwrap(), ["c"]);
    }
}
