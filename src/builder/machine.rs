//! Machine configuration and the fluent machine builder.

use crate::builder::error::ConfigError;
use crate::core::{State, Transition};
use crate::machine::StateMachine;

/// Configuration value for constructing a [`StateMachine`] in one shot.
///
/// Every field is optional in practice: the default configuration
/// builds an empty machine with no current state. When `initial_state`
/// is set it must name one of `states`, and with `initial_on_enter` the
/// initial state's on-enter hook fires during construction, receiving
/// the initial state's own name as the previous state.
///
/// # Example
///
/// ```rust
/// use machina::{MachineConfig, State, Transition};
///
/// let mut machine = MachineConfig {
///     states: vec![State::new("idle"), State::new("busy")],
///     transitions: vec![Transition::new("idle", "busy")],
///     initial_state: Some("idle".to_string()),
///     initial_on_enter: false,
/// }
/// .build()
/// .unwrap();
///
/// assert_eq!(machine.current_state_name(), Some("idle"));
/// assert!(machine.goto("busy"));
/// ```
#[derive(Debug, Default)]
pub struct MachineConfig {
    /// States to register, in order; later duplicates overwrite earlier.
    pub states: Vec<State>,

    /// Transitions to register, in order; later duplicates replace
    /// earlier ones for the same ordered pair.
    pub transitions: Vec<Transition>,

    /// Name of the state the machine starts in, when given. Must be
    /// registered in `states`.
    pub initial_state: Option<String>,

    /// Fire the initial state's on-enter hook during construction.
    pub initial_on_enter: bool,
}

impl MachineConfig {
    /// Build the machine described by this configuration.
    pub fn build(self) -> Result<StateMachine, ConfigError> {
        StateMachine::from_config(self)
    }
}

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use machina::{StateMachineBuilder, Transition};
///
/// let mut machine = StateMachineBuilder::new()
///     .states(["locked", "unlocked"])
///     .transition(Transition::new("locked", "unlocked"))
///     .initial("locked")
///     .build()
///     .unwrap();
///
/// assert!(machine.goto("unlocked"));
/// ```
pub struct StateMachineBuilder {
    config: MachineConfig,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
        }
    }

    /// Add a state: a bare name or a full descriptor.
    pub fn state(mut self, state: impl Into<State>) -> Self {
        self.config.states.push(state.into());
        self
    }

    /// Add multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        self.config.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition.
    pub fn transition(mut self, transition: Transition) -> Self {
        self.config.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition>,
    {
        self.config.transitions.extend(transitions);
        self
    }

    /// Set the initial state name.
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.config.initial_state = Some(name.into());
        self
    }

    /// Fire the initial state's on-enter hook at build time.
    pub fn enter_initial(mut self, fire: bool) -> Self {
        self.config.initial_on_enter = fire;
        self
    }

    /// Build the state machine.
    ///
    /// Fails with [`ConfigError::UnknownInitialState`] when an initial
    /// state was named but never added.
    pub fn build(self) -> Result<StateMachine, ConfigError> {
        self.config.build()
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
