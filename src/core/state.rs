//! State descriptors and their lifecycle hook slots.
//!
//! A state is a plain data record: a name plus two optional hooks. The
//! registry stores states by name and the engine invokes their hooks
//! synchronously while a `goto` is in flight.

use std::fmt;

/// Hook fired when a state becomes current.
///
/// Receives the name of the state being left, or `None` when the machine
/// had no current state yet.
pub type EnterHook = Box<dyn Fn(Option<&str>) + Send + Sync>;

/// Hook fired when a state stops being current.
///
/// Receives the name of the state being entered next.
pub type ExitHook = Box<dyn Fn(&str) + Send + Sync>;

/// A named state with optional lifecycle hooks.
///
/// A bare name is already a complete descriptor; `&str` and `String`
/// convert directly. Hooks are attached fluently here, or later through
/// [`StateMachine::set_on_enter`]/[`StateMachine::set_on_exit`] once the
/// state is registered.
///
/// Within a registry, `name` is the identity: re-registering a state
/// under an existing name replaces the whole descriptor, hooks included.
///
/// [`StateMachine::set_on_enter`]: crate::StateMachine::set_on_enter
/// [`StateMachine::set_on_exit`]: crate::StateMachine::set_on_exit
///
/// # Example
///
/// ```rust
/// use machina::State;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let woke = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&woke);
///
/// let awake = State::new("awake").on_enter(move |_prev| {
///     flag.store(true, Ordering::SeqCst);
/// });
/// assert_eq!(awake.name, "awake");
/// assert!(awake.on_enter.is_some());
///
/// let bare: State = "sleepy".into();
/// assert!(bare.on_enter.is_none());
/// ```
pub struct State {
    /// Unique name within a registry; non-empty text.
    pub name: String,

    /// Fired when this state becomes current.
    pub on_enter: Option<EnterHook>,

    /// Fired when this state stops being current.
    pub on_exit: Option<ExitHook>,
}

impl State {
    /// Create a state with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Attach the on-enter hook.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<&str>) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Attach the on-exit hook.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_exit = Some(Box::new(hook));
        self
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        State::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        State::new(name)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_exit", &self.on_exit.is_some())
            .finish()
    }
}
