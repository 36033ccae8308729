//! Machina: a minimal synchronous state machine library
//!
//! A machine tracks one current state among a registered set of named
//! states and drives transitions between them, invoking lifecycle hooks
//! in a fixed, deterministic order: the old state's on-exit, the
//! transition's own hook, then the new state's on-enter. Everything
//! runs inline in the calling thread; `goto` returns only after every
//! hook has.
//!
//! # Core Concepts
//!
//! - **State**: a named node with optional on-enter/on-exit hooks
//! - **Transition**: a registered, directed edge with an optional hook
//!   fired when traversed
//! - **Goto**: the single state-change operation; moving to an
//!   unregistered state is rejected with `false`, never an error
//!
//! # Example
//!
//! ```rust
//! use machina::{MachineConfig, State, Transition};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let woke = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&woke);
//!
//! let mut cat = MachineConfig {
//!     states: vec![
//!         State::new("sleepy"),
//!         State::new("awake").on_enter(move |_prev| {
//!             counter.fetch_add(1, Ordering::SeqCst);
//!         }),
//!     ],
//!     transitions: vec![Transition::new("sleepy", "awake")],
//!     initial_state: Some("sleepy".to_string()),
//!     initial_on_enter: false,
//! }
//! .build()
//! .unwrap();
//!
//! assert!(cat.goto("awake"));
//! assert!(!cat.goto("grumpy"));
//! assert_eq!(cat.current_state_name(), Some("awake"));
//! assert_eq!(woke.load(Ordering::SeqCst), 1);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{
    new_state_machine, state, transition, ConfigError, MachineConfig, StateMachineBuilder,
};
pub use self::core::{EnterHook, ExitHook, State, Transition, TransitionHook};
pub use machine::{MachineError, StateMachine};
