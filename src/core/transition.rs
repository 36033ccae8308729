//! Transition descriptors.

use std::fmt;

/// Hook fired when a registered transition is traversed.
///
/// Receives the source and destination state names, in that order.
pub type TransitionHook = Box<dyn Fn(&str, &str) + Send + Sync>;

/// A directed edge between two named states.
///
/// At most one transition exists per ordered `(from, to)` pair within a
/// registry; registering the pair again replaces the earlier descriptor,
/// hook included. A `from == to` self-transition is an ordinary edge,
/// distinct from no transition being registered at all.
///
/// # Example
///
/// ```rust
/// use machina::Transition;
///
/// let edge = Transition::new("locked", "unlocked")
///     .on_transition(|from, to| println!("{from} -> {to}"));
/// assert_eq!(edge.from, "locked");
/// assert_eq!(edge.to, "unlocked");
/// assert!(edge.on_transition.is_some());
/// ```
pub struct Transition {
    /// Source state name.
    pub from: String,

    /// Destination state name.
    pub to: String,

    /// Fired when the machine moves across this edge.
    pub on_transition: Option<TransitionHook>,
}

impl Transition {
    /// Create a transition with no hook.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            on_transition: None,
        }
    }

    /// Attach the traversal hook.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.on_transition = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn new_transition_has_no_hook() {
        let edge = Transition::new("a", "b");
        assert_eq!(edge.from, "a");
        assert_eq!(edge.to, "b");
        assert!(edge.on_transition.is_none());
    }

    #[test]
    fn fluent_hook_is_stored_and_callable() {
        let calls = Arc::new(AtomicUsize::new(0));
        let tally = Arc::clone(&calls);

        let edge = Transition::new("a", "b").on_transition(move |_from, _to| {
            tally.fetch_add(1, Ordering::SeqCst);
        });

        edge.on_transition.as_ref().unwrap()("a", "b");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn self_transition_is_an_ordinary_edge() {
        let edge = Transition::new("a", "a");
        assert_eq!(edge.from, edge.to);
    }

    #[test]
    fn debug_shows_endpoints_and_hook_presence() {
        let edge = Transition::new("a", "b").on_transition(|_, _| {});
        let rendered = format!("{edge:?}");
        assert!(rendered.contains("\"a\""));
        assert!(rendered.contains("\"b\""));
        assert!(rendered.contains("on_transition: true"));
    }
}
