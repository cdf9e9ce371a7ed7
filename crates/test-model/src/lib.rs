//! Deterministic reply selection for tests.

mod preset;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lexaid_model::{ReplyPool, ReplySelector};

pub use preset::*;

/// A [`ReplySelector`] that replays a [`SelectionScript`].
///
/// Clones share the same cursor and history, so a test can keep one clone
/// for assertions after handing another to the store.
///
/// # Panics
///
/// Selecting past the end of a non-repeating script, or scripting a text
/// that is not in the pool, panics. Both are mistakes in the test setup.
#[derive(Clone, Default)]
pub struct ScriptedSelector {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    script: SelectionScript,
    cursor: AtomicUsize,
    picked: Mutex<Vec<usize>>,
}

impl ScriptedSelector {
    /// Creates a selector replaying `script`.
    pub fn new(script: SelectionScript) -> Self {
        Self {
            inner: Arc::new(Inner {
                script,
                cursor: AtomicUsize::new(0),
                picked: Mutex::new(vec![]),
            }),
        }
    }

    /// A selector that always picks the same index.
    #[inline]
    pub fn always(index: usize) -> Self {
        Self::new(SelectionScript::with_indices([index]).repeating())
    }

    /// Indices picked so far, in order.
    pub fn picked(&self) -> Vec<usize> {
        self.inner.picked.lock().unwrap().clone()
    }

    /// Number of selections made so far.
    #[inline]
    pub fn calls(&self) -> usize {
        self.inner.cursor.load(Ordering::SeqCst)
    }
}

impl ReplySelector for ScriptedSelector {
    fn select(&self, pool: &ReplyPool) -> usize {
        let script = &self.inner.script;
        assert!(!script.steps.is_empty(), "selection script is empty");

        let call = self.inner.cursor.fetch_add(1, Ordering::SeqCst);
        let step_idx = if script.repeat {
            call % script.steps.len()
        } else {
            call
        };
        let Some(step) = script.steps.get(step_idx) else {
            panic!("selection script exhausted after {call} picks");
        };

        let index = match step {
            SelectionStep::Index(index) => *index % pool.len(),
            SelectionStep::Text(text) => pool
                .iter()
                .position(|reply| reply == text)
                .unwrap_or_else(|| panic!("{text:?} is not in the pool")),
        };
        self.inner.picked.lock().unwrap().push(index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_script() {
        let pool = ReplyPool::new(["a", "b", "c"]).unwrap();
        let selector = ScriptedSelector::new(SelectionScript::with_steps([
            SelectionStep::Index(2),
            SelectionStep::Text("a".to_owned()),
            SelectionStep::Index(4),
        ]));

        assert_eq!(pool.pick(&selector), "c");
        assert_eq!(pool.pick(&selector), "a");
        assert_eq!(pool.pick(&selector), "b");
        assert_eq!(selector.picked(), vec![2, 0, 1]);
        assert_eq!(selector.calls(), 3);
    }

    #[test]
    fn test_repeating_script() {
        let pool = ReplyPool::new(["a", "b"]).unwrap();
        let selector = ScriptedSelector::always(1);
        let shared = selector.clone();
        for _ in 0..5 {
            assert_eq!(pool.pick(&selector), "b");
        }
        assert_eq!(shared.calls(), 5);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_exhausted_script() {
        let pool = ReplyPool::canned();
        let selector =
            ScriptedSelector::new(SelectionScript::with_indices([0]));
        pool.pick(&selector);
        pool.pick(&selector);
    }
}
