//! Per-invocation resolution state threaded through the unit tree.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ordered names of the units traversed from the root to the current one.
///
/// Values are never mutated in place: [`Names::with`] returns a new list, so
/// contexts from different recursion branches cannot observe each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Names(Vec<String>);

impl Names {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this path with `name` appended.
    pub fn with(&self, name: &str) -> Self {
        let mut names = Vec::with_capacity(self.0.len() + 1);
        names.extend_from_slice(&self.0);
        names.push(name.to_string());
        Self(names)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Space-joined path, e.g. `"tool user add"`.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

impl<S: Into<String>> FromIterator<S> for Names {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Caller-owned cancellation flag.
///
/// The dispatcher only carries this to handlers; it never checks it.
#[derive(Debug, Clone, Default)]
pub struct CancelSignal(Arc<AtomicBool>);

impl CancelSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Execution context of a single top-level run.
///
/// Holds the name path and, separately, the caller's cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct Context {
    names: Names,
    signal: CancelSignal,
}

impl Context {
    /// Empty context, as seen outside any dispatch.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signal(signal: CancelSignal) -> Self {
        Self {
            names: Names::new(),
            signal,
        }
    }

    /// Derived context one level deeper; `self` is left untouched.
    pub fn with_name(&self, name: &str) -> Self {
        Self {
            names: self.names.with(name),
            signal: self.signal.clone(),
        }
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    pub fn signal(&self) -> &CancelSignal {
        &self.signal
    }
}

/// Name path recorded in `ctx`; empty when nothing was dispatched yet.
pub fn names(ctx: &Context) -> &[String] {
    ctx.names.as_slice()
}
