//! Command tree units and the routing algorithm.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::context::Context;
use super::error::{DispatchError, DispatchResult, Reason, ResolutionError};
use super::exe;

/// Entry point of a leaf command.
///
/// Receives the context (name path including the command itself) and every
/// argument left after routing.
pub type Handler = Arc<dyn Fn(&Context, &[String]) -> DispatchResult<()> + Send + Sync>;

/// Leaf of the tree, bound to a handler.
#[derive(Clone)]
pub struct Command {
    name: String,
    desc: String,
    handler: Option<Handler>,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, desc: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Context, &[String]) -> DispatchResult<()> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(f);
        Self::with_handler(name, desc, Some(handler))
    }

    /// Declared but not implemented; running it reports `MissingHandler`.
    pub fn without_handler(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self::with_handler(name, desc, None)
    }

    pub fn with_handler(
        name: impl Into<String>,
        desc: impl Into<String>,
        handler: Option<Handler>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    #[instrument(level = "debug", skip_all, fields(command = %self.name))]
    pub fn run(&self, ctx: &Context, args: &[String]) -> DispatchResult<()> {
        let ctx = ctx.with_name(&self.name);
        match &self.handler {
            None => Err(DispatchError::MissingHandler {
                names: ctx.names().clone(),
            }),
            Some(handler) => {
                debug!(path = %ctx.names(), ?args, "invoking handler");
                handler(&ctx, args)
            }
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("desc", &self.desc)
            .field("handler", &self.handler.as_ref().map(|_| "Fn"))
            .finish()
    }
}

/// Named group routing to one of its children by the first argument.
///
/// Children keep their definition order, which is both the lookup order and
/// the order of the listing on failure.
#[derive(Debug, Clone)]
pub struct Set {
    name: String,
    desc: String,
    children: Arc<[Unit]>,
}

impl Set {
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        children: impl IntoIterator<Item = Unit>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Root set named after the running executable.
    ///
    /// # Panics
    /// If the executable path cannot be determined.
    pub fn root(children: impl IntoIterator<Item = Unit>) -> Self {
        Self::root_with(std::env::current_exe, children)
    }

    /// Root set named from `query` instead of the real executable path.
    ///
    /// # Panics
    /// If `query` fails.
    pub fn root_with<F>(query: F, children: impl IntoIterator<Item = Unit>) -> Self
    where
        F: FnOnce() -> io::Result<PathBuf>,
    {
        Self::new(exe::root_name_from(query), "", children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn children(&self) -> &[Unit] {
        &self.children
    }

    /// First child named `name`, in definition order.
    pub fn child(&self, name: &str) -> Option<&Unit> {
        self.children.iter().find(|c| c.name() == name)
    }

    #[instrument(level = "debug", skip_all, fields(set = %self.name))]
    pub fn run(&self, ctx: &Context, args: &[String]) -> DispatchResult<()> {
        let Some(selector) = args.first() else {
            debug!("no selector given");
            return Err(ResolutionError::new(self.clone(), Reason::NoCommandsSelected).into());
        };
        let child = self.child(selector).ok_or_else(|| {
            debug!(%selector, "no child matches selector");
            ResolutionError::new(self.clone(), Reason::CommandNotFound)
        })?;
        trace!(%selector, remaining = args.len() - 1, "routing to child");
        child.run(&ctx.with_name(&self.name), &args[1..])
    }
}

/// Node of the command tree.
#[derive(Debug, Clone)]
pub enum Unit {
    Command(Command),
    Set(Set),
}

impl Unit {
    pub fn name(&self) -> &str {
        match self {
            Unit::Command(c) => c.name(),
            Unit::Set(s) => s.name(),
        }
    }

    pub fn desc(&self) -> &str {
        match self {
            Unit::Command(c) => c.desc(),
            Unit::Set(s) => s.desc(),
        }
    }

    pub fn run(&self, ctx: &Context, args: &[String]) -> DispatchResult<()> {
        match self {
            Unit::Command(c) => c.run(ctx, args),
            Unit::Set(s) => s.run(ctx, args),
        }
    }
}

impl From<Command> for Unit {
    fn from(command: Command) -> Self {
        Unit::Command(command)
    }
}

impl From<Set> for Unit {
    fn from(set: Set) -> Self {
        Unit::Set(set)
    }
}

impl From<&Command> for Unit {
    fn from(command: &Command) -> Self {
        Unit::Command(command.clone())
    }
}

impl From<&Set> for Unit {
    fn from(set: &Set) -> Self {
        Unit::Set(set.clone())
    }
}

impl From<&Unit> for Unit {
    fn from(unit: &Unit) -> Self {
        unit.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_child_first_match_wins() {
        let set = Set::new(
            "dup",
            "",
            [
                Unit::from(Command::without_handler("same", "first")),
                Unit::from(Command::without_handler("same", "second")),
            ],
        );
        assert_eq!(set.child("same").map(Unit::desc), Some("first"));
        assert!(set.child("other").is_none());
    }

    #[test]
    fn test_run_routes_to_first_duplicate() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let set = Set::new(
            "dup",
            "",
            [
                Unit::from(Command::new("same", "", move |_, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                })),
                Unit::from(Command::without_handler("same", "")),
            ],
        );
        set.run(&Context::new(), &["same".to_string()]).unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clone_shares_children() {
        let set = Set::new("s", "", [Unit::from(Command::without_handler("a", ""))]);
        let copy = set.clone();
        assert!(std::ptr::eq(set.children(), copy.children()));
    }

    #[test]
    fn test_debug_hides_handler() {
        let cmd = Command::new("c", "d", |_, _| Ok(()));
        let dbg = format!("{cmd:?}");
        assert!(dbg.contains("\"c\""));
        assert!(dbg.contains("Fn"));
        assert!(cmd.has_handler());
    }
}
