//! Minimal dispatcher for hierarchical sub-command trees.
//!
//! A program describes its interface as a tree of [`Set`]s (groups) and
//! [`Command`]s (leaves). [`run`] consumes one argument per level to pick a
//! child and hands everything left over to the selected command's handler,
//! together with a [`Context`] recording the names routed through.
//!
//! ```ignore
//! use subcmd::{flag_set, run, units, Command, Set};
//!
//! let root = Set::root(units![
//!     Set::new("user", "manage users", units![
//!         Command::new("add", "add a user", |ctx, args| {
//!             let matches = flag_set(ctx)
//!                 .arg(clap::Arg::new("email").long("email"))
//!                 .parse(args);
//!             Ok(())
//!         }),
//!     ]),
//! ]);
//! run(&root, std::env::args().skip(1))?;
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod flags;
pub mod macros;
pub mod util;

pub use domain::{
    names, BoxError, CancelSignal, Command, Context, DispatchError, DispatchResult, Handler,
    Names, Reason, ResolutionError, Set, Unit, UsageLayout,
};
pub use flags::{flag_set, FlagSet};

/// Dispatch `args` through `root` with a fresh context.
pub fn run<R, I, S>(root: R, args: I) -> DispatchResult<()>
where
    R: Into<Unit>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_with_signal(root, CancelSignal::new(), args)
}

/// Like [`run`], carrying `signal` to the handler untouched.
pub fn run_with_signal<R, I, S>(root: R, signal: CancelSignal, args: I) -> DispatchResult<()>
where
    R: Into<Unit>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let root = root.into();
    tracing::debug!(root = root.name(), ?args, "dispatching");
    root.run(&Context::with_signal(signal), &args)
}
