//! Domain layer: command tree, routing, and resolution errors
//!
//! Independent of process arguments, terminals, and configuration loading.

pub mod context;
pub mod error;
pub mod exe;
pub mod unit;
pub mod usage;

pub use context::{names, CancelSignal, Context, Names};
pub use error::{BoxError, DispatchError, DispatchResult, Reason, ResolutionError};
pub use exe::{root_name, root_name_from, strip_exe_ext};
pub use unit::{Command, Handler, Set, Unit};
pub use usage::UsageLayout;
