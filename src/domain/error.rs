//! Dispatch errors (no I/O, no terminal concerns)

use std::fmt;

use thiserror::Error;

use super::context::Names;
use super::unit::{Set, Unit};
use super::usage::UsageLayout;
use crate::exitcode;

/// Boxed error returned by user handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a set could not pick a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    NoCommandsSelected,
    CommandNotFound,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::NoCommandsSelected => "no commands selected",
            Reason::CommandNotFound => "command not found",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set failed to route its arguments.
///
/// Only the set and the reason are captured; the sibling listing is built
/// from the set's children each time the message is requested.
#[derive(Debug, Clone)]
pub struct ResolutionError {
    set: Set,
    reason: Reason,
}

impl ResolutionError {
    pub fn new(set: Set, reason: Reason) -> Self {
        Self { set, reason }
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// The set at which resolution stopped.
    pub fn set(&self) -> &Set {
        &self.set
    }

    pub fn children(&self) -> &[Unit] {
        self.set.children()
    }

    pub fn render(&self, layout: &UsageLayout) -> String {
        layout.render(self.reason.as_str(), self.set.children())
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&UsageLayout::default()))
    }
}

impl std::error::Error for ResolutionError {}

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no function declared for command: {}", .names.joined())]
    MissingHandler { names: Names },

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Error produced by a command handler, passed through as is.
    #[error(transparent)]
    Handler(#[from] BoxError),
}

/// Result type for dispatch and handlers.
pub type DispatchResult<T> = Result<T, DispatchError>;

impl DispatchError {
    /// Wrap any error raised inside a handler.
    pub fn other(err: impl Into<BoxError>) -> Self {
        Self::Handler(err.into())
    }

    /// Resolution failures render with `layout`; everything else uses `Display`.
    pub fn render(&self, layout: &UsageLayout) -> String {
        match self {
            DispatchError::Resolution(e) => e.render(layout),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::Resolution(_) => exitcode::USAGE,
            DispatchError::MissingHandler { .. } => exitcode::SOFTWARE,
            DispatchError::Handler(_) => exitcode::FAILURE,
        }
    }
}
