//! Flag parser scoped to the current command path.
//!
//! Parsing itself is delegated to clap; this only builds a parser labelled
//! with the names routed so far.

use std::ffi::OsString;

use clap::{Arg, ArgMatches};

use crate::domain::Context;

/// clap command named after the context's name path.
///
/// Expects the leaf's remaining arguments verbatim (no binary name) and
/// exits the process on a parse failure.
#[derive(Debug, Clone)]
pub struct FlagSet {
    command: clap::Command,
}

impl FlagSet {
    pub fn new(ctx: &Context) -> Self {
        let command = clap::Command::new(ctx.names().joined())
            .no_binary_name(true)
            .disable_version_flag(true);
        Self { command }
    }

    pub fn name(&self) -> &str {
        self.command.get_name()
    }

    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.command = self.command.about(about.into());
        self
    }

    pub fn command(&self) -> &clap::Command {
        &self.command
    }

    pub fn into_command(self) -> clap::Command {
        self.command
    }

    /// Parse `args`; on failure clap prints the error and exits.
    pub fn parse<I, T>(self, args: I) -> ArgMatches
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.command.get_matches_from(args)
    }
}

/// Flag parser for the command currently executing in `ctx`.
pub fn flag_set(ctx: &Context) -> FlagSet {
    FlagSet::new(ctx)
}
