//! Command tree of the bundled `subcmd` program.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgAction};
use tracing::instrument;

use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Command, Context, DispatchError, DispatchResult, Set};
use crate::flags::flag_set;
use crate::units;

/// Tree rooted at the running executable's name.
pub fn build_app(settings: Settings) -> Set {
    build_app_with(std::env::current_exe, settings)
}

/// Same tree, with the root name taken from `query`.
pub fn build_app_with<F>(query: F, settings: Settings) -> Set
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    let settings = Arc::new(settings);

    Set::root_with(
        query,
        units![
            Command::new("echo", "print words to stdout", echo),
            Set::new(
                "config",
                "inspect configuration",
                units![
                    Command::new("show", "print resolved settings", move |ctx, args| {
                        config_show(ctx, args, &settings)
                    }),
                    Command::new("path", "print global config file path", config_path),
                ],
            ),
            Command::new("version", "print version", version),
        ],
    )
}

#[instrument(level = "debug", skip(ctx))]
fn echo(ctx: &Context, args: &[String]) -> DispatchResult<()> {
    let matches = flag_set(ctx)
        .about("print words to stdout")
        .arg(
            Arg::new("no-newline")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("do not print the trailing newline"),
        )
        .arg(
            Arg::new("upper")
                .short('u')
                .long("upper")
                .action(ArgAction::SetTrue)
                .help("uppercase the output"),
        )
        .arg(Arg::new("words").num_args(0..).trailing_var_arg(true))
        .parse(args);

    let words: Vec<String> = matches
        .get_many::<String>("words")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let text = format_echo(&words, matches.get_flag("upper"));
    if matches.get_flag("no-newline") {
        output::raw(&text);
    } else {
        output::info(&text);
    }
    Ok(())
}

/// Words joined by single spaces, optionally uppercased.
pub fn format_echo(words: &[String], upper: bool) -> String {
    let text = words.join(" ");
    if upper {
        text.to_uppercase()
    } else {
        text
    }
}

fn config_show(ctx: &Context, args: &[String], settings: &Settings) -> DispatchResult<()> {
    flag_set(ctx).about("print resolved settings").parse(args);
    let rendered = settings.to_toml().map_err(DispatchError::other)?;
    output::raw(&rendered);
    Ok(())
}

fn config_path(ctx: &Context, args: &[String]) -> DispatchResult<()> {
    flag_set(ctx).about("print global config file path").parse(args);
    let path = global_config_path().ok_or_else(|| {
        DispatchError::other("cannot determine config directory for this platform")
    })?;
    output::info(&path.display());
    Ok(())
}

fn version(_ctx: &Context, _args: &[String]) -> DispatchResult<()> {
    output::info(env!("CARGO_PKG_VERSION"));
    Ok(())
}
