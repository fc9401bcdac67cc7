//! Flag parsers labelled with the routed command path.

use std::sync::{Arc, Mutex};

use clap::{Arg, ArgAction};

use subcmd::{flag_set, run, units, Command, Context, Set};

#[test]
fn given_context_without_names_when_flag_set_built_then_name_is_empty() {
    let fs = flag_set(&Context::new());

    assert_eq!(fs.name(), "");
}

#[test]
fn given_nested_leaf_when_flag_set_built_then_name_is_joined_path() {
    let got = Arc::new(Mutex::new(String::new()));
    let sink = got.clone();
    let set = Set::new(
        "first",
        "",
        units![Set::new(
            "second",
            "",
            units![Command::new("third", "", move |ctx, _| {
                *sink.lock().unwrap() = flag_set(ctx).name().to_string();
                Ok(())
            })]
        )],
    );

    run(&set, ["second", "third"]).expect("routing should succeed");

    assert_eq!(*got.lock().unwrap(), "first second third");
}

#[test]
fn given_leaf_args_when_parsed_by_flag_set_then_values_are_typed() {
    let got = Arc::new(Mutex::new(None));
    let sink = got.clone();
    let set = Set::new(
        "tool",
        "",
        units![Command::new("add", "add a user", move |ctx, args| {
            let matches = flag_set(ctx)
                .arg(Arg::new("email").long("email").required(true))
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("1"),
                )
                .arg(Arg::new("force").short('f').action(ArgAction::SetTrue))
                .parse(args);
            *sink.lock().unwrap() = Some((
                matches.get_one::<String>("email").cloned(),
                matches.get_one::<u32>("count").copied(),
                matches.get_flag("force"),
            ));
            Ok(())
        })],
    );

    run(&set, ["add", "--email", "x@example.com", "-f", "--count", "3"]).unwrap();

    assert_eq!(
        *got.lock().unwrap(),
        Some((Some("x@example.com".to_string()), Some(3), true))
    );
}

#[test]
fn given_flag_set_when_inspected_then_command_is_configured_for_leaf_args() {
    let ctx = Context::new().with_name("tool").with_name("sync");
    let cmd = flag_set(&ctx).about("sync things").into_command();

    assert_eq!(cmd.get_name(), "tool sync");
    assert!(cmd.is_no_binary_name_set());
}
