//! Sibling listing rendered for resolution failures.

use rstest::rstest;

use subcmd::{run, units, Command, DispatchError, Reason, Set, UsageLayout};

fn failing_set() -> Set {
    Set::new(
        "fail",
        "",
        units![
            Command::without_handler("list", "list all entries"),
            Command::without_handler("add", "add a new entry"),
            Command::without_handler("delete", "delete an entry"),
            Set::new("item", "operate items", units![]),
        ],
    )
}

const LISTING: &str = "\n\nAvailable sub-commands are:\n\
    \n\tlist        list all entries\
    \n\tadd         add a new entry\
    \n\tdelete      delete an entry\
    \n\titem        operate items";

#[rstest]
#[case(&[], Reason::NoCommandsSelected, "no commands selected.")]
#[case(&["foo"], Reason::CommandNotFound, "command not found.")]
fn given_unroutable_args_when_run_then_lists_children_in_order(
    #[case] args: &[&str],
    #[case] reason: Reason,
    #[case] first_line: &str,
) {
    let err = run(failing_set(), args.iter().copied()).unwrap_err();

    let DispatchError::Resolution(e) = &err else {
        panic!("expected resolution error, got {err:?}");
    };
    assert_eq!(e.reason(), reason);
    assert_eq!(err.to_string(), format!("{first_line}{LISTING}"));
}

#[test]
fn given_long_child_name_when_rendered_then_width_rounds_up_to_sixteen() {
    let set = Set::new(
        "faillong",
        "",
        units![
            Command::without_handler("verylongname", "long name command"),
            Command::without_handler("short", "short name command"),
        ],
    );

    let err = run(&set, Vec::<String>::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "no commands selected.\n\nAvailable sub-commands are:\n\
         \n\tverylongname    long name command\
         \n\tshort           short name command"
    );
}

#[test]
fn given_empty_set_when_run_then_listing_has_only_header() {
    let err = run(Set::new("empty", "", units![]), ["x"]).unwrap_err();

    assert_eq!(err.to_string(), "command not found.\n\nAvailable sub-commands are:\n");
}

#[test]
fn given_configured_layout_when_rendered_then_uses_its_widths() {
    let err = run(failing_set(), ["nope"]).unwrap_err();
    let layout = UsageLayout {
        min_width: 8,
        column_step: 8,
    };

    assert_eq!(
        err.render(&layout),
        "command not found.\n\nAvailable sub-commands are:\n\
         \n\tlist    list all entries\
         \n\tadd     add a new entry\
         \n\tdelete  delete an entry\
         \n\titem    operate items"
    );
}

#[test]
fn given_resolution_error_when_rendered_twice_then_output_is_stable() {
    let DispatchError::Resolution(e) = run(failing_set(), ["nope"]).unwrap_err() else {
        panic!("expected resolution error");
    };

    assert_eq!(e.to_string(), e.render(&UsageLayout::default()));
    assert_eq!(e.to_string(), e.to_string());
}
