//! Scripted shell sessions.

use std::io::Cursor;

use roster_cli::shell;
use roster_core::{Controller, LoadError, Message, Record, RecordId};

fn users() -> Vec<Record> {
    (1u64..=15)
        .map(|n| {
            let role = if n % 5 == 0 { "admin" } else { "member" };
            Record::new(
                n,
                format!("User {n:02}"),
                format!("user{n}@mailinator.com"),
                role,
            )
        })
        .collect()
}

fn session(script: &str) -> (Controller, String) {
    let mut controller = Controller::new();
    controller.update(Message::loaded(Ok(users())));

    let mut output = Vec::new();
    shell::run(
        &mut controller,
        Cursor::new(script.to_string()),
        &mut output,
        || Message::loaded(Ok(users())),
    )
    .unwrap();
    (controller, String::from_utf8(output).unwrap())
}

#[test]
fn test_initial_table_and_quit() {
    let (controller, output) = session("quit\n");

    assert!(output.starts_with("[info] Loaded 15 records"));
    assert!(output.contains("Page 1 of 2 | 1-10 of 15 | 0 selected"));
    assert_eq!(controller.state().store().len(), 15);
}

#[test]
fn test_bulk_delete_session() {
    let (controller, output) = session("toggle 1\ntoggle 3\ntoggle 5\ndelete-selected\n");

    assert!(output.contains("[ok] 3 records deleted"));
    assert!(output.contains("1-10 of 12 | 0 selected"));
    assert_eq!(controller.state().store().len(), 12);
    assert!(controller.state().selection().is_empty());
}

#[test]
fn test_edit_session() {
    let (controller, output) = session("edit 3\nset 3 name New Name\nedit 3\n");

    assert!(output.contains("editing"));
    assert!(output.contains("[ok] Record updated"));
    let record = controller
        .state()
        .store()
        .get(&RecordId::from("3"))
        .unwrap();
    assert_eq!(record.name, "New Name");
}

#[test]
fn test_search_and_paging() {
    let (controller, output) = session("rows 5\nlast\nsearch admin\n");

    assert!(output.contains("Page 3 of 3 | 11-15 of 15"));
    assert!(output.contains("Page 1 of 1 | 1-3 of 3"));
    assert!(output.contains("search: admin"));
    assert_eq!(controller.state().pagination().current_page(), 1);
}

#[test]
fn test_bad_input_keeps_going() {
    let (controller, output) = session("page two\nfrobnicate\nset 3 age 40\ndelete 2\n");

    assert!(output.contains("error: 'two' is not a valid number for 'page'"));
    assert!(output.contains("error: unknown command 'frobnicate'"));
    assert!(output.contains("error: unknown field 'age'"));
    assert_eq!(controller.state().store().len(), 14);
}

#[test]
fn test_reload_restores_records() {
    let (controller, output) = session("delete 1\ndelete 2\nreload\n");

    assert!(output.contains("1-10 of 13"));
    assert_eq!(output.matches("[info] Loaded 15 records").count(), 2);
    assert_eq!(controller.state().store().len(), 15);
}

#[test]
fn test_failed_reload_empties_table() {
    let mut controller = Controller::new();
    controller.update(Message::loaded(Ok(users())));
    controller.update(Message::toggle("4"));

    let mut output = Vec::new();
    shell::run(
        &mut controller,
        Cursor::new("reload\n".to_string()),
        &mut output,
        || {
            Message::loaded(Err(LoadError::Status {
                status: 503,
                endpoint: "http://localhost/users".to_string(),
            }))
        },
    )
    .unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("[error] Failed to load records"));
    assert!(output.contains("No records."));
    assert!(controller.state().selection().is_empty());
}

#[test]
fn test_end_of_input_ends_session() {
    let (_, output) = session("help\n");
    assert!(output.contains("delete-selected"));
    assert!(output.ends_with(&format!("{}\n", shell::PROMPT)));
}
