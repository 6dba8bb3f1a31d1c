//! End-to-end session tests over in-memory and file input.

use scopekv::{Session, SessionConfig, SessionSummary, Store};
use std::fs;
use std::io::BufReader;
use tempfile::TempDir;

fn run(store: &mut Store, input: &str) -> String {
    let mut out = Vec::new();
    Session::new(store, SessionConfig::default())
        .run(input.as_bytes(), &mut out)
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_data_commands() {
    let mut store = Store::new();
    let out = run(&mut store, "SET ex 10\nGET ex\nUNSET ex\nGET ex\nEND\n");
    assert_eq!(out, "10\nNULL\n");
}

#[test]
fn test_transaction_commands() {
    let mut store = Store::new();
    let input = "\
BEGIN
SET a 10
GET a
BEGIN
SET a 20
GET a
ROLLBACK
GET a
ROLLBACK
GET a
END
";
    assert_eq!(run(&mut store, input), "10\n20\n10\nNULL\n");
}

#[test]
fn test_commit_then_rollback() {
    let mut store = Store::new();
    let input = "\
BEGIN
SET a 30
BEGIN
SET a 40
COMMIT
GET a
ROLLBACK
END
";
    assert_eq!(run(&mut store, input), "40\nNO TRANSACTION\n");
}

#[test]
fn test_numequalto_across_transactions() {
    let mut store = Store::new();
    let input = "\
SET a 10
BEGIN
NUMEQUALTO 10
BEGIN
UNSET a
NUMEQUALTO 10
ROLLBACK
NUMEQUALTO 10
COMMIT
END
";
    assert_eq!(run(&mut store, input), "1\n0\n1\n");
}

#[test]
fn test_store_outlives_session() {
    let mut store = Store::new();
    run(&mut store, "BEGIN\nSET a 1\n");
    assert_eq!(store.depth(), 1);

    // A second session continues the same transaction
    assert_eq!(run(&mut store, "GET a\nCOMMIT\nCOMMIT\n"), "1\nNO TRANSACTION\n");
    assert_eq!(store.get("a"), Some("1"));
}

#[test]
fn test_file_input_with_echo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("commands.txt");
    fs::write(&path, "SET a 10\nSET b 10\nNUMEQUALTO 10\nEND\nGET a\n").unwrap();

    let mut store = Store::new();
    let mut out = Vec::new();
    let file = fs::File::open(&path).unwrap();
    let summary = Session::new(&mut store, SessionConfig { echo: true })
        .run(BufReader::new(file), &mut out)
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "SET a 10\nSET b 10\nNUMEQUALTO 10\n2\nEND\n"
    );
    assert_eq!(
        summary,
        SessionSummary {
            lines: 4,
            commands: 4,
            ended: true
        }
    );
}

#[test]
fn test_rejected_lines_do_not_touch_store() {
    let mut store = Store::new();
    let out = run(&mut store, "SET a\nset a 1\nBEGIN x\nGET a\n");
    assert_eq!(
        out,
        "INVALID ARGUMENTS\nUNRECOGNIZED COMMAND\nINVALID ARGUMENTS\nNULL\n"
    );
    assert_eq!(store.depth(), 0);
    assert_eq!(store.stats().keys, 0);
}

#[test]
fn test_invalid_utf8_line_does_not_end_session() {
    let mut store = Store::new();
    let mut out = Vec::new();
    let input: &[u8] = b"SET a 10\nSET b \xff\nGET a\nNUMEQUALTO \xff\nGET b\nEND\n";
    let summary = Session::new(&mut store, SessionConfig::default())
        .run(input, &mut out)
        .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "10\n1\n\u{fffd}\n");
    assert!(summary.ended);
    assert_eq!(summary.lines, 6);
}
