mod common;
use common::*;

use core_input::ScriptedSource;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const CTRL_S: u8 = ctrl(b's');

#[test]
fn save_writes_rows_and_clears_dirty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut ed = editor(&["one", "two"], Some(path.clone()), ScriptedSource::new([b'!', CTRL_S]));
    drive(&mut ed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "!one\ntwo\n");
    assert_eq!(message(&ed), Some("9 bytes written to disk"));
    assert!(!ed.state.document.is_dirty());
}

#[test]
fn save_as_prompts_for_a_name() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("named.txt");
    let mut script = ScriptedSource::new([b'a', CTRL_S]);
    script.push_bytes(path.to_str().unwrap()).push_bytes(b"\r");
    let mut ed = editor(&[], None, script);
    drive(&mut ed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\n");
    assert_eq!(ed.state.document.filename(), Some(path.as_path()));
    assert!(!ed.state.document.is_dirty());
    assert!(String::from_utf8_lossy(ed.output()).contains("Save as: "));
}

#[test]
fn escape_aborts_save_as() {
    let mut script = ScriptedSource::new([b'a', CTRL_S, b'f', 0x1b]);
    script.push_timeout();
    let mut ed = editor(&[], None, script);
    drive(&mut ed);
    assert_eq!(message(&ed), Some("Save aborted"));
    assert_eq!(ed.state.document.filename(), None);
    assert!(ed.state.document.is_dirty());
}

#[test]
fn failed_save_reports_and_keeps_editing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("x.txt");
    let mut ed = editor(&["keep"], Some(path), ScriptedSource::new([b'z', CTRL_S, b'y']));
    assert_eq!(drive(&mut ed), Ended::ScriptExhausted);
    let msg = message(&ed).unwrap();
    assert!(msg.starts_with("Can't save! I/O error: "), "{msg}");
    assert!(ed.state.document.is_dirty());
    assert_eq!(text(&ed), vec!["zykeep"]);
}
