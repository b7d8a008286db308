mod common;
use common::*;

use core_input::ScriptedSource;
use core_state::Cursor;
use pretty_assertions::assert_eq;

#[test]
fn typing_into_empty_document() {
    let mut ed = editor(&[], None, ScriptedSource::new(b"hi\rthere"));
    assert_eq!(drive(&mut ed), Ended::ScriptExhausted);
    assert_eq!(text(&ed), vec!["hi", "there"]);
    assert_eq!(ed.state.cursor, Cursor::new(5, 1));
    assert!(ed.state.document.is_dirty());
}

#[test]
fn backspace_joins_with_previous_row() {
    let mut script = ScriptedSource::new(ARROW_DOWN);
    script.push_bytes([127]);
    let mut ed = editor(&["ab", "cd"], None, script);
    drive(&mut ed);
    assert_eq!(text(&ed), vec!["abcd"]);
    assert_eq!(ed.state.cursor, Cursor::new(2, 0));
}

#[test]
fn delete_removes_under_cursor_and_ctrl_h_backspaces() {
    let mut script = ScriptedSource::new(b"\x1b[3~");
    script.push_bytes([ctrl(b'h')]);
    let mut ed = editor(&["abc"], None, script);
    ed.state.cursor = Cursor::new(1, 0);
    drive(&mut ed);
    assert_eq!(text(&ed), vec!["c"]);
    assert_eq!(ed.state.cursor, Cursor::new(0, 0));
}

#[test]
fn home_end_and_wrapping_arrows() {
    let mut script = ScriptedSource::new(b"\x1b[F");
    script.push_bytes(ARROW_RIGHT).push_bytes(b"\x1b[H").push_bytes(ARROW_LEFT);
    let mut ed = editor(&["hello", "world"], None, script);
    drive(&mut ed);
    // End -> (5,0), Right wraps -> (0,1), Home stays, Left wraps -> (5,0)
    assert_eq!(ed.state.cursor, Cursor::new(5, 0));
    assert!(!ed.state.document.is_dirty());
}

#[test]
fn tab_and_high_bytes_are_inserted_control_chords_are_not() {
    let mut ed = editor(&[], None, ScriptedSource::new([b'\t', 0xc3, 0xa9, ctrl(b'l'), ctrl(b'b'), b'x']));
    drive(&mut ed);
    assert_eq!(ed.state.document.lines().next(), Some(&b"\t\xc3\xa9x"[..]));
    assert_eq!(ed.state.document.row(0).map(|r| r.rsize()), Some(11));
}

#[test]
fn lone_escape_is_ignored() {
    let mut script = ScriptedSource::new(b"a\x1b");
    script.push_timeout().push_bytes(b"b");
    let mut ed = editor(&[], None, script);
    drive(&mut ed);
    assert_eq!(text(&ed), vec!["ab"]);
}

#[test]
fn page_down_scrolls_viewport() {
    let lines: Vec<String> = (0..100).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut ed = editor(&refs, None, ScriptedSource::new(b"\x1b[6~"));
    drive(&mut ed);
    // 22 text rows: snap to 21, then 22 steps
    assert_eq!(ed.state.cursor.cy, 43);
    ed.refresh_screen().unwrap();
    assert_eq!(ed.state.viewport.row_off, 22);
}

#[test]
fn frame_shows_banner_and_help_on_empty_document() {
    let mut ed = editor(&[], None, ScriptedSource::new(b""));
    ed.state.set_status(core_actions::HELP_MESSAGE);
    drive(&mut ed);
    let screen = String::from_utf8_lossy(ed.output()).into_owned();
    assert!(screen.contains("Kilo editor -- version test"));
    assert!(screen.contains(core_actions::HELP_MESSAGE));
    assert!(screen.contains("[No Name] - 0 lines"));
}
