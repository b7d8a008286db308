mod common;
use common::*;

use core_input::ScriptedSource;

const CTRL_Q: u8 = ctrl(b'q');

#[test]
fn clean_document_quits_immediately() {
    let mut ed = editor(&["x"], None, ScriptedSource::new([CTRL_Q]));
    assert_eq!(drive(&mut ed), Ended::Quit);
}

#[test]
fn dirty_document_warns_with_countdown() {
    let mut ed = editor(&[], None, ScriptedSource::new([b'x', CTRL_Q, CTRL_Q, CTRL_Q]));
    assert_eq!(drive(&mut ed), Ended::ScriptExhausted);
    assert_eq!(
        message(&ed),
        Some("WARNING!!! File has unsaved changes. Press Ctrl-Q 1 more times to quit.")
    );
    assert_eq!(ed.quit_remaining(), 0);
}

#[test]
fn dirty_document_quits_once_warnings_are_used_up() {
    let mut ed = editor(&[], None, ScriptedSource::new([b'x', CTRL_Q, CTRL_Q, CTRL_Q, CTRL_Q]));
    assert_eq!(drive(&mut ed), Ended::Quit);
}

#[test]
fn any_other_key_resets_the_countdown() {
    let mut ed = editor(
        &[],
        None,
        ScriptedSource::new([b'x', CTRL_Q, CTRL_Q, ctrl(b'l'), CTRL_Q, CTRL_Q, CTRL_Q]),
    );
    assert_eq!(drive(&mut ed), Ended::ScriptExhausted);
    assert_eq!(ed.quit_remaining(), 0);

    let mut script = ScriptedSource::new([b'x', CTRL_Q, CTRL_Q]);
    script.push_bytes(ARROW_LEFT).push_bytes([CTRL_Q]);
    let mut ed = editor(&[], None, script);
    assert_eq!(drive(&mut ed), Ended::ScriptExhausted);
    assert_eq!(ed.quit_remaining(), 2);
    assert_eq!(
        message(&ed),
        Some("WARNING!!! File has unsaved changes. Press Ctrl-Q 3 more times to quit.")
    );
}
