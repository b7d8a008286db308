#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, Editor, FatalError};
use core_input::{InputError, KeyDecoder, ScriptedSource};
use core_render::Compositor;
use core_state::{Document, EditorState};
use std::path::PathBuf;
use std::time::Duration;

pub type TestEditor = Editor<ScriptedSource, Vec<u8>>;

pub const ARROW_UP: &[u8] = b"\x1b[A";
pub const ARROW_DOWN: &[u8] = b"\x1b[B";
pub const ARROW_RIGHT: &[u8] = b"\x1b[C";
pub const ARROW_LEFT: &[u8] = b"\x1b[D";

pub use core_events::ctrl;

pub fn editor(lines: &[&str], filename: Option<PathBuf>, script: ScriptedSource) -> TestEditor {
    let doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), filename);
    let state = EditorState::new(doc, 24, 80);
    Editor::new(
        state,
        KeyDecoder::new(script),
        Vec::new(),
        Compositor::new("Kilo editor -- version test", Duration::from_secs(5)),
        3,
    )
}

/// How a scripted session ended.
#[derive(Debug, PartialEq, Eq)]
pub enum Ended {
    Quit,
    ScriptExhausted,
}

/// Step until quit or until the script runs dry.
pub fn drive(ed: &mut TestEditor) -> Ended {
    loop {
        match ed.step() {
            Ok(DispatchResult::Continue) => {}
            Ok(DispatchResult::Quit) => return Ended::Quit,
            Err(FatalError::Input(InputError::Closed)) => return Ended::ScriptExhausted,
            Err(e) => panic!("unexpected fatal error: {e}"),
        }
    }
}

pub fn text(ed: &TestEditor) -> Vec<String> {
    ed.state
        .document
        .lines()
        .map(|l| String::from_utf8_lossy(l).into_owned())
        .collect()
}

pub fn message(ed: &TestEditor) -> Option<&str> {
    ed.state.status().map(|m| m.text.as_str())
}
