//! Edit sub-dispatch (text mutation at the cursor).

use core_state::EditorState;

/// Insert `byte` at the cursor. On the virtual last line a new row is
/// appended first.
pub(crate) fn insert_char(state: &mut EditorState, byte: u8) {
    let doc = &mut state.document;
    if state.cursor.cy == doc.num_rows() {
        doc.insert_row(doc.num_rows(), Vec::new());
    }
    if doc.insert_char(state.cursor.cy, state.cursor.cx, byte) {
        state.cursor.cx += 1;
    }
}

/// Split the current row at the cursor, or open an empty row above it when
/// the cursor is at column 0.
pub(crate) fn insert_newline(state: &mut EditorState) {
    let (cx, cy) = (state.cursor.cx, state.cursor.cy);
    let doc = &mut state.document;
    let inserted = if cx == 0 {
        doc.insert_row(cy, Vec::new())
    } else {
        doc.split_row(cy, cx)
    };
    if inserted {
        state.cursor.cy += 1;
        state.cursor.cx = 0;
    }
}

/// Delete the character left of the cursor, joining with the previous row
/// at column 0.
pub(crate) fn delete_char(state: &mut EditorState) {
    let (cx, cy) = (state.cursor.cx, state.cursor.cy);
    let doc = &mut state.document;
    if cy >= doc.num_rows() || (cx == 0 && cy == 0) {
        return;
    }
    if cx > 0 {
        if doc.delete_char(cy, cx - 1) {
            state.cursor.cx -= 1;
        }
        return;
    }
    let prev_len = doc.row(cy - 1).map_or(0, |r| r.size());
    if let Some(row) = doc.delete_row(cy) {
        doc.append_to_row(cy - 1, row.chars());
        state.cursor.cy -= 1;
        state.cursor.cx = prev_len;
        tracing::trace!(target: "actions.edit", row = cy - 1, at = prev_len, "rows_joined");
    }
}
