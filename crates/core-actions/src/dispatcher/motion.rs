//! Motion sub-dispatch (cursor movement).
//!
//! Horizontal moves wrap across line boundaries; every move ends by clamping
//! `cx` to the length of the row the cursor landed on.

use core_state::EditorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

pub(crate) fn move_cursor(state: &mut EditorState, dir: Direction) {
    let num_rows = state.document.num_rows();
    let row_len = state.document.row(state.cursor.cy).map(|r| r.size());
    let cur = &mut state.cursor;
    match dir {
        Direction::Left => {
            if cur.cx > 0 {
                cur.cx -= 1;
            } else if cur.cy > 0 {
                cur.cy -= 1;
                cur.cx = state.document.row(cur.cy).map_or(0, |r| r.size());
            }
        }
        Direction::Right => match row_len {
            Some(len) if cur.cx < len => cur.cx += 1,
            Some(len) if cur.cx == len => {
                cur.cy += 1;
                cur.cx = 0;
            }
            _ => {}
        },
        Direction::Up => cur.cy = cur.cy.saturating_sub(1),
        Direction::Down => {
            if cur.cy < num_rows {
                cur.cy += 1;
            }
        }
    }
    clamp_column(state);
}

fn clamp_column(state: &mut EditorState) {
    let len = state.current_row_len();
    if state.cursor.cx > len {
        state.cursor.cx = len;
    }
}

pub(crate) fn line_start(state: &mut EditorState) {
    state.cursor.cx = 0;
}

/// No-op on the virtual last line.
pub(crate) fn line_end(state: &mut EditorState) {
    if let Some(row) = state.document.row(state.cursor.cy) {
        state.cursor.cx = row.size();
    }
}

/// Snap to the top (or bottom) screen line, then move a full screen.
pub(crate) fn page(state: &mut EditorState, dir: Direction) {
    let rows = state.viewport.rows;
    state.cursor.cy = match dir {
        Direction::Up => state.viewport.row_off,
        _ => (state.viewport.row_off + rows)
            .saturating_sub(1)
            .min(state.document.num_rows()),
    };
    for _ in 0..rows {
        move_cursor(state, dir);
    }
}
