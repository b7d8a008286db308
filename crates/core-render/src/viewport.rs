//! Scroll bookkeeping.
//!
//! Offsets are clamped, never searched: they move only as far as needed to
//! keep the cursor inside `[off, off + extent)`.

use core_state::Viewport;

/// Adjust `vp` so `(cy, rx)` is visible. Returns true when an offset moved.
pub fn scroll(vp: &mut Viewport, cy: usize, rx: usize) -> bool {
    let before = (vp.row_off, vp.col_off);
    if cy < vp.row_off {
        vp.row_off = cy;
    }
    if cy >= vp.row_off + vp.rows {
        vp.row_off = (cy + 1).saturating_sub(vp.rows);
    }
    if rx < vp.col_off {
        vp.col_off = rx;
    }
    if rx >= vp.col_off + vp.cols {
        vp.col_off = (rx + 1).saturating_sub(vp.cols);
    }
    let moved = before != (vp.row_off, vp.col_off);
    if moved {
        tracing::trace!(target: "render.viewport", row_off = vp.row_off, col_off = vp.col_off, "scrolled");
    }
    moved
}
