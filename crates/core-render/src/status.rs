//! Status bar composition.
//!
//! Left: `<name> - <n> lines <marker>` where `<name>` is the file name cut to
//! 20 characters (or `[No Name]`) and `<marker>` is `(modified)` for a dirty
//! document. Right: `<line>/<lines>`, placed flush right only when it fits in
//! the columns the left part leaves free. The result is exactly `cols` wide
//! unless the left part alone is narrower and the right part does not fit.

use std::path::Path;

const NAME_MAX: usize = 20;
const NO_NAME: &str = "[No Name]";
const MODIFIED: &str = "(modified)";

pub struct StatusContext<'a> {
    pub file_name: Option<&'a Path>,
    pub num_rows: usize,
    pub dirty: bool,
    /// 0-based cursor row.
    pub cy: usize,
    pub cols: usize,
}

pub fn build_status(ctx: &StatusContext<'_>) -> String {
    let name: String = match ctx.file_name {
        Some(p) => p.to_string_lossy().chars().take(NAME_MAX).collect(),
        None => NO_NAME.to_string(),
    };
    let marker = if ctx.dirty { MODIFIED } else { "" };
    let left = format!("{name} - {} lines {marker}", ctx.num_rows);
    let right = format!("{}/{}", ctx.cy + 1, ctx.num_rows);

    let mut out: String = left.chars().take(ctx.cols).collect();
    let mut len = out.chars().count();
    let rlen = right.chars().count();
    while len < ctx.cols {
        if ctx.cols - len == rlen {
            out.push_str(&right);
            break;
        }
        out.push(' ');
        len += 1;
    }
    out
}
