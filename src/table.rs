//! Plain-text table rendering for the terminal

use crate::export::{COLUMNS, row_cells};
use crate::view::KeyBindingView;
use unicode_width::UnicodeWidthStr;

/// Column width cap in display cells
const MAX_COL_WIDTH: usize = 40;

/// Render views as an aligned table with a header and separator line.
pub fn render(views: &[&KeyBindingView]) -> String {
    let widths = compute_column_widths(views);
    let mut out = String::new();

    push_row(&mut out, &COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("  ").trim_end());
    out.push('\n');

    for view in views {
        push_row(&mut out, &row_cells(view), &widths);
    }
    out
}

/// Compute column widths based on header names and data
fn compute_column_widths(views: &[&KeyBindingView]) -> Vec<usize> {
    let mut widths: Vec<usize> = COLUMNS.iter().map(|c| c.width()).collect();
    for view in views {
        for (w, cell) in widths.iter_mut().zip(row_cells(view)) {
            *w = (*w).max(cell.width());
        }
    }
    for w in &mut widths {
        *w = (*w).min(MAX_COL_WIDTH);
    }
    widths
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let text = truncate_to_width(cell, width);
        let pad = width.saturating_sub(text.width());
        line.push_str(&text);
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Cut `s` to at most `max` display cells, marking the cut with `…`
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
