use autoui_forms::{ControlKind, FormLayout, RowLayout};
use std::fmt::Write;

fn describe(row: &RowLayout) -> String {
    match &row.kind {
        ControlKind::Range(spec) => format!(
            "{}  ({}..{})",
            row.display,
            spec.format(spec.minimum),
            spec.format(spec.maximum)
        ),
        ControlKind::Selection(items) => {
            let options: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
            format!("{}  {{{}}}", row.display, options.join("|"))
        }
        ControlKind::Trigger { .. } if !row.enabled => format!("[{}] (empty)", row.display),
        ControlKind::Trigger { .. } => format!("[{}]", row.display),
        ControlKind::Toggle | ControlKind::Text => row.display.clone(),
    }
}

/// Plain-text rendering of a window: a title bar, one line per row, and
/// the close action.
pub fn render_layout(layout: &FormLayout) -> String {
    let width = layout.rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", layout.title);
    for row in &layout.rows {
        let _ = writeln!(out, "  {:<width$}  {}", row.label, describe(row), width = width);
    }
    let _ = writeln!(out, "  [{}]", layout.close_caption);
    out
}
