//! Plain-text fretboard diagrams.
//!
//! The highest-pitched string is drawn on top, as a player looking down at
//! the neck sees it. Muted strings get an `x` in the open column.

use crate::neck::{marker_at, position_label, Marker};
use crate::note::{STANDARD_TUNING, STRING_COUNT};
use crate::view::{FretboardView, ViewContent};

const CELL_WIDTH: usize = 5;
const OPEN_WIDTH: usize = 3;

/// Render `view` as a text diagram.
pub fn render_fretboard(view: &FretboardView) -> String {
    let mut out = String::new();

    out.push_str(&view.title);
    out.push('\n');

    for string in (0..STRING_COUNT).rev() {
        out.push_str(&format!("{:>2} ", STANDARD_TUNING[string].name()));

        let open = if view.muted[string] {
            "x".to_string()
        } else {
            label_at(view, string, 0).unwrap_or_default()
        };
        out.push_str(&format!("{:^width$}", open, width = OPEN_WIDTH));
        out.push_str("||");

        for fret in 1..=view.fret_count {
            let cell = match label_at(view, string, fret) {
                Some(label) => format!("{:-^width$}", label, width = CELL_WIDTH),
                None => "-".repeat(CELL_WIDTH),
            };
            out.push_str(&cell);
            out.push('|');
        }
        out.push('\n');
    }

    // Inlay row
    let mut row = " ".repeat(3 + OPEN_WIDTH + 2);
    for fret in 1..=view.fret_count {
        let marker = match marker_at(fret) {
            Marker::None => "",
            Marker::Single => "*",
            Marker::Double => "**",
        };
        row.push_str(&format!("{:^width$} ", marker, width = CELL_WIDTH));
    }
    out.push_str(row.trim_end());
    out.push('\n');

    // Fret numbers
    let mut row = " ".repeat(3 + OPEN_WIDTH + 2);
    for fret in 1..=view.fret_count {
        row.push_str(&format!("{:^width$} ", fret, width = CELL_WIDTH));
    }
    out.push_str(row.trim_end());
    out.push('\n');

    if let ViewContent::Unsupported { notice } = &view.content {
        out.push_str(&format!("! {}\n", notice));
    }

    out
}

fn label_at(view: &FretboardView, string: usize, fret: u8) -> Option<String> {
    view.position_at(string, fret)
        .map(|position| position_label(view.label_mode, view.root, position.note, position.finger))
}
