#![forbid(unsafe_code)]

//! Plain-text rendering of playback snapshots.
//!
//! The renderer is a pure observer: it reads the state it is handed and
//! produces lines, nothing else.

use stepviz_playback::{PlaybackState, current_snapshot};
use stepviz_trace::{Snapshot, Value};

/// One progress line: position, message, and any cursor positions.
pub fn render_step(state: &PlaybackState) -> String {
    let snapshot = current_snapshot(state);
    let mut line = format!(
        "[{:>2}/{}] {}",
        state.current_step() + 1,
        state.trace().len(),
        snapshot.message
    );
    if !snapshot.pointers.is_empty() {
        let pointers: Vec<String> = snapshot
            .pointers
            .iter()
            .map(|(name, pos)| format!("{name}={pos}"))
            .collect();
        line.push_str(&format!("  ({})", pointers.join(" ")));
    }
    line
}

/// A cell row for snapshots that carry an array payload, with highlighted
/// cells bracketed. Returns `None` when there is nothing array-shaped to
/// draw.
pub fn render_cells(snapshot: &Snapshot) -> Option<String> {
    let list = ["numbers", "nums", "table", "next"]
        .iter()
        .find_map(|key| match snapshot.value(key) {
            Some(Value::IntList(xs)) => Some(xs),
            _ => None,
        })?;
    let cells: Vec<String> = list
        .iter()
        .enumerate()
        .map(|(i, x)| {
            if snapshot.highlights.contains(&i) {
                format!("[{x}]")
            } else {
                format!(" {x} ")
            }
        })
        .collect();
    Some(format!("        {}", cells.join("")))
}
