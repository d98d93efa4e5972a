use crate::state::{Cursor, EditorState, GridSize};

pub(super) const GRID: GridSize = GridSize { cols: 80, rows: 24 };

pub(super) fn test_state() -> EditorState {
	EditorState::new()
}

pub(super) fn state_with_lines(lines: &[&str], cursor: Cursor) -> EditorState {
	let mut state = EditorState::new();
	state.lines = lines.iter().map(|line| line.to_string()).collect();
	state.cursor = cursor;
	state
}

pub(super) fn at(row: isize, col: isize) -> Cursor {
	Cursor { row, col }
}
