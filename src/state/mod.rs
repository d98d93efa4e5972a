use std::fmt;

mod edit;
mod render;

#[cfg(test)]
mod tests;

pub use render::{CellWrite, RenderFrame};

/// Cursor position in buffer coordinates.
///
/// Both axes are signed: motions may push a coordinate below zero for the
/// span of a single key event, and [`EditorState::clamp_cursor_to_grid`]
/// brings it back afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
	pub row: isize,
	pub col: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
	#[default]
	Normal,
	Insert,
	/// Declared but inert: nothing transitions into it.
	Replace,
	/// Declared but inert: nothing transitions into it.
	Visual,
}

impl EditorMode {
	pub fn label(self) -> &'static str {
		match self {
			Self::Normal => "NORMAL",
			Self::Insert => "INSERT",
			Self::Replace => "REPLACE",
			Self::Visual => "VISUAL",
		}
	}

	/// Style the text area is drawn with, or `None` when the mode has no
	/// style of its own and the previous one stays in effect.
	pub fn display_style(self) -> Option<DisplayStyle> {
		match self {
			Self::Normal => Some(DisplayStyle::Plain),
			Self::Insert => Some(DisplayStyle::Inverted),
			Self::Replace | Self::Visual => None,
		}
	}
}

impl fmt::Display for EditorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStyle {
	/// White on black.
	#[default]
	Plain,
	/// Black on white, blinking.
	Inverted,
}

/// Terminal grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
	pub cols: u16,
	pub rows: u16,
}

impl GridSize {
	pub fn new(cols: u16, rows: u16) -> Self {
		Self { cols, rows }
	}
}

#[derive(Debug)]
pub struct EditorState {
	lines:           Vec<String>,
	cursor:          Cursor,
	pub(crate) mode: EditorMode,
	style:           DisplayStyle,
}

impl EditorState {
	pub fn new() -> Self {
		Self {
			lines:  vec![String::new()],
			cursor: Cursor::default(),
			mode:   EditorMode::Normal,
			style:  DisplayStyle::Plain,
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn mode(&self) -> EditorMode {
		self.mode
	}

	/// Picks the style for the next frame from the current mode. Modes
	/// without a style of their own keep whatever was selected last.
	pub fn select_style(&mut self) -> DisplayStyle {
		if let Some(style) = self.mode.display_style() {
			self.style = style;
		}
		self.style
	}

	/// Constrains the cursor to the visible grid. The bounds come from the
	/// terminal, not from the buffer, so the result may sit past the end of
	/// a line. A zero-sized dimension is treated as one cell wide.
	pub fn clamp_cursor_to_grid(&mut self, grid: GridSize) {
		let max_col = to_isize(usize::from(grid.cols.max(1))) - 1;
		let max_row = to_isize(usize::from(grid.rows.max(1))) - 1;
		let cursor = &mut self.cursor;
		cursor.col = cursor.col.max(0);
		cursor.col = cursor.col.min(max_col);
		cursor.row = cursor.row.max(0);
		cursor.row = cursor.row.min(max_row);
	}

	fn line(&self, row: isize) -> Option<&String> {
		usize::try_from(row).ok().and_then(|row| self.lines.get(row))
	}

	fn line_mut(&mut self, row: isize) -> Option<&mut String> {
		usize::try_from(row).ok().and_then(|row| self.lines.get_mut(row))
	}

	fn line_len(&self, row: isize) -> Option<isize> {
		self.line(row).map(|line| to_isize(line.chars().count()))
	}
}

impl Default for EditorState {
	fn default() -> Self {
		Self::new()
	}
}

fn to_isize(value: usize) -> isize {
	isize::try_from(value).unwrap_or(isize::MAX)
}
