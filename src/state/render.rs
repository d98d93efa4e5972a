use super::{DisplayStyle, EditorState};

/// One styled character placed at a grid cell. Coordinates are not bounded
/// by the grid; the display drops anything that falls outside of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWrite {
	pub col:   usize,
	pub row:   usize,
	pub ch:    char,
	pub style: DisplayStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
	pub cells:  Vec<CellWrite>,
	/// Visible cursor as `(col, row)`.
	pub cursor: (u16, u16),
}

impl EditorState {
	/// Lays out every buffer line from column zero of its own row, one cell
	/// per character. No wrapping and no horizontal scrolling.
	pub fn render_frame(&mut self) -> RenderFrame {
		let style = self.select_style();
		let cells = self
			.lines
			.iter()
			.enumerate()
			.flat_map(|(row, line)| {
				line.chars().enumerate().map(move |(col, ch)| CellWrite { col, row, ch, style })
			})
			.collect();

		RenderFrame { cells, cursor: self.cursor_position() }
	}

	pub fn cursor_position(&self) -> (u16, u16) {
		(saturate_u16(self.cursor.col), saturate_u16(self.cursor.row))
	}
}

fn saturate_u16(value: isize) -> u16 {
	u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}
