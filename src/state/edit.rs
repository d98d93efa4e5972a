use super::{EditorMode, EditorState};

impl EditorState {
	pub fn move_cursor_left(&mut self) {
		tracing::debug!("move left");
		self.cursor.col -= 1;
	}

	pub fn move_cursor_right(&mut self) {
		tracing::debug!("move right");
		self.cursor.col += 1;
	}

	/// Moves one row down, growing the buffer by a single empty line when the
	/// cursor walks past its last line.
	pub fn move_cursor_down(&mut self) {
		tracing::debug!("move down");
		self.cursor.row += 1;
		if usize::try_from(self.cursor.row).is_ok_and(|row| self.lines.len() <= row) {
			self.lines.push(String::new());
		}
		if let Some(len) = self.line_len(self.cursor.row) {
			self.cursor.col = self.cursor.col.min(len);
		}
	}

	/// Moves one row up. On the first row this is a no-op.
	pub fn move_cursor_up(&mut self) {
		tracing::debug!("move up");
		let target_row = self.cursor.row - 1;
		let Some(len) = self.line_len(target_row) else {
			return;
		};
		self.cursor.row = target_row;
		self.cursor.col = self.cursor.col.min(len);
	}

	/// Switches to insert mode with the cursor on the last character of the
	/// current line. On an empty line the column goes to -1 until clamped.
	pub fn enter_insert_mode(&mut self) {
		self.mode = EditorMode::Insert;
		self.cursor.col = self.line_len(self.cursor.row).unwrap_or(0) - 1;
		tracing::info!("mode: {}", self.mode);
	}

	pub fn exit_insert_mode(&mut self) {
		self.mode = EditorMode::Normal;
		tracing::info!("mode: {}", self.mode);
	}

	/// Appends an empty line to the end of the buffer, wherever the cursor is,
	/// and moves the cursor to the start of the next row.
	pub fn append_newline(&mut self) {
		self.lines.push(String::new());
		self.cursor.row += 1;
		self.cursor.col = 0;
	}

	/// Drops the last character of the current line regardless of the cursor
	/// column. Backing up past column zero wraps to the end of the previous
	/// line without touching its text.
	pub fn backspace_at_line_tail(&mut self) {
		if let Some(line) = self.line_mut(self.cursor.row) {
			line.pop();
		}
		self.cursor.col -= 1;
		if self.cursor.col < 0 && self.cursor.row > 0 {
			self.cursor.row -= 1;
			self.cursor.col = self.line_len(self.cursor.row).unwrap_or(0);
		}
	}

	/// Appends `ch` to the end of the current line regardless of the cursor
	/// column.
	pub fn append_char_at_line_tail(&mut self, ch: char) {
		if let Some(line) = self.line_mut(self.cursor.row) {
			line.push(ch);
		}
		self.cursor.col += 1;
	}
}
