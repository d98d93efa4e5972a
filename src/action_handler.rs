use std::ops::ControlFlow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::action::{AppAction, EditorAction, LayoutAction, SystemAction};
use crate::state::{EditorMode, EditorState, GridSize};


/// Applies actions to the editor state. `Break` asks the caller to quit.
pub struct ActionHandler;

impl ActionHandler {
	pub fn new() -> Self {
		Self
	}

	/// `grid` is the terminal size the current frame was drawn with; the
	/// cursor is clamped against it after every key.
	pub fn apply(&self, state: &mut EditorState, action: AppAction, grid: GridSize) -> ControlFlow<()> {
		match action {
			AppAction::Editor(EditorAction::KeyPressed(key)) => {
				if self.handle_key(state, key, grid).is_break() {
					return ControlFlow::Break(());
				}
				state.clamp_cursor_to_grid(grid);
			}
			AppAction::Layout(LayoutAction::ViewportResized { width, height }) => {
				debug!("viewport resized: {}x{}", width, height);
			}
			AppAction::System(SystemAction::Quit) => {
				debug!("quit requested");
				return ControlFlow::Break(());
			}
		}
		ControlFlow::Continue(())
	}

	fn handle_key(&self, state: &mut EditorState, key: KeyEvent, grid: GridSize) -> ControlFlow<()> {
		trace!("key: {:?} in {}", key, state.mode());
		match state.mode() {
			EditorMode::Normal => self.handle_normal_mode_key(state, key, grid),
			EditorMode::Insert => self.handle_insert_mode_key(state, key),
			mode @ (EditorMode::Replace | EditorMode::Visual) => {
				debug!("{} mode is not implemented, ignoring key", mode);
				ControlFlow::Continue(())
			}
		}
	}

	fn handle_normal_mode_key(
		&self,
		state: &mut EditorState,
		key: KeyEvent,
		grid: GridSize,
	) -> ControlFlow<()> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			if key.code == KeyCode::Char('c') {
				return self.apply(state, AppAction::System(SystemAction::Quit), grid);
			}
			return ControlFlow::Continue(());
		}

		match key.code {
			KeyCode::Char('h') => state.move_cursor_left(),
			KeyCode::Char('j') => state.move_cursor_down(),
			KeyCode::Char('k') => state.move_cursor_up(),
			KeyCode::Char('l') => state.move_cursor_right(),
			KeyCode::Char('i') => state.enter_insert_mode(),
			_ => {}
		}
		ControlFlow::Continue(())
	}

	fn handle_insert_mode_key(&self, state: &mut EditorState, key: KeyEvent) -> ControlFlow<()> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return ControlFlow::Continue(());
		}

		match key.code {
			KeyCode::Esc => state.exit_insert_mode(),
			KeyCode::Enter => state.append_newline(),
			KeyCode::Backspace => state.backspace_at_line_tail(),
			KeyCode::Char(ch) => state.append_char_at_line_tail(ch),
			_ => {}
		}
		ControlFlow::Continue(())
	}
}

impl Default for ActionHandler {
	fn default() -> Self {
		Self::new()
	}
}
