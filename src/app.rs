use tracing::{info, trace};

use crate::action::AppAction;
use crate::action_handler::ActionHandler;
use crate::input::InputHandler;
use crate::state::EditorState;
use crate::ui::{Renderer, TerminalSession, TerminalSessionError};

pub struct App {
	title:          String,
	state:          EditorState,
	renderer:       Renderer,
	action_handler: ActionHandler,
	input_handler:  InputHandler,
}

impl App {
	pub fn new() -> Self {
		Self {
			title:          "vix".to_string(),
			state:          EditorState::new(),
			renderer:       Renderer::new(),
			action_handler: ActionHandler::new(),
			input_handler:  InputHandler::new(),
		}
	}

	/// Runs the editor until the user quits. The terminal is released on
	/// return, whether or not an error occurred.
	pub fn run(mut self) -> Result<(), TerminalSessionError> {
		let mut session = TerminalSession::enter(&self.title)?;
		session.sync_cursor_style(self.state.mode())?;

		loop {
			let grid = session.size()?;
			let frame = self.state.render_frame();
			session.draw(|f| self.renderer.render(f, &frame))?;
			trace!("redraw");

			let event = session.poll_event()?;
			let Some(action) = self.input_handler.action(&event) else {
				continue;
			};
			if matches!(action, AppAction::Layout(_)) {
				session.resync()?;
			}
			if self.action_handler.apply(&mut self.state, action, grid).is_break() {
				break;
			}
			session.sync_cursor_style(self.state.mode())?;
		}

		info!("quit");
		Ok(())
	}
}

impl Default for App {
	fn default() -> Self {
		Self::new()
	}
}
