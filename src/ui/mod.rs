mod terminal_session;
mod text_area;

pub(crate) use terminal_session::{TerminalSession, TerminalSessionError};
use text_area::TextAreaWidget;

use crate::state::RenderFrame;

pub struct Renderer;

impl Renderer {
	pub fn new() -> Self {
		Self
	}

	pub fn render(&self, frame: &mut ratatui::Frame<'_>, render_frame: &RenderFrame) {
		let area = frame.area();
		frame.render_widget(TextAreaWidget::new(&render_frame.cells), area);
		frame.set_cursor_position(render_frame.cursor);
	}
}

impl Default for Renderer {
	fn default() -> Self {
		Self::new()
	}
}
