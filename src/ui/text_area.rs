use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::state::{CellWrite, DisplayStyle};

pub(super) struct TextAreaWidget<'a> {
	cells: &'a [CellWrite],
}

impl<'a> TextAreaWidget<'a> {
	pub(super) fn new(cells: &'a [CellWrite]) -> Self {
		Self { cells }
	}
}

impl Widget for TextAreaWidget<'_> {
	fn render(self, area: Rect, buf: &mut Buffer) {
		for cell in self.cells {
			if cell.col >= usize::from(area.width) || cell.row >= usize::from(area.height) {
				continue;
			}
			let (Ok(col), Ok(row)) = (u16::try_from(cell.col), u16::try_from(cell.row)) else {
				continue;
			};
			if let Some(target) = buf.cell_mut((area.x.saturating_add(col), area.y.saturating_add(row))) {
				target.set_char(cell.ch).set_style(style_for(cell.style));
			}
		}
	}
}

pub(super) fn style_for(style: DisplayStyle) -> Style {
	match style {
		DisplayStyle::Plain => Style::default().fg(Color::White).bg(Color::Black),
		DisplayStyle::Inverted => {
			Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::SLOW_BLINK)
		}
	}
}
