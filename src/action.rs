use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
	Editor(EditorAction),
	Layout(LayoutAction),
	System(SystemAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
	KeyPressed(KeyEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
	ViewportResized { width: u16, height: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
	Quit,
}
