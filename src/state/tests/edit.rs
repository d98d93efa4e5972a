use super::common::{GRID, at, state_with_lines, test_state};
use crate::state::GridSize;

#[test]
fn move_down_should_grow_buffer_by_one_line_per_step() {
	let mut state = test_state();
	for step in 1..=5 {
		state.move_cursor_down();
		state.clamp_cursor_to_grid(GRID);
		assert_eq!(state.lines().len(), step + 1);
		assert_eq!(state.cursor(), at(step as isize, 0));
	}
	assert!(state.lines().iter().all(String::is_empty));
}

#[test]
fn move_down_should_not_grow_buffer_when_next_line_exists() {
	let mut state = state_with_lines(&["abc", "de", "f"], at(0, 0));
	state.move_cursor_down();
	assert_eq!(state.lines().len(), 3);
	assert_eq!(state.cursor(), at(1, 0));
}

#[test]
fn move_down_should_limit_column_to_target_line_length() {
	let mut state = state_with_lines(&["abcd", "x"], at(0, 3));
	state.move_cursor_down();
	assert_eq!(state.cursor(), at(1, 1));
}

#[test]
fn move_down_should_keep_column_when_target_line_is_longer() {
	let mut state = state_with_lines(&["ab", "abcdef"], at(0, 2));
	state.move_cursor_down();
	assert_eq!(state.cursor(), at(1, 2));
}

#[test]
fn move_up_should_limit_column_to_target_line_length() {
	let mut state = state_with_lines(&["x", "abcd"], at(1, 3));
	state.move_cursor_up();
	assert_eq!(state.cursor(), at(0, 1));
}

#[test]
fn move_up_on_first_row_should_be_noop() {
	let mut state = state_with_lines(&["abc"], at(0, 2));
	state.move_cursor_up();
	assert_eq!(state.cursor(), at(0, 2));
	assert_eq!(state.lines(), ["abc"]);
}

#[test]
fn horizontal_moves_should_ignore_line_length_until_clamped() {
	let mut state = state_with_lines(&["ab"], at(0, 0));
	state.move_cursor_right();
	state.move_cursor_right();
	state.move_cursor_right();
	state.move_cursor_right();
	state.clamp_cursor_to_grid(GRID);
	assert_eq!(state.cursor(), at(0, 4));

	state.move_cursor_left();
	assert_eq!(state.cursor(), at(0, 3));
}

#[test]
fn move_left_past_zero_should_clamp_back_to_zero() {
	let mut state = test_state();
	state.move_cursor_left();
	assert_eq!(state.cursor(), at(0, -1));
	state.clamp_cursor_to_grid(GRID);
	assert_eq!(state.cursor(), at(0, 0));
}

#[test]
fn clamp_should_use_grid_bounds_not_buffer_bounds() {
	let mut state = state_with_lines(&["a", "b", "c", "d", "e"], at(4, 30));
	state.clamp_cursor_to_grid(GridSize::new(10, 3));
	assert_eq!(state.cursor(), at(2, 9));
}

#[test]
fn clamp_should_treat_zero_sized_grid_as_single_cell() {
	let mut state = state_with_lines(&["abc", "def"], at(1, 2));
	state.clamp_cursor_to_grid(GridSize::new(0, 0));
	assert_eq!(state.cursor(), at(0, 0));
}

#[test]
fn append_char_should_land_at_line_tail_regardless_of_column() {
	let mut state = state_with_lines(&["ab"], at(0, 0));
	state.append_char_at_line_tail('c');
	assert_eq!(state.lines(), ["abc"]);
	assert_eq!(state.cursor(), at(0, 1));
}

#[test]
fn append_newline_should_add_trailing_line_without_splitting() {
	let mut state = state_with_lines(&["hello", "world"], at(0, 2));
	state.append_newline();
	assert_eq!(state.lines(), ["hello", "world", ""]);
	assert_eq!(state.cursor(), at(1, 0));
}

#[test]
fn backspace_should_remove_last_char_independent_of_column() {
	let mut state = state_with_lines(&["abc"], at(0, 1));
	state.backspace_at_line_tail();
	assert_eq!(state.lines(), ["ab"]);
	assert_eq!(state.cursor(), at(0, 0));
}

#[test]
fn backspace_should_remove_whole_multibyte_char() {
	let mut state = state_with_lines(&["a中"], at(0, 2));
	state.backspace_at_line_tail();
	assert_eq!(state.lines(), ["a"]);
	assert_eq!(state.cursor(), at(0, 1));
}

#[test]
fn backspace_on_empty_line_should_move_to_end_of_previous_line() {
	let mut state = state_with_lines(&["hi", ""], at(1, 0));
	state.backspace_at_line_tail();
	assert_eq!(state.lines(), ["hi", ""]);
	assert_eq!(state.cursor(), at(0, 2));
}

#[test]
fn backspace_on_first_row_should_only_go_negative_until_clamped() {
	let mut state = state_with_lines(&[""], at(0, 0));
	state.backspace_at_line_tail();
	assert_eq!(state.lines(), [""]);
	assert_eq!(state.cursor(), at(0, -1));
	state.clamp_cursor_to_grid(GRID);
	assert_eq!(state.cursor(), at(0, 0));
}

#[test]
fn clamp_should_reach_last_cell_of_largest_grid() {
	let mut state = state_with_lines(&["a"], at(isize::MAX, isize::MAX));
	state.clamp_cursor_to_grid(GridSize::new(u16::MAX, u16::MAX));
	assert_eq!(state.cursor(), at(65_534, 65_534));
}

#[test]
fn clamp_should_leave_in_grid_cursor_alone() {
	let mut state = state_with_lines(&["abc", "def"], at(1, 2));
	state.clamp_cursor_to_grid(GridSize::new(3, 2));
	assert_eq!(state.cursor(), at(1, 2));
}
