/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! Runs a [`SelectableList`] as a complete interactive session: an instruction header
//! above the list, global keys to confirm or cancel, and the event loop.

use std::fmt::Debug;

use crate::{ChecklistComponent, ChecklistError, EventLoopResult,
            InputEvent, InputReader, Item, KeyPress, ModifierKeysMask, MouseInput,
            OutputDevice, Palette, Pos, ScrollWindow, SelectableList, SpecialKey,
            StyleSheet, TTYResult, enter_event_loop, get_terminal_width,
            is_fully_interactive_terminal, keypress, wrap_to_width};

pub const INSTRUCTION_TEXT: &str =
    "arrow keys to move; space to toggle; ctrl-c to quit; ctrl-d to finish and continue";

/// Maximum number of list rows shown at once, when none is given.
pub const DEFAULT_HEIGHT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome<T> {
    /// Values of the checked items, in the order they were checked.
    Confirmed(Vec<T>),
    Cancelled,
}

/// Keys handled by the session, before the list sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    Confirm,
    Cancel,
    FocusNext,
    FocusPrevious,
}

pub const GLOBAL_BINDINGS: &[(KeyPress, GlobalAction)] = &[
    (
        keypress!(@char ModifierKeysMask::new().with_ctrl(), 'd'),
        GlobalAction::Confirm,
    ),
    (
        keypress!(@char ModifierKeysMask::new().with_ctrl(), 'c'),
        GlobalAction::Cancel,
    ),
    (keypress!(@special SpecialKey::Tab), GlobalAction::FocusNext),
    (keypress!(@special SpecialKey::BackTab), GlobalAction::FocusPrevious),
];

#[must_use]
pub fn lookup_global_action(key_press: &KeyPress) -> Option<GlobalAction> {
    GLOBAL_BINDINGS
        .iter()
        .find(|(it, _)| it == key_press)
        .map(|(_, action)| *action)
}

/// Everything the painter and the input handler share while a session runs.
#[derive(Debug)]
pub struct ChecklistSession<T> {
    pub list: SelectableList<T>,
    pub header: String,
    pub window: ScrollWindow,
    pub max_display_width: usize,
    /// Screen row of the header, once known. Reset on resize.
    pub viewport_origin_row: Option<usize>,
}

impl<T: Clone + PartialEq + Debug> ChecklistSession<T> {
    /// The header, word wrapped to the display width.
    #[must_use]
    pub fn header_rows(&self) -> Vec<String> {
        wrap_to_width(&self.header, self.max_display_width)
    }

    #[must_use]
    pub fn header_height(&self) -> usize { self.header_rows().len() }

    /// Number of list rows on screen, used as the page size.
    #[must_use]
    pub fn displayed_line_count(&self) -> usize {
        self.window.visible_height(self.list.line_count())
    }

    /// Map a screen row to a row of the list, if it falls on a visible list row.
    #[must_use]
    pub fn list_row_for_screen_row(&self, screen_row: usize) -> Option<usize> {
        let first_list_row = self.viewport_origin_row? + self.header_height();
        let viewport_row = screen_row.checked_sub(first_list_row)?;
        (viewport_row < self.displayed_line_count())
            .then_some(self.window.offset + viewport_row)
    }
}

/// Input handler passed to [`enter_event_loop`].
pub fn session_input_handler<T: Clone + PartialEq + Debug>(
    state: &mut ChecklistSession<T>,
    input_event: InputEvent,
) -> EventLoopResult<T> {
    let maybe_global_action = match &input_event {
        InputEvent::Keyboard(key_press) => lookup_global_action(key_press),
        _ => None,
    };

    if let Some(global_action) = maybe_global_action {
        return match global_action {
            GlobalAction::Confirm => {
                EventLoopResult::ExitWithResult(state.list.selected().to_vec())
            }
            GlobalAction::Cancel => EventLoopResult::ExitWithoutResult,
            // The list is the only control that takes focus.
            GlobalAction::FocusNext | GlobalAction::FocusPrevious => {
                EventLoopResult::Continue
            }
        };
    }

    let displayed_line_count = state.displayed_line_count();

    match input_event {
        InputEvent::Resize(size) => {
            state.max_display_width = size.col_width;
            state.viewport_origin_row = None;
            EventLoopResult::ContinueAndRerenderAndClear
        }
        InputEvent::Mouse(mouse_input) => {
            let Some(list_row) = state.list_row_for_screen_row(mouse_input.pos.row) else {
                return EventLoopResult::Continue;
            };
            let list_relative = InputEvent::Mouse(MouseInput {
                pos: Pos {
                    col: mouse_input.pos.col,
                    row: list_row,
                },
                ..mouse_input
            });
            if state
                .list
                .handle_input(&list_relative, Some(displayed_line_count))
            {
                EventLoopResult::ContinueAndRerender
            } else {
                EventLoopResult::Continue
            }
        }
        InputEvent::Keyboard(_) => {
            if state.list.handle_input(&input_event, Some(displayed_line_count)) {
                EventLoopResult::ContinueAndRerender
            } else {
                EventLoopResult::Continue
            }
        }
        InputEvent::Focus(_) | InputEvent::BracketedPaste(_) => EventLoopResult::Continue,
    }
}

#[derive(Debug, Clone)]
pub struct ChooseOptions {
    pub header: String,
    /// Maximum number of list rows shown at once. [None] or `0` means
    /// [`DEFAULT_HEIGHT`].
    pub max_height: Option<usize>,
    /// [None] means the width of the terminal.
    pub max_width: Option<usize>,
    pub stylesheet: StyleSheet,
    pub palette: Palette,
}

impl Default for ChooseOptions {
    fn default() -> Self {
        Self {
            header: INSTRUCTION_TEXT.to_string(),
            max_height: None,
            max_width: None,
            stylesheet: StyleSheet::default(),
            palette: Palette::default(),
        }
    }
}

/// Show `items` as a checklist below the caret and block until the user confirms with
/// Ctrl-D or cancels with Ctrl-C. The viewport is cleared before returning.
///
/// # Errors
///
/// - [`ChecklistError::InvalidConfig`] if `items` is empty.
/// - [`ChecklistError::NotInteractive`] if stdin or stdout isn't a TTY.
/// - [`ChecklistError::InputClosed`] if input ends before the user decides.
/// - Any error writing to the terminal.
pub fn choose_many<T: Clone + PartialEq + Debug>(
    items: Vec<Item<T>>,
    defaults: &[T],
    options: ChooseOptions,
    io: (&mut OutputDevice, &mut impl InputReader),
) -> miette::Result<SessionOutcome<T>> {
    let (output_device, input_reader) = io;

    let list = SelectableList::try_new(items, defaults, options.stylesheet)?;

    if !output_device.is_mock
        && is_fully_interactive_terminal() == TTYResult::IsNotInteractive
    {
        return Err(ChecklistError::NotInteractive.into());
    }

    let max_height = match options.max_height {
        None | Some(0) => DEFAULT_HEIGHT,
        Some(it) => it,
    };

    let mut state = ChecklistSession {
        list,
        header: options.header,
        window: ScrollWindow::new(max_height),
        max_display_width: options.max_width.unwrap_or_else(get_terminal_width),
        viewport_origin_row: None,
    };

    let mut function_component =
        ChecklistComponent::new(output_device.clone(), options.palette);

    let result = enter_event_loop(
        &mut state,
        &mut function_component,
        session_input_handler,
        input_reader,
    )?;

    match result {
        EventLoopResult::ExitWithResult(values) => Ok(SessionOutcome::Confirmed(values)),
        EventLoopResult::ExitWithoutResult => Ok(SessionOutcome::Cancelled),
        _ => Err(ChecklistError::InputClosed.into()),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{Size, assert_eq2};

    fn session(count: usize, max_height: usize) -> ChecklistSession<usize> {
        let items = (0..count)
            .map(|it| Item::plain(it, format!("Item {it}")))
            .collect();
        ChecklistSession {
            list: SelectableList::try_new(items, &[], StyleSheet::default()).unwrap(),
            header: INSTRUCTION_TEXT.to_string(),
            window: ScrollWindow::new(max_height),
            // Wide enough for the header to fit on one row.
            max_display_width: 120,
            viewport_origin_row: Some(4),
        }
    }

    fn ctrl(ch: char) -> InputEvent {
        InputEvent::Keyboard(keypress!(@char ModifierKeysMask::new().with_ctrl(), ch))
    }

    #[test_case(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'd'), Some(GlobalAction::Confirm))]
    #[test_case(keypress!(@char ModifierKeysMask::new().with_ctrl(), 'c'), Some(GlobalAction::Cancel))]
    #[test_case(keypress!(@special SpecialKey::Tab), Some(GlobalAction::FocusNext))]
    #[test_case(keypress!(@special SpecialKey::BackTab), Some(GlobalAction::FocusPrevious))]
    #[test_case(keypress!(@char 'd'), None)]
    fn test_lookup_global_action(key_press: KeyPress, expected: Option<GlobalAction>) {
        assert_eq2!(lookup_global_action(&key_press), expected);
    }

    #[test]
    fn test_confirm_returns_selected_in_order() {
        let mut state = session(3, 10);
        state.list.dispatch(crate::ListAction::MoveDown, None);
        state.list.dispatch(crate::ListAction::Toggle, None);
        state.list.dispatch(crate::ListAction::MoveUp, None);
        state.list.dispatch(crate::ListAction::Toggle, None);

        assert_eq2!(
            session_input_handler(&mut state, ctrl('d')),
            EventLoopResult::ExitWithResult(vec![1, 0])
        );
    }

    #[test]
    fn test_cancel_and_focus_keys() {
        let mut state = session(3, 10);
        assert_eq2!(
            session_input_handler(&mut state, ctrl('c')),
            EventLoopResult::ExitWithoutResult
        );
        assert_eq2!(
            session_input_handler(
                &mut state,
                InputEvent::Keyboard(keypress!(@special SpecialKey::Tab))
            ),
            EventLoopResult::Continue
        );
        assert_eq2!(state.list.state().cursor(), 0);
    }

    #[test]
    fn test_list_keys_rerender() {
        let mut state = session(3, 10);
        assert_eq2!(
            session_input_handler(
                &mut state,
                InputEvent::Keyboard(keypress!(@special SpecialKey::Down))
            ),
            EventLoopResult::ContinueAndRerender
        );
        assert_eq2!(state.list.state().cursor(), 1);
        assert_eq2!(
            session_input_handler(
                &mut state,
                InputEvent::Keyboard(keypress!(@special SpecialKey::Home))
            ),
            EventLoopResult::Continue
        );
    }

    #[test]
    fn test_page_down_uses_displayed_line_count() {
        let mut state = session(20, 5);
        session_input_handler(
            &mut state,
            InputEvent::Keyboard(keypress!(@special SpecialKey::PageDown)),
        );
        assert_eq2!(state.list.state().cursor(), 5);
    }

    #[test]
    fn test_resize_updates_width_and_forgets_origin() {
        let mut state = session(3, 10);
        let result = session_input_handler(
            &mut state,
            InputEvent::Resize(Size {
                col_width: 40,
                row_height: 20,
            }),
        );
        assert_eq2!(result, EventLoopResult::ContinueAndRerenderAndClear);
        assert_eq2!(state.max_display_width, 40);
        assert_eq2!(state.viewport_origin_row, None);
    }

    #[test_case(4, None ; "header row")]
    #[test_case(5, Some(0) ; "first list row")]
    #[test_case(9, Some(4) ; "last visible row")]
    #[test_case(10, None ; "below viewport")]
    #[test_case(2, None ; "above viewport")]
    fn test_list_row_for_screen_row(screen_row: usize, expected: Option<usize>) {
        let state = session(20, 5);
        assert_eq2!(state.list_row_for_screen_row(screen_row), expected);
    }

    #[test]
    fn test_wrapped_header_shifts_list_rows() {
        let mut state = session(20, 5);
        state.max_display_width = 40;

        assert_eq2!(state.header_height(), 3);
        assert_eq2!(state.list_row_for_screen_row(6), None);
        assert_eq2!(state.list_row_for_screen_row(7), Some(0));

        state.max_display_width = 80;
        assert_eq2!(
            state.header_rows(),
            vec![
                "arrow keys to move; space to toggle; ctrl-c to quit; ctrl-d to finish and",
                "continue",
            ]
        );
        assert_eq2!(state.list_row_for_screen_row(5), None);
        assert_eq2!(state.list_row_for_screen_row(6), Some(0));
    }

    #[test]
    fn test_list_row_for_screen_row_with_offset() {
        let mut state = session(20, 5);
        state.window.offset = 7;
        assert_eq2!(state.list_row_for_screen_row(6), Some(8));
    }

    #[test]
    fn test_list_row_unknown_origin() {
        let mut state = session(3, 10);
        state.viewport_origin_row = None;
        assert_eq2!(state.list_row_for_screen_row(5), None);
    }

    #[test]
    fn test_mouse_release_toggles_translated_row() {
        let mut state = session(3, 10);
        let result = session_input_handler(
            &mut state,
            InputEvent::Mouse(MouseInput::left_click_release(3, 7)),
        );
        assert_eq2!(result, EventLoopResult::ContinueAndRerender);
        assert_eq2!(state.list.state().cursor(), 2);
        assert_eq2!(state.list.selected(), &[2]);
    }

    #[test]
    fn test_mouse_release_outside_list_is_ignored() {
        let mut state = session(3, 10);
        let result = session_input_handler(
            &mut state,
            InputEvent::Mouse(MouseInput::left_click_release(3, 4)),
        );
        assert_eq2!(result, EventLoopResult::Continue);
        assert!(state.list.selected().is_empty());
    }
}
