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

use std::fmt::Debug;

use crate::{CHECKED_MARKER, ChecklistError, DEVELOPMENT_MODE, InputEvent, Item,
            ListAction, ListState, MouseInputKind, StyleSheet, StyledFragment,
            StyledFragments, UNCHECKED_MARKER, lookup_action, split_lines};

/// Multi-select checklist. Owns the items, the selection and the cursor.
///
/// It is driven from the outside through two calls:
/// 1. [`Self::display_fragments`] to get what to draw, one line per item.
/// 2. [`Self::handle_input`] to route an input event to it.
#[derive(Debug)]
pub struct SelectableList<T> {
    state: ListState<T>,
    style: StyleSheet,
}

impl<T: Clone + PartialEq + Debug> SelectableList<T> {
    /// Values in `defaults` that don't belong to any item are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::InvalidConfig`] if `items` is empty.
    pub fn try_new(
        items: Vec<Item<T>>,
        defaults: &[T],
        style: StyleSheet,
    ) -> Result<Self, ChecklistError> {
        Ok(Self {
            state: ListState::try_new(items, defaults)?,
            style,
        })
    }

    #[must_use]
    pub fn state(&self) -> &ListState<T> { &self.state }

    #[must_use]
    pub fn style(&self) -> &StyleSheet { &self.style }

    #[must_use]
    pub fn selected(&self) -> &[T] { self.state.selected() }

    /// One visual line per item.
    #[must_use]
    pub fn line_count(&self) -> usize { self.state.len() }

    /// Render the whole list, lines separated by line break fragments. There is no line
    /// break after the last line.
    #[must_use]
    pub fn display_fragments(&self) -> StyledFragments {
        let style = &self.style;
        let mut acc = StyledFragments::new();

        for (index, item) in self.state.items().iter().enumerate() {
            let is_checked = self.state.is_selected(&item.value);
            let is_cursor = index == self.state.cursor();

            let mut item_style = String::new();
            if is_checked {
                item_style.push(' ');
                item_style.push_str(&style.checked_style);
            }
            if is_cursor {
                item_style.push(' ');
                item_style.push_str(&style.selected_style);
            }

            acc.push(StyledFragment::new(&item_style, &style.open_glyph));
            if is_cursor {
                acc.push(StyledFragment::cursor_marker());
            }
            let marker = if is_checked {
                CHECKED_MARKER
            } else {
                UNCHECKED_MARKER
            };
            acc.push(StyledFragment::new(&item_style, marker));
            acc.push(StyledFragment::new(&item_style, &style.close_glyph));
            acc.push(StyledFragment::new(&style.default_style, &style.separator));

            // Labels are single line, and must not move the caret or send escape
            // sequences, so control characters become spaces.
            acc.extend(
                item.label
                    .to_styled_fragments(&style.default_style)
                    .into_iter()
                    .map(|mut fragment| {
                        if fragment.text.contains(char::is_control) {
                            fragment.text = fragment
                                .text
                                .chars()
                                .map(|ch| if ch.is_control() { ' ' } else { ch })
                                .collect();
                        }
                        fragment
                    }),
            );

            acc.push(StyledFragment::line_break());
        }

        acc.pop();
        acc
    }

    #[must_use]
    pub fn display_lines(&self) -> Vec<StyledFragments> {
        split_lines(&self.display_fragments())
    }

    /// Map a row relative to the top of the list to an item index. Rows past the end
    /// map to [None].
    #[must_use]
    pub fn row_at(&self, y: usize) -> Option<usize> { (y < self.state.len()).then_some(y) }

    /// Route an input event to the list. `viewport_line_count` is the number of list
    /// rows visible on screen, if known, and is used as the page size.
    ///
    /// Mouse positions must already be relative to the top left of the list. Only the
    /// release of a button is acted upon: the cursor moves to the row and the item is
    /// toggled.
    ///
    /// Returns `true` if the event was recognized.
    pub fn handle_input(
        &mut self,
        input_event: &InputEvent,
        viewport_line_count: Option<usize>,
    ) -> bool {
        let maybe_action = match input_event {
            InputEvent::Keyboard(key_press) => lookup_action(key_press),
            InputEvent::Mouse(mouse_input) => match mouse_input.kind {
                MouseInputKind::MouseUp(_) => match self.row_at(mouse_input.pos.row) {
                    Some(index) => {
                        self.state.set_cursor(index);
                        Some(ListAction::Toggle)
                    }
                    None => None,
                },
                _ => None,
            },
            _ => None,
        };

        let Some(action) = maybe_action else {
            return false;
        };

        self.dispatch(action, viewport_line_count);
        true
    }

    pub fn dispatch(&mut self, action: ListAction, viewport_line_count: Option<usize>) {
        action.apply(&mut self.state, viewport_line_count);

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "SelectableList::dispatch",
                action = ?action,
                cursor = self.state.cursor(),
                selected = ?self.state.selected()
            );
        });
    }
}
