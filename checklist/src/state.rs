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

use crate::{ChecklistError, DEVELOPMENT_MODE, Label, MarkupText, PlainText};

/// One row of the checklist: a domain value and the label shown for it.
#[derive(Debug)]
pub struct Item<T> {
    pub value: T,
    pub label: Box<dyn Label>,
}

impl<T> Item<T> {
    pub fn new(value: T, label: impl Label + 'static) -> Self {
        Self {
            value,
            label: Box::new(label),
        }
    }

    pub fn plain(value: T, text: impl Into<String>) -> Self {
        Self::new(value, PlainText::new(text))
    }

    /// Label with markup, eg: `<blue>Bacon</blue>`. See [`MarkupText`].
    pub fn markup(value: T, source: impl Into<String>) -> Self {
        Self::new(value, MarkupText::new(source))
    }

    pub fn label_text(&self) -> String { self.label.plain_text() }
}

/// Selection and navigation state of a checklist.
///
/// - `cursor` is always a valid index into `items`. It is clamped, never wraps.
/// - `selected` only ever holds values of existing items, in the order they were
///   checked.
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<Item<T>>,
    selected: Vec<T>,
    cursor: usize,
    primary_value: T,
}

impl<T: Clone + PartialEq + Debug> ListState<T> {
    /// # Errors
    ///
    /// Returns [`ChecklistError::InvalidConfig`] if `items` is empty.
    pub fn try_new(items: Vec<Item<T>>, defaults: &[T]) -> Result<Self, ChecklistError> {
        let Some(first_item) = items.first() else {
            return Err(ChecklistError::invalid_config(
                "a checklist needs at least one item",
            ));
        };

        let mut selected: Vec<T> = vec![];
        for value in defaults {
            let is_known = items.iter().any(|item| &item.value == value);
            if is_known && !selected.contains(value) {
                selected.push(value.clone());
            }
        }

        let primary_value = selected
            .first()
            .cloned()
            .unwrap_or_else(|| first_item.value.clone());

        let cursor = selected
            .first()
            .and_then(|value| items.iter().position(|item| &item.value == value))
            .unwrap_or(0);

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ListState::try_new",
                item_count = items.len(),
                selected = ?selected,
                cursor = cursor
            );
        });

        Ok(Self {
            items,
            selected,
            cursor,
            primary_value,
        })
    }

    #[must_use]
    pub fn items(&self) -> &[Item<T>] { &self.items }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Checked values in the order they were checked.
    #[must_use]
    pub fn selected(&self) -> &[T] { &self.selected }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn primary_value(&self) -> &T { &self.primary_value }

    #[must_use]
    pub fn is_selected(&self, value: &T) -> bool { self.selected.contains(value) }

    #[must_use]
    pub fn is_checked_at(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.is_selected(&item.value))
    }

    fn last_index(&self) -> usize { self.items.len().saturating_sub(1) }

    pub fn move_up(&mut self) { self.cursor = self.cursor.saturating_sub(1); }

    pub fn move_down(&mut self) { self.cursor = (self.cursor + 1).min(self.last_index()); }

    /// Move up by `page_size` rows. An unknown or zero page size does nothing.
    pub fn page_up(&mut self, page_size: Option<usize>) {
        if let Some(page_size) = page_size.filter(|it| *it > 0) {
            self.cursor = self.cursor.saturating_sub(page_size);
        }
    }

    /// Move down by `page_size` rows. An unknown or zero page size does nothing.
    pub fn page_down(&mut self, page_size: Option<usize>) {
        if let Some(page_size) = page_size.filter(|it| *it > 0) {
            self.cursor = self.cursor.saturating_add(page_size).min(self.last_index());
        }
    }

    /// Check the item under the cursor if it is unchecked, uncheck it otherwise.
    pub fn toggle(&mut self) {
        let value = &self.items[self.cursor].value;
        match self.selected.iter().position(|it| it == value) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(value.clone()),
        }
    }

    /// Jump to the next item whose label starts with `ch`, ignoring case. The search
    /// starts after the cursor and wraps around, so the item under the cursor is checked
    /// last. Does nothing if no label matches.
    pub fn type_ahead(&mut self, ch: char) {
        let needle = ch.to_lowercase().collect::<String>();
        let len = self.items.len();
        let maybe_match = (1..=len)
            .map(|step| (self.cursor + step) % len)
            .find(|&index| {
                self.items[index]
                    .label_text()
                    .to_lowercase()
                    .starts_with(&needle)
            });
        if let Some(index) = maybe_match {
            self.cursor = index;
        }
    }

    /// Move the cursor to `index`. Out of range indices are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.items.len() {
            self.cursor = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn fruits() -> Vec<Item<&'static str>> {
        vec![
            Item::plain("a", "Apple"),
            Item::plain("b", "Banana"),
            Item::plain("c", "Cherry"),
        ]
    }

    fn numbered(count: usize) -> Vec<Item<usize>> {
        (0..count)
            .map(|it| Item::plain(it, format!("Item {it}")))
            .collect()
    }

    #[test]
    fn test_empty_items_is_invalid_config() {
        let result = ListState::<&str>::try_new(vec![], &[]);
        assert!(matches!(result, Err(ChecklistError::InvalidConfig { .. })));
    }

    #[test]
    fn test_no_defaults() {
        let state = ListState::try_new(fruits(), &[]).unwrap();
        assert_eq2!(state.cursor(), 0);
        assert!(state.selected().is_empty());
        assert_eq2!(*state.primary_value(), "a");
    }

    #[test]
    fn test_defaults_are_filtered_and_set_cursor() {
        let state = ListState::try_new(fruits(), &["zzz", "c", "b", "c"]).unwrap();
        assert_eq2!(state.selected(), &["c", "b"]);
        assert_eq2!(state.cursor(), 2);
        assert_eq2!(*state.primary_value(), "c");
        assert!(state.is_checked_at(1));
        assert!(!state.is_checked_at(0));
        assert!(!state.is_checked_at(99));
    }

    #[test]
    fn test_cursor_is_always_valid_after_construction() {
        for count in 1..8 {
            let state = ListState::try_new(numbered(count), &[count - 1]).unwrap();
            assert!(state.cursor() < state.len());
        }
    }

    #[test]
    fn test_move_up_and_down_clamp() {
        let mut state = ListState::try_new(fruits(), &[]).unwrap();
        state.move_up();
        assert_eq2!(state.cursor(), 0);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq2!(state.cursor(), 2);
        state.move_up();
        assert_eq2!(state.cursor(), 1);
    }

    #[test_case(Some(3), 0, 3 ; "page down by three")]
    #[test_case(Some(30), 0, 9 ; "page down clamps")]
    #[test_case(Some(0), 4, 4 ; "zero page size is a no-op")]
    #[test_case(None, 4, 4 ; "unknown viewport is a no-op")]
    fn test_page_down(page_size: Option<usize>, start: usize, expected: usize) {
        let mut state = ListState::try_new(numbered(10), &[]).unwrap();
        state.set_cursor(start);
        state.page_down(page_size);
        assert_eq2!(state.cursor(), expected);
    }

    #[test_case(Some(3), 9, 6 ; "page up by three")]
    #[test_case(Some(30), 9, 0 ; "page up clamps")]
    #[test_case(Some(0), 4, 4 ; "zero page size is a no-op")]
    #[test_case(None, 4, 4 ; "unknown viewport is a no-op")]
    fn test_page_up(page_size: Option<usize>, start: usize, expected: usize) {
        let mut state = ListState::try_new(numbered(10), &[]).unwrap();
        state.set_cursor(start);
        state.page_up(page_size);
        assert_eq2!(state.cursor(), expected);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut state = ListState::try_new(fruits(), &["a"]).unwrap();
        state.set_cursor(1);
        state.toggle();
        assert_eq2!(state.selected(), &["a", "b"]);
        state.toggle();
        assert_eq2!(state.selected(), &["a"]);
        assert_eq2!(state.cursor(), 1);
    }

    #[test]
    fn test_retoggle_appends_at_end() {
        let mut state = ListState::try_new(fruits(), &["a", "b"]).unwrap();
        state.set_cursor(0);
        state.toggle();
        state.toggle();
        assert_eq2!(state.selected(), &["b", "a"]);
    }

    #[test]
    fn test_type_ahead_wraps_and_checks_current_last() {
        let items = vec![
            Item::plain(0, "beta"),
            Item::plain(1, "Bravo"),
            Item::plain(2, "charlie"),
        ];
        let mut state = ListState::try_new(items, &[]).unwrap();
        state.type_ahead('B');
        assert_eq2!(state.cursor(), 1);
        state.type_ahead('b');
        assert_eq2!(state.cursor(), 0);
        state.type_ahead('c');
        assert_eq2!(state.cursor(), 2);
        state.type_ahead('c');
        assert_eq2!(state.cursor(), 2);
    }

    #[test]
    fn test_type_ahead_no_match_is_a_no_op() {
        let mut state = ListState::try_new(fruits(), &[]).unwrap();
        state.set_cursor(1);
        state.type_ahead('z');
        assert_eq2!(state.cursor(), 1);
    }

    #[test]
    fn test_type_ahead_matches_markup_text_not_tags() {
        let items = vec![Item::plain(0, "Eggs"), Item::markup(1, "<blue>Bacon</blue>")];
        let mut state = ListState::try_new(items, &[]).unwrap();
        state.type_ahead('b');
        assert_eq2!(state.cursor(), 1);
    }

    #[test]
    fn test_single_item_navigation_is_a_no_op() {
        let mut state = ListState::try_new(vec![Item::plain("x", "X")], &[]).unwrap();
        state.move_up();
        state.move_down();
        state.page_down(Some(5));
        state.page_up(Some(5));
        assert_eq2!(state.cursor(), 0);
    }

    #[test]
    fn test_set_cursor_ignores_out_of_range() {
        let mut state = ListState::try_new(fruits(), &[]).unwrap();
        state.set_cursor(2);
        state.set_cursor(3);
        assert_eq2!(state.cursor(), 2);
    }
}
