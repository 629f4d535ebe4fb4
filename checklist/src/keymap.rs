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

use crate::{Key, KeyPress, ListState, SpecialKey, keypress};

/// Transitions of [`ListState`] that can be bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Toggle,
    TypeAhead(char),
}

/// Keyboard dispatch table. Any printable character that isn't bound here is used for
/// type-ahead search, see [`lookup_action`].
pub const KEY_BINDINGS: &[(KeyPress, ListAction)] = &[
    (keypress!(@special SpecialKey::Up), ListAction::MoveUp),
    (keypress!(@special SpecialKey::Down), ListAction::MoveDown),
    (keypress!(@special SpecialKey::PageUp), ListAction::PageUp),
    (keypress!(@special SpecialKey::PageDown), ListAction::PageDown),
    (keypress!(@special SpecialKey::Enter), ListAction::Toggle),
    (keypress!(@char ' '), ListAction::Toggle),
];

#[must_use]
pub fn lookup_action(key_press: &KeyPress) -> Option<ListAction> {
    if let Some((_, action)) = KEY_BINDINGS.iter().find(|(it, _)| it == key_press) {
        return Some(*action);
    }

    match key_press {
        KeyPress::Plain {
            key: Key::Character(ch),
        } if !ch.is_control() => Some(ListAction::TypeAhead(*ch)),
        _ => None,
    }
}

impl ListAction {
    /// `viewport_line_count` is the number of list rows currently on screen. It is the
    /// page size for [`ListAction::PageUp`] and [`ListAction::PageDown`].
    pub fn apply<T: Clone + PartialEq + Debug>(
        self,
        state: &mut ListState<T>,
        viewport_line_count: Option<usize>,
    ) {
        match self {
            ListAction::MoveUp => state.move_up(),
            ListAction::MoveDown => state.move_down(),
            ListAction::PageUp => state.page_up(viewport_line_count),
            ListAction::PageDown => state.page_down(viewport_line_count),
            ListAction::Toggle => state.toggle(),
            ListAction::TypeAhead(ch) => state.type_ahead(ch),
        }
    }
}
