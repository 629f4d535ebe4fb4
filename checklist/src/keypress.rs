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

//! Input events, decoupled from crossterm.
//!
//! ```text
//! crossterm::Event
//!     ├─→ Event::Key(KeyEvent)     → KeyPress   → InputEvent::Keyboard
//!     ├─→ Event::Mouse(MouseEvent) → MouseInput → InputEvent::Mouse
//!     ├─→ Event::Resize(w, h)      → Size       → InputEvent::Resize
//!     ├─→ Event::Focus*            → FocusEvent → InputEvent::Focus
//!     └─→ Event::Paste(String)     → String     → InputEvent::BracketedPaste
//! ```
//!
//! Only key presses are converted. Key release and repeat events, and keys a checklist
//! has no use for (function keys, media keys, etc.), fail to convert.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
                       MouseButton, MouseEvent, MouseEventKind};

#[macro_export]
macro_rules! keypress {
    // @char
    (@char $arg_char : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::Character($arg_char),
        }
    };

    (@char $arg_modifiers : expr, $arg_char : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::Character($arg_char),
        }
    };

    // @special
    (@special $arg_special : expr) => {
        $crate::KeyPress::Plain {
            key: $crate::Key::SpecialKey($arg_special),
        }
    };

    (@special $arg_modifiers : expr, $arg_special : expr) => {
        $crate::KeyPress::WithModifiers {
            mask: $arg_modifiers,
            key: $crate::Key::SpecialKey($arg_special),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pos {
    pub col: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub col_width: usize,
    pub row_height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
    Mouse(MouseInput),
    Focus(FocusEvent),
    BracketedPaste(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Plain { key: Key },
    WithModifiers { key: Key, mask: ModifierKeysMask },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Character(char),
    SpecialKey(SpecialKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    BackTab, /* Shift + Tab */
    Delete,
    Insert,
    Esc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierKeysMask {
    pub shift_key_state: KeyState,
    pub ctrl_key_state: KeyState,
    pub alt_key_state: KeyState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    Pressed,
    #[default]
    NotPressed,
}

impl ModifierKeysMask {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shift_key_state: KeyState::NotPressed,
            ctrl_key_state: KeyState::NotPressed,
            alt_key_state: KeyState::NotPressed,
        }
    }

    #[must_use]
    pub const fn with_shift(mut self) -> Self {
        self.shift_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub const fn with_ctrl(mut self) -> Self {
        self.ctrl_key_state = KeyState::Pressed;
        self
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt_key_state = KeyState::Pressed;
        self
    }
}

impl From<KeyModifiers> for ModifierKeysMask {
    fn from(other: KeyModifiers) -> Self {
        let mut it = ModifierKeysMask::new();
        if other.intersects(KeyModifiers::SHIFT) {
            it.shift_key_state = KeyState::Pressed;
        }
        if other.intersects(KeyModifiers::CONTROL) {
            it.ctrl_key_state = KeyState::Pressed;
        }
        if other.intersects(KeyModifiers::ALT) {
            it.alt_key_state = KeyState::Pressed;
        }
        it
    }
}

/// [None] when no modifier we care about is held.
#[must_use]
pub fn convert_key_modifiers(modifiers: &KeyModifiers) -> Option<ModifierKeysMask> {
    let mask = ModifierKeysMask::from(*modifiers);
    if mask == ModifierKeysMask::new() {
        None
    } else {
        Some(mask)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    /// Screen position, zero based.
    pub pos: Pos,
    pub kind: MouseInputKind,
    pub maybe_modifier_keys: Option<ModifierKeysMask>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseInputKind {
    MouseDown(Button),
    MouseUp(Button),
    MouseMove,
    MouseDrag(Button),
    ScrollUp,
    ScrollDown,
    ScrollLeft,
    ScrollRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Middle,
}

impl MouseInput {
    /// Release of the left button at `(col, row)`, with no modifiers.
    #[must_use]
    pub fn left_click_release(col: usize, row: usize) -> Self {
        Self {
            pos: Pos { col, row },
            kind: MouseInputKind::MouseUp(Button::Left),
            maybe_modifier_keys: None,
        }
    }
}

mod converters {
    use super::{Button, Event, FocusEvent, InputEvent, Key, KeyCode, KeyEvent,
                KeyEventKind, KeyModifiers, KeyPress, MouseButton, MouseEvent,
                MouseEventKind, MouseInput, MouseInputKind, Pos, Size, SpecialKey,
                convert_key_modifiers};

    impl TryFrom<Event> for InputEvent {
        type Error = ();

        fn try_from(event: Event) -> Result<Self, Self::Error> {
            match event {
                Event::Key(key_event) => Ok(InputEvent::Keyboard(key_event.try_into()?)),
                Event::Mouse(mouse_event) => Ok(InputEvent::Mouse(mouse_event.into())),
                Event::Resize(columns, rows) => Ok(InputEvent::Resize(Size {
                    col_width: usize::from(columns),
                    row_height: usize::from(rows),
                })),
                Event::FocusGained => Ok(InputEvent::Focus(FocusEvent::Gained)),
                Event::FocusLost => Ok(InputEvent::Focus(FocusEvent::Lost)),
                Event::Paste(text) => Ok(InputEvent::BracketedPaste(text)),
            }
        }
    }

    impl TryFrom<KeyEvent> for KeyPress {
        type Error = ();

        fn try_from(key_event: KeyEvent) -> Result<Self, Self::Error> {
            if key_event.kind != KeyEventKind::Press {
                return Err(());
            }

            // Character keys ignore SHIFT, it is already reflected in the character.
            if let KeyCode::Char(character) = key_event.code
                && (key_event.modifiers == KeyModifiers::NONE
                    || key_event.modifiers == KeyModifiers::SHIFT)
            {
                return Ok(keypress!(@char character));
            }

            let key = copy_code_from_key_event(&key_event).ok_or(())?;

            // Terminals report BackTab along with SHIFT.
            let modifiers = match key {
                Key::SpecialKey(SpecialKey::BackTab) => {
                    key_event.modifiers.difference(KeyModifiers::SHIFT)
                }
                _ => key_event.modifiers,
            };

            Ok(match convert_key_modifiers(&modifiers) {
                Some(mask) => KeyPress::WithModifiers { key, mask },
                None => KeyPress::Plain { key },
            })
        }
    }

    fn copy_code_from_key_event(key_event: &KeyEvent) -> Option<Key> {
        // Make the code easier to read below using this alias.
        type KC = KeyCode;
        let special = |it| Some(Key::SpecialKey(it));
        match key_event.code {
            KC::Backspace => special(SpecialKey::Backspace),
            KC::Enter => special(SpecialKey::Enter),
            KC::Left => special(SpecialKey::Left),
            KC::Right => special(SpecialKey::Right),
            KC::Up => special(SpecialKey::Up),
            KC::Down => special(SpecialKey::Down),
            KC::Home => special(SpecialKey::Home),
            KC::End => special(SpecialKey::End),
            KC::PageUp => special(SpecialKey::PageUp),
            KC::PageDown => special(SpecialKey::PageDown),
            KC::Tab => special(SpecialKey::Tab),
            KC::BackTab => special(SpecialKey::BackTab),
            KC::Delete => special(SpecialKey::Delete),
            KC::Insert => special(SpecialKey::Insert),
            KC::Esc => special(SpecialKey::Esc),
            KC::Char(character) => Some(Key::Character(character)),
            _ => None,
        }
    }

    impl From<MouseEvent> for MouseInput {
        fn from(mouse_event: MouseEvent) -> Self {
            MouseInput {
                pos: Pos {
                    col: usize::from(mouse_event.column),
                    row: usize::from(mouse_event.row),
                },
                kind: mouse_event.kind.into(),
                maybe_modifier_keys: convert_key_modifiers(&mouse_event.modifiers),
            }
        }
    }

    impl From<MouseEventKind> for MouseInputKind {
        fn from(mouse_event_kind: MouseEventKind) -> Self {
            match mouse_event_kind {
                MouseEventKind::Down(button) => MouseInputKind::MouseDown(button.into()),
                MouseEventKind::Up(button) => MouseInputKind::MouseUp(button.into()),
                MouseEventKind::Moved => MouseInputKind::MouseMove,
                MouseEventKind::Drag(button) => MouseInputKind::MouseDrag(button.into()),
                MouseEventKind::ScrollUp => MouseInputKind::ScrollUp,
                MouseEventKind::ScrollDown => MouseInputKind::ScrollDown,
                MouseEventKind::ScrollLeft => MouseInputKind::ScrollLeft,
                MouseEventKind::ScrollRight => MouseInputKind::ScrollRight,
            }
        }
    }

    impl From<MouseButton> for Button {
        fn from(mouse_button: MouseButton) -> Self {
            match mouse_button {
                MouseButton::Left => Button::Left,
                MouseButton::Right => Button::Right,
                MouseButton::Middle => Button::Middle,
            }
        }
    }
}
