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


//! Drives complete sessions against a mock terminal.

use r3bl_checklist::{ChecklistError, ChooseOptions, INSTRUCTION_TEXT, InputEvent, Item,
                     ModifierKeysMask, MouseInput, OutputDevice, SessionOutcome,
                     SpecialKey, TestVecInputReader, assert_eq2, choose_many, keypress};

fn fruits() -> Vec<Item<&'static str>> {
    vec![
        Item::plain("a", "Apple"),
        Item::plain("b", "Banana"),
        Item::plain("c", "Cherry"),
    ]
}

fn options() -> ChooseOptions {
    ChooseOptions {
        max_width: Some(80),
        ..ChooseOptions::default()
    }
}

fn key(special_key: SpecialKey) -> InputEvent {
    InputEvent::Keyboard(keypress!(@special special_key))
}

fn ctrl(ch: char) -> InputEvent {
    InputEvent::Keyboard(keypress!(@char ModifierKeysMask::new().with_ctrl(), ch))
}

#[test]
fn test_confirm_after_moving_and_toggling() {
    let (mut output_device, stdout_mock) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![
        key(SpecialKey::Down),
        InputEvent::Keyboard(keypress!(@char ' ')),
        ctrl('d'),
    ]);

    let outcome =
        choose_many(fruits(), &[], options(), (&mut output_device, &mut reader)).unwrap();

    assert_eq2!(outcome, SessionOutcome::Confirmed(vec!["b"]));
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    // The header is wider than 80 columns, so it wraps onto a second row.
    for word in INSTRUCTION_TEXT.split_whitespace() {
        assert!(output.contains(word), "missing header word {word:?}");
    }
    assert!(output.contains("[*] Banana"));
}

#[test]
fn test_confirm_keeps_check_order_and_defaults() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![
        // Cursor starts on the default, "c".
        key(SpecialKey::Up),
        key(SpecialKey::Up),
        key(SpecialKey::Enter),
        ctrl('d'),
    ]);

    let outcome =
        choose_many(fruits(), &["c"], options(), (&mut output_device, &mut reader))
            .unwrap();

    assert_eq2!(outcome, SessionOutcome::Confirmed(vec!["c", "a"]));
}

#[test]
fn test_confirm_with_nothing_checked_is_not_cancel() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![ctrl('d')]);

    let outcome =
        choose_many(fruits(), &[], options(), (&mut output_device, &mut reader)).unwrap();

    assert_eq2!(outcome, SessionOutcome::Confirmed(vec![]));
}

#[test]
fn test_cancel() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![
        InputEvent::Keyboard(keypress!(@char ' ')),
        ctrl('c'),
    ]);

    let outcome =
        choose_many(fruits(), &[], options(), (&mut output_device, &mut reader)).unwrap();

    assert_eq2!(outcome, SessionOutcome::Cancelled);
}

#[test]
fn test_type_ahead_and_mouse() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![
        // Header takes screen rows 0 and 1, so "Cherry" is on row 4.
        InputEvent::Mouse(MouseInput::left_click_release(2, 4)),
        // Header row, ignored.
        InputEvent::Mouse(MouseInput::left_click_release(2, 0)),
        InputEvent::Keyboard(keypress!(@char 'b')),
        InputEvent::Keyboard(keypress!(@char ' ')),
        ctrl('d'),
    ]);

    let outcome =
        choose_many(fruits(), &[], options(), (&mut output_device, &mut reader)).unwrap();

    assert_eq2!(outcome, SessionOutcome::Confirmed(vec!["c", "b"]));
}

#[test]
fn test_input_closed_is_an_error() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![key(SpecialKey::Down)]);

    let report = choose_many(fruits(), &[], options(), (&mut output_device, &mut reader))
        .unwrap_err();

    assert_eq2!(
        report.downcast_ref::<ChecklistError>(),
        Some(&ChecklistError::InputClosed)
    );
}

#[test]
fn test_empty_items_is_an_error() {
    let (mut output_device, _) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![ctrl('d')]);

    let report = choose_many(
        Vec::<Item<&str>>::new(),
        &[],
        options(),
        (&mut output_device, &mut reader),
    )
    .unwrap_err();

    assert!(matches!(
        report.downcast_ref::<ChecklistError>(),
        Some(ChecklistError::InvalidConfig { .. })
    ));
}

#[test]
fn test_long_list_scrolls() {
    let items = (0..30)
        .map(|it| Item::plain(it, format!("Row {it}")))
        .collect::<Vec<_>>();
    let (mut output_device, stdout_mock) = OutputDevice::new_mock();
    let mut reader = TestVecInputReader::new(vec![
        key(SpecialKey::PageDown),
        key(SpecialKey::PageDown),
        InputEvent::Keyboard(keypress!(@char ' ')),
        ctrl('d'),
    ]);
    let options = ChooseOptions {
        max_height: Some(4),
        ..options()
    };

    let outcome =
        choose_many(items, &[], options, (&mut output_device, &mut reader)).unwrap();

    assert_eq2!(outcome, SessionOutcome::Confirmed(vec![8]));
    let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
    assert!(output.contains("[*] Row 8"));
    assert!(output.contains('█'));
}
