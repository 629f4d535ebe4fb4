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

use std::{fmt::Debug, io::Write};

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                style::{Print, PrintStyledContent, ResetColor, StyledContent},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{ChecklistSession, DEVELOPMENT_MODE, INSTRUCTION_CLASS, LockedOutputDevice,
            OutputDevice, Palette, find_cursor_position, merge_styles, queue_commands,
            queue_commands_no_lock, render_scrollbar, split_lines};

/// Something that paints state `S` inline in the terminal, below the caret, in a fixed
/// number of rows. After painting, the caret goes back to the first row.
pub trait FunctionComponent<S> {
    fn get_output_device(&mut self) -> OutputDevice;

    fn calculate_header_viewport_height(&self, state: &mut S) -> usize;

    /// Rows used by the items, not including the header.
    fn calculate_items_viewport_height(&self, state: &mut S) -> usize;

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn render(&mut self, state: &mut S) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn allocate_viewport_height_space(&mut self, state: &mut S) -> miette::Result<()> {
        let viewport_height = self.calculate_items_viewport_height(state)
            + self.calculate_header_viewport_height(state);
        if viewport_height == 0 {
            return Ok(());
        }

        // Make room first, so that moving the caret back up works even at the bottom of
        // the terminal.
        let output_device = self.get_output_device();
        queue_commands! {
            output_device,
            Print("\n".repeat(viewport_height)),
            MoveToPreviousLine(as_u16(viewport_height)),
        };
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn clear_viewport(&mut self, state: &mut S) -> miette::Result<()> {
        let viewport_height = self.calculate_items_viewport_height(state)
            + self.calculate_header_viewport_height(state);
        if viewport_height == 0 {
            return Ok(());
        }

        let output_device = self.get_output_device();
        for _ in 0..viewport_height {
            queue_commands! {
                output_device,
                Clear(ClearType::CurrentLine),
                MoveToNextLine(1),
            };
        }
        queue_commands! {
            output_device,
            MoveToPreviousLine(as_u16(viewport_height)),
        };
        output_device.lock().flush().into_diagnostic()?;
        Ok(())
    }
}

/// Crossterm takes `u16` row counts.
#[must_use]
pub fn as_u16(value: usize) -> u16 { u16::try_from(value).unwrap_or(u16::MAX) }

/// Longest prefix of `text` that fits in `max_width` terminal cells, and its width.
#[must_use]
pub fn clip_to_width(text: &str, max_width: usize) -> (String, usize) {
    let mut used = 0;
    let mut acc = String::new();
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        used += ch_width;
        acc.push(ch);
    }
    (acc, used)
}

/// Word wrap `text` into rows of at most `max_width` terminal cells. Runs of whitespace
/// collapse to one space, and words wider than a row are split. Always returns at least
/// one row.
#[must_use]
pub fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut rows = vec![];
    let mut row = String::new();
    let mut row_width = 0;

    for mut word in text.split_whitespace() {
        let mut word_width = UnicodeWidthStr::width(word);

        if row_width > 0 && row_width + 1 + word_width <= max_width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }

        if row_width > 0 {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        while word_width > max_width {
            let (head, head_width) = clip_to_width(word, max_width);
            // A single character wider than the row, it gets clipped when painted.
            if head.is_empty() {
                break;
            }
            word = &word[head.len()..];
            word_width -= head_width;
            rows.push(head);
        }

        row.push_str(word);
        row_width = word_width;
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Paints a [`ChecklistSession`]: the instruction header, then the rows of the list
/// that are inside the scroll window, with an optional scrollbar on the right.
#[allow(missing_debug_implementations)]
pub struct ChecklistComponent {
    pub output_device: OutputDevice,
    pub palette: Palette,
}

impl ChecklistComponent {
    #[must_use]
    pub fn new(output_device: OutputDevice, palette: Palette) -> Self {
        Self {
            output_device,
            palette,
        }
    }
}

impl<T: Clone + PartialEq + Debug> FunctionComponent<ChecklistSession<T>>
    for ChecklistComponent
{
    fn get_output_device(&mut self) -> OutputDevice { self.output_device.clone() }

    fn calculate_header_viewport_height(&self, state: &mut ChecklistSession<T>) -> usize {
        state.header_height()
    }

    fn calculate_items_viewport_height(&self, state: &mut ChecklistSession<T>) -> usize {
        state.window.visible_height(state.list.line_count())
    }

    fn render(&mut self, state: &mut ChecklistSession<T>) -> miette::Result<()> {
        let item_count = state.list.line_count();

        // The caret stays hidden while the session runs. The cursor marker is used to
        // scroll the row it is on into view.
        let fragments = state.list.display_fragments();
        let cursor_row = find_cursor_position(&fragments)
            .map_or_else(|| state.list.state().cursor(), |(row, _)| row);
        state.window.follow_cursor(cursor_row, item_count);

        let viewport_height = self.calculate_items_viewport_height(state);
        let header_height = self.calculate_header_viewport_height(state);

        self.allocate_viewport_height_space(state)?;

        // Mouse events carry screen rows, so remember where the viewport starts. A mock
        // device has no caret to ask, it always starts at the top.
        if state.viewport_origin_row.is_none() {
            state.viewport_origin_row = if self.output_device.is_mock {
                Some(0)
            } else {
                self.output_device.lock().flush().into_diagnostic()?;
                crossterm::cursor::position()
                    .ok()
                    .map(|(_, row)| usize::from(row))
            };
        }

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ChecklistComponent::render",
                cursor = state.list.state().cursor(),
                offset = state.window.offset,
                viewport_height = viewport_height,
                viewport_origin_row = ?state.viewport_origin_row
            );
        });

        let lines = split_lines(&fragments);
        let style = state.list.style();
        let maybe_scrollbar = if style.show_scrollbar {
            render_scrollbar(item_count, state.window.offset, viewport_height)
        } else {
            None
        };
        let max_width = state.max_display_width.max(1);
        let content_width = max_width.saturating_sub(usize::from(maybe_scrollbar.is_some()));

        let header_rows = state.header_rows();
        let header_style = self.palette.resolve(INSTRUCTION_CLASS);

        let mut guard = self.output_device.lock();
        let writer: LockedOutputDevice<'_> = &mut *guard;

        // Print header.
        for header_row in header_rows {
            let (header_text, _) = clip_to_width(&header_row, max_width);
            queue_commands_no_lock! {
                writer,
                // Bring the caret back to the start of line.
                MoveToColumn(0),
                // Reset the colors that may have been set by the previous command.
                ResetColor,
                Clear(ClearType::CurrentLine),
                PrintStyledContent(StyledContent::new(header_style, header_text)),
                ResetColor,
                MoveToNextLine(1),
            };
        }

        // Print each line in the viewport.
        let visible_range = state.window.visible_range(item_count);
        for (viewport_row_index, line) in lines[visible_range].iter().enumerate() {
            queue_commands_no_lock! {
                writer,
                MoveToColumn(0),
                ResetColor,
                Clear(ClearType::CurrentLine),
            };

            let mut remaining_width = content_width;
            for fragment in line.iter().filter(|it| !it.is_cursor_marker()) {
                let (text, used_width) = clip_to_width(&fragment.text, remaining_width);
                if text.is_empty() {
                    continue;
                }
                remaining_width -= used_width;
                let content_style = self
                    .palette
                    .resolve(&merge_styles(&style.container_style, &fragment.style));
                queue_commands_no_lock! {
                    writer,
                    PrintStyledContent(StyledContent::new(content_style, text)),
                };
            }

            if let Some(cell) = maybe_scrollbar
                .as_ref()
                .and_then(|cells| cells.get(viewport_row_index))
            {
                queue_commands_no_lock! {
                    writer,
                    ResetColor,
                    Print(" ".repeat(remaining_width)),
                    PrintStyledContent(StyledContent::new(
                        self.palette.resolve(cell.style_class()),
                        cell.glyph(),
                    )),
                };
            }

            queue_commands_no_lock! {
                writer,
                ResetColor,
                MoveToNextLine(1),
            };
        }

        // Move the caret back up.
        queue_commands_no_lock! {
            writer,
            MoveToPreviousLine(as_u16(viewport_height + header_height)),
        };

        writer.flush().into_diagnostic()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{INSTRUCTION_TEXT, Item, ListAction, ScrollWindow, SelectableList,
                StyleSheet, assert_eq2};

    fn session(
        count: usize,
        max_height: usize,
        width: usize,
        style: StyleSheet,
    ) -> ChecklistSession<usize> {
        let items = (0..count)
            .map(|it| Item::plain(it, format!("Item {it}")))
            .collect();
        ChecklistSession {
            list: SelectableList::try_new(items, &[], style).unwrap(),
            header: INSTRUCTION_TEXT.to_string(),
            window: ScrollWindow::new(max_height),
            max_display_width: width,
            viewport_origin_row: Some(0),
        }
    }

    #[test]
    fn test_clip_to_width() {
        assert_eq2!(clip_to_width("hello", 3), ("hel".to_string(), 3));
        assert_eq2!(clip_to_width("hello", 10), ("hello".to_string(), 5));
        assert_eq2!(clip_to_width("😀😀", 3), ("😀".to_string(), 2));
        assert_eq2!(clip_to_width("abc", 0), (String::new(), 0));
    }

    #[test]
    fn test_render_header_and_items() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = ChecklistComponent::new(output_device, Palette::default());
        let mut state = session(3, 10, 80, StyleSheet::default());

        component.render(&mut state).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        for word in INSTRUCTION_TEXT.split_whitespace() {
            assert!(output.contains(word), "missing header word {word:?}");
        }
        assert!(output.contains("ctrl-d to finish and"));
        assert!(output.contains("continue"));
        assert!(output.contains("[ ] Item 0"));
        assert!(output.contains("[ ] Item 2"));
        assert!(!output.contains('^'));
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq2!(wrap_to_width("one two three", 7), vec!["one two", "three"]);
        assert_eq2!(wrap_to_width("one  two", 80), vec!["one two"]);
        assert_eq2!(wrap_to_width("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq2!(wrap_to_width("ab cdefgh", 3), vec!["ab", "cde", "fgh"]);
        assert_eq2!(wrap_to_width("😀😀 x", 2), vec!["😀", "😀", "x"]);
        assert_eq2!(wrap_to_width("", 10), vec![""]);
    }

    #[test]
    fn test_header_wraps_and_takes_more_rows() {
        let (output_device, _) = OutputDevice::new_mock();
        let component = ChecklistComponent::new(output_device, Palette::default());

        let mut state = session(3, 10, 80, StyleSheet::default());
        assert_eq2!(component.calculate_header_viewport_height(&mut state), 2);

        state.max_display_width = 100;
        assert_eq2!(component.calculate_header_viewport_height(&mut state), 1);
    }

    #[test]
    fn test_render_never_writes_label_control_characters() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = ChecklistComponent::new(output_device, Palette::default());
        let items = vec![Item::plain(0, "Apple\rXX"), Item::plain(1, "B\x1b[2Jboom")];
        let mut state = ChecklistSession {
            list: SelectableList::try_new(items, &[], StyleSheet::default()).unwrap(),
            header: INSTRUCTION_TEXT.to_string(),
            window: ScrollWindow::new(10),
            max_display_width: 80,
            viewport_origin_row: Some(0),
        };

        component.render(&mut state).unwrap();

        let raw = stdout_mock.get_copy_of_buffer_as_string();
        assert!(!raw.contains('\r'));
        assert!(!raw.contains("\x1b[2J"));
        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains("[ ] Apple XX"));
        assert!(output.contains("[ ] B [2Jboom"));
    }

    #[test]
    fn test_render_scrolls_and_draws_scrollbar() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = ChecklistComponent::new(output_device, Palette::default());
        let mut state = session(20, 5, 30, StyleSheet::default());
        for _ in 0..7 {
            state.list.dispatch(ListAction::MoveDown, None);
        }

        component.render(&mut state).unwrap();

        assert_eq2!(state.window.offset, 3);
        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(!output.contains("Item 2"));
        assert!(output.contains(&format!("{:<29}^", "[ ] Item 3")));
        assert!(output.contains(&format!("{:<29}v", "[ ] Item 7")));
    }

    #[test]
    fn test_render_without_scrollbar_clips_to_width() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = ChecklistComponent::new(output_device, Palette::default());
        let mut state = session(20, 5, 6, StyleSheet::default().with_scrollbar(false));

        component.render(&mut state).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains("[ ] It"));
        assert!(!output.contains("Item"));
        assert!(!output.contains('^'));
    }

    #[test]
    fn test_clear_viewport_writes_nothing_visible() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = ChecklistComponent::new(output_device, Palette::default());
        let mut state = session(3, 10, 80, StyleSheet::default());

        component.clear_viewport(&mut state).unwrap();

        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.trim().is_empty());
        assert!(!stdout_mock.get_copy_of_buffer().is_empty());
    }
}
