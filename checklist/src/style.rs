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

/// Glyph drawn between the open and close glyphs of a checked item.
pub const CHECKED_MARKER: &str = "*";

/// Glyph drawn between the open and close glyphs of an unchecked item.
pub const UNCHECKED_MARKER: &str = " ";

/// Glyphs and style classes used to render a [`crate::SelectableList`].
///
/// The style fields hold style class strings (eg: `"class:checkbox"`), not colors. The
/// painter resolves them to colors with a [`crate::Palette`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub open_glyph: String,
    pub close_glyph: String,
    /// Drawn between the close glyph and the label, with the default style.
    pub separator: String,
    /// Applied to every row of the list by the painter, underneath everything else.
    pub container_style: String,
    pub default_style: String,
    /// Appended to the row under the cursor.
    pub selected_style: String,
    /// Appended to rows whose value is checked.
    pub checked_style: String,
    pub show_scrollbar: bool,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            open_glyph: "[".into(),
            close_glyph: "]".into(),
            separator: " ".into(),
            container_style: "class:checkbox-list".into(),
            default_style: "class:checkbox".into(),
            selected_style: "class:checkbox-selected".into(),
            checked_style: "class:checkbox-checked".into(),
            show_scrollbar: true,
        }
    }
}

impl StyleSheet {
    /// Parenthesized markers, eg: `(*) Eggs`.
    #[must_use]
    pub fn round_style() -> Self {
        Self {
            open_glyph: "(".into(),
            close_glyph: ")".into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scrollbar(mut self, show_scrollbar: bool) -> Self {
        self.show_scrollbar = show_scrollbar;
        self
    }
}
