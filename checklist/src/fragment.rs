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

//! Styled text runs. A rendered checklist is a flat sequence of [`StyledFragment`]s,
//! where a fragment whose text is [`NEW_LINE`] ends a visual line, and a fragment whose
//! style is [`SET_CURSOR_POSITION`] marks where the terminal caret belongs.

use unicode_width::UnicodeWidthStr;

/// Zero width marker fragment style. The painter places the caret here.
pub const SET_CURSOR_POSITION: &str = "[SetCursorPosition]";

/// Text of the fragment that separates two visual lines.
pub const NEW_LINE: &str = "\n";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledFragment {
    /// Space separated list of style classes, eg: `" class:checkbox class:blue"`.
    pub style: String,
    pub text: String,
}

pub type StyledFragments = Vec<StyledFragment>;

impl StyledFragment {
    pub fn new(style: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn cursor_marker() -> Self { Self::new(SET_CURSOR_POSITION, "") }

    #[must_use]
    pub fn line_break() -> Self { Self::new("", NEW_LINE) }

    #[must_use]
    pub fn is_cursor_marker(&self) -> bool { self.style == SET_CURSOR_POSITION }

    #[must_use]
    pub fn is_line_break(&self) -> bool { self.text == NEW_LINE }
}

/// Appends `extra` style classes to `base`, keeping a single space between them.
#[must_use]
pub fn merge_styles(base: &str, extra: &str) -> String {
    match (base.trim().is_empty(), extra.trim().is_empty()) {
        (true, true) => String::new(),
        (false, true) => base.to_string(),
        (true, false) => extra.to_string(),
        (false, false) => format!("{} {}", base.trim_end(), extra.trim_start()),
    }
}

/// Concatenates the text of all fragments, line breaks included.
#[must_use]
pub fn fragments_to_text(fragments: &[StyledFragment]) -> String {
    fragments.iter().map(|it| it.text.as_str()).collect()
}

/// Splits a flat fragment sequence into visual lines. Line break fragments are
/// consumed. An empty input produces no lines.
#[must_use]
pub fn split_lines(fragments: &[StyledFragment]) -> Vec<StyledFragments> {
    if fragments.is_empty() {
        return vec![];
    }

    let mut lines: Vec<StyledFragments> = vec![vec![]];
    for fragment in fragments {
        if fragment.is_line_break() {
            lines.push(vec![]);
        } else if let Some(current) = lines.last_mut() {
            current.push(fragment.clone());
        }
    }
    lines
}

/// Row and display column of the cursor marker, if any. The column is measured in
/// terminal cells, so wide characters count as two.
#[must_use]
pub fn find_cursor_position(fragments: &[StyledFragment]) -> Option<(usize, usize)> {
    let mut row = 0;
    let mut col = 0;
    for fragment in fragments {
        if fragment.is_cursor_marker() {
            return Some((row, col));
        }
        if fragment.is_line_break() {
            row += 1;
            col = 0;
        } else {
            col += UnicodeWidthStr::width(fragment.text.as_str());
        }
    }
    None
}
