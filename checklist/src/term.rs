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

use std::io::IsTerminal;

use miette::IntoDiagnostic;

use crate::Size;

/// Width used when the terminal can't tell us its size.
pub const DEFAULT_WIDTH: usize = 80;

/// Get the terminal width. If there is a problem, return the default width.
#[must_use]
pub fn get_terminal_width() -> usize {
    match get_size() {
        Ok(size) => size.col_width,
        Err(_) => DEFAULT_WIDTH,
    }
}

/// # Errors
///
/// Returns an error if the terminal size can't be determined, eg: when stdout is not a
/// TTY.
pub fn get_size() -> miette::Result<Size> {
    let (columns, rows) = crossterm::terminal::size().into_diagnostic()?;
    Ok(Size {
        col_width: usize::from(columns),
        row_height: usize::from(rows),
    })
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// A checklist reads keys from stdin and paints to stdout, so both must be TTYs. If you
/// run `echo "x" | checklist` or `checklist | cat`, this returns
/// [`TTYResult::IsNotInteractive`].
#[must_use]
pub fn is_fully_interactive_terminal() -> TTYResult {
    if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}

