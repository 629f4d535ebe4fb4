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

//! ### Vertical scrolling
//!
//! The list is taller than the space it gets on screen when it has more items than
//! `max_height`. [`ScrollWindow`] tracks which items are on screen, and moves just
//! enough to keep the cursor in view.
//!
//! ```text
//!    +0--------------------+
//!    0                     |
//!    |        above        | <- AboveViewport
//!    |                     |
//!    +------ offset -------+ <- AtTopOfViewport
//!    |         ↑           |
//!    |      within vp      | <- InMiddleOfViewport
//!    |         ↓           |
//!    +- offset + vp height +  <- AtBottomOfViewport (last visible row)
//!    |                     |
//!    |        below        | <- BelowViewport
//!    |                     |
//!    +---------------------+
//! ```

use std::ops::Range;

use crate::DEVELOPMENT_MODE;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum CaretVerticalViewportLocation {
    AboveViewport,
    AtTopOfViewport,
    InMiddleOfViewport,
    AtBottomOfViewport,
    BelowViewport,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScrollWindow {
    /// Index of the first item on screen.
    pub offset: usize,
    /// Most rows the list may take up. Zero is treated as one.
    pub max_height: usize,
}

impl ScrollWindow {
    #[must_use]
    pub fn new(max_height: usize) -> Self {
        Self {
            offset: 0,
            max_height,
        }
    }

    /// Rows actually used to show `item_count` items. This is the page size.
    #[must_use]
    pub fn visible_height(&self, item_count: usize) -> usize {
        self.max_height.max(1).min(item_count)
    }

    #[must_use]
    pub fn visible_range(&self, item_count: usize) -> Range<usize> {
        let start = self.offset.min(item_count);
        start..(start + self.visible_height(item_count)).min(item_count)
    }

    #[must_use]
    pub fn locate(&self, cursor: usize, item_count: usize) -> CaretVerticalViewportLocation {
        let height = self.visible_height(item_count);
        let last_visible = self.offset + height.saturating_sub(1);
        if cursor < self.offset {
            CaretVerticalViewportLocation::AboveViewport
        } else if cursor == self.offset {
            CaretVerticalViewportLocation::AtTopOfViewport
        } else if cursor < last_visible {
            CaretVerticalViewportLocation::InMiddleOfViewport
        } else if cursor == last_visible {
            CaretVerticalViewportLocation::AtBottomOfViewport
        } else {
            CaretVerticalViewportLocation::BelowViewport
        }
    }

    /// Scroll the least amount needed so that `cursor` is on screen. Also pulls the
    /// window back up if the item count shrank below it.
    pub fn follow_cursor(&mut self, cursor: usize, item_count: usize) {
        let height = self.visible_height(item_count);
        match self.locate(cursor, item_count) {
            CaretVerticalViewportLocation::AboveViewport => self.offset = cursor,
            CaretVerticalViewportLocation::BelowViewport => {
                self.offset = cursor + 1 - height;
            }
            _ => {}
        }
        self.offset = self.offset.min(item_count.saturating_sub(height));

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "ScrollWindow::follow_cursor",
                cursor = cursor,
                offset = self.offset,
                height = height
            );
        });
    }
}
