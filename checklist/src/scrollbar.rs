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

use crate::{SCROLLBAR_ARROW_CLASS, SCROLLBAR_CLASS, SCROLLBAR_THUMB_CLASS};

/// One cell of the scrollbar margin, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollbarCell {
    UpArrow,
    DownArrow,
    Thumb,
    Track,
}

impl ScrollbarCell {
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            ScrollbarCell::UpArrow => '^',
            ScrollbarCell::DownArrow => 'v',
            ScrollbarCell::Thumb => '█',
            ScrollbarCell::Track => '│',
        }
    }

    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            ScrollbarCell::UpArrow | ScrollbarCell::DownArrow => SCROLLBAR_ARROW_CLASS,
            ScrollbarCell::Thumb => SCROLLBAR_THUMB_CLASS,
            ScrollbarCell::Track => SCROLLBAR_CLASS,
        }
    }
}

/// Cells of a scrollbar that is `visible_height` rows tall, for a list of `item_count`
/// items scrolled down by `offset`. Arrows take the first and last rows; the thumb size
/// and position in the track between them are proportional to the window.
///
/// Returns [None] when everything fits and no scrollbar is needed.
#[must_use]
pub fn render_scrollbar(
    item_count: usize,
    offset: usize,
    visible_height: usize,
) -> Option<Vec<ScrollbarCell>> {
    if visible_height == 0 || item_count <= visible_height {
        return None;
    }

    match visible_height {
        1 => return Some(vec![ScrollbarCell::Thumb]),
        2 => return Some(vec![ScrollbarCell::UpArrow, ScrollbarCell::DownArrow]),
        _ => {}
    }

    let track_len = visible_height - 2;
    let thumb_len = (track_len * visible_height)
        .div_ceil(item_count)
        .clamp(1, track_len);
    let thumb_start = if offset + visible_height >= item_count {
        track_len - thumb_len
    } else {
        (track_len * offset / item_count).min(track_len - thumb_len)
    };

    let mut acc = Vec::with_capacity(visible_height);
    acc.push(ScrollbarCell::UpArrow);
    acc.extend((0..track_len).map(|index| {
        if (thumb_start..thumb_start + thumb_len).contains(&index) {
            ScrollbarCell::Thumb
        } else {
            ScrollbarCell::Track
        }
    }));
    acc.push(ScrollbarCell::DownArrow);
    Some(acc)
}
