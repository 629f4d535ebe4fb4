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

//! Lookup table from style classes to terminal colors and attributes.
//!
//! A fragment style such as `" class:checkbox class:blue"` is resolved by looking up each
//! `class:` token in order and layering the results. Later classes override the colors of
//! earlier ones; attributes accumulate. Tokens that are not classes, and classes with no
//! entry, contribute nothing.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

/// Prefix of a style class token.
pub const CLASS_PREFIX: &str = "class:";

/// Class used by the painter for the instruction header above the list.
pub const INSTRUCTION_CLASS: &str = "class:instruction";

/// Class used by the painter for the scrollbar track.
pub const SCROLLBAR_CLASS: &str = "class:scrollbar";

/// Class used by the painter for the scrollbar thumb.
pub const SCROLLBAR_THUMB_CLASS: &str = "class:scrollbar-thumb";

/// Class used by the painter for the scrollbar arrows.
pub const SCROLLBAR_ARROW_CLASS: &str = "class:scrollbar-arrow";

/// Named RGB colors.
#[macro_export]
macro_rules! rgb_color {
    (medium_gray) => {
        ::crossterm::style::Color::Rgb { r: 193, g: 193, b: 193 }
    };
    (breakfast_orange) => {
        ::crossterm::style::Color::Rgb { r: 232, g: 97, b: 44 }
    };
    (light_purple) => {
        ::crossterm::style::Color::Rgb { r: 219, g: 202, b: 232 }
    };
    (deep_purple) => {
        ::crossterm::style::Color::Rgb { r: 62, g: 14, b: 74 }
    };
    (soft_pink) => {
        ::crossterm::style::Color::Rgb { r: 255, g: 181, b: 234 }
    };
    (hot_pink) => {
        ::crossterm::style::Color::Rgb { r: 255, g: 0, b: 214 }
    };
    (light_yellow_green) => {
        ::crossterm::style::Color::Rgb { r: 229, g: 239, b: 123 }
    };
    (light_cyan) => {
        ::crossterm::style::Color::Rgb { r: 209, g: 244, b: 255 }
    };
    (dark_teal) => {
        ::crossterm::style::Color::Rgb { r: 6, g: 41, b: 52 }
    };
    (bright_cyan) => {
        ::crossterm::style::Color::Rgb { r: 19, g: 227, b: 255 }
    };
    (dark_purple) => {
        ::crossterm::style::Color::Rgb { r: 51, g: 32, b: 66 }
    };
    (lavender) => {
        ::crossterm::style::Color::Rgb { r: 203, g: 170, b: 250 }
    };
    (lizard_green) => {
        ::crossterm::style::Color::Rgb { r: 20, g: 244, b: 0 }
    };
    (frozen_blue) => {
        ::crossterm::style::Color::Rgb { r: 171, g: 204, b: 242 }
    };
    (moonlight_blue) => {
        ::crossterm::style::Color::Rgb { r: 31, g: 36, b: 46 }
    };
    (night_blue) => {
        ::crossterm::style::Color::Rgb { r: 14, g: 17, b: 23 }
    };
}

/// Built-in palettes, selectable from the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum PaletteChoice {
    #[default]
    Default,
    SeaFoam,
    HotPink,
}

impl From<PaletteChoice> for Palette {
    fn from(choice: PaletteChoice) -> Self {
        match choice {
            PaletteChoice::Default => Palette::default(),
            PaletteChoice::SeaFoam => Palette::sea_foam(),
            PaletteChoice::HotPink => Palette::hot_pink(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Class name (without the `class:` prefix) paired with its style. When a class is
    /// added twice, the later entry wins.
    entries: Vec<(String, ContentStyle)>,
}

/// Shorthand to build a [`ContentStyle`].
#[must_use]
pub fn content_style(
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: &[Attribute],
) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = fg;
    style.background_color = bg;
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}

/// Lay `top` over `base`. Colors set in `top` win; attributes from both are kept.
#[must_use]
pub fn overlay_style(base: ContentStyle, top: ContentStyle) -> ContentStyle {
    let mut attributes: Attributes = base.attributes;
    attributes.extend(top.attributes);
    let mut style = ContentStyle::new();
    style.foreground_color = top.foreground_color.or(base.foreground_color);
    style.background_color = top.background_color.or(base.background_color);
    style.underline_color = top.underline_color.or(base.underline_color);
    style.attributes = attributes;
    style
}

impl Palette {
    #[must_use]
    pub fn empty() -> Self { Self { entries: vec![] } }

    /// Add or replace the style for `class`. Accepts the name with or without the
    /// `class:` prefix.
    #[must_use]
    pub fn with(mut self, class: &str, style: ContentStyle) -> Self {
        let name = class.strip_prefix(CLASS_PREFIX).unwrap_or(class);
        self.entries.retain(|(it, _)| it != name);
        self.entries.push((name.to_string(), style));
        self
    }

    #[must_use]
    pub fn lookup(&self, class: &str) -> Option<ContentStyle> {
        let name = class.strip_prefix(CLASS_PREFIX).unwrap_or(class);
        self.entries
            .iter()
            .rev()
            .find(|(it, _)| it == name)
            .map(|(_, style)| *style)
    }

    /// Resolve a whitespace separated style string to a single [`ContentStyle`].
    #[must_use]
    pub fn resolve(&self, style: &str) -> ContentStyle {
        style
            .split_whitespace()
            .filter(|token| token.starts_with(CLASS_PREFIX))
            .filter_map(|token| self.lookup(token))
            .fold(ContentStyle::new(), overlay_style)
    }

    /// Colors and attributes for markup elements, eg: `<blue>`, `<b>`. Shared by all
    /// built-in palettes.
    #[must_use]
    pub fn with_markup_classes(self) -> Self {
        let fg = |color: Color| content_style(Some(color), None, &[]);
        self.with("black", fg(Color::Black))
            .with("red", fg(Color::Red))
            .with("green", fg(Color::Green))
            .with("yellow", fg(Color::Yellow))
            .with("blue", fg(Color::Blue))
            .with("magenta", fg(Color::Magenta))
            .with("cyan", fg(Color::Cyan))
            .with("white", fg(Color::White))
            .with("gray", fg(Color::Grey))
            .with("b", content_style(None, None, &[Attribute::Bold]))
            .with("strong", content_style(None, None, &[Attribute::Bold]))
            .with("i", content_style(None, None, &[Attribute::Italic]))
            .with("em", content_style(None, None, &[Attribute::Italic]))
            .with("u", content_style(None, None, &[Attribute::Underlined]))
    }

    #[must_use]
    pub fn sea_foam() -> Self {
        Self::empty()
            .with_markup_classes()
            .with(
                "checkbox",
                content_style(Some(rgb_color!(light_cyan)), None, &[]),
            )
            .with(
                "checkbox-checked",
                content_style(Some(rgb_color!(bright_cyan)), None, &[Attribute::Bold]),
            )
            .with(
                "checkbox-selected",
                content_style(
                    Some(rgb_color!(bright_cyan)),
                    Some(rgb_color!(dark_teal)),
                    &[],
                ),
            )
            .with(
                INSTRUCTION_CLASS,
                content_style(
                    Some(rgb_color!(light_yellow_green)),
                    Some(rgb_color!(moonlight_blue)),
                    &[],
                ),
            )
            .with_scrollbar_classes(rgb_color!(dark_teal), rgb_color!(bright_cyan))
    }

    #[must_use]
    pub fn hot_pink() -> Self {
        Self::empty()
            .with_markup_classes()
            .with(
                "checkbox",
                content_style(Some(rgb_color!(light_purple)), None, &[]),
            )
            .with(
                "checkbox-checked",
                content_style(Some(rgb_color!(soft_pink)), None, &[Attribute::Bold]),
            )
            .with(
                "checkbox-selected",
                content_style(
                    Some(rgb_color!(hot_pink)),
                    Some(rgb_color!(deep_purple)),
                    &[],
                ),
            )
            .with(
                INSTRUCTION_CLASS,
                content_style(
                    Some(rgb_color!(light_cyan)),
                    Some(rgb_color!(moonlight_blue)),
                    &[],
                ),
            )
            .with_scrollbar_classes(rgb_color!(deep_purple), rgb_color!(hot_pink))
    }

    fn with_scrollbar_classes(self, track: Color, thumb: Color) -> Self {
        self.with(SCROLLBAR_CLASS, content_style(Some(track), None, &[]))
            .with(SCROLLBAR_THUMB_CLASS, content_style(Some(thumb), None, &[]))
            .with(SCROLLBAR_ARROW_CLASS, content_style(Some(thumb), None, &[]))
    }
}

impl Default for Palette {
    fn default() -> Self { Self::breakfast() }
}

impl Palette {
    /// The breakfast palette: orange checkboxes, with the row under the cursor in lizard
    /// green on dark purple.
    #[must_use]
    pub fn breakfast() -> Self {
        Self::empty()
            .with_markup_classes()
            .with(
                "checkbox",
                content_style(Some(rgb_color!(breakfast_orange)), None, &[]),
            )
            .with(
                "checkbox-checked",
                content_style(Some(rgb_color!(lavender)), None, &[Attribute::Bold]),
            )
            .with(
                "checkbox-selected",
                content_style(
                    Some(rgb_color!(lizard_green)),
                    Some(rgb_color!(dark_purple)),
                    &[],
                ),
            )
            .with(
                INSTRUCTION_CLASS,
                content_style(
                    Some(rgb_color!(frozen_blue)),
                    Some(rgb_color!(moonlight_blue)),
                    &[],
                ),
            )
            .with_scrollbar_classes(rgb_color!(medium_gray), rgb_color!(lavender))
    }
}
