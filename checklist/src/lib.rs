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


//! # r3bl_checklist
//!
//! A multi-select checklist that is painted inline in the terminal, below the caret.
//! Move with the arrow keys or PageUp / PageDown, toggle with space or enter, click an
//! item to toggle it, or type a letter to jump to the next item that starts with it.
//! Ctrl-D confirms, Ctrl-C cancels.
//!
//! The crate is split in two layers:
//! 1. [`SelectableList`] is the component. It holds the items, the cursor and the checked
//!    values, turns itself into styled fragments, and handles [`InputEvent`]s. It does no
//!    I/O.
//! 2. [`choose_many`] runs a session. It paints the list with [`ChecklistComponent`],
//!    reads events in [`enter_event_loop`], and returns a [`SessionOutcome`].
//!
//! ```no_run
//! use r3bl_checklist::*;
//!
//! fn main() -> miette::Result<()> {
//!     let items = vec![
//!         Item::plain("eggs", "Eggs"),
//!         Item::markup("bacon", "<blue>Bacon</blue>"),
//!         Item::plain("croissants", "20 Croissants"),
//!     ];
//!     let mut output_device = OutputDevice::new_stdout();
//!     let mut input_reader = CrosstermInputReader;
//!     let outcome = choose_many(
//!         items,
//!         &["eggs"],
//!         ChooseOptions::default(),
//!         (&mut output_device, &mut input_reader),
//!     )?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! Logging is opt in, see [`logging::init`].

// Library code propagates errors, tests may unwrap.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod crossterm_macros;
mod error;
mod event_loop;
mod fragment;
mod function_component;
mod keymap;
mod keypress;
mod label;
mod list_component;
mod output_device;
mod palette;
mod scroll;
mod scrollbar;
mod session;
mod state;
mod style;
mod term;

pub mod logging;

// Re-export.
pub use error::*;
pub use event_loop::*;
pub use fragment::*;
pub use function_component::*;
pub use keymap::*;
pub use keypress::*;
pub use label::*;
pub use list_component::*;
pub use output_device::*;
pub use palette::*;
pub use scroll::*;
pub use scrollbar::*;
pub use session::*;
pub use state::*;
pub use style::*;
pub use term::*;

/// Turns on the chatty `tracing::debug!` calls in the dispatch and render paths.
pub const DEVELOPMENT_MODE: bool = cfg!(debug_assertions);

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
