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

use crossterm::{cursor::{Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture},
                terminal::{disable_raw_mode, enable_raw_mode}};
use miette::IntoDiagnostic;

use crate::{DEVELOPMENT_MODE, FunctionComponent, InputEvent, TTYResult,
            execute_commands, is_fully_interactive_terminal};

/// Source of input events for the event loop. [None] means the input is closed.
pub trait InputReader {
    fn read_input_event(&mut self) -> Option<InputEvent>;
}

/// Blocks on [`crossterm::event::read`]. Events that don't convert to an
/// [`InputEvent`], such as key releases, are skipped.
#[derive(Debug, Default)]
pub struct CrosstermInputReader;

impl InputReader for CrosstermInputReader {
    fn read_input_event(&mut self) -> Option<InputEvent> {
        loop {
            let event = crossterm::event::read().ok()?;
            if let Ok(input_event) = InputEvent::try_from(event) {
                return Some(input_event);
            }
        }
    }
}

/// Replays a fixed list of events, then reports the input as closed.
#[derive(Debug, Default)]
pub struct TestVecInputReader {
    pub input_event_vec: Vec<InputEvent>,
    pub index: usize,
}

impl TestVecInputReader {
    #[must_use]
    pub fn new(input_event_vec: Vec<InputEvent>) -> Self {
        Self {
            input_event_vec,
            index: 0,
        }
    }
}

impl InputReader for TestVecInputReader {
    fn read_input_event(&mut self) -> Option<InputEvent> {
        let it = self.input_event_vec.get(self.index).cloned();
        self.index += 1;
        it
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    Continue,
    ContinueAndRerender,
    ContinueAndRerenderAndClear,
    ExitWithResult(Vec<T>),
    ExitWithoutResult,
    ExitWithError,
}

/// Paint `state` with `function_component`, then feed every input event to
/// `on_input` until it asks to exit. The terminal is put in raw mode with mouse
/// capture for the duration, and restored afterwards, even on error.
///
/// A mock output device skips all terminal setup, so this can be driven from tests.
///
/// # Errors
///
/// Returns an error if the terminal can't be set up or written to. When stdin or stdout
/// isn't a TTY, nothing is painted and [`EventLoopResult::ExitWithError`] is returned
/// right away, without blocking on input.
pub fn enter_event_loop<S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<S>,
    on_input: impl Fn(&mut S, InputEvent) -> EventLoopResult<T>,
    input_reader: &mut impl InputReader,
) -> miette::Result<EventLoopResult<T>> {
    let is_mock = function_component.get_output_device().is_mock;

    if !is_mock && is_fully_interactive_terminal() == TTYResult::IsNotInteractive {
        tracing::warn!(message = "enter_event_loop: terminal is not interactive");
        return Ok(EventLoopResult::ExitWithError);
    }

    run_before_event_loop::<S>(function_component, is_mock)?;
    let result = run_event_loop(state, function_component, on_input, input_reader);
    run_after_event_loop::<S>(function_component, is_mock)?;

    result
}

fn run_event_loop<S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<S>,
    on_input: impl Fn(&mut S, InputEvent) -> EventLoopResult<T>,
    input_reader: &mut impl InputReader,
) -> miette::Result<EventLoopResult<T>> {
    // First render before blocking the main thread for user input.
    function_component.render(state)?;

    loop {
        let Some(input_event) = input_reader.read_input_event() else {
            function_component.clear_viewport(state)?;
            return Ok(EventLoopResult::ExitWithError);
        };

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "run_event_loop", input_event = ?input_event);
        });

        let event_loop_result = on_input(state, input_event);
        if let Some(result) =
            handle_event_loop_result(function_component, event_loop_result, state)?
        {
            return Ok(result);
        }
    }
}

fn run_before_event_loop<S>(
    function_component: &mut impl FunctionComponent<S>,
    is_mock: bool,
) -> miette::Result<()> {
    if !is_mock {
        // The highlighted row shows the cursor, so the caret stays hidden.
        execute_commands!(function_component.get_output_device(), Hide, EnableMouseCapture);
        enable_raw_mode().into_diagnostic()?;
    }
    Ok(())
}

fn run_after_event_loop<S>(
    function_component: &mut impl FunctionComponent<S>,
    is_mock: bool,
) -> miette::Result<()> {
    if !is_mock {
        execute_commands!(function_component.get_output_device(), DisableMouseCapture, Show);
        disable_raw_mode().into_diagnostic()?;
    }
    Ok(())
}

fn handle_event_loop_result<S, T>(
    function_component: &mut impl FunctionComponent<S>,
    result: EventLoopResult<T>,
    state: &mut S,
) -> miette::Result<Option<EventLoopResult<T>>> {
    match result {
        EventLoopResult::Continue => Ok(None),
        EventLoopResult::ContinueAndRerender => {
            function_component.render(state)?;
            Ok(None)
        }
        EventLoopResult::ContinueAndRerenderAndClear => {
            function_component.clear_viewport(state)?;
            function_component.render(state)?;
            Ok(None)
        }
        EventLoopResult::ExitWithResult(_)
        | EventLoopResult::ExitWithoutResult
        | EventLoopResult::ExitWithError => {
            function_component.clear_viewport(state)?;
            Ok(Some(result))
        }
    }
}
