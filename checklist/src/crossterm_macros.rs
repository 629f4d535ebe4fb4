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

//! Queue or execute crossterm commands on an [`crate::OutputDevice`], converting errors
//! with [`miette::IntoDiagnostic`]. Use these in functions returning [`miette::Result`].

/// Queue commands to the output device, locking it once per command. If you need to
/// hold the lock across several operations, lock it yourself and use
/// [`queue_commands_no_lock!`] instead so the output can't interleave.
#[macro_export]
macro_rules! queue_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $crate::lock_output_device_as_mut!($output_device),
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// Like [`queue_commands!`], for a writer that is already locked.
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                &mut *$writer,
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// Queue commands to the output device and flush it.
#[macro_export]
macro_rules! execute_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $crate::lock_output_device_as_mut!($output_device),
                $command
            ).into_diagnostic()?;
        )*
        ::std::io::Write::flush($crate::lock_output_device_as_mut!($output_device))
            .into_diagnostic()?;
    }}
}
