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

use std::{io::Write,
          sync::{Arc, Mutex, MutexGuard, PoisonError}};

use strip_ansi_escapes::strip;

pub type SendRawTerminal = dyn Write + Send;
pub type SafeRawTerminal = Arc<Mutex<SendRawTerminal>>;
pub type LockedOutputDevice<'a> = &'a mut dyn Write;

/// Lock the output device and get a mutable reference to it. Don't call this again in
/// the same scope, it will deadlock! Use it in a separate block scope.
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// Where the checklist is painted. Safe to clone, clones share the same writer.
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    /// A mock device never touches the real terminal: no raw mode, no mouse capture, no
    /// interactivity check.
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(Mutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// A device that writes into the returned [`StdoutMock`].
    #[must_use]
    pub fn new_mock() -> (Self, StdoutMock) {
        let stdout_mock = StdoutMock::default();
        let this = Self {
            resource: Arc::new(Mutex::new(stdout_mock.clone())),
            is_mock: true,
        };
        (this, stdout_mock)
    }

    /// Lock the device for writing. A poisoned lock is recovered, since the writer
    /// holds no invariants a panic could break.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In memory stand in for stdout. Clones share the same buffer.
#[derive(Clone, Default, Debug)]
pub struct StdoutMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl StdoutMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    fn lock_buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock_buffer().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock_buffer()).into_owned()
    }

    /// Buffer contents with all ANSI escape sequences removed.
    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock_buffer().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }
}

impl Write for StdoutMock {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.lock_buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}
