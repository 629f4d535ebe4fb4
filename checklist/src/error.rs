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

use miette::Diagnostic;

/// Everything that can go wrong while setting up or running a checklist session.
///
/// Once a [`crate::SelectableList`] is constructed, input handling never fails. Only
/// construction and the terminal plumbing around the session produce errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ChecklistError {
    #[error("📋 Invalid checklist configuration: {reason}")]
    #[diagnostic(
        code(r3bl_checklist::invalid_config),
        help("Provide at least one item to choose from")
    )]
    InvalidConfig { reason: String },

    #[error("🖥️ Terminal is not interactive")]
    #[diagnostic(
        code(r3bl_checklist::not_interactive),
        help("Run this from an interactive terminal, with stdin and stdout not piped")
    )]
    NotInteractive,

    #[error("⌨️ Input stream closed before the session finished")]
    #[diagnostic(code(r3bl_checklist::input_closed))]
    InputClosed,
}

impl ChecklistError {
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_invalid_config_message_includes_reason() {
        let error = ChecklistError::invalid_config("no items");
        assert_eq2!(
            error.to_string(),
            "📋 Invalid checklist configuration: no items"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = ChecklistError::NotInteractive
            .code()
            .map(|it| it.to_string());
        assert_eq2!(code, Some("r3bl_checklist::not_interactive".to_string()));

        let code = ChecklistError::InputClosed.code().map(|it| it.to_string());
        assert_eq2!(code, Some("r3bl_checklist::input_closed".to_string()));
    }
}
