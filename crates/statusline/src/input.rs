// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Standard-input payload model
//!
//! The assistant host supplies one JSON object on stdin with two optional
//! nested string fields: `model.display_name` and `workspace.current_dir`.
//! Unknown fields are ignored; missing fields fall back to defaults at the
//! accessor level. The payload is parsed once per invocation and never
//! mutated.

use serde::Deserialize;

/// The JSON payload read from standard input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusInput {
    /// Model metadata, if supplied
    #[serde(default)]
    pub model: Option<ModelInfo>,
    /// Workspace metadata, if supplied
    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,
}

/// The `model` object of the payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelInfo {
    /// Human-readable model name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// The `workspace` object of the payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceInfo {
    /// The workspace's current working directory
    #[serde(default)]
    pub current_dir: Option<String>,
}

impl StatusInput {
    /// Parse a payload from its JSON text
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for anything that is not
    /// a JSON object (including empty input and top-level `null`).
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// The model display name, defaulting to `"Unknown"`
    #[must_use]
    pub fn model_display_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|model| model.display_name.as_deref())
            .unwrap_or("Unknown")
    }

    /// The working directory, defaulting to the empty string
    #[must_use]
    pub fn current_dir(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|workspace| workspace.current_dir.as_deref())
            .unwrap_or("")
    }
}
