//! Identifiers, aggregate counter state, and form configuration.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_INPUT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier of a registered input for the lifetime of its control.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InputId(String);

impl InputId {
    /// Wraps a caller-chosen identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns a fresh process-unique identifier of the form `input-<n>`.
    pub fn generate() -> Self {
        let next = NEXT_INPUT_ID.fetch_add(1, Ordering::Relaxed);
        Self(format!("input-{next}"))
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InputId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Running error and warning totals shown by form summaries.
///
/// Counts are signed: inputs own balanced increment/decrement pairs, and an unbalanced
/// decrement shows up as a negative value instead of being hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateState {
    /// Inputs currently reporting an error.
    pub error_count: i32,
    /// Inputs currently reporting a warning.
    pub warning_count: i32,
}

impl AggregateState {
    /// Returns true when at least one error is counted.
    pub fn has_errors(self) -> bool {
        self.error_count > 0
    }

    /// Returns true when at least one warning is counted.
    pub fn has_warnings(self) -> bool {
        self.warning_count > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Horizontal alignment of the form footer actions.
pub enum ButtonAlign {
    /// Actions packed to the start edge.
    Left,
    /// Actions packed to the end edge.
    Right,
}

impl Default for ButtonAlign {
    fn default() -> Self {
        Self::Right
    }
}

impl ButtonAlign {
    /// Stable DOM token for the `data-ui-align` contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Static configuration of one form instance.
pub struct FormConfig {
    /// Whether a cancel action is rendered.
    pub cancel: bool,
    /// Whether a save action is rendered.
    pub save: bool,
    /// Whether a validation pass runs once the inputs have attached.
    pub validate_on_mount: bool,
    /// Whether the error/warning summary is rendered next to the save action.
    pub show_summary: bool,
    /// Footer action alignment.
    pub button_align: ButtonAlign,
    /// Whether the form is currently saving (disables the save action).
    pub saving: bool,
    /// Label of the cancel action.
    pub cancel_text: String,
    /// Label of the save action.
    pub save_text: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            cancel: true,
            save: true,
            validate_on_mount: false,
            show_summary: true,
            button_align: ButtonAlign::Right,
            saving: false,
            cancel_text: "Cancel".to_string(),
            save_text: "Save".to_string(),
        }
    }
}
