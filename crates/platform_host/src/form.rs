//! Snapshot models for controls rendered inside a host form element.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Kind of a rendered form control, as far as payload serialization cares.
pub enum FormControlKind {
    /// Free text input (`text`, `email`, `password`, `number`, ...).
    Text,
    /// Checkbox input.
    Checkbox,
    /// Radio input.
    Radio,
    /// Select element.
    Select {
        /// Whether several options may be selected.
        multiple: bool,
    },
    /// Multiline text area.
    TextArea,
    /// Hidden input.
    Hidden,
    /// Submit button or input.
    Submit,
    /// Reset button or input.
    Reset,
    /// Plain button.
    Button,
    /// File picker.
    File,
    /// Image submit input.
    Image,
}

impl FormControlKind {
    /// Maps an `<input type=...>` attribute value to a control kind.
    ///
    /// Unknown types behave like text inputs, which is what browsers do.
    pub fn from_input_type(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "hidden" => Self::Hidden,
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "button" => Self::Button,
            "file" => Self::File,
            "image" => Self::Image,
            _ => Self::Text,
        }
    }

    /// Returns true for kinds that never contribute a value to a serialized payload.
    pub fn is_button_like(self) -> bool {
        matches!(
            self,
            Self::Submit | Self::Reset | Self::Button | Self::File | Self::Image
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Value snapshot of one rendered form control.
pub struct FormControl {
    /// Control `name` attribute; empty when unnamed.
    pub name: String,
    /// Current value. For selects this is the first selected option.
    pub value: String,
    /// Control kind.
    pub kind: FormControlKind,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Checked state for checkboxes and radios.
    pub checked: bool,
    /// Every selected option value for select elements.
    pub selected: Vec<String>,
}

impl FormControl {
    /// Creates an enabled control snapshot with the given name, value, and kind.
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: FormControlKind) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind,
            disabled: false,
            checked: false,
            selected: Vec::new(),
        }
    }

    /// Creates a text control snapshot.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value, FormControlKind::Text)
    }

    /// Marks the control checked.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Marks the control disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the selected option values of a select control.
    pub fn with_selected<I, S>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = selected.into_iter().map(Into::into).collect();
        if let Some(first) = self.selected.first() {
            self.value = first.clone();
        }
        self
    }
}
