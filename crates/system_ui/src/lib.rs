//! Shared UI primitive library for form-driven pages.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the
//! stable `data-ui-*` DOM contract consumed by the CSS layers. Form state lives in
//! `form_runtime`; the primitives here render it and wire browser events into it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    serialize_form, ActionBar, Button, ButtonSize, ButtonVariant, Caption, FieldGroup, FieldStack,
    FieldVariant, Form, FormSummary, Heading, HeadingLevel, LayoutGap, Modal, StatusText,
    TextField, TextTone, ValidatedTextField,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        serialize_form, ActionBar, Button, ButtonSize, ButtonVariant, Caption, FieldGroup,
        FieldStack, FieldVariant, Form, FormSummary, Heading, HeadingLevel, Icon, IconName,
        IconSize, LayoutGap, Modal, StatusText, TextField, TextTone, ValidatedTextField,
    };
    pub use form_runtime::{
        ButtonAlign, FieldRule, FormPayload, LengthRule, PresenceRule, SerializeOptions,
        ValidatedField,
    };
}
