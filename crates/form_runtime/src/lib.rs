//! Form coordination runtime shared by the UI primitive layer.
//!
//! A form owns one [`FormCoordinator`]. Inputs receive a cloned [`FormHandle`] and use it to
//! register themselves, report error and warning transitions, and claim the active-input slot
//! that decides which transient message is visible. Submission runs every enabled input's
//! validation and only lets valid submits through to the caller's hooks.
//!
//! The crate has no DOM dependency beyond the submit event type; markup lives in `system_ui`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod active;
mod cancel;
mod context;
mod counters;
mod csrf;
mod error;
mod field;
mod handle;
mod input;
mod model;
mod registry;
mod serialize;
mod submit;

pub use active::ActiveInputTracker;
pub use cancel::{CancelOutcome, CancelRoute, ModalCancel};
pub use context::{
    provide_form_context, provide_modal_context, use_form, use_modal, FormContext, ModalContext,
};
pub use counters::{AggregateCounters, SubscriptionId};
pub use csrf::{csrf_token_from_meta, CsrfToken};
pub use error::FormError;
pub use field::{FieldMessage, FieldRule, LengthRule, MessageLevel, PresenceRule, ValidatedField};
pub use handle::FormHandle;
pub use input::{InputHandle, TransientMessage};
pub use model::{AggregateState, ButtonAlign, FormConfig, InputId};
pub use registry::InputRegistry;
pub use serialize::{serialize_controls, FormPayload, SerializeOptions};
pub use submit::{FormCoordinator, FormHooks, SubmitTrigger};
