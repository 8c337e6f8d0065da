//! Typed host-domain contracts and shared models used across the form runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services the form layer depends on:
//! navigation history for cancel fallbacks, document metadata, and snapshots of rendered form
//! controls. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod form;
pub mod history;

pub use document::{MetaTag, CSRF_PARAM_META, CSRF_TOKEN_META};
pub use form::{FormControl, FormControlKind};
pub use history::{MemoryNavigationHistory, NavigationHistory};
