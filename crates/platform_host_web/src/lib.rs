//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for navigation history, document
//! metadata, and rendered form controls. Non-wasm targets compile the same API with inert
//! fallbacks so runtime crates can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Environment probing and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod document;
pub mod form;
pub mod history;

pub use adapters::navigation_history;
pub use document::document_meta_tags;
pub use form::form_controls;
pub use history::WebNavigationHistory;
