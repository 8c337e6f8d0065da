//! Document metadata models shared by host adapters.

use serde::{Deserialize, Serialize};

/// Name of the meta tag carrying the CSRF request parameter name.
pub const CSRF_PARAM_META: &str = "csrf-param";
/// Name of the meta tag carrying the CSRF token value.
pub const CSRF_TOKEN_META: &str = "csrf-token";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A `<meta name=... content=...>` pair read from the host document.
pub struct MetaTag {
    /// Value of the `name` attribute.
    pub name: String,
    /// Value of the `content` attribute.
    pub content: String,
}

impl MetaTag {
    /// Creates a meta tag model.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}
