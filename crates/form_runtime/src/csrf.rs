//! Anti-forgery token lookup from document metadata.

use platform_host::{MetaTag, CSRF_PARAM_META, CSRF_TOKEN_META};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request parameter name and token value to embed as a hidden form field.
pub struct CsrfToken {
    /// Name of the hidden input.
    pub param: String,
    /// Value of the hidden input.
    pub token: String,
}

/// Finds the CSRF parameter and token among `tags`.
///
/// Both meta tags must be present with non-empty content; otherwise no token is rendered.
pub fn csrf_token_from_meta(tags: &[MetaTag]) -> Option<CsrfToken> {
    let content = |name: &str| {
        tags.iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.content.trim())
            .filter(|content| !content.is_empty())
            .map(str::to_string)
    };

    Some(CsrfToken {
        param: content(CSRF_PARAM_META)?,
        token: content(CSRF_TOKEN_META)?,
    })
}
