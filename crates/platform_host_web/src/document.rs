//! Document `<meta>` tag reader.

use platform_host::MetaTag;

/// Returns every named `<meta>` tag of the current document.
///
/// Tags without a `name` attribute are skipped; a missing `content` attribute reads as an empty
/// string. Off `wasm32` there is no document and the result is empty.
pub fn document_meta_tags() -> Vec<MetaTag> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let collection = document.get_elements_by_tag_name("meta");
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .filter_map(|element| {
                let name = element.get_attribute("name")?;
                let content = element.get_attribute("content").unwrap_or_default();
                Some(MetaTag::new(name, content))
            })
            .collect()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Vec::new()
    }
}
