use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Document outline level of a [`Heading`].
pub enum HeadingLevel {
    /// Page title.
    #[default]
    Page,
    /// Section or dialog title.
    Section,
    /// Group title inside a section.
    Group,
}

impl HeadingLevel {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
            Self::Group => "group",
        }
    }
}

#[component]
/// Heading rendered as the real `h1`..`h3` element for its level.
pub fn Heading(
    #[prop(optional)] level: HeadingLevel,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let level_token = level.token();
    let body = children();
    match level {
        HeadingLevel::Page => view! {
            <h1
                class=class
                id=id
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-level=level_token
            >
                {body}
            </h1>
        }
        .into_view(),
        HeadingLevel::Section => view! {
            <h2
                class=class
                id=id
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-level=level_token
            >
                {body}
            </h2>
        }
        .into_view(),
        HeadingLevel::Group => view! {
            <h3
                class=class
                id=id
                data-ui-primitive="true"
                data-ui-kind="heading"
                data-ui-slot=ui_slot
                data-ui-level=level_token
            >
                {body}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Secondary explanatory text: field hints, dialog subtitles, footnotes next to actions.
pub fn Caption(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-caption", layout_class)
            id=id
            data-ui-primitive="true"
            data-ui-kind="caption"
            data-ui-slot=ui_slot
        >
            {children()}
        </span>
    }
}

#[component]
/// Validation or outcome text with the marker icon of its tone.
///
/// `live` turns the element into a polite status region so screen readers announce changes.
pub fn StatusText(
    #[prop(optional)] tone: TextTone,
    #[prop(optional)] live: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-status-text", layout_class)
            id=id
            role=live.then_some("status")
            aria-live=live.then_some("polite")
            data-ui-primitive="true"
            data-ui-kind="status-text"
            data-ui-slot=ui_slot
            data-ui-tone=tone.token()
        >
            {tone.icon().map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn heading_levels_have_stable_tokens() {
        assert_eq!(HeadingLevel::default().token(), "page");
        assert_eq!(HeadingLevel::Section.token(), "section");
        assert_eq!(HeadingLevel::Group.token(), "group");
    }
}
