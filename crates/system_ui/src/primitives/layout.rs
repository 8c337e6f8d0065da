use form_runtime::ButtonAlign;

use super::*;

/// Flex justification of an action bar packed to `align`.
pub(crate) fn action_justify(align: ButtonAlign) -> &'static str {
    match align {
        ButtonAlign::Left => "start",
        ButtonAlign::Right => "end",
    }
}

#[component]
/// Vertical column of form fields.
pub fn FieldStack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-field-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-stack"
            data-ui-slot=ui_slot.unwrap_or("fields")
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Row of form actions packed to one edge.
///
/// The form footer renders through this, so standalone button rows line up with it.
pub fn ActionBar(
    #[prop(optional)] align: ButtonAlign,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-action-bar", layout_class)
            role="group"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="action-bar"
            data-ui-slot=ui_slot
            data-ui-align=align.token()
            data-ui-justify=action_justify(align)
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}
