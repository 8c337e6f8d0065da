use form_runtime::{provide_modal_context, InputId};

use super::*;

/// Element ids of one modal's title and subtitle, unique per instance so stacked dialogs keep
/// their own accessible names.
fn modal_label_ids() -> (String, String) {
    let base = InputId::generate();
    (format!("{base}-title"), format!("{base}-subtitle"))
}

#[component]
/// Shared modal dialog surface.
///
/// Descendant forms without their own cancel handler cancel through `on_cancel`. Escape also
/// cancels while the modal is open.
pub fn Modal(
    #[prop(into)] open: MaybeSignal<bool>,
    on_cancel: Callback<()>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(default = true)] show_close_icon: bool,
    children: ChildrenFn,
) -> impl IntoView {
    provide_modal_context(on_cancel);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" || !open.get_untracked() {
            return;
        }
        ev.prevent_default();
        on_cancel.call(());
    });
    on_cleanup(move || escape_listener.remove());

    let (title_id, subtitle_id) = modal_label_ids();
    let labelledby = title.is_some().then(|| title_id.clone());
    let describedby = subtitle.is_some().then(|| subtitle_id.clone());
    let title = store_value(title);
    let subtitle = store_value(subtitle);
    let children = store_value(children);

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |_| on_cancel.call(())
            ></div>
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-labelledby=labelledby.clone()
                aria-describedby=describedby.clone()
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                {show_close_icon
                    .then(|| {
                        view! {
                            <Button
                                ui_slot="close"
                                variant=ButtonVariant::Quiet
                                leading_icon=IconName::Dismiss
                                on_click=Callback::new(move |_: MouseEvent| on_cancel.call(()))
                            >
                                <span class="ui-visually-hidden">"Close"</span>
                            </Button>
                        }
                    })}
                {title
                    .get_value()
                    .map(|title| {
                        view! {
                            <Heading level=HeadingLevel::Section ui_slot="title" id=title_id.clone()>
                                {title}
                            </Heading>
                        }
                    })}
                {subtitle
                    .get_value()
                    .map(|subtitle| {
                        view! {
                            <Caption ui_slot="subtitle" id=subtitle_id.clone()>
                                {subtitle}
                            </Caption>
                        }
                    })}
                <div data-ui-slot="body">{children.with_value(|children| children())}</div>
            </div>
        </Show>
    }
}
