use std::rc::Rc;

use form_runtime::{
    csrf_token_from_meta, provide_form_context, serialize_controls, use_form, use_modal,
    AggregateState, ButtonAlign, CancelRoute, FieldMessage, FormConfig, FormCoordinator,
    FormHooks, FormPayload, MessageLevel, ModalCancel, SerializeOptions, ValidatedField,
};
use leptos::ev::SubmitEvent;

use super::*;

#[component]
/// Form surface that validates every registered input before letting a submission through.
///
/// Inputs rendered inside the form (for example [`ValidatedTextField`]) find its coordinator
/// through context. Cancelling prefers `on_cancel`, then an enclosing [`Modal`](super::Modal),
/// then the browser history.
///
/// # Panics
///
/// The cancel action panics when no cancel collaborator is available at all, since that is a
/// wiring defect of the page.
pub fn Form(
    #[prop(default = true)] cancel: bool,
    #[prop(default = true)] save: bool,
    #[prop(optional)] validate_on_mount: bool,
    #[prop(default = true)] show_summary: bool,
    #[prop(optional)] button_align: ButtonAlign,
    #[prop(optional, into)] saving: MaybeSignal<bool>,
    #[prop(default = "Cancel".to_string(), into)] cancel_text: String,
    #[prop(default = "Save".to_string(), into)] save_text: String,
    #[prop(optional)] before_form_validation: Option<Callback<SubmitEvent>>,
    #[prop(optional)] after_form_validation: Option<Callback<(SubmitEvent, bool)>>,
    #[prop(optional)] on_submit: Option<Callback<SubmitEvent>>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(optional, into)] additional_actions: Option<ViewFn>,
    #[prop(optional, into)] custom_save_button: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Form>,
    children: Children,
) -> impl IntoView {
    let config = FormConfig {
        cancel,
        save,
        validate_on_mount,
        show_summary,
        button_align,
        saving: saving.get_untracked(),
        cancel_text,
        save_text,
    };

    let mut hooks = FormHooks::<SubmitEvent>::default();
    if let Some(before) = before_form_validation {
        hooks = hooks.before_validation(move |ev| before.call(ev.clone()));
    }
    if let Some(after) = after_form_validation {
        hooks = hooks.after_validation(move |ev, valid| after.call((ev.clone(), valid)));
    }
    if let Some(on_submit) = on_submit {
        hooks = hooks.on_submit(move |ev| on_submit.call(ev.clone()));
    }

    let mut cancel_route = CancelRoute::new()
        .with_modal(use_modal().map(|modal| Rc::new(modal) as Rc<dyn ModalCancel>))
        .with_history(platform_host_web::navigation_history());
    if let Some(on_cancel) = on_cancel {
        cancel_route = cancel_route.with_callback(move || on_cancel.call(()));
    }

    let coordinator = Rc::new(
        FormCoordinator::new(config)
            .with_hooks(hooks)
            .with_cancel_route(cancel_route),
    );
    let context = provide_form_context(coordinator.handle());
    let csrf = csrf_token_from_meta(&platform_host_web::document_meta_tags());

    let body = children();

    create_effect({
        let coordinator = coordinator.clone();
        move |_| {
            if let Some(valid) = coordinator.mount() {
                logging::log!("form mount validation: valid={valid}");
            }
        }
    });

    let cancel_form = Callback::new({
        let coordinator = coordinator.clone();
        move |_: MouseEvent| {
            if let Err(err) = coordinator.cancel() {
                logging::error!("form cancel failed: {err}");
                panic!("{err}");
            }
        }
    });

    let FormConfig {
        cancel,
        save,
        show_summary,
        button_align,
        cancel_text,
        save_text,
        ..
    } = coordinator.config().clone();

    let save_action = save.then(|| match custom_save_button {
        Some(custom) => custom.run(),
        None => view! {
            <Button submit=true variant=ButtonVariant::Primary ui_slot="save" busy=saving>
                {move || {
                    saving.get().then(|| view! { <Icon icon=IconName::Spinner size=IconSize::Sm /> })
                }}
                {save_text}
            </Button>
        }
        .into_view(),
    });
    let save_area = if show_summary {
        view! { <FormSummary counts=context.counts>{save_action}</FormSummary> }.into_view()
    } else {
        save_action.into_view()
    };
    let cancel_action = cancel.then(|| {
        view! {
            <Button ui_slot="cancel" on_click=cancel_form>
                {cancel_text}
            </Button>
        }
    });

    let submit_coordinator = coordinator.clone();
    view! {
        <form
            class=merge_layout_class("ui-form", layout_class)
            id=id
            node_ref=node_ref
            novalidate=true
            data-ui-primitive="true"
            data-ui-kind="form"
            on:submit=move |ev: SubmitEvent| {
                submit_coordinator.handle_submit(&ev);
            }
        >
            {csrf
                .map(|csrf| {
                    view! { <input type="hidden" name=csrf.param value=csrf.token readonly=true /> }
                })}
            {body}
            <ActionBar layout_class="ui-form-footer" ui_slot="footer" align=button_align>
                {save_area}
                {cancel_action}
                {additional_actions
                    .map(|actions| {
                        view! { <div data-ui-slot="additional-actions">{actions.run()}</div> }
                    })}
            </ActionBar>
        </form>
    }
}

fn plural(count: i32, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Human summary of aggregate counts, or `None` when there is nothing to report.
fn summary_text(counts: AggregateState) -> Option<String> {
    match (counts.has_errors(), counts.has_warnings()) {
        (true, true) => Some(format!(
            "There are {} and {}",
            plural(counts.error_count, "error"),
            plural(counts.warning_count, "warning")
        )),
        (true, false) => Some(format!(
            "There {} {}",
            if counts.error_count == 1 { "is" } else { "are" },
            plural(counts.error_count, "error")
        )),
        (false, true) => Some(format!(
            "There {} {}",
            if counts.warning_count == 1 { "is" } else { "are" },
            plural(counts.warning_count, "warning")
        )),
        (false, false) => None,
    }
}

fn summary_state(counts: AggregateState) -> &'static str {
    if counts.has_errors() {
        "invalid"
    } else if counts.has_warnings() {
        "warning"
    } else {
        "valid"
    }
}

#[component]
/// Read-only error and warning totals of a form, rendered next to its save action.
pub fn FormSummary(
    #[prop(into)] counts: Signal<AggregateState>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-form-summary", layout_class)
            data-ui-primitive="true"
            data-ui-kind="form-summary"
            data-ui-state=move || summary_state(counts.get())
        >
            <span role="status" aria-live="polite" data-ui-slot="message">
                {move || {
                    let counts = counts.get();
                    summary_text(counts)
                        .map(|text| {
                            let tone = if counts.has_errors() {
                                TextTone::Danger
                            } else {
                                TextTone::Warning
                            };
                            view! { <StatusText tone=tone>{text}</StatusText> }
                        })
                }}
            </span>
            {children.map(|children| children())}
        </div>
    }
}

fn message_tone(level: MessageLevel) -> TextTone {
    match level {
        MessageLevel::Error => TextTone::Danger,
        MessageLevel::Warning => TextTone::Warning,
    }
}

#[component]
/// Text input bound to a [`ValidatedField`] and registered with the enclosing [`Form`].
///
/// The field validates on blur, claims the form's active-input slot on focus, and shows its
/// message only while it is the active input.
pub fn ValidatedTextField(
    field: ValidatedField,
    #[prop(into)] label: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let value = create_rw_signal(field.value());
    let message = create_rw_signal::<Option<FieldMessage>>(field.message());
    let message_observer = field.on_message_change(move |next| {
        let _ = message.try_set(next);
    });

    match use_form() {
        Some(form) => field.connect(form.form_handle()),
        None => logging::warn!("validated field `{}` rendered outside a form", field.id()),
    }
    on_cleanup({
        let field = field.clone();
        move || {
            field.remove_message_observer(message_observer);
            field.disconnect();
        }
    });

    create_effect({
        let field = field.clone();
        move |_| field.set_disabled(disabled.get())
    });

    let input_id = field.id().to_string();
    let message_id = format!("{input_id}-message");
    let has_error = Signal::derive(move || {
        message.with(|message| {
            message
                .as_ref()
                .is_some_and(|message| message.level == MessageLevel::Error)
        })
    });

    let on_input = Callback::new({
        let field = field.clone();
        move |ev: web_sys::Event| {
            let next = event_target_value(&ev);
            value.set(next.clone());
            field.set_value(next);
        }
    });
    let on_focus = Callback::new({
        let field = field.clone();
        move |_: FocusEvent| field.focus()
    });
    let on_blur = Callback::new({
        let field = field.clone();
        move |_: FocusEvent| {
            field.blur();
        }
    });

    let visible_message = {
        let message_id = message_id.clone();
        move || {
            message.get().filter(|message| message.visible).map(|message| {
                view! {
                    <StatusText ui_slot="message" tone=message_tone(message.level) id=message_id.clone()>
                        {message.text}
                    </StatusText>
                }
            })
        }
    };

    view! {
        <FieldGroup layout_class=layout_class.unwrap_or("") title=label description=description>
            <TextField
                id=input_id
                name=name.unwrap_or_default()
                placeholder=placeholder.unwrap_or_default()
                input_type=input_type.unwrap_or("text")
                autocomplete=autocomplete.unwrap_or("off")
                aria_describedby=message_id
                value=value
                disabled=disabled
                invalid=has_error
                on_input=on_input
                on_focus=on_focus
                on_blur=on_blur
            />
            {visible_message}
        </FieldGroup>
    }
}

/// Serializes the successful controls of a rendered form element.
pub fn serialize_form(form: &web_sys::HtmlFormElement, options: SerializeOptions) -> FormPayload {
    serialize_controls(&platform_host_web::form_controls(form), options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn counts(error_count: i32, warning_count: i32) -> AggregateState {
        AggregateState {
            error_count,
            warning_count,
        }
    }

    #[test]
    fn summary_text_pluralizes_counts() {
        assert_eq!(summary_text(counts(0, 0)), None);
        assert_eq!(
            summary_text(counts(1, 0)).as_deref(),
            Some("There is 1 error")
        );
        assert_eq!(
            summary_text(counts(0, 3)).as_deref(),
            Some("There are 3 warnings")
        );
        assert_eq!(
            summary_text(counts(2, 1)).as_deref(),
            Some("There are 2 errors and 1 warning")
        );
    }

    #[test]
    fn summary_state_prefers_errors() {
        assert_eq!(summary_state(counts(1, 4)), "invalid");
        assert_eq!(summary_state(counts(0, 4)), "warning");
        assert_eq!(summary_state(counts(0, 0)), "valid");
    }

    #[test]
    fn negative_counts_are_not_reported() {
        assert_eq!(summary_text(counts(-1, 0)), None);
        assert_eq!(summary_state(counts(-1, 0)), "valid");
    }

    #[test]
    fn message_levels_map_to_tones() {
        assert_eq!(message_tone(MessageLevel::Error), TextTone::Danger);
        assert_eq!(message_tone(MessageLevel::Error).icon(), Some(IconName::ErrorCircle));
        assert_eq!(message_tone(MessageLevel::Warning), TextTone::Warning);
        assert_eq!(message_tone(MessageLevel::Warning).icon(), Some(IconName::Warning));
    }
}
