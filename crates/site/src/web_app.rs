use form_runtime::InputId;
use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::{Route, Router, Routes, A};
use serde::Deserialize;
use system_ui::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Values submitted by the sign-up form.
pub struct SignUp {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub team: Option<String>,
}

/// Validated inputs of the sign-up form.
#[derive(Clone)]
pub struct SignUpFields {
    pub name: ValidatedField,
    pub email: ValidatedField,
    pub team: ValidatedField,
}

impl SignUpFields {
    pub fn new() -> Self {
        Self {
            name: ValidatedField::new(InputId::generate())
                .with_rule(PresenceRule::new("Please enter your name."))
                .with_rule(LengthRule {
                    min: None,
                    max: Some(60),
                }),
            email: ValidatedField::new(InputId::generate())
                .with_rule(PresenceRule::new("Please enter an email address."))
                .with_rule(|value: &str| {
                    if value.contains('@') && !value.starts_with('@') && !value.ends_with('@') {
                        Ok(())
                    } else {
                        Err("Enter an address like name@example.com.".to_string())
                    }
                }),
            team: ValidatedField::new(InputId::generate()).with_warning(LengthRule {
                min: Some(3),
                max: None,
            }),
        }
    }
}

impl Default for SignUpFields {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Form coordinator demo" />
        <Meta name="description" content="Validated forms built on the shared primitive layer." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=SignUpPage />
                    <Route path="/dialog" view=SignUpDialogPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn SignUpForm(#[prop(optional)] validate_on_mount: bool) -> impl IntoView {
    let fields = SignUpFields::new();
    let saving = create_rw_signal(false);
    let submitted = create_rw_signal::<Option<SignUp>>(None);
    let form_ref = create_node_ref::<html::Form>();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        saving.set(true);
        match serialize_form(&form, SerializeOptions::default()).decode::<SignUp>() {
            Ok(sign_up) => {
                logging::log!("sign-up accepted for {}", sign_up.email);
                submitted.set(Some(sign_up));
            }
            Err(err) => logging::error!("sign-up payload rejected: {err}"),
        }
        saving.set(false);
    });

    let privacy_note = ViewFn::from(|| {
        view! { <Caption>"We never share your email."</Caption> }
    });

    view! {
        <Form
            node_ref=form_ref
            validate_on_mount=validate_on_mount
            saving=saving
            save_text="Create account"
            on_submit=on_submit
            additional_actions=privacy_note
        >
            <FieldStack gap=LayoutGap::Md>
                <ValidatedTextField field=fields.name.clone() name="name" label="Name" autocomplete="name" />
                <ValidatedTextField
                    field=fields.email.clone()
                    name="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                />
                <ValidatedTextField
                    field=fields.team.clone()
                    name="team"
                    label="Team"
                    description={"Optional. Short names are hard to search for.".to_string()}
                />
            </FieldStack>
        </Form>
        {move || {
            submitted
                .get()
                .map(|sign_up| {
                    view! {
                        <StatusText tone=TextTone::Success live=true ui_slot="result">
                            {format!("Welcome, {}!", sign_up.name)}
                        </StatusText>
                    }
                })
        }}
    }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! {
        <section class="demo-page">
            <Heading>"Sign up"</Heading>
            <Caption>"Cancel goes back in the browser history."</Caption>
            <SignUpForm />
            <A href="/dialog">"Open the dialog version"</A>
        </section>
    }
}

#[component]
pub fn SignUpDialogPage() -> impl IntoView {
    let open = create_rw_signal(false);
    let close = Callback::new(move |()| open.set(false));

    view! {
        <section class="demo-page">
            <Heading>"Sign up in a dialog"</Heading>
            <ActionBar align=ButtonAlign::Left label="Dialog demo">
                <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| open.set(true))>
                    "Open sign-up"
                </Button>
                <A href="/">"Back to the page version"</A>
            </ActionBar>
            <Modal open=open on_cancel=close title="Create an account" subtitle="All fields are checked when you save.">
                <SignUpForm validate_on_mount=true />
            </Modal>
        </section>
    }
}
