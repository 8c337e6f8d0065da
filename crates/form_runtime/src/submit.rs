//! Submission coordination: hooks, verdict, and default-action suppression.

use std::rc::Rc;

use leptos::logging;

use crate::{CancelOutcome, CancelRoute, FormConfig, FormError, FormHandle};

/// The event that triggered a submission.
pub trait SubmitTrigger {
    /// Suppresses the host's default submission action.
    fn prevent_default(&self);
}

impl SubmitTrigger for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl SubmitTrigger for web_sys::SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Optional callbacks around a submission, parameterized by the trigger event type.
pub struct FormHooks<E> {
    before_validation: Option<Rc<dyn Fn(&E)>>,
    after_validation: Option<Rc<dyn Fn(&E, bool)>>,
    on_submit: Option<Rc<dyn Fn(&E)>>,
}

impl<E> Default for FormHooks<E> {
    fn default() -> Self {
        Self {
            before_validation: None,
            after_validation: None,
            on_submit: None,
        }
    }
}

impl<E> Clone for FormHooks<E> {
    fn clone(&self) -> Self {
        Self {
            before_validation: self.before_validation.clone(),
            after_validation: self.after_validation.clone(),
            on_submit: self.on_submit.clone(),
        }
    }
}

impl<E> std::fmt::Debug for FormHooks<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHooks")
            .field("before_validation", &self.before_validation.is_some())
            .field("after_validation", &self.after_validation.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl<E> FormHooks<E> {
    /// Hook called with the trigger before the validation pass.
    pub fn before_validation(mut self, hook: impl Fn(&E) + 'static) -> Self {
        self.before_validation = Some(Rc::new(hook));
        self
    }

    /// Hook called with the trigger and the verdict after the validation pass.
    ///
    /// Runs for valid and invalid submissions alike; the hook may still suppress the default
    /// action of a valid submission itself.
    pub fn after_validation(mut self, hook: impl Fn(&E, bool) + 'static) -> Self {
        self.after_validation = Some(Rc::new(hook));
        self
    }

    /// Callback for valid submissions.
    pub fn on_submit(mut self, hook: impl Fn(&E) + 'static) -> Self {
        self.on_submit = Some(Rc::new(hook));
        self
    }
}

/// Coordinator of one form: its configuration, hooks, cancel route, and shared input state.
///
/// `E` is the submission trigger type, `web_sys::SubmitEvent` in the browser.
pub struct FormCoordinator<E> {
    form: FormHandle,
    config: FormConfig,
    hooks: FormHooks<E>,
    cancel_route: CancelRoute,
}

impl<E> std::fmt::Debug for FormCoordinator<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormCoordinator")
            .field("form", &self.form)
            .field("config", &self.config)
            .field("hooks", &self.hooks)
            .field("cancel_route", &self.cancel_route)
            .finish()
    }
}

impl<E: SubmitTrigger> FormCoordinator<E> {
    /// Creates a coordinator with empty input state.
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FormHandle::new(),
            config,
            hooks: FormHooks::default(),
            cancel_route: CancelRoute::default(),
        }
    }

    /// Replaces the submission hooks.
    pub fn with_hooks(mut self, hooks: FormHooks<E>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Replaces the cancel route.
    pub fn with_cancel_route(mut self, cancel_route: CancelRoute) -> Self {
        self.cancel_route = cancel_route;
        self
    }

    /// Handle to inject into the form's inputs.
    pub fn handle(&self) -> FormHandle {
        self.form.clone()
    }

    /// Static configuration.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Runs the mount-time validation pass when configured.
    ///
    /// Only primes counters and messages; no submission hooks run. Returns the verdict when a
    /// pass ran.
    pub fn mount(&self) -> Option<bool> {
        self.config.validate_on_mount.then(|| self.form.validate())
    }

    /// Handles a submission trigger and returns the validation verdict.
    ///
    /// Invalid forms have the trigger's default action suppressed and never reach `on_submit`.
    pub fn handle_submit(&self, trigger: &E) -> bool {
        if let Some(hook) = &self.hooks.before_validation {
            hook(trigger);
        }

        let valid = self.form.validate();
        if !valid {
            trigger.prevent_default();
            logging::log!(
                "form submission suppressed with {} errors",
                self.form.counts().error_count
            );
        }

        if let Some(hook) = &self.hooks.after_validation {
            hook(trigger, valid);
        }

        if valid {
            if let Some(on_submit) = &self.hooks.on_submit {
                on_submit(trigger);
            }
        }
        valid
    }

    /// Cancels the form through its preferred collaborator.
    ///
    /// # Errors
    ///
    /// See [`CancelRoute::cancel`].
    pub fn cancel(&self) -> Result<CancelOutcome, FormError> {
        self.cancel_route.cancel()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use platform_host::MemoryNavigationHistory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{InputHandle, InputId};

    #[derive(Default)]
    struct TestTrigger {
        prevented: Cell<bool>,
    }

    impl SubmitTrigger for TestTrigger {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }
    }

    struct FixedInput {
        valid: bool,
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl InputHandle for FixedInput {
        fn validate(&self) -> bool {
            self.calls.borrow_mut().push("validate".to_string());
            self.valid
        }

        fn is_disabled(&self) -> bool {
            false
        }
    }

    fn recording_hooks(calls: &Rc<RefCell<Vec<String>>>) -> FormHooks<TestTrigger> {
        FormHooks::default()
            .before_validation({
                let calls = calls.clone();
                move |_| calls.borrow_mut().push("before".to_string())
            })
            .after_validation({
                let calls = calls.clone();
                move |_, valid| calls.borrow_mut().push(format!("after:{valid}"))
            })
            .on_submit({
                let calls = calls.clone();
                move |_| calls.borrow_mut().push("submit".to_string())
            })
    }

    fn coordinator_with_input(
        valid: bool,
        calls: &Rc<RefCell<Vec<String>>>,
    ) -> (FormCoordinator<TestTrigger>, Rc<dyn InputHandle>) {
        let coordinator =
            FormCoordinator::new(FormConfig::default()).with_hooks(recording_hooks(calls));
        let input: Rc<dyn InputHandle> = Rc::new(FixedInput {
            valid,
            calls: calls.clone(),
        });
        coordinator
            .handle()
            .attach_to_form(InputId::new("field"), &input);
        (coordinator, input)
    }

    #[test]
    fn invalid_submission_is_suppressed_and_skips_on_submit() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (coordinator, _input) = coordinator_with_input(false, &calls);
        let trigger = TestTrigger::default();

        assert!(!coordinator.handle_submit(&trigger));
        assert!(trigger.prevented.get());
        assert_eq!(
            *calls.borrow(),
            vec!["before", "validate", "after:false"]
        );
        assert_eq!(coordinator.handle().counts().error_count, 1);
    }

    #[test]
    fn valid_submission_runs_hooks_in_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (coordinator, _input) = coordinator_with_input(true, &calls);
        let trigger = TestTrigger::default();

        assert!(coordinator.handle_submit(&trigger));
        assert!(!trigger.prevented.get());
        assert_eq!(
            *calls.borrow(),
            vec!["before", "validate", "after:true", "submit"]
        );
    }

    #[test]
    fn submission_without_hooks_still_validates() {
        let coordinator = FormCoordinator::<TestTrigger>::new(FormConfig::default());
        let trigger = TestTrigger::default();
        assert!(coordinator.handle_submit(&trigger));
        assert!(!trigger.prevented.get());
    }

    #[test]
    fn mount_validates_only_when_configured() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let (coordinator, _input) = coordinator_with_input(false, &calls);
        assert_eq!(coordinator.mount(), None);
        assert!(calls.borrow().is_empty());

        let eager = FormCoordinator::<TestTrigger>::new(FormConfig {
            validate_on_mount: true,
            ..FormConfig::default()
        })
        .with_hooks(recording_hooks(&calls));
        let input: Rc<dyn InputHandle> = Rc::new(FixedInput {
            valid: false,
            calls: calls.clone(),
        });
        eager.handle().attach_to_form(InputId::new("field"), &input);

        assert_eq!(eager.mount(), Some(false));
        assert_eq!(*calls.borrow(), vec!["validate"]);
        assert_eq!(eager.handle().counts().error_count, 1);
    }

    #[test]
    fn cancel_uses_configured_route() {
        let history = MemoryNavigationHistory::default();
        let coordinator = FormCoordinator::<TestTrigger>::new(FormConfig::default())
            .with_cancel_route(CancelRoute::new().with_history(Some(Rc::new(history.clone()))));

        assert_eq!(coordinator.cancel(), Ok(CancelOutcome::HistoryBack));
        assert_eq!(history.back_calls(), 1);
    }

    #[test]
    fn cancel_without_any_collaborator_is_an_error() {
        let coordinator = FormCoordinator::<TestTrigger>::new(FormConfig::default());
        assert_eq!(coordinator.cancel(), Err(FormError::HistoryUnavailable));
    }
}
