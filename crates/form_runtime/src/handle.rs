//! Descendant-facing handle to one form coordinator's shared state.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;

use crate::{
    ActiveInputTracker, AggregateCounters, AggregateState, InputHandle, InputId, InputRegistry,
    SubscriptionId,
};

#[derive(Debug, Default)]
struct FormState {
    registry: RefCell<InputRegistry>,
    counters: RefCell<AggregateCounters>,
    active: RefCell<ActiveInputTracker>,
}

#[derive(Debug, Clone, Default)]
/// Cheap-to-clone handle injected into the inputs of one form.
///
/// All clones share the same registry, counters, and active-input reference. No internal borrow
/// is held while an input runs its own code, so inputs may call back into the handle from
/// `validate` or `clear_transient_message`.
pub struct FormHandle {
    state: Rc<FormState>,
}

impl PartialEq for FormHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl FormHandle {
    /// Creates the state of a new, empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle` under `id`; an existing registration for `id` is replaced.
    pub fn attach_to_form(&self, id: InputId, handle: &Rc<dyn InputHandle>) {
        self.state.registry.borrow_mut().attach(id, handle);
    }

    /// Deregisters `id`. Unknown ids are ignored.
    pub fn detach_from_form(&self, id: &InputId) {
        self.state.registry.borrow_mut().detach(id);
        self.state.active.borrow_mut().clear_active_input(id);
    }

    /// Identifiers of the registered inputs.
    pub fn inputs(&self) -> Vec<InputId> {
        self.state.registry.borrow().ids()
    }

    /// Live handle registered under `id`.
    pub fn input(&self, id: &InputId) -> Option<Rc<dyn InputHandle>> {
        self.state.registry.borrow().get(id)
    }

    /// Input that last held focus.
    pub fn active_input(&self) -> Option<InputId> {
        self.state.active.borrow().active_input().cloned()
    }

    /// Marks `id` as the active input.
    ///
    /// When another input was active and shows transient messages, its message is cleared
    /// before the reference moves, so at most one message is visible at a time.
    pub fn set_active_input(&self, id: InputId) {
        let previous = self.state.active.borrow().active_input().cloned();
        if previous.as_ref() == Some(&id) {
            return;
        }
        if let Some(handle) = previous.and_then(|previous| self.input(&previous)) {
            if let Some(message) = handle.transient_message() {
                message.clear_transient_message();
            }
        }
        self.state.active.borrow_mut().set_active_input(id);
    }

    /// Current error and warning totals.
    pub fn counts(&self) -> AggregateState {
        self.state.counters.borrow().state()
    }

    /// Adds one error outside of a validation pass.
    pub fn increment_error_count(&self) {
        let state = self.state.counters.borrow_mut().increment_error_count();
        self.notify(state);
    }

    /// Removes one error outside of a validation pass.
    pub fn decrement_error_count(&self) {
        let state = self.state.counters.borrow_mut().decrement_error_count();
        self.notify(state);
    }

    /// Adds one warning.
    pub fn increment_warning_count(&self) {
        let state = self.state.counters.borrow_mut().increment_warning_count();
        self.notify(state);
    }

    /// Removes one warning.
    pub fn decrement_warning_count(&self) {
        let state = self.state.counters.borrow_mut().decrement_warning_count();
        self.notify(state);
    }

    /// Registers an observer of counter changes.
    pub fn subscribe(&self, observer: impl Fn(AggregateState) + 'static) -> SubscriptionId {
        self.state.counters.borrow_mut().subscribe(observer)
    }

    /// Removes a counter observer.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.counters.borrow_mut().unsubscribe(id);
    }

    /// Runs a full validation pass over every registered, enabled input.
    ///
    /// Returns `false` when at least one input is invalid. An invalid pass overwrites the error
    /// total with the number of failing inputs. A valid pass leaves the error total untouched,
    /// so counts primed through the increment/decrement channel survive it.
    pub fn validate(&self) -> bool {
        let inputs = self.state.registry.borrow_mut().live_handles();
        let mut valid = true;
        let mut errors = 0;

        for (_, input) in &inputs {
            if input.is_disabled() {
                continue;
            }
            if !input.validate() {
                valid = false;
                errors += 1;
            }
        }

        if !valid {
            let state = self.state.counters.borrow_mut().set_error_count(errors);
            self.notify(state);
        }

        logging::log!(
            "form validation pass over {} inputs: {}",
            inputs.len(),
            if valid { "valid" } else { "invalid" }
        );
        valid
    }

    fn notify(&self, state: AggregateState) {
        let observers = self.state.counters.borrow().observers();
        for observer in observers {
            observer(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::TransientMessage;

    struct StubInput {
        valid: Cell<bool>,
        disabled: Cell<bool>,
        clears_messages: bool,
        validate_calls: Cell<usize>,
        clear_calls: Cell<usize>,
    }

    impl StubInput {
        fn new(valid: bool) -> Rc<Self> {
            Rc::new(Self {
                valid: Cell::new(valid),
                disabled: Cell::new(false),
                clears_messages: true,
                validate_calls: Cell::new(0),
                clear_calls: Cell::new(0),
            })
        }

        fn disabled(valid: bool) -> Rc<Self> {
            let input = Self::new(valid);
            input.disabled.set(true);
            input
        }

        fn without_messages() -> Rc<Self> {
            Rc::new(Self {
                valid: Cell::new(true),
                disabled: Cell::new(false),
                clears_messages: false,
                validate_calls: Cell::new(0),
                clear_calls: Cell::new(0),
            })
        }
    }

    impl InputHandle for StubInput {
        fn validate(&self) -> bool {
            self.validate_calls.set(self.validate_calls.get() + 1);
            self.valid.get()
        }

        fn is_disabled(&self) -> bool {
            self.disabled.get()
        }

        fn transient_message(&self) -> Option<&dyn TransientMessage> {
            self.clears_messages.then_some(self as &dyn TransientMessage)
        }
    }

    impl TransientMessage for StubInput {
        fn clear_transient_message(&self) {
            self.clear_calls.set(self.clear_calls.get() + 1);
        }
    }

    fn attach(form: &FormHandle, id: &str, input: &Rc<StubInput>) -> Rc<dyn InputHandle> {
        let handle: Rc<dyn InputHandle> = input.clone();
        form.attach_to_form(id.into(), &handle);
        handle
    }

    #[test]
    fn empty_form_is_valid() {
        let form = FormHandle::new();
        assert!(form.validate());
        assert_eq!(form.counts(), AggregateState::default());
    }

    #[test]
    fn invalid_pass_overwrites_error_count_with_failing_inputs() {
        let form = FormHandle::new();
        let a = StubInput::new(false);
        let b = StubInput::new(false);
        let c = StubInput::new(true);
        let _handles = [attach(&form, "a", &a), attach(&form, "b", &b), attach(&form, "c", &c)];
        for _ in 0..5 {
            form.increment_error_count();
        }

        assert!(!form.validate());
        assert_eq!(form.counts().error_count, 2);
        assert_eq!(c.validate_calls.get(), 1);
    }

    #[test]
    fn valid_pass_leaves_primed_error_count_untouched() {
        let form = FormHandle::new();
        let a = StubInput::new(true);
        let b = StubInput::new(true);
        let _handles = [attach(&form, "a", &a), attach(&form, "b", &b)];
        form.increment_error_count();
        form.increment_error_count();
        form.increment_error_count();

        assert!(form.validate());
        assert_eq!(form.counts().error_count, 3);
    }

    #[test]
    fn disabled_inputs_are_excluded_from_verdict_and_tally() {
        let form = FormHandle::new();
        let disabled = StubInput::disabled(false);
        let failing = StubInput::new(false);
        let _handles = [attach(&form, "off", &disabled), attach(&form, "bad", &failing)];

        assert!(!form.validate());
        assert_eq!(form.counts().error_count, 1);
        assert_eq!(disabled.validate_calls.get(), 0);

        failing.disabled.set(true);
        assert!(form.validate());
    }

    #[test]
    fn reattached_id_validates_only_latest_handle() {
        let form = FormHandle::new();
        let old = StubInput::new(false);
        let new = StubInput::new(true);
        let _old = attach(&form, "a", &old);
        let _new = attach(&form, "a", &new);

        assert!(form.validate());
        assert_eq!(old.validate_calls.get(), 0);
        assert_eq!(new.validate_calls.get(), 1);
    }

    #[test]
    fn detached_inputs_are_not_validated() {
        let form = FormHandle::new();
        let a = StubInput::new(false);
        let _handle = attach(&form, "a", &a);
        form.detach_from_form(&"a".into());
        form.detach_from_form(&"a".into());

        assert!(form.validate());
        assert_eq!(a.validate_calls.get(), 0);
        assert!(form.inputs().is_empty());
    }

    #[test]
    fn switching_active_input_clears_previous_message_once() {
        let form = FormHandle::new();
        let a = StubInput::new(true);
        let b = StubInput::new(true);
        let _handles = [attach(&form, "a", &a), attach(&form, "b", &b)];

        form.set_active_input("a".into());
        form.set_active_input("a".into());
        assert_eq!(a.clear_calls.get(), 0);

        form.set_active_input("b".into());
        assert_eq!(a.clear_calls.get(), 1);
        assert_eq!(b.clear_calls.get(), 0);
        assert_eq!(form.active_input(), Some(InputId::new("b")));

        form.set_active_input("b".into());
        assert_eq!(a.clear_calls.get(), 1);
    }

    #[test]
    fn switching_from_input_without_messages_just_moves_reference() {
        let form = FormHandle::new();
        let plain = StubInput::without_messages();
        let other = StubInput::new(true);
        let _handles = [attach(&form, "plain", &plain), attach(&form, "other", &other)];

        form.set_active_input("plain".into());
        form.set_active_input("other".into());

        assert_eq!(plain.clear_calls.get(), 0);
        assert_eq!(form.active_input(), Some(InputId::new("other")));
    }

    #[test]
    fn detaching_active_input_releases_reference() {
        let form = FormHandle::new();
        let a = StubInput::new(true);
        let _handle = attach(&form, "a", &a);
        form.set_active_input("a".into());
        form.detach_from_form(&"a".into());
        assert_eq!(form.active_input(), None);
    }

    #[test]
    fn observers_see_incremental_and_pass_updates() {
        let form = FormHandle::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        form.subscribe({
            let seen = seen.clone();
            move |state: AggregateState| seen.borrow_mut().push(state.error_count)
        });
        let a = StubInput::new(false);
        let _handle = attach(&form, "a", &a);

        form.increment_error_count();
        form.increment_error_count();
        form.validate();
        form.decrement_error_count();

        assert_eq!(*seen.borrow(), vec![1, 2, 1, 0]);
    }

    struct ReentrantInput {
        form: FormHandle,
    }

    impl InputHandle for ReentrantInput {
        fn validate(&self) -> bool {
            self.form.increment_error_count();
            let _ = self.form.inputs();
            false
        }

        fn is_disabled(&self) -> bool {
            false
        }
    }

    #[test]
    fn inputs_may_call_back_into_the_form_during_a_pass() {
        let form = FormHandle::new();
        let input: Rc<dyn InputHandle> = Rc::new(ReentrantInput { form: form.clone() });
        form.attach_to_form("a".into(), &input);

        assert!(!form.validate());
        assert_eq!(form.counts().error_count, 1);
    }
}
