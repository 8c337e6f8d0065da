//! Reusable validated input model that cooperates with a form through its handle.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{FormHandle, InputHandle, InputId, SubscriptionId, TransientMessage};

/// A single validation rule applied to a field value.
pub trait FieldRule {
    /// Returns `Err(message)` when `value` breaks the rule.
    fn check(&self, value: &str) -> Result<(), String>;
}

impl<F: Fn(&str) -> Result<(), String>> FieldRule for F {
    fn check(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Requires a non-blank value.
pub struct PresenceRule {
    message: String,
}

impl PresenceRule {
    /// Rule with a custom failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for PresenceRule {
    fn default() -> Self {
        Self::new("This field is required.")
    }
}

impl FieldRule for PresenceRule {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Bounds the number of characters of a value. Empty values pass; pair with [`PresenceRule`].
pub struct LengthRule {
    /// Minimum character count.
    pub min: Option<usize>,
    /// Maximum character count.
    pub max: Option<usize>,
}

impl FieldRule for LengthRule {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Ok(());
        }
        let len = value.chars().count();
        match (self.min, self.max) {
            (Some(min), Some(max)) if len < min || len > max => {
                Err(format!("Must be between {min} and {max} characters."))
            }
            (Some(min), None) if len < min => Err(format!("Must be at least {min} characters.")),
            (None, Some(max)) if len > max => Err(format!("Must be at most {max} characters.")),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a field message.
pub enum MessageLevel {
    /// Blocks submission and counts towards the form's error total.
    Error,
    /// Informational; counts towards the warning total only.
    Warning,
}

impl MessageLevel {
    /// Stable DOM token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Message currently attached to a field.
pub struct FieldMessage {
    /// Severity.
    pub level: MessageLevel,
    /// Human-readable text.
    pub text: String,
    /// Whether the message is currently shown.
    pub visible: bool,
}

type MessageObserver = Rc<dyn Fn(Option<FieldMessage>)>;

struct FieldInner {
    id: InputId,
    value: RefCell<String>,
    disabled: Cell<bool>,
    error_rules: RefCell<Vec<Box<dyn FieldRule>>>,
    warning_rules: RefCell<Vec<Box<dyn FieldRule>>>,
    message: RefCell<Option<FieldMessage>>,
    counted_error: Cell<bool>,
    counted_warning: Cell<bool>,
    form: RefCell<Option<FormHandle>>,
    observers: RefCell<Vec<(SubscriptionId, MessageObserver)>>,
    next_observer: Cell<SubscriptionId>,
}

#[derive(Clone)]
/// Input model with error and warning rules.
///
/// The field keeps its contribution to the form counters balanced: it increments a counter when
/// it becomes invalid, decrements when it recovers, and gives its contribution back when it
/// disconnects or is disabled.
pub struct ValidatedField {
    inner: Rc<FieldInner>,
}

impl std::fmt::Debug for ValidatedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedField")
            .field("id", &self.inner.id)
            .field("value", &self.inner.value.borrow())
            .field("disabled", &self.inner.disabled.get())
            .field("message", &self.inner.message.borrow())
            .finish()
    }
}

impl ValidatedField {
    /// Creates an unconnected field with no rules.
    pub fn new(id: InputId) -> Self {
        Self {
            inner: Rc::new(FieldInner {
                id,
                value: RefCell::new(String::new()),
                disabled: Cell::new(false),
                error_rules: RefCell::new(Vec::new()),
                warning_rules: RefCell::new(Vec::new()),
                message: RefCell::new(None),
                counted_error: Cell::new(false),
                counted_warning: Cell::new(false),
                form: RefCell::new(None),
                observers: RefCell::new(Vec::new()),
                next_observer: Cell::new(0),
            }),
        }
    }

    /// Adds a rule whose failure is an error.
    pub fn with_rule(self, rule: impl FieldRule + 'static) -> Self {
        self.inner.error_rules.borrow_mut().push(Box::new(rule));
        self
    }

    /// Adds a rule whose failure is a warning.
    pub fn with_warning(self, rule: impl FieldRule + 'static) -> Self {
        self.inner.warning_rules.borrow_mut().push(Box::new(rule));
        self
    }

    /// Sets the initial value.
    pub fn with_value(self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Identifier under which the field registers.
    pub fn id(&self) -> &InputId {
        &self.inner.id
    }

    /// Current value.
    pub fn value(&self) -> String {
        self.inner.value.borrow().clone()
    }

    /// Replaces the value. Validation waits for blur or a form pass.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.inner.value.borrow_mut() = value.into();
    }

    /// Current message, if any.
    pub fn message(&self) -> Option<FieldMessage> {
        self.inner.message.borrow().clone()
    }

    /// Returns true when the last validation left an error.
    pub fn has_error(&self) -> bool {
        self.inner.counted_error.get()
    }

    /// Enables or disables the field. Disabling drops any error or warning it holds.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.disabled.set(disabled);
        if disabled {
            self.inner.release_counts();
            self.inner.set_message(None);
        }
    }

    /// Registers an observer of message changes.
    ///
    /// Views mirroring the message release their observer with
    /// [`remove_message_observer`](Self::remove_message_observer) when they unmount.
    pub fn on_message_change(
        &self,
        observer: impl Fn(Option<FieldMessage>) + 'static,
    ) -> SubscriptionId {
        let id = self.inner.next_observer.get();
        self.inner.next_observer.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        id
    }

    /// Removes a message observer. Unknown ids are ignored.
    pub fn remove_message_observer(&self, id: SubscriptionId) {
        self.inner
            .observers
            .borrow_mut()
            .retain(|(existing, _)| *existing != id);
    }

    /// Attaches the field to `form`, detaching it from any previous form first.
    ///
    /// The form only keeps a weak reference; the field stays registered while any clone of it
    /// is alive.
    pub fn connect(&self, form: FormHandle) {
        self.disconnect();
        let handle: Rc<dyn InputHandle> = self.inner.clone();
        form.attach_to_form(self.inner.id.clone(), &handle);
        *self.inner.form.borrow_mut() = Some(form);
    }

    /// Detaches the field and gives back its counter contribution.
    pub fn disconnect(&self) {
        self.inner.release_counts();
        let form = self.inner.form.borrow_mut().take();
        if let Some(form) = form {
            form.detach_from_form(&self.inner.id);
        }
    }

    /// Marks this field active on its form and reveals its pending message.
    pub fn focus(&self) {
        if let Some(form) = self.inner.form() {
            form.set_active_input(self.inner.id.clone());
        }
        self.inner.set_visibility(true);
    }

    /// Validates the field as it loses focus.
    pub fn blur(&self) -> bool {
        self.inner.run_rules()
    }
}

impl FieldInner {
    fn form(&self) -> Option<FormHandle> {
        self.form.borrow().clone()
    }

    fn run_rules(&self) -> bool {
        if self.disabled.get() {
            return true;
        }
        let value = self.value.borrow().clone();
        let error = first_failure(&self.error_rules.borrow(), &value);
        let warning = match error {
            Some(_) => None,
            None => first_failure(&self.warning_rules.borrow(), &value),
        };

        self.track(&self.counted_error, error.is_some(), MessageLevel::Error);
        self.track(&self.counted_warning, warning.is_some(), MessageLevel::Warning);

        let visible = self
            .message
            .borrow()
            .as_ref()
            .is_some_and(|message| message.visible);
        let message = error
            .map(|text| (MessageLevel::Error, text))
            .or_else(|| warning.map(|text| (MessageLevel::Warning, text)))
            .map(|(level, text)| FieldMessage {
                level,
                text,
                visible,
            });
        self.set_message(message);

        !self.counted_error.get()
    }

    fn track(&self, counted: &Cell<bool>, failing: bool, level: MessageLevel) {
        if counted.get() == failing {
            return;
        }
        counted.set(failing);
        let Some(form) = self.form() else {
            return;
        };
        match (level, failing) {
            (MessageLevel::Error, true) => form.increment_error_count(),
            (MessageLevel::Error, false) => form.decrement_error_count(),
            (MessageLevel::Warning, true) => form.increment_warning_count(),
            (MessageLevel::Warning, false) => form.decrement_warning_count(),
        }
    }

    fn release_counts(&self) {
        self.track(&self.counted_error, false, MessageLevel::Error);
        self.track(&self.counted_warning, false, MessageLevel::Warning);
    }

    fn set_visibility(&self, visible: bool) {
        let message = self
            .message
            .borrow()
            .clone()
            .map(|message| FieldMessage { visible, ..message });
        self.set_message(message);
    }

    fn set_message(&self, message: Option<FieldMessage>) {
        if *self.message.borrow() == message {
            return;
        }
        *self.message.borrow_mut() = message.clone();
        let observers = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect::<Vec<_>>();
        for observer in observers {
            observer(message.clone());
        }
    }
}

impl Drop for FieldInner {
    fn drop(&mut self) {
        self.release_counts();
        if let Some(form) = self.form.get_mut().take() {
            // A newer handle may have taken over the id.
            if form.input(&self.id).is_none() {
                form.detach_from_form(&self.id);
            }
        }
    }
}

fn first_failure(rules: &[Box<dyn FieldRule>], value: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

impl InputHandle for FieldInner {
    fn validate(&self) -> bool {
        self.run_rules()
    }

    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn transient_message(&self) -> Option<&dyn TransientMessage> {
        Some(self)
    }
}

impl TransientMessage for FieldInner {
    fn clear_transient_message(&self) {
        self.set_visibility(false);
    }
}

impl InputHandle for ValidatedField {
    fn validate(&self) -> bool {
        self.inner.validate()
    }

    fn is_disabled(&self) -> bool {
        self.inner.is_disabled()
    }

    fn transient_message(&self) -> Option<&dyn TransientMessage> {
        self.inner.transient_message()
    }
}
