//! Capabilities a form control exposes to its coordinator.

/// A form control capable of validating itself.
///
/// Handles are owned by the control's own subtree and shared as `Rc<dyn InputHandle>`; the
/// coordinator only keeps a non-owning reference. `validate` must be synchronous and must only
/// touch the handle's own state: a pass visits inputs in no particular order.
pub trait InputHandle {
    /// Validates the current value, returning `true` when it is valid.
    fn validate(&self) -> bool;

    /// Disabled inputs are skipped by validation passes.
    fn is_disabled(&self) -> bool;

    /// Returns the transient-message capability when the input shows validation messages.
    fn transient_message(&self) -> Option<&dyn TransientMessage> {
        None
    }
}

/// Optional capability of inputs that show a transient validation message.
pub trait TransientMessage {
    /// Hides the visible message immediately, without changing validity.
    fn clear_transient_message(&self);
}
