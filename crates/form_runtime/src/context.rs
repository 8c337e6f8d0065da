//! Leptos context plumbing for forms and modals.

use leptos::*;

use crate::{AggregateState, FormHandle, ModalCancel};

#[derive(Clone, Copy)]
/// Form state made available to descendant components.
pub struct FormContext {
    /// Handle of the enclosing form.
    pub handle: StoredValue<FormHandle>,
    /// Reactive mirror of the form's aggregate counts.
    pub counts: RwSignal<AggregateState>,
}

impl FormContext {
    /// Clones the enclosing form's handle.
    pub fn form_handle(&self) -> FormHandle {
        self.handle.get_value()
    }
}

/// Provides `handle` to descendants and mirrors its counts into a signal.
///
/// The count subscription is released when the current reactive owner is cleaned up.
pub fn provide_form_context(handle: FormHandle) -> FormContext {
    let counts = create_rw_signal(handle.counts());
    let subscription = handle.subscribe(move |state| {
        if counts.try_set(state).is_some() {
            logging::warn!("form counts changed after the form was disposed");
        }
    });

    on_cleanup({
        let handle = handle.clone();
        move || handle.unsubscribe(subscription)
    });

    let context = FormContext {
        handle: store_value(handle),
        counts,
    };
    provide_context(context);
    context
}

/// Returns the enclosing [`FormContext`], if any.
pub fn use_form() -> Option<FormContext> {
    use_context::<FormContext>()
}

#[derive(Clone, Copy)]
/// Cancel capability of an enclosing modal surface.
pub struct ModalContext {
    /// Closes the modal.
    pub on_cancel: Callback<()>,
}

impl ModalCancel for ModalContext {
    fn cancel_modal(&self) {
        self.on_cancel.call(());
    }
}

/// Provides a [`ModalContext`] whose cancel action runs `on_cancel`.
pub fn provide_modal_context(on_cancel: Callback<()>) -> ModalContext {
    let context = ModalContext { on_cancel };
    provide_context(context);
    context
}

/// Returns the enclosing [`ModalContext`], if any.
pub fn use_modal() -> Option<ModalContext> {
    use_context::<ModalContext>()
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn form_context_mirrors_counts() {
        let runtime = create_runtime();

        let handle = FormHandle::new();
        let context = provide_form_context(handle.clone());
        assert_eq!(context.form_handle(), handle);

        handle.increment_error_count();
        handle.increment_warning_count();
        assert_eq!(
            context.counts.get_untracked(),
            AggregateState {
                error_count: 1,
                warning_count: 1,
            }
        );

        handle.decrement_error_count();
        assert_eq!(context.counts.get_untracked().error_count, 0);

        runtime.dispose();
    }

    #[test]
    fn modal_context_cancels_through_callback() {
        let runtime = create_runtime();

        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let modal = ModalContext {
            on_cancel: Callback::new(move |()| counter.set(counter.get() + 1)),
        };

        modal.cancel_modal();
        modal.cancel_modal();
        assert_eq!(closed.get(), 2);

        runtime.dispose();
    }
}
