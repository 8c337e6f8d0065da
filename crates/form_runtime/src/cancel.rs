//! Resolution of the cancel action.

use std::rc::Rc;

use leptos::logging;
use platform_host::NavigationHistory;

use crate::FormError;

/// An enclosing modal-like surface that can be cancelled.
pub trait ModalCancel {
    /// Cancels (closes) the surrounding modal.
    fn cancel_modal(&self);
}

impl<F: Fn()> ModalCancel for F {
    fn cancel_modal(&self) {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which collaborator handled a cancel request.
pub enum CancelOutcome {
    /// The form's own cancel handler ran.
    Callback,
    /// The enclosing modal was cancelled.
    Modal,
    /// The host history stepped back one entry.
    HistoryBack,
}

#[derive(Clone, Default)]
/// Candidates for handling a cancel request, in order of preference.
pub struct CancelRoute {
    on_cancel: Option<Rc<dyn Fn()>>,
    modal: Option<Rc<dyn ModalCancel>>,
    history: Option<Rc<dyn NavigationHistory>>,
}

impl std::fmt::Debug for CancelRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelRoute")
            .field("on_cancel", &self.on_cancel.is_some())
            .field("modal", &self.modal.is_some())
            .field("history", &self.history.is_some())
            .finish()
    }
}

impl CancelRoute {
    /// Creates a route with no collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the form's own cancel handler.
    pub fn with_callback(mut self, on_cancel: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(Rc::new(on_cancel));
        self
    }

    /// Sets the enclosing modal collaborator.
    pub fn with_modal(mut self, modal: Option<Rc<dyn ModalCancel>>) -> Self {
        self.modal = modal;
        self
    }

    /// Sets the navigation history used as the last resort.
    pub fn with_history(mut self, history: Option<Rc<dyn NavigationHistory>>) -> Self {
        self.history = history;
        self
    }

    /// Runs the preferred cancel collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::HistoryUnavailable`] when no collaborator exists at all, and
    /// [`FormError::Navigation`] when the history rejects the back request.
    pub fn cancel(&self) -> Result<CancelOutcome, FormError> {
        if let Some(on_cancel) = &self.on_cancel {
            on_cancel();
            return Ok(CancelOutcome::Callback);
        }
        if let Some(modal) = &self.modal {
            modal.cancel_modal();
            return Ok(CancelOutcome::Modal);
        }
        let history = self.history.as_ref().ok_or(FormError::HistoryUnavailable)?;
        history.back().map_err(FormError::Navigation)?;
        logging::log!("form cancelled through history back");
        Ok(CancelOutcome::HistoryBack)
    }
}
