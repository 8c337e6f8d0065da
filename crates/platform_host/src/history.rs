//! Navigation-history host-service contracts.

use std::{cell::Cell, rc::Rc};

/// Host service for stepping back through the surrounding navigation history.
///
/// Forms fall back to this capability when they are cancelled without an explicit cancel handler
/// or an enclosing modal.
pub trait NavigationHistory {
    /// Navigates one entry back in the host history.
    fn back(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Default)]
/// In-memory navigation history that records back requests.
pub struct MemoryNavigationHistory {
    back_calls: Rc<Cell<usize>>,
    failure: Option<String>,
}

impl MemoryNavigationHistory {
    /// Creates a history whose `back` calls always fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            back_calls: Rc::default(),
            failure: Some(reason.into()),
        }
    }

    /// Returns how many times `back` has been requested.
    pub fn back_calls(&self) -> usize {
        self.back_calls.get()
    }
}

impl NavigationHistory for MemoryNavigationHistory {
    fn back(&self) -> Result<(), String> {
        self.back_calls.set(self.back_calls.get() + 1);
        match &self.failure {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }
}
