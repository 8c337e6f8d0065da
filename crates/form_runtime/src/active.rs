//! Tracks which input last held interactive focus.

use crate::InputId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Identity-only reference to the active input of a form.
///
/// Holds an identifier, never a handle: the previous input is looked up in the registry when
/// its transient message has to be cleared.
pub struct ActiveInputTracker {
    active: Option<InputId>,
}

impl ActiveInputTracker {
    /// Currently active input.
    pub fn active_input(&self) -> Option<&InputId> {
        self.active.as_ref()
    }

    /// Makes `id` the active input.
    ///
    /// Returns the previously active id when the active input changed, so the caller can clear
    /// its transient message. Re-activating the current input returns `None`.
    pub fn set_active_input(&mut self, id: InputId) -> Option<InputId> {
        if self.active.as_ref() == Some(&id) {
            return None;
        }
        self.active.replace(id)
    }

    /// Forgets the active input when it is `id`.
    pub fn clear_active_input(&mut self, id: &InputId) {
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_reports_previous_input_once() {
        let mut tracker = ActiveInputTracker::default();
        assert_eq!(tracker.set_active_input("a".into()), None);
        assert_eq!(tracker.set_active_input("a".into()), None);
        assert_eq!(tracker.set_active_input("b".into()), Some(InputId::new("a")));
        assert_eq!(tracker.active_input(), Some(&InputId::new("b")));
    }

    #[test]
    fn clearing_only_forgets_matching_input() {
        let mut tracker = ActiveInputTracker::default();
        tracker.set_active_input("a".into());
        tracker.clear_active_input(&"b".into());
        assert_eq!(tracker.active_input(), Some(&InputId::new("a")));
        tracker.clear_active_input(&"a".into());
        assert_eq!(tracker.active_input(), None);
    }
}
