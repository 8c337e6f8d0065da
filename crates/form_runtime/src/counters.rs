//! Error and warning totals with change observers.

use std::rc::Rc;

use leptos::logging;

use crate::AggregateState;

/// Identifier returned by [`AggregateCounters::subscribe`].
pub type SubscriptionId = usize;

type Observer = Rc<dyn Fn(AggregateState)>;

#[derive(Default)]
/// Single authoritative error/warning totals for one form.
///
/// Arithmetic is not clamped: inputs own balanced increment/decrement pairs over their
/// lifecycle, and a decrement below zero is reported as a caller defect but kept.
pub struct AggregateCounters {
    state: AggregateState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl std::fmt::Debug for AggregateCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AggregateCounters")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl AggregateCounters {
    /// Current totals.
    pub fn state(&self) -> AggregateState {
        self.state
    }

    /// Adds one error and returns the new state.
    pub fn increment_error_count(&mut self) -> AggregateState {
        self.state.error_count += 1;
        self.state
    }

    /// Removes one error and returns the new state.
    pub fn decrement_error_count(&mut self) -> AggregateState {
        self.state.error_count -= 1;
        if self.state.error_count < 0 {
            logging::warn!(
                "form error count dropped to {}; an input decremented without a matching increment",
                self.state.error_count
            );
        }
        self.state
    }

    /// Adds one warning and returns the new state.
    pub fn increment_warning_count(&mut self) -> AggregateState {
        self.state.warning_count += 1;
        self.state
    }

    /// Removes one warning and returns the new state.
    pub fn decrement_warning_count(&mut self) -> AggregateState {
        self.state.warning_count -= 1;
        if self.state.warning_count < 0 {
            logging::warn!(
                "form warning count dropped to {}; an input decremented without a matching increment",
                self.state.warning_count
            );
        }
        self.state
    }

    /// Overwrites the error total with the tally of a full validation pass.
    pub fn set_error_count(&mut self, count: i32) -> AggregateState {
        self.state.error_count = count;
        self.state
    }

    /// Registers an observer called with the new totals after every change.
    pub fn subscribe(&mut self, observer: impl Fn(AggregateState) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Rc::new(observer)));
        id
    }

    /// Removes an observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(existing, _)| *existing != id);
    }

    /// Snapshot of the observers, so they can be called without holding a borrow.
    pub fn observers(&self) -> Vec<Rc<dyn Fn(AggregateState)>> {
        self.observers
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn increments_and_decrements_are_tracked_independently() {
        let mut counters = AggregateCounters::default();
        counters.increment_error_count();
        counters.increment_error_count();
        counters.increment_warning_count();
        counters.decrement_error_count();

        assert_eq!(
            counters.state(),
            AggregateState {
                error_count: 1,
                warning_count: 1,
            }
        );
    }

    #[test]
    fn unbalanced_decrement_goes_negative_instead_of_clamping() {
        let mut counters = AggregateCounters::default();
        assert_eq!(counters.decrement_error_count().error_count, -1);
        assert_eq!(counters.decrement_warning_count().warning_count, -1);
    }

    #[test]
    fn unsubscribed_observers_are_not_returned() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut counters = AggregateCounters::default();
        let keep = counters.subscribe({
            let seen = seen.clone();
            move |state| seen.borrow_mut().push(state.error_count)
        });
        let drop_me = counters.subscribe(|_| panic!("unsubscribed observer called"));
        counters.unsubscribe(drop_me);

        let state = counters.set_error_count(4);
        for observer in counters.observers() {
            observer(state);
        }

        assert_ne!(keep, drop_me);
        assert_eq!(*seen.borrow(), vec![4]);
    }
}
