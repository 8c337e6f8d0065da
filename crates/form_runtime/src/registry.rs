//! Live mapping of input identifiers to non-owning input handles.

use std::{
    collections::HashMap,
    rc::{Rc, Weak},
};

use leptos::logging;

use crate::{InputHandle, InputId};

#[derive(Default)]
/// Registry of the inputs currently attached to one form.
///
/// Entries hold `Weak` references: the registry never keeps a control alive. No iteration
/// order is promised.
pub struct InputRegistry {
    inputs: HashMap<InputId, Weak<dyn InputHandle>>,
}

impl std::fmt::Debug for InputRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputRegistry")
            .field("inputs", &self.inputs.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl InputRegistry {
    /// Stores `handle` under `id`, replacing any handle already registered under it.
    pub fn attach(&mut self, id: InputId, handle: &Rc<dyn InputHandle>) {
        if self.inputs.insert(id.clone(), Rc::downgrade(handle)).is_some() {
            logging::log!("form input `{id}` re-attached; previous handle replaced");
        }
    }

    /// Removes `id` if present. Returns whether an entry was removed.
    pub fn detach(&mut self, id: &InputId) -> bool {
        self.inputs.remove(id).is_some()
    }

    /// Returns true when `id` is registered.
    pub fn contains(&self, id: &InputId) -> bool {
        self.inputs.contains_key(id)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Snapshot of the registered identifiers, sorted for stable output.
    pub fn ids(&self) -> Vec<InputId> {
        let mut ids = self.inputs.keys().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }

    /// Returns the live handle registered under `id`.
    pub fn get(&self, id: &InputId) -> Option<Rc<dyn InputHandle>> {
        self.inputs.get(id).and_then(Weak::upgrade)
    }

    /// Snapshot of every live handle for a validation pass.
    ///
    /// Entries whose control was dropped without detaching are pruned.
    pub fn live_handles(&mut self) -> Vec<(InputId, Rc<dyn InputHandle>)> {
        let mut live = Vec::with_capacity(self.inputs.len());
        self.inputs.retain(|id, handle| match handle.upgrade() {
            Some(handle) => {
                live.push((id.clone(), handle));
                true
            }
            None => {
                logging::warn!("form input `{id}` was dropped without detaching; pruning");
                false
            }
        });
        live
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    struct Probe {
        calls: Cell<usize>,
    }

    impl InputHandle for Probe {
        fn validate(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }

        fn is_disabled(&self) -> bool {
            false
        }
    }

    fn probe() -> Rc<Probe> {
        Rc::new(Probe {
            calls: Cell::new(0),
        })
    }

    fn as_handle(probe: &Rc<Probe>) -> Rc<dyn InputHandle> {
        probe.clone()
    }

    #[test]
    fn registry_reflects_last_operation_per_id() {
        let a = probe();
        let b = probe();
        let c = probe();
        let (ha, hb, hc) = (as_handle(&a), as_handle(&b), as_handle(&c));
        let mut registry = InputRegistry::default();

        registry.attach("a".into(), &ha);
        registry.attach("b".into(), &hb);
        registry.detach(&"a".into());
        registry.attach("c".into(), &hc);
        registry.attach("a".into(), &ha);
        registry.detach(&"c".into());

        assert_eq!(
            registry.ids(),
            vec![InputId::new("a"), InputId::new("b")]
        );
    }

    #[test]
    fn detaching_unknown_id_is_a_noop() {
        let a = probe();
        let ha = as_handle(&a);
        let mut registry = InputRegistry::default();
        registry.attach("a".into(), &ha);

        assert!(!registry.detach(&"missing".into()));
        assert!(!registry.detach(&"missing".into()));
        assert_eq!(registry.ids(), vec![InputId::new("a")]);
    }

    #[test]
    fn reattaching_replaces_the_handle() {
        let first = probe();
        let second = probe();
        let (h1, h2) = (as_handle(&first), as_handle(&second));
        let mut registry = InputRegistry::default();

        registry.attach("a".into(), &h1);
        registry.attach("a".into(), &h2);
        for (_, handle) in registry.live_handles() {
            handle.validate();
        }

        assert_eq!(registry.len(), 1);
        assert_eq!(first.calls.get(), 0);
        assert_eq!(second.calls.get(), 1);
    }

    #[test]
    fn dropped_handles_are_pruned_from_snapshots() {
        let kept = probe();
        let hk = as_handle(&kept);
        let mut registry = InputRegistry::default();
        registry.attach("kept".into(), &hk);
        {
            let gone = as_handle(&probe());
            registry.attach("gone".into(), &gone);
        }

        let live = registry.live_handles();

        assert_eq!(live.len(), 1);
        assert_eq!(live[0].0, InputId::new("kept"));
        assert!(!registry.contains(&"gone".into()));
        assert!(registry.get(&"gone".into()).is_none());
    }
}
