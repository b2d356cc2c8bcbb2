//! Doctype-keyed hook registry (the host's `doc_events` table).

use std::collections::BTreeMap;

use tims_core::{Document, DomainResult};

use crate::{DocEvent, DocumentHook};

/// Hooks per doctype, run in registration order.
///
/// Build once at startup, then share (it is `Send + Sync`); dispatch takes `&self`.
#[derive(Default)]
pub struct HookRegistry {
    hooks: BTreeMap<String, Vec<Box<dyn DocumentHook>>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, doctype: impl Into<String>, hook: impl DocumentHook + 'static) {
        self.hooks.entry(doctype.into()).or_default().push(Box::new(hook));
    }

    /// Number of hooks registered for `doctype`.
    pub fn hooks_for(&self, doctype: &str) -> usize {
        self.hooks.get(doctype).map_or(0, Vec::len)
    }

    /// Run every hook registered for the document's doctype.
    ///
    /// The first failure aborts dispatch and is returned unchanged; hooks after
    /// it do not run. Doctypes without hooks pass.
    pub fn run(&self, event: DocEvent, doc: &dyn Document) -> DomainResult<()> {
        let Some(hooks) = self.hooks.get(doc.doctype()) else {
            return Ok(());
        };

        for hook in hooks {
            tracing::debug!(
                doctype = doc.doctype(),
                document = doc.name().unwrap_or("<new>"),
                event = %event,
                hook = hook.name(),
                "running document hook"
            );

            if let Err(err) = hook.run(event, doc) {
                tracing::info!(
                    doctype = doc.doctype(),
                    document = doc.name().unwrap_or("<new>"),
                    event = %event,
                    hook = hook.name(),
                    error = %err,
                    "document hook rejected commit"
                );
                return Err(err);
            }
        }

        Ok(())
    }
}

impl core::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (doctype, hooks) in &self.hooks {
            let names: Vec<&str> = hooks.iter().map(|h| h.name()).collect();
            map.entry(doctype, &names);
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::FnHook;
    use tims_core::{DocSnapshot, DomainError};

    fn counting_hook(
        name: &'static str,
        calls: Arc<AtomicUsize>,
        fail: bool,
    ) -> FnHook<impl Fn(DocEvent, &dyn Document) -> DomainResult<()> + Send + Sync> {
        FnHook::new(name, move |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(DomainError::validation(name))
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn unregistered_doctype_passes() {
        let registry = HookRegistry::new();
        let doc = DocSnapshot::new("Delivery Note");
        assert_eq!(registry.run(DocEvent::Validate, &doc), Ok(()));
        assert_eq!(registry.hooks_for("Delivery Note"), 0);
    }

    #[test]
    fn hooks_only_run_for_their_doctype() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = HookRegistry::new();
        registry.register("Sales Invoice", counting_hook("invoice", calls.clone(), true));

        let order = DocSnapshot::new("Sales Order");
        assert_eq!(registry.run(DocEvent::Validate, &order), Ok(()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn first_failure_stops_dispatch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = HookRegistry::new();
        registry.register("Sales Invoice", counting_hook("first", calls.clone(), false));
        registry.register("Sales Invoice", counting_hook("second", calls.clone(), true));
        registry.register("Sales Invoice", counting_hook("third", calls.clone(), true));

        let doc = DocSnapshot::new("Sales Invoice");
        let err = registry.run(DocEvent::Validate, &doc).unwrap_err();

        assert_eq!(err, DomainError::validation("second"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(registry.hooks_for("Sales Invoice"), 3);
    }

    #[test]
    fn hooks_see_the_event() {
        let mut registry = HookRegistry::new();
        registry.register(
            "Sales Invoice",
            FnHook::new("submit-only", |event, _| match event {
                DocEvent::OnSubmit => Err(DomainError::invariant("not on submit")),
                _ => Ok(()),
            }),
        );

        let doc = DocSnapshot::new("Sales Invoice");
        assert!(registry.run(DocEvent::Validate, &doc).is_ok());
        assert!(registry.run(DocEvent::OnSubmit, &doc).is_err());
    }

    #[test]
    fn debug_lists_hook_names() {
        let mut registry = HookRegistry::new();
        registry.register("Sales Invoice", FnHook::new("noop", |_, _| Ok(())));
        assert_eq!(format!("{registry:?}"), r#"{"Sales Invoice": ["noop"]}"#);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with a failing hook at `fail_at`, exactly `fail_at + 1` hooks run.
            #[test]
            fn dispatch_short_circuits(total in 1usize..8, fail_at in 0usize..8) {
                let fail_at = fail_at % total;
                let calls = Arc::new(AtomicUsize::new(0));
                let mut registry = HookRegistry::new();
                for i in 0..total {
                    registry.register("Sales Invoice", counting_hook("hook", calls.clone(), i == fail_at));
                }

                let doc = DocSnapshot::new("Sales Invoice");
                prop_assert!(registry.run(DocEvent::Validate, &doc).is_err());
                prop_assert_eq!(calls.load(Ordering::SeqCst), fail_at + 1);
            }
        }
    }
}
