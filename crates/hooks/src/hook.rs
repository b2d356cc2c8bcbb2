use tims_core::{Document, DomainResult};

use crate::DocEvent;

/// A callback the host runs at a document lifecycle point.
///
/// Hooks receive the snapshot explicitly and must not keep state between calls:
/// the same event on the same snapshot always yields the same result.
///
/// Returning `Err` blocks the commit. The host surfaces the error message to the
/// user; the hook itself never recovers or retries.
pub trait DocumentHook: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    fn run(&self, event: DocEvent, doc: &dyn Document) -> DomainResult<()>;
}

/// Adapter for plain functions, mostly handy in tests and small apps.
pub struct FnHook<F> {
    name: &'static str,
    f: F,
}

impl<F> FnHook<F>
where
    F: Fn(DocEvent, &dyn Document) -> DomainResult<()> + Send + Sync,
{
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<F> DocumentHook for FnHook<F>
where
    F: Fn(DocEvent, &dyn Document) -> DomainResult<()> + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, event: DocEvent, doc: &dyn Document) -> DomainResult<()> {
        (self.f)(event, doc)
    }
}
