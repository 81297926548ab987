//! Per-item metadata construction.
//!
//! Items do not store metadata themselves. Instead each [`Item`](crate::item::Item)
//! carries a [`MetaFactory`] that builds a fresh [`Meta`] value every time one
//! is requested (for example when a new item stack is created). Factories are
//! never cached: two calls always yield two independent instances.

use std::any::Any;
use std::fmt;

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

/// A typed metadata instance attached to an item stack.
///
/// The concrete metadata model lives outside this crate; the registry only
/// needs to hand out boxed values and let callers downcast them.
pub trait Meta: fmt::Debug + Send + Sync + 'static {
    /// Borrow as [`Any`] for downcasting to the concrete metadata type.
    fn as_any(&self) -> &dyn Any;

    /// Convert the box into `Box<dyn Any>` for owned downcasting.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Metadata with no fields. Produced by [`DefaultMetaFactory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultMeta;

impl Meta for DefaultMeta {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

// ---------------------------------------------------------------------------
// MetaFactory
// ---------------------------------------------------------------------------

/// Builds a new [`Meta`] instance on every call.
///
/// Implemented for any `Fn() -> Box<dyn Meta>` closure, so most items can
/// simply pass `|| Box::new(MyMeta::default())`.
pub trait MetaFactory: Send + Sync {
    fn create(&self) -> Box<dyn Meta>;
}

impl<F> MetaFactory for F
where
    F: Fn() -> Box<dyn Meta> + Send + Sync,
{
    fn create(&self) -> Box<dyn Meta> {
        self()
    }
}

/// The factory used for items created through id binding alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMetaFactory;

impl MetaFactory for DefaultMetaFactory {
    fn create(&self) -> Box<dyn Meta> {
        Box::new(DefaultMeta)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
