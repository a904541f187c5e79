//! Cursor protocol shared by containers and decorators.
//!
//! A cursor is a forward-only traversal position. Every cursor handed out by
//! a container is pre-positioned at the first element, so `first()` is only
//! needed to restart. Reading is bound by `'a`, the lifetime of the borrowed
//! container, which means no cursor can outlive the storage it walks.

use std::fmt;

use crate::domain::adapter::CursorIter;
use crate::domain::decorators::{CountingCursor, FilterCursor, LoggingCursor};
use crate::domain::element::Element;

/// Uniform traversal contract.
///
/// # Preconditions
/// - `current()` must only be called while `is_done()` is false; the
///   built-in cursors panic otherwise.
/// - `next()` on an exhausted cursor is a contract violation. The built-in
///   cursors treat it as a no-op so the cursor stays exhausted.
pub trait Cursor<'a> {
    type Item: ?Sized + 'a;

    /// Reset to the beginning of the sequence.
    fn first(&mut self);

    /// Advance by exactly one element.
    fn next(&mut self);

    /// Whether there is no element at the current position.
    fn is_done(&self) -> bool;

    /// Element at the current position.
    fn current(&self) -> &'a Self::Item;
}

/// Type-erased cursor, used when a chain is assembled at runtime.
pub type BoxedCursor<'a, T> = Box<dyn Cursor<'a, Item = T> + 'a>;

impl<'a, C: Cursor<'a> + ?Sized> Cursor<'a> for Box<C> {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn next(&mut self) {
        (**self).next()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> &'a Self::Item {
        (**self).current()
    }
}

impl<'a, C: Cursor<'a> + ?Sized> Cursor<'a> for &mut C {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn next(&mut self) {
        (**self).next()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> &'a Self::Item {
        (**self).current()
    }
}

/// Builder methods for stacking decorators.
///
/// Each call wraps `self`, so the last call ends up outermost:
/// `cursor.filtered(200.0).counted()` counts the filtered sequence.
pub trait CursorExt<'a>: Cursor<'a> + Sized {
    fn logged(self) -> LoggingCursor<Self>
    where
        Self::Item: fmt::Display,
    {
        LoggingCursor::new(self)
    }

    fn filtered(self, min_price: f64) -> FilterCursor<Self>
    where
        Self::Item: Element,
    {
        FilterCursor::new(self, min_price)
    }

    fn counted(self) -> CountingCursor<Self> {
        CountingCursor::new(self)
    }

    fn boxed(self) -> BoxedCursor<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }

    /// Host-iteration adapter over this cursor.
    fn iter(self) -> CursorIter<'a, Self> {
        CursorIter::new(self)
    }
}

impl<'a, C: Cursor<'a>> CursorExt<'a> for C {}

#[cold]
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("cursor contract violated: current() called on an exhausted cursor")
}
