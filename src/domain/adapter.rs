//! Bridge from the cursor protocol to native `for` loops.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::domain::cursor::Cursor;

/// Begin/end style adapter over a cursor.
///
/// Construction calls `first()` and caches whether the cursor is done. Each
/// step yields `current()`, then advances and refreshes the cached state.
/// Two adapters compare equal when their cached done states match, so a live
/// adapter differs from [`CursorIter::end`] exactly while elements remain.
#[derive(Debug)]
pub struct CursorIter<'a, C> {
    cursor: Option<C>,
    done: bool,
    _marker: PhantomData<&'a ()>,
}

impl<'a, C: Cursor<'a>> CursorIter<'a, C> {
    pub fn new(mut cursor: C) -> Self {
        cursor.first();
        let done = cursor.is_done();
        Self {
            cursor: Some(cursor),
            done,
            _marker: PhantomData,
        }
    }
}

impl<'a, C> CursorIter<'a, C> {
    /// Sentinel marking the end of any sequence.
    pub fn end() -> Self {
        Self {
            cursor: None,
            done: true,
            _marker: PhantomData,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Give back the wrapped cursor; `None` for the end sentinel.
    pub fn into_inner(self) -> Option<C> {
        self.cursor
    }
}

impl<C> PartialEq for CursorIter<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done
    }
}

impl<'a, C: Cursor<'a>> Iterator for CursorIter<'a, C> {
    type Item = &'a C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let cursor = self.cursor.as_mut()?;
        let item = cursor.current();
        cursor.next();
        self.done = cursor.is_done();
        Some(item)
    }
}

impl<'a, C: Cursor<'a>> FusedIterator for CursorIter<'a, C> {}
