//! Unbounded container backed by a generational arena.
//!
//! Nodes live in the arena and are chained head to tail by index, so append
//! is O(1) and a cursor is just an `Option<Index>` into the arena.

use generational_arena::{Arena, Index};
use tracing::trace;

use crate::domain::adapter::CursorIter;
use crate::domain::container::Container;
use crate::domain::cursor::{exhausted, BoxedCursor, Cursor};
use crate::domain::error::DomainResult;

#[derive(Debug)]
struct ListNode<T> {
    value: T,
    next: Option<Index>,
}

/// Singly linked, insertion-ordered container with no capacity limit.
#[derive(Debug)]
pub struct ListContainer<T> {
    arena: Arena<ListNode<T>>,
    head: Option<Index>,
    tail: Option<Index>,
}

impl<T> Default for ListContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListContainer<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Concrete cursor, for statically typed decorator chains.
    pub fn list_cursor(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            position: self.head,
        }
    }

    fn node(&self, idx: Index) -> Option<&ListNode<T>> {
        self.arena.get(idx)
    }
}

impl<T> Container<T> for ListContainer<T> {
    fn add(&mut self, item: T) -> DomainResult<()> {
        let idx = self.arena.insert(ListNode {
            value: item,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        trace!(len = self.arena.len(), "appended element");
        Ok(())
    }

    fn cursor<'a>(&'a self) -> BoxedCursor<'a, T>
    where
        T: 'a,
    {
        Box::new(self.list_cursor())
    }

    fn len(&self) -> usize {
        self.arena.len()
    }
}

impl<'a, T> IntoIterator for &'a ListContainer<T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, ListCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.list_cursor())
    }
}

/// Navigational cursor over a [`ListContainer`].
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    list: &'a ListContainer<T>,
    position: Option<Index>,
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            position: self.position,
        }
    }
}

impl<'a, T> Cursor<'a> for ListCursor<'a, T> {
    type Item = T;

    fn first(&mut self) {
        self.position = self.list.head;
    }

    fn next(&mut self) {
        self.position = self
            .position
            .and_then(|idx| self.list.node(idx))
            .and_then(|node| node.next);
    }

    fn is_done(&self) -> bool {
        self.position.is_none()
    }

    fn current(&self) -> &'a T {
        let list: &'a ListContainer<T> = self.list;
        match self.position.and_then(|idx| list.node(idx)) {
            Some(node) => &node.value,
            None => exhausted(),
        }
    }
}
