//! Fixed-capacity, contiguous container.

use tracing::{debug, trace};

use crate::domain::adapter::CursorIter;
use crate::domain::cursor::{exhausted, BoxedCursor, Cursor};
use crate::domain::container::Container;
use crate::domain::error::{DomainError, DomainResult};

/// Capacity used by [`ArrayContainer::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Container with a hard upper bound on the number of elements.
///
/// `capacity` is a logical bound, not an allocation: at most
/// [`DEFAULT_CAPACITY`] slots are reserved up front and the vector grows on
/// demand below the bound. Adding past the bound fails with
/// [`DomainError::CapacityExceeded`].
#[derive(Debug)]
pub struct ArrayContainer<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for ArrayContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayContainer<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::InvalidCapacity(capacity));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Concrete cursor, for statically typed decorator chains.
    pub fn array_cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(&self.items)
    }
}

impl<T> Container<T> for ArrayContainer<T> {
    fn add(&mut self, item: T) -> DomainResult<()> {
        if self.is_full() {
            debug!(capacity = self.capacity, "rejecting add: container full");
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        trace!(len = self.items.len(), "added element");
        Ok(())
    }

    fn cursor<'a>(&'a self) -> BoxedCursor<'a, T>
    where
        T: 'a,
    {
        Box::new(self.array_cursor())
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a, T> IntoIterator for &'a ArrayContainer<T> {
    type Item = &'a T;
    type IntoIter = CursorIter<'a, ArrayCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        CursorIter::new(self.array_cursor())
    }
}

/// Positional cursor over an [`ArrayContainer`].
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self { items, position: 0 }
    }
}

impl<'a, T> Cursor<'a> for ArrayCursor<'a, T> {
    type Item = T;

    fn first(&mut self) {
        self.position = 0;
    }

    fn next(&mut self) {
        if !self.is_done() {
            self.position += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.position >= self.items.len()
    }

    fn current(&self) -> &'a T {
        match self.items.get(self.position) {
            Some(item) => item,
            None => exhausted(),
        }
    }
}
