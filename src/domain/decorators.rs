//! Cursor decorators: logging, price filtering and step counting.
//!
//! Each decorator owns exactly one inner cursor and implements [`Cursor`]
//! itself, so decorators nest freely. Dropping the outermost one drops the
//! whole chain; elements stay with their container.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::{info, trace};

use crate::domain::cursor::Cursor;
use crate::domain::element::Element;

/// Prefix used by [`LoggingCursor::new`].
pub const DEFAULT_LOG_PREFIX: &str = "[LOG] access:";

/// Shared record of logged element accesses.
///
/// Clones share the same storage, so a caller can keep a handle after the
/// logging cursor has been boxed or moved into a chain.
///
/// Every `current()` read appends one line, including reads a filter makes
/// while skipping rejects, so an unbounded journal grows with the traversal
/// until drained with [`Journal::take`]. Long-lived chains should use
/// [`Journal::bounded`], which keeps only the most recent lines.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    lines: Rc<RefCell<VecDeque<String>>>,
    limit: Option<usize>,
}

impl Journal {
    /// Journal that retains at most `limit` lines, dropping the oldest first.
    pub fn bounded(limit: usize) -> Self {
        Self {
            lines: Rc::default(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn push(&self, line: String) {
        let mut lines = self.lines.borrow_mut();
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while lines.len() >= limit {
                lines.pop_front();
            }
        }
        lines.push_back(line);
    }

    pub fn entries(&self) -> Vec<String> {
        self.lines.borrow().iter().cloned().collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        Vec::from(std::mem::take(&mut *self.lines.borrow_mut()))
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

/// Records every element read through [`Cursor::current`].
///
/// Traversal itself is untouched: same length, same order, same values.
#[derive(Debug)]
pub struct LoggingCursor<C> {
    inner: C,
    prefix: String,
    journal: Journal,
}

impl<C> LoggingCursor<C> {
    pub fn new(inner: C) -> Self {
        Self::with_prefix(inner, DEFAULT_LOG_PREFIX)
    }

    pub fn with_prefix(inner: C, prefix: impl Into<String>) -> Self {
        Self::with_journal(inner, prefix, Journal::default())
    }

    /// Log into an existing journal, e.g. a [`Journal::bounded`] one.
    pub fn with_journal(inner: C, prefix: impl Into<String>, journal: Journal) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            journal,
        }
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<'a, C> Cursor<'a> for LoggingCursor<C>
where
    C: Cursor<'a>,
    C::Item: fmt::Display,
{
    type Item = C::Item;

    fn first(&mut self) {
        self.inner.first()
    }

    fn next(&mut self) {
        self.inner.next()
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> &'a Self::Item {
        let current = self.inner.current();
        let line = format!("{} {}", self.prefix, current);
        info!(target: "cursorkit::access", "{}", line);
        self.journal.push(line);
        current
    }
}

/// Hides every element priced below a minimum.
///
/// Invariant: whenever the cursor is not done, the current element satisfies
/// `price() >= min_price`. It is re-established on construction and after
/// every `first()` and `next()` by advancing the inner cursor past rejects.
#[derive(Debug)]
pub struct FilterCursor<C> {
    inner: C,
    min_price: f64,
}

impl<'a, C> FilterCursor<C>
where
    C: Cursor<'a>,
    C::Item: Element,
{
    pub fn new(inner: C, min_price: f64) -> Self {
        let mut cursor = Self { inner, min_price };
        cursor.skip_rejected();
        cursor
    }

    fn skip_rejected(&mut self) {
        while !self.inner.is_done() && self.inner.current().price() < self.min_price {
            trace!(min_price = self.min_price, "skipping element below threshold");
            self.inner.next();
        }
    }
}

impl<C> FilterCursor<C> {
    pub fn min_price(&self) -> f64 {
        self.min_price
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<'a, C> Cursor<'a> for FilterCursor<C>
where
    C: Cursor<'a>,
    C::Item: Element,
{
    type Item = C::Item;

    fn first(&mut self) {
        self.inner.first();
        self.skip_rejected();
    }

    fn next(&mut self) {
        self.inner.next();
        self.skip_rejected();
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> &'a Self::Item {
        self.inner.current()
    }
}

/// Read handle on a [`CountingCursor`]'s step count.
#[derive(Debug, Clone, Default)]
pub struct StepCount(Rc<Cell<usize>>);

impl StepCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn set(&self, value: usize) {
        self.0.set(value)
    }
}

/// Counts how many elements were advanced past since the last `first()`.
///
/// Advancing an already exhausted inner cursor does not count.
#[derive(Debug)]
pub struct CountingCursor<C> {
    inner: C,
    steps: StepCount,
}

impl<C> CountingCursor<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            steps: StepCount::default(),
        }
    }

    pub fn count(&self) -> usize {
        self.steps.get()
    }

    /// Handle that keeps reporting the count after the cursor is moved away.
    pub fn steps(&self) -> StepCount {
        self.steps.clone()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<'a, C: Cursor<'a>> Cursor<'a> for CountingCursor<C> {
    type Item = C::Item;

    fn first(&mut self) {
        self.inner.first();
        self.steps.set(0);
    }

    fn next(&mut self) {
        if self.inner.is_done() {
            return;
        }
        self.inner.next();
        self.steps.set(self.steps.get() + 1);
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn current(&self) -> &'a Self::Item {
        self.inner.current()
    }
}
