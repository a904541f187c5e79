//! Drives a cursor chain to completion and aggregates prices.

use std::fmt;

use tracing::debug;

use crate::domain::cursor::Cursor;
use crate::domain::element::Element;

/// Aggregate of one full traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    /// Sum of the prices of all visited elements
    pub total: f64,
    /// Number of visited elements
    pub count: usize,
}

impl Tally {
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total / self.count as f64)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "item" } else { "items" };
        write!(f, "{} {}, total ${}", self.count, noun, self.total)
    }
}

/// Traverse `cursor` from the start and aggregate.
///
/// The cursor is taken by value and dropped on return, releasing the whole
/// decorator chain. Pass `&mut cursor` to keep it, e.g. to read a counting
/// decorator afterwards.
pub fn drive<'a, C>(cursor: C) -> Tally
where
    C: Cursor<'a>,
    C::Item: Element,
{
    drive_with(cursor, |_| {})
}

/// Like [`drive`], calling `visit` on every element before it is tallied.
pub fn drive_with<'a, C, F>(mut cursor: C, mut visit: F) -> Tally
where
    C: Cursor<'a>,
    C::Item: Element,
    F: FnMut(&C::Item),
{
    let mut tally = Tally::default();
    cursor.first();
    while !cursor.is_done() {
        let item = cursor.current();
        debug!(price = item.price(), "{}", item);
        visit(item);
        tally.total += item.price();
        tally.count += 1;
        cursor.next();
    }
    debug!(count = tally.count, total = tally.total, "traversal complete");
    tally
}
