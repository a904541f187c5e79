//! Owning collections that hand out cursors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::array::ArrayContainer;
use crate::domain::cursor::BoxedCursor;
use crate::domain::error::DomainResult;
use crate::domain::list::ListContainer;

/// Collection that owns its elements and iterates them in insertion order.
pub trait Container<T> {
    /// Move `item` into the container, after every element already held.
    fn add(&mut self, item: T) -> DomainResult<()>;

    /// Fresh cursor, positioned at the first element.
    fn cursor<'a>(&'a self) -> BoxedCursor<'a, T>
    where
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Storage policy backing a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    /// Fixed capacity, contiguous
    #[default]
    Array,
    /// Unbounded, linked
    List,
}

impl Storage {
    /// Build an empty container for this policy.
    ///
    /// `capacity` only applies to [`Storage::Array`].
    pub fn build<T: 'static>(self, capacity: usize) -> DomainResult<Box<dyn Container<T>>> {
        match self {
            Storage::Array => Ok(Box::new(ArrayContainer::with_capacity(capacity)?)),
            Storage::List => Ok(Box::new(ListContainer::new())),
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::Array => f.write_str("array"),
            Storage::List => f.write_str("list"),
        }
    }
}

impl FromStr for Storage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Storage::Array),
            "list" => Ok(Storage::List),
            other => Err(format!("unknown storage '{other}' (expected array or list)")),
        }
    }
}
