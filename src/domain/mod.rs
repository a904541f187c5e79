//! Domain layer: cursor protocol, containers, decorators and the driver
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod adapter;
pub mod array;
pub mod container;
pub mod cursor;
pub mod decorators;
pub mod driver;
pub mod element;
pub mod entities;
pub mod error;
pub mod list;

pub use adapter::CursorIter;
pub use array::{ArrayContainer, ArrayCursor, DEFAULT_CAPACITY};
pub use container::{Container, Storage};
pub use cursor::{BoxedCursor, Cursor, CursorExt};
pub use decorators::{
    CountingCursor, FilterCursor, Journal, LoggingCursor, StepCount, DEFAULT_LOG_PREFIX,
};
pub use driver::{drive, drive_with, Tally};
pub use element::{Element, Priced};
pub use entities::Component;
pub use error::{DomainError, DomainResult};
pub use list::{ListContainer, ListCursor};
