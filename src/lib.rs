//! Uniform cursor protocol over heterogeneous containers.
//!
//! Containers ([`ArrayContainer`], [`ListContainer`]) own their elements and
//! hand out cursors positioned at the first element. Decorators
//! ([`LoggingCursor`], [`FilterCursor`], [`CountingCursor`]) wrap a cursor
//! and implement the same [`Cursor`] trait, so they stack in any order.
//! [`drive`] consumes a chain and tallies prices; [`CursorIter`] turns any
//! cursor into a native iterator.
//!
//! ```
//! use cursorkit::{drive, ArrayContainer, Container, CursorExt, Priced};
//!
//! let mut parts = ArrayContainer::with_capacity(3)?;
//! for price in [50.0, 250.0, 300.0] {
//!     parts.add(Priced::new("part", price))?;
//! }
//!
//! let mut counted = parts.array_cursor().filtered(200.0).counted();
//! let tally = drive(&mut counted);
//!
//! assert_eq!(tally.total, 550.0);
//! assert_eq!(counted.count(), 2);
//! # Ok::<(), cursorkit::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    drive, drive_with, ArrayContainer, ArrayCursor, BoxedCursor, Component, Container,
    CountingCursor, Cursor, CursorExt, CursorIter, DomainError, DomainResult, Element,
    FilterCursor, Journal, ListContainer, ListCursor, LoggingCursor, Priced, StepCount, Storage,
    Tally,
};
