//! Application layer: inventory loading and pipeline assembly
//!
//! This layer orchestrates domain logic and owns file I/O.

pub mod error;
pub mod error_ext;
pub mod inventory;
pub mod pipeline;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use inventory::{fill, load_inventory, load_or_sample, parse_inventory, stock, InventoryFile};
pub use pipeline::{Chain, Pipeline, Stage};
