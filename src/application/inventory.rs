//! Inventory loading: TOML component lists into containers

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Component, Container, Storage};

/// On-disk shape of an inventory file: a list of `[[component]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    #[serde(default, rename = "component")]
    pub components: Vec<Component>,
}

/// Parse and validate inventory content.
///
/// `origin` is only used for error messages.
pub fn parse_inventory(content: &str, origin: &Path) -> ApplicationResult<Vec<Component>> {
    let file: InventoryFile =
        toml::from_str(content).map_err(|e| ApplicationError::InvalidInventory {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
    for component in &file.components {
        component.validate()?;
    }
    Ok(file.components)
}

/// Read an inventory file from disk.
#[instrument(level = "debug")]
pub fn load_inventory(path: &Path) -> ApplicationResult<Vec<Component>> {
    let content = std::fs::read_to_string(path).with_path_context("read inventory", path)?;
    let components = parse_inventory(&content, path)?;
    debug!("loaded {} components", components.len());
    Ok(components)
}

/// Inventory from `path` if given, the built-in sample otherwise.
pub fn load_or_sample(path: Option<&Path>) -> ApplicationResult<Vec<Component>> {
    match path {
        Some(path) => load_inventory(path),
        None => Ok(Component::sample_inventory()),
    }
}

/// Move `items` into `container` in order.
///
/// Stops at the first rejected element and returns its error; elements
/// added before it stay in the container.
pub fn fill<T, C>(container: &mut C, items: impl IntoIterator<Item = T>) -> ApplicationResult<usize>
where
    C: Container<T> + ?Sized,
{
    let mut added = 0;
    for item in items {
        container.add(item)?;
        added += 1;
    }
    Ok(added)
}

/// Build a container with the given storage policy and stock it.
#[instrument(level = "debug", skip(components))]
pub fn stock(
    storage: Storage,
    capacity: usize,
    components: Vec<Component>,
) -> ApplicationResult<Box<dyn Container<Component>>> {
    let mut container = storage.build::<Component>(capacity)?;
    let added = fill(container.as_mut(), components)?;
    debug!(%storage, added, "container stocked");
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArrayContainer, DomainError};

    #[test]
    fn given_too_many_items_when_filling_then_reports_capacity() {
        let mut container = ArrayContainer::with_capacity(2).unwrap();

        let result = fill(&mut container, [1, 2, 3]);

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::CapacityExceeded { capacity: 2 }))
        ));
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn given_empty_content_when_parsing_then_empty_inventory() {
        let parts = parse_inventory("", Path::new("empty.toml")).unwrap();
        assert!(parts.is_empty());
    }
}
