//! Domain entities: hardware components used as traversal elements

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::element::Element;
use crate::domain::error::{DomainError, DomainResult};

/// A priced PC part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Component {
    Cpu {
        manufacturer: String,
        price: f64,
        cores: u32,
        /// Base clock in GHz
        frequency: f64,
    },
    Gpu {
        manufacturer: String,
        price: f64,
        /// Video memory in GB
        memory: u32,
        memory_type: String,
    },
    Ram {
        manufacturer: String,
        price: f64,
        /// Module size in GB
        capacity: u32,
        ram_type: String,
    },
}

impl Component {
    pub fn cpu(manufacturer: &str, price: f64, cores: u32, frequency: f64) -> Self {
        Component::Cpu {
            manufacturer: manufacturer.to_string(),
            price,
            cores,
            frequency,
        }
    }

    pub fn gpu(manufacturer: &str, price: f64, memory: u32, memory_type: &str) -> Self {
        Component::Gpu {
            manufacturer: manufacturer.to_string(),
            price,
            memory,
            memory_type: memory_type.to_string(),
        }
    }

    pub fn ram(manufacturer: &str, price: f64, capacity: u32, ram_type: &str) -> Self {
        Component::Ram {
            manufacturer: manufacturer.to_string(),
            price,
            capacity,
            ram_type: ram_type.to_string(),
        }
    }

    pub fn manufacturer(&self) -> &str {
        match self {
            Component::Cpu { manufacturer, .. }
            | Component::Gpu { manufacturer, .. }
            | Component::Ram { manufacturer, .. } => manufacturer,
        }
    }

    /// Prices must be finite and non-negative.
    pub fn validate(&self) -> DomainResult<()> {
        let price = self.price();
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice {
                name: self.manufacturer().to_string(),
                price,
            });
        }
        Ok(())
    }

    /// Fixed inventory used when no inventory file is configured.
    pub fn sample_inventory() -> Vec<Component> {
        vec![
            Component::cpu("Intel", 289.0, 6, 3.5),
            Component::gpu("NVIDIA", 459.0, 8, "GDDR6"),
            Component::ram("Kingston", 94.0, 16, "DDR4"),
            Component::cpu("AMD", 215.0, 8, 4.2),
            Component::ram("Corsair", 118.0, 32, "DDR5"),
        ]
    }
}

impl Element for Component {
    fn price(&self) -> f64 {
        match self {
            Component::Cpu { price, .. }
            | Component::Gpu { price, .. }
            | Component::Ram { price, .. } => *price,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Cpu {
                manufacturer,
                price,
                cores,
                frequency,
            } => write!(
                f,
                "CPU: {manufacturer}, {cores} cores, {frequency} GHz, ${price}"
            ),
            Component::Gpu {
                manufacturer,
                price,
                memory,
                memory_type,
            } => write!(f, "GPU: {manufacturer}, {memory}GB {memory_type}, ${price}"),
            Component::Ram {
                manufacturer,
                price,
                capacity,
                ram_type,
            } => write!(f, "RAM: {manufacturer}, {capacity}GB {ram_type}, ${price}"),
        }
    }
}
