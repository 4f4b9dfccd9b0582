// Rust guideline compliant 2026-10-15

//! Core data models for Stockroom.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an item.
///
/// The enumeration is closed: every stored record carries one of these
/// values. Which of them a session accepts is decided by
/// [`crate::CategorySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Pens, paper and other desk supplies.
    Stationary,
    /// Cutlery, crockery and cooking utensils.
    Kitchenware,
    /// Electrical devices.
    Appliance,
}

impl Category {
    /// Every category, in default display order.
    pub const ALL: [Category; 3] = [
        Category::Stationary,
        Category::Kitchenware,
        Category::Appliance,
    ];

    /// Returns the canonical name used in input and output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Stationary => "Stationary",
            Category::Kitchenware => "Kitchenware",
            Category::Appliance => "Appliance",
        }
    }

    /// Looks up a category by its exact canonical name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record that passed validation and is ready to be stored.
///
/// Only [`crate::validate`] produces candidates, so holding one means the
/// name, category and price rules were satisfied against the store it was
/// validated with.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) price: f64,
}

impl Candidate {
    /// Trimmed item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Non-negative price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier assigned by the store, never reused.
    pub id: u64,
    /// Item name, unique ignoring case and surrounding whitespace.
    pub name: String,
    /// Item category.
    pub category: Category,
    /// Item price, never negative.
    pub price: f64,
}

impl Record {
    /// Returns the key used for duplicate detection.
    #[must_use]
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

/// Normalises a name for case- and whitespace-insensitive comparison.
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
