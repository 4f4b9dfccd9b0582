// Rust guideline compliant 2026-10-15

//! Category icon table.
//!
//! Every category maps to exactly one icon. The mapping is a `match` over the
//! closed [`Category`] enumeration, so there is no fallback for unknown
//! categories.

use crate::Category;

/// Icon shown next to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Image asset file name for graphical renderers.
    pub asset: &'static str,
    /// Single-glyph stand-in for terminal renderers.
    pub glyph: &'static str,
}

/// Icon for the per-record delete affordance.
pub const DELETE: Icon = Icon {
    asset: "delete.svg",
    glyph: "✗",
};

impl Category {
    /// Returns the icon for this category.
    #[must_use]
    pub fn icon(&self) -> Icon {
        match self {
            Category::Stationary => Icon {
                asset: "ink_pen.svg",
                glyph: "✎",
            },
            Category::Kitchenware => Icon {
                asset: "flatware.svg",
                glyph: "🍴",
            },
            Category::Appliance => Icon {
                asset: "electrical_services.svg",
                glyph: "🔌",
            },
        }
    }
}
