//! Small records the page content is built from.
//!
//! Everything here is `Copy` and built from `&'static str`, so the content
//! arrays in [`crate::content`] can be plain `const` items.

use crate::components::IconKind;

/// A static `{icon, title, description}` record rendered as one card.
///
/// Used for pain points, benefits and deliverables. Pain points only carry
/// a headline; their description is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentItem {
    /// Icon shown at the top of the card
    pub icon: IconKind,
    /// Card heading
    pub title: &'static str,
    /// Body copy (empty for headline-only items)
    pub description: &'static str,
}

impl ContentItem {
    /// A card with a heading and body copy.
    pub const fn new(icon: IconKind, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
        }
    }

    /// A headline-only card.
    pub const fn headline(icon: IconKind, title: &'static str) -> Self {
        Self::new(icon, title, "")
    }

    /// Whether the card carries body copy.
    pub const fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// One "value anchor" line in the offer panel: an item and its list price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceLine {
    /// What is included
    pub label: &'static str,
    /// Display price, e.g. `R$ 67,00`
    pub price: &'static str,
}

/// One side of the "which path do you choose" comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonColumn {
    /// Short uppercase label
    pub label: &'static str,
    /// Body copy
    pub description: &'static str,
    /// The column the page steers the reader towards
    pub recommended: bool,
}
