//! Page sections, one component each, listed in page order.
//!
//! Sections that carry a purchase CTA take the checkout URL as a prop;
//! the rest render constant content only.

mod author;
mod benefits;
mod comparison;
mod deliverables;
mod footer;
mod hero;
mod nav;
mod offer;
mod pain_points;

pub use author::AuthorBio;
pub use benefits::Benefits;
pub use comparison::Comparison;
pub use deliverables::Deliverables;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use offer::Offer;
pub use pain_points::PainPoints;

/// Byte offsets of each needle in `html`, for order assertions.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn positions_of(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in rendered html"))
        })
        .collect()
}

/// Whether offsets are strictly increasing.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn is_ascending(positions: &[usize]) -> bool {
    positions.windows(2).all(|pair| pair[0] < pair[1])
}
