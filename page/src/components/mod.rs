//! Leptos UI components for the sales page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument                (static export only)
//! └── LandingPage
//!     ├── Nav                 Button, scroll-to-offer control
//!     ├── Hero                Button
//!     ├── PainPoints          SectionHeading, one card per pain point
//!     ├── Benefits            SectionHeading, one card per benefit
//!     ├── AuthorBio           Button
//!     ├── Deliverables        SectionHeading, one card per deliverable
//!     ├── Offer               price anchors, Button
//!     ├── Comparison          SectionHeading, Button
//!     └── Footer              current year
//! ```
//!
//! The leaf components ([`Icon`], [`Button`], [`SectionHeading`]) live
//! here; the sections live in [`crate::sections`].

mod button;
mod icon;
mod page;
mod section_heading;

pub use button::{Button, ButtonTarget, ButtonVariant};
pub use icon::{Icon, IconKind};
pub use page::{LandingPage, PageDocument};
pub use section_heading::SectionHeading;
