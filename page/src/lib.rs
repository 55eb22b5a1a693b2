//! # anamnese-page
//!
//! Leptos components and a static HTML renderer for the *Anamnese Cristã*
//! sales page.
//!
//! The same component tree serves two surfaces:
//!
//! - **Static export** - [`render_page`] turns the composed page into a
//!   complete, self-contained HTML document (inline CSS, no JavaScript).
//! - **Browser app** - the `landing` crate mounts [`components::LandingPage`]
//!   client-side, where the nav smooth-scroll action is live.
//!
//! ## Quick Start
//!
//! ```rust
//! use anamnese_page::{render_page, PageConfig};
//!
//! let html = render_page(&PageConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="offer""#));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - the static copy: pain points, benefits, deliverables, offer
//! - [`types`] - small records the content is built from
//! - [`components`] - Icon, Button, SectionHeading and the page composer
//! - [`sections`] - one component per page section, in page order
//! - [`scroll`] - the smooth-scroll-to-anchor action
//! - [`styles`] - the page stylesheet
//!
//! Every call-to-action on a page shares one checkout URL, carried by
//! [`PageConfig`].

#![warn(missing_docs)]

pub mod components;
pub mod content;
mod error;
pub mod scroll;
pub mod sections;
pub mod styles;
pub mod types;

pub use content::CHECKOUT_URL;
pub use error::PageError;

use chrono::Datelike;
use url::Url;

/// Render-time settings shared by every section of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    /// The one checkout link every call-to-action navigates to.
    pub checkout_url: String,
    /// Year printed in the footer copyright.
    pub year: i32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            checkout_url: CHECKOUT_URL.to_string(),
            year: current_year(),
        }
    }
}

impl PageConfig {
    /// Replace the checkout URL after checking it is an absolute http(s) link.
    pub fn with_checkout_url(mut self, url: &str) -> Result<Self, PageError> {
        self.checkout_url = validate_checkout_url(url)?;
        Ok(self)
    }

    /// Pin the footer year (the default is the current calendar year).
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Check that `raw` is an absolute `http`/`https` URL and return it in
/// normalised form.
///
/// Spellings without `//`, such as `https:pay.example.com/1`, come back as
/// `https://pay.example.com/1`; a browser would read the raw form as a
/// same-site path.
pub fn validate_checkout_url(raw: &str) -> Result<String, PageError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|e| PageError::InvalidCheckoutUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed.into()),
        other => Err(PageError::UnsupportedScheme {
            url: trimmed.to_string(),
            scheme: other.to_string(),
        }),
    }
}

/// Render the complete HTML document for the sales page.
///
/// The result starts with `<!DOCTYPE html>` and carries its stylesheet
/// inline, so it can be served as a single file.
#[cfg(feature = "ssr")]
pub fn render_page(config: &PageConfig) -> String {
    use components::PageDocument;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    let html = owner.with(|| view! { <PageDocument config=config.clone() /> }.to_html());

    tracing::debug!(bytes = html.len(), checkout = %config.checkout_url, "rendered page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the composed page body (nav through footer), without the
/// `<html>` shell.
#[cfg(feature = "ssr")]
pub fn render_body(config: &PageConfig) -> String {
    use components::LandingPage;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| view! { <LandingPage config=config.clone() /> }.to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_full_document() {
        let html = render_page(&PageConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(r#"lang="pt-BR""#));
        assert!(html.contains("<style>"));
        assert!(html.contains("Anamnese Cristã"));
    }

    #[test]
    fn body_has_no_document_shell() {
        let html = render_body(&PageConfig::default());

        assert!(!html.contains("<html"));
        assert!(!html.contains("<style>"));
        assert!(html.contains("<nav"));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn default_config_uses_constant_checkout() {
        let config = PageConfig::default();
        assert_eq!(config.checkout_url, CHECKOUT_URL);
        assert_eq!(config.year, current_year());
    }

    #[test]
    fn every_cta_targets_the_configured_checkout() {
        let config = PageConfig::default()
            .with_checkout_url("https://checkout.example.com/abc")
            .unwrap();
        let html = render_body(&config);

        // nav, hero, author bio, offer, comparison
        assert_eq!(html.matches(r#"href="https://checkout.example.com/abc""#).count(), 5);
        assert!(!html.contains(CHECKOUT_URL));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render_body(&PageConfig::default());
        let markers = [
            "<nav",
            r#"class="hero""#,
            r#"id="pain-points""#,
            r#"id="benefits""#,
            r#"id="author""#,
            r#"id="deliverables""#,
            r#"id="offer""#,
            r#"id="comparison""#,
            "<footer",
        ];

        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn offer_anchor_is_unique() {
        let html = render_body(&PageConfig::default());
        assert_eq!(html.matches(r#"id="offer""#).count(), 1);
    }

    #[test]
    fn footer_year_is_current_year() {
        let html = render_body(&PageConfig::default());
        assert!(html.contains(&format!("© {} Tony Robert", current_year())));
    }

    #[test]
    fn pinned_year_reaches_footer() {
        let html = render_body(&PageConfig::default().with_year(2031));
        assert!(html.contains("© 2031 Tony Robert"));
    }

    #[test]
    fn rejects_relative_checkout_url() {
        let err = validate_checkout_url("/checkout").unwrap_err();
        assert!(matches!(err, PageError::InvalidCheckoutUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = validate_checkout_url("ftp://files.example.com/kit").unwrap_err();
        match err {
            PageError::UnsupportedScheme { scheme, .. } => assert_eq!(scheme, "ftp"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn normalises_scheme_relative_checkout_url() {
        let url = validate_checkout_url("https:pay.example.com/1").unwrap();
        assert_eq!(url, "https://pay.example.com/1");

        let config = PageConfig::default()
            .with_checkout_url("https:pay.example.com/1")
            .unwrap();
        let html = render_body(&config);
        assert_eq!(html.matches(r#"href="https://pay.example.com/1""#).count(), 5);
        assert!(!html.contains(r#"href="https:pay.example.com"#));
    }

    #[test]
    fn accepts_and_trims_https_url() {
        let url = validate_checkout_url("  https://pay.example.com/1  ").unwrap();
        assert_eq!(url, "https://pay.example.com/1");
    }
}
