//! Page composer and document shell.

use leptos::prelude::*;

use crate::PageConfig;
use crate::content::{META_DESCRIPTION, PAGE_TITLE};
use crate::scroll::{BrowserViewport, offer_scroll_action};
use crate::sections::{
    AuthorBio, Benefits, Comparison, Deliverables, Footer, Hero, Nav, Offer, PainPoints,
};
use crate::styles::PAGE_CSS;

/// The whole sales page, nav through footer, in fixed order.
///
/// Every checkout CTA gets `config.checkout_url`; the nav gets the one
/// smooth-scroll action.
#[component]
pub fn LandingPage(
    /// Checkout URL and footer year
    config: PageConfig,
    /// Nav scroll action (default: scroll the browser document to the offer)
    #[prop(optional)]
    on_offer: Option<Callback<()>>,
) -> impl IntoView {
    let PageConfig { checkout_url, year } = config;
    let on_offer = on_offer.unwrap_or_else(|| offer_scroll_action(BrowserViewport));

    view! {
        <div class="page">
            <Nav checkout_url=checkout_url.clone() on_offer=on_offer />
            <main>
                <Hero checkout_url=checkout_url.clone() />
                <PainPoints />
                <Benefits />
                <AuthorBio checkout_url=checkout_url.clone() />
                <Deliverables />
                <Offer checkout_url=checkout_url.clone() />
                <Comparison checkout_url=checkout_url />
            </main>
            <Footer year=year />
        </div>
    }
}

/// The complete HTML document for static export
#[component]
pub fn PageDocument(config: PageConfig) -> impl IntoView {
    view! {
        <html lang="pt-BR">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=META_DESCRIPTION />
                <title>{PAGE_TITLE}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <LandingPage config=config />
            </body>
        </html>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::scroll::OFFER_ANCHOR;
    use crate::scroll::tests::FakeViewport;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn nav_action_scrolls_the_composed_page_to_offer() {
        let owner = Owner::new();
        owner.with(|| {
            let viewport = FakeViewport::with_ids(&[OFFER_ANCHOR]);
            let on_offer = offer_scroll_action(viewport.clone());
            let html = view! { <LandingPage config=PageConfig::default() on_offer=on_offer /> }
                .to_html();

            // the anchor the action targets is the one the page renders
            assert_eq!(html.matches(&format!(r#"id="{OFFER_ANCHOR}""#)).count(), 1);
            assert!(html.contains("Garantir Vaga"));

            on_offer.run(());
            assert_eq!(viewport.scrolled(), vec![OFFER_ANCHOR.to_string()]);
        });
    }

    #[test]
    fn default_action_is_supplied() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <LandingPage config=PageConfig::default() /> }.to_html());
        assert!(html.contains(r#"class="nav-link""#));
    }
}
