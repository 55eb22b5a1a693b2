use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconKind};
use crate::content::BRAND;

/// Fixed top bar: brand, "Garantir Vaga" scroll control, checkout CTA.
#[component]
pub fn Nav(
    /// Checkout link for the "Acessar Agora" button
    checkout_url: String,
    /// Smooth-scroll to the offer section
    on_offer: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="container">
                <div class="nav-inner glass">
                    <div class="nav-brand">
                        <div class="nav-logo">
                            <Icon kind=IconKind::Sparkles size=20 class="icon icon-white" />
                        </div>
                        <span class="nav-title">{BRAND}</span>
                    </div>
                    <div class="nav-actions">
                        <button type="button" class="nav-link" on:click=move |_| on_offer.run(())>
                            "Garantir Vaga"
                        </button>
                        <Button href=checkout_url variant=ButtonVariant::Secondary class="btn-sm">
                            "Acessar Agora"
                        </Button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_nav() -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_offer = Callback::new(|_: ()| {});
            view! { <Nav checkout_url="https://pay.example.com".to_string() on_offer=on_offer /> }
                .to_html()
        })
    }

    #[test]
    fn offer_control_is_a_button() {
        let html = render_nav();
        let control = html.find(r#"class="nav-link""#).expect("nav control");
        let label = html.find("Garantir Vaga").expect("nav label");
        let tag = html[..control].rfind('<').expect("opening tag");

        assert!(html[tag..].starts_with("<button"));
        assert!(control < label);
    }

    #[test]
    fn checkout_cta_uses_secondary_variant() {
        let html = render_nav();
        assert!(html.contains(r#"class="btn btn-secondary btn-sm""#));
        assert_eq!(html.matches(r#"href="https://pay.example.com""#).count(), 1);
        assert!(html.contains("Acessar Agora"));
    }
}
