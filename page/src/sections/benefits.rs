use leptos::prelude::*;

use crate::components::{Icon, SectionHeading};
use crate::content::BENEFITS;
use crate::types::ContentItem;

/// Dark band of outcome cards.
#[component]
pub fn Benefits() -> impl IntoView {
    let cards = BENEFITS
        .iter()
        .map(|&item| view! { <BenefitCard item=item /> })
        .collect::<Vec<_>>();

    view! {
        <section id="benefits" class="section section-dark">
            <div class="section-glow"></div>
            <div class="container container-lg raised">
                <SectionHeading
                    title="Resultados Práticos no Seu Consultório"
                    subtitle="Transforme sua investigação inicial em um mapa de cura preciso e organizado."
                    light=true
                />
                <div class="grid grid-3">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(item: ContentItem) -> impl IntoView {
    view! {
        <div class="benefit-card">
            <div class="benefit-icon">
                <Icon kind=item.icon size=28 class="icon icon-white" />
            </div>
            <h3 class="benefit-title">{item.title}</h3>
            <p class="benefit-text">{item.description}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::sections::{is_ascending, positions_of};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_card_per_benefit_in_order() {
        let html = view! { <Benefits /> }.to_html();
        let titles: Vec<&str> = BENEFITS.iter().map(|b| b.title).collect();

        assert_eq!(html.matches(r#"class="benefit-card""#).count(), BENEFITS.len());
        assert!(is_ascending(&positions_of(&html, &titles)));
    }

    #[test]
    fn heading_is_light() {
        let html = view! { <Benefits /> }.to_html();
        assert!(html.contains(r#"class="section-heading centered light""#));
    }
}
