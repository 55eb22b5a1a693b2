use leptos::prelude::*;

use crate::components::{Icon, SectionHeading};
use crate::content::DELIVERABLES;
use crate::types::ContentItem;

/// "Tudo o que você recebe hoje" grid, one card per kit item.
#[component]
pub fn Deliverables() -> impl IntoView {
    let cards = DELIVERABLES
        .iter()
        .map(|&item| view! { <DeliverableCard item=item /> })
        .collect::<Vec<_>>();

    view! {
        <section id="deliverables" class="section section-mist">
            <div class="container container-lg">
                <SectionHeading
                    title="Tudo o que você recebe hoje"
                    subtitle="Por apenas R$17, você terá acesso imediato a um kit completo de ferramentas."
                />
                <div class="grid grid-3 grid-tight">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn DeliverableCard(item: ContentItem) -> impl IntoView {
    view! {
        <div class="deliverable-card">
            <div class="deliverable-icon">
                <Icon kind=item.icon size=24 class="icon icon-sky" />
            </div>
            <h4 class="deliverable-title">{item.title}</h4>
            <p class="deliverable-text">{item.description}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::sections::{is_ascending, positions_of};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_card_per_deliverable_in_order() {
        let html = view! { <Deliverables /> }.to_html();
        let titles: Vec<&str> = DELIVERABLES.iter().map(|d| d.title).collect();

        assert_eq!(
            html.matches(r#"class="deliverable-card""#).count(),
            DELIVERABLES.len()
        );
        assert!(is_ascending(&positions_of(&html, &titles)));
    }

    #[test]
    fn each_card_draws_its_own_icon() {
        let html = view! { <Deliverables /> }.to_html();
        assert_eq!(html.matches("<svg").count(), DELIVERABLES.len());
    }
}
