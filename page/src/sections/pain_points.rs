use leptos::prelude::*;

use crate::components::{Icon, SectionHeading};
use crate::content::PAIN_POINTS;
use crate::types::ContentItem;

/// "Você já sentiu..." grid: one card per entry of [`PAIN_POINTS`].
#[component]
pub fn PainPoints() -> impl IntoView {
    let cards = PAIN_POINTS
        .iter()
        .map(|&item| view! { <PainCard item=item /> })
        .collect::<Vec<_>>();

    view! {
        <section id="pain-points" class="section section-white">
            <div class="container container-md">
                <SectionHeading
                    title="Você já sentiu que falta algo em seus atendimentos?"
                    subtitle="A falta de uma estrutura clara é o que separa um atendimento amador de uma terapia transformadora."
                />
                <div class="grid grid-2">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn PainCard(item: ContentItem) -> impl IntoView {
    view! {
        <div class="pain-card">
            <div class="pain-icon">
                <Icon kind=item.icon size=24 class="icon icon-red" />
            </div>
            <p class="pain-text">{item.title}</p>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::sections::{is_ascending, positions_of};
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn one_card_per_pain_point_in_order() {
        let html = view! { <PainPoints /> }.to_html();
        let titles: Vec<&str> = PAIN_POINTS.iter().map(|p| p.title).collect();

        assert_eq!(html.matches(r#"class="pain-card""#).count(), PAIN_POINTS.len());
        assert!(is_ascending(&positions_of(&html, &titles)));
    }
}
