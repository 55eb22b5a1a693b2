use leptos::prelude::*;

use crate::components::{Button, SectionHeading};
use crate::content::COMPARISON;

/// "Continuar Improvisando" vs. "Conduzir com Estrutura" cards and a closing CTA.
#[component]
pub fn Comparison(checkout_url: String) -> impl IntoView {
    let columns = COMPARISON
        .iter()
        .map(|column| {
            let class = if column.recommended {
                "compare-card recommended"
            } else {
                "compare-card"
            };
            view! {
                <div class=class>
                    <h4 class="compare-label">{column.label}</h4>
                    <p class="compare-text">{column.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="comparison" class="section section-white">
            <div class="container container-xs">
                <SectionHeading title="Qual caminho você escolhe?" subtitle="O improviso ou a estrutura?" />
                <div class="grid grid-2 compare-grid">{columns}</div>
                <Button href=checkout_url class="btn-wide">
                    "QUERO MINHA ANAMNESE CRISTÃ POR R$17"
                </Button>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn structure_column_is_recommended() {
        let html =
            view! { <Comparison checkout_url="https://pay.example.com".to_string() /> }.to_html();

        assert_eq!(html.matches("compare-card").count(), 2);
        assert_eq!(html.matches(r#"class="compare-card recommended""#).count(), 1);

        let improvising = html.find("Continuar Improvisando").expect("left column");
        let structured = html.find("Conduzir com Estrutura").expect("right column");
        assert!(improvising < structured);
    }
}
