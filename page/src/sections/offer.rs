use leptos::prelude::*;

use crate::components::{Button, Icon, IconKind};
use crate::content::{OFFER_PERKS, OFFER_PRICE, PRICE_ANCHORS, PRICE_TOTAL, SECURE_PAYMENT_BADGE_URL};
use crate::scroll::OFFER_ANCHOR;

/// Pricing panel and guarantee. Carries the `offer` anchor the nav scrolls to.
#[component]
pub fn Offer(checkout_url: String) -> impl IntoView {
    let anchors = PRICE_ANCHORS
        .iter()
        .map(|line| {
            view! {
                <div class="price-line">
                    <span>{line.label}</span>
                    <span class="struck">{line.price}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let perks = OFFER_PERKS
        .iter()
        .map(|&perk| {
            view! {
                <div class="perk">
                    <div class="perk-icon">
                        <Icon kind=IconKind::CheckCircle size=16 class="icon icon-green" />
                    </div>
                    <span class="perk-text">{perk}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let (currency, whole, cents) = OFFER_PRICE;

    view! {
        <section id=OFFER_ANCHOR class="section offer">
            <div class="offer-grid-bg"></div>
            <div class="container container-sm">
                <div class="offer-card">
                    <div class="offer-package">
                        <div class="pill">"Seu Pacote Completo"</div>
                        <div class="price-anchors">
                            {anchors}
                            <div class="price-line price-total">
                                <span>{PRICE_TOTAL.label}</span>
                                <span>{PRICE_TOTAL.price}</span>
                            </div>
                        </div>
                        <div class="perks">{perks}</div>
                    </div>

                    <div class="offer-checkout">
                        <p class="offer-eyebrow">"Hoje por apenas:"</p>
                        <div class="offer-price">
                            <span class="offer-currency">{currency}</span>
                            <span class="offer-whole">{whole}</span>
                            <span class="offer-cents">{cents}</span>
                        </div>
                        <Button href=checkout_url class="btn-block btn-lg">
                            "ADQUIRIR AGORA"
                            <Icon kind=IconKind::ArrowRight size=24 />
                        </Button>
                        <div class="offer-secure">
                            <img src=SECURE_PAYMENT_BADGE_URL alt="Segurança" class="secure-badge" />
                            <div class="secure-note">
                                <Icon kind=IconKind::ShieldEllipsis size=16 />
                                "Ambiente Seguro"
                            </div>
                        </div>
                    </div>
                </div>

                <div class="guarantee glass">
                    <div class="guarantee-icon">
                        <Icon kind=IconKind::ShieldCheck size=40 class="icon icon-white" />
                    </div>
                    <div class="guarantee-body">
                        <p class="guarantee-title">"Garantia Risco Zero (7 dias)"</p>
                        <p class="guarantee-text">
                            "Use o material agora. Se não gostar, peça o reembolso total em um clique. Sem perguntas."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
