use leptos::prelude::*;

use crate::components::{Button, Icon, IconKind};
use crate::content::{CTA_LABEL, HERO_IMAGE_URL};

/// Headline, product mockup and the main purchase CTA.
#[component]
pub fn Hero(checkout_url: String) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-inner">
                <div class="hero-badge">
                    <Icon kind=IconKind::Zap size=16 />
                    "Upgrade Profissional Imediato"
                </div>
                <h1 class="hero-title">
                    "Receba o Modelo Pronto de "
                    <span class="accent-italic">"Anamnese Cristã"</span>
                    " em PDF + Word com Perguntas Estratégicas e Prompt de IA"
                </h1>
                <p class="hero-description">
                    "A estrutura completa para terapeutas e conselheiros que desejam realizar "
                    "atendimentos profundos, organizados e biblicamente alinhados, economizando "
                    "horas de preparação."
                </p>

                // Product mockup sits above the CTA
                <div class="hero-media">
                    <img src=HERO_IMAGE_URL alt="Kit Anamnese Cristã Profissional" />
                </div>

                <div class="hero-actions">
                    <Button href=checkout_url class="btn-lg">
                        {CTA_LABEL}
                        <Icon kind=IconKind::ArrowRight size=24 class="icon icon-nudge" />
                    </Button>
                    <div class="hero-trust">
                        <span class="trust-item">
                            <Icon kind=IconKind::ShieldCheck size=16 class="icon icon-green" />
                            "Compra Segura"
                        </span>
                        <span class="trust-dot"></span>
                        <span class="trust-item">
                            <Icon kind=IconKind::Clock size=16 class="icon icon-sky" />
                            "Acesso Vitalício"
                        </span>
                    </div>
                </div>
            </div>
        </header>
    }
}
