use leptos::prelude::*;

use crate::components::{Button, Icon, IconKind};
use crate::content::{AUTHOR, AUTHOR_IMAGE_URL, CTA_LABEL};

/// "Quem criou a ferramenta?" portrait, bio, quote and CTA.
#[component]
pub fn AuthorBio(checkout_url: String) -> impl IntoView {
    view! {
        <section id="author" class="section section-white">
            <div class="container container-lg">
                <div class="author-card">
                    <div class="author-media">
                        <div class="author-portrait">
                            <img src=AUTHOR_IMAGE_URL alt=AUTHOR />
                        </div>
                    </div>
                    <div class="author-body">
                        <div class="author-intro">
                            <span class="eyebrow">"Quem criou a ferramenta?"</span>
                            <h2 class="author-name">
                                "Eu sou "
                                <span class="accent-italic">{AUTHOR}</span>
                            </h2>
                        </div>
                        <p class="author-role">
                            "Terapeuta, escritor e criador da Terapia Messiânica Sistêmica."
                        </p>
                        <div class="author-story">
                            <blockquote class="author-quote">
                                <Icon kind=IconKind::Quote size=32 class="icon icon-quote" />
                                <p>
                                    "“Antes de formar pessoas, eu precisei me formar por dentro. "
                                    "Antes de ajudar outros, precisei encarar minhas próprias feridas.”"
                                </p>
                            </blockquote>
                            <p>
                                "Após atender centenas de pessoas, condensei as melhores perguntas e "
                                "técnicas de investigação em um modelo único que agora entrego em suas mãos."
                            </p>
                        </div>
                        <Button href=checkout_url class="btn-rounded">
                            {CTA_LABEL}
                            <Icon kind=IconKind::ArrowRight size=20 />
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
