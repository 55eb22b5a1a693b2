use leptos::prelude::*;

use crate::components::{Icon, IconKind};
use crate::content::{AUTHOR, BRAND, FOOTER_LINKS};

/// Brand, mission line, copyright and legal links.
#[component]
pub fn Footer(
    /// Copyright year
    year: i32,
) -> impl IntoView {
    let copyright = format!("© {} {}. Desenvolvimento de Elite.", year, AUTHOR);
    let links = FOOTER_LINKS
        .iter()
        .map(|&(label, href)| view! { <a href=href class="footer-link">{label}</a> })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer-stripe"></div>
            <div class="container container-sm raised">
                <div class="footer-brand">
                    <div class="footer-logo">
                        <Icon kind=IconKind::Sparkles size=32 class="icon icon-sky" />
                    </div>
                    <span class="footer-title">{BRAND}</span>
                </div>
                <p class="footer-mission">
                    "Acreditamos que a excelência técnica é uma forma de honrar o Criador através do cuidado com o próximo."
                </p>
                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                    <div class="footer-links">{links}</div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::current_year;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn copyright_uses_given_year() {
        let html = view! { <Footer year=current_year() /> }.to_html();
        assert!(html.contains(&format!("© {} Tony Robert.", current_year())));
    }

    #[test]
    fn renders_legal_links() {
        let html = view! { <Footer year=2026 /> }.to_html();
        assert_eq!(html.matches(r#"class="footer-link""#).count(), FOOTER_LINKS.len());
        assert!(html.contains("Privacidade"));
    }
}
