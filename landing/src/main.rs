// Anamnese Cristã sales page — Leptos 0.8 browser build

use anamnese_page::PageConfig;
use anamnese_page::components::LandingPage;
use anamnese_page::styles::PAGE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <LandingPage config=PageConfig::default() />
    }
}
