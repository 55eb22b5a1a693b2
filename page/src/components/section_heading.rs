//! Section title block: heading, optional subtitle, decorative rule.

use leptos::prelude::*;

/// Heading shown at the top of a content section.
///
/// `light` switches to light text for dark backgrounds. `centered` is on by
/// default; turning it off left-aligns the block.
#[component]
pub fn SectionHeading(
    /// Main heading text
    #[prop(into)]
    title: String,
    /// Optional line under the heading
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Light-on-dark colour mode
    #[prop(optional)]
    light: bool,
    /// Centre the block
    #[prop(default = true)]
    centered: bool,
) -> impl IntoView {
    let align = if centered { "centered" } else { "left" };
    let tone = if light { "light" } else { "dark" };
    let wrapper_class = format!("section-heading {} {}", align, tone);

    view! {
        <div class=wrapper_class>
            <h2 class="section-title">{title}</h2>
            {subtitle.map(|text| view! { <p class="section-subtitle">{text}</p> })}
            <div class="section-rule"></div>
        </div>
    }
}
