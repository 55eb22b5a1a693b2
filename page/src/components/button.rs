//! Call-to-action button.
//!
//! A [`Button`] is either a link (when it has a URL) or a `<button>` control
//! (when it doesn't). The choice is made once, up front, as a
//! [`ButtonTarget`] value.

use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    /// Amber fill, used for every purchase CTA
    #[default]
    Primary,
    /// Sky-blue fill, used in the nav
    Secondary,
    /// White with a sky border
    Accent,
}

impl ButtonVariant {
    /// The fixed class set for this variant.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Accent => "btn btn-accent",
        }
    }
}

/// What activating a [`Button`] does.
#[derive(Clone)]
pub enum ButtonTarget {
    /// Navigate to this URL in a new browsing context
    Link(String),
    /// Run this action (or nothing, for an inert control)
    Action(Option<Callback<()>>),
}

impl ButtonTarget {
    /// Pick the target for a button. A non-empty URL always wins over the
    /// action.
    pub fn resolve(href: Option<String>, on_click: Option<Callback<()>>) -> Self {
        match href.filter(|url| !url.is_empty()) {
            Some(url) => Self::Link(url),
            None => Self::Action(on_click),
        }
    }

    /// Run the action once. Links are left to the browser.
    pub fn activate(&self) {
        if let Self::Action(Some(action)) = self {
            action.run(());
        }
    }

    /// The link URL, if this is a link.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link(url) => Some(url),
            Self::Action(_) => None,
        }
    }
}

/// Join a variant's classes with per-placement extras.
fn button_classes(variant: ButtonVariant, extra: &str) -> String {
    if extra.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), extra)
    }
}

/// Call-to-action rendered as a link or a clickable control.
///
/// ```rust,ignore
/// view! {
///     <Button href=checkout_url variant=ButtonVariant::Secondary class="btn-sm">
///         "Acessar Agora"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    children: Children,
    /// Visual style
    #[prop(optional)]
    variant: ButtonVariant,
    /// External URL; when set the button renders as a link and `on_click` is ignored
    #[prop(optional, into)]
    href: Option<String>,
    /// Action run on click when there is no URL
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Extra classes for sizing in a specific placement
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = button_classes(variant, class);

    match ButtonTarget::resolve(href, on_click) {
        ButtonTarget::Link(url) => view! {
            <a href=url target="_blank" rel="noopener noreferrer" class=classes>
                <span class="btn-label">{children()}</span>
                <span class="btn-shine"></span>
            </a>
        }
        .into_any(),
        target @ ButtonTarget::Action(_) => view! {
            <button type="button" class=classes on:click=move |_| target.activate()>
                <span class="btn-label">{children()}</span>
                <span class="btn-shine"></span>
            </button>
        }
        .into_any(),
    }
}
