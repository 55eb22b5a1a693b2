//! Inline SVG icon component.
//!
//! Icons are stroke-based line icons on a 24x24 grid (Lucide style). Each
//! [`IconKind`] maps to fixed path data; size and class are parameters of
//! [`Icon`], so callers never patch an icon element after the fact.

use leptos::prelude::*;

/// Every icon the page uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Circle with a tick
    CheckCircle,
    /// Circle with a cross
    XCircle,
    /// Right arrow
    ArrowRight,
    /// Page with text lines
    FileText,
    /// Video camera
    Video,
    /// Robot head
    Bot,
    /// Two people
    Users,
    /// Shield with a tick
    ShieldCheck,
    /// Shield with an ellipsis
    ShieldEllipsis,
    /// Open book
    BookOpen,
    /// Four-point sparkles
    Sparkles,
    /// Quotation marks
    Quote,
    /// Clock face
    Clock,
    /// Rosette
    Award,
    /// Lightning bolt
    Zap,
}

// Shared outlines
const CIRCLE: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0Z";
const SHIELD: &str = "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z";
const TICK: &str = "m9 12 2 2 4-4";

impl IconKind {
    /// SVG path data (`d` attributes) for this icon.
    pub const fn paths(self) -> &'static [&'static str] {
        match self {
            Self::CheckCircle => &[CIRCLE, TICK],
            Self::XCircle => &[CIRCLE, "m15 9-6 6", "m9 9 6 6"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::FileText => &[
                "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
                "M14 2v4a2 2 0 0 0 2 2h4",
                "M10 9H8",
                "M16 13H8",
                "M16 17H8",
            ],
            Self::Video => &[
                "m16 13 5.223 3.482a.5.5 0 0 0 .777-.416V7.87a.5.5 0 0 0-.752-.432L16 10.5",
                "M4 6h10a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2Z",
            ],
            Self::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2Z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Self::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0Z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Self::ShieldCheck => &[SHIELD, TICK],
            Self::ShieldEllipsis => &[SHIELD, "M8 12h.01", "M12 12h.01", "M16 12h.01"],
            Self::BookOpen => &[
                "M12 7v14",
                "M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z",
            ],
            Self::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
            Self::Quote => &[
                "M16 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z",
                "M5 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z",
            ],
            Self::Clock => &[CIRCLE, "M12 6v6l4 2"],
            Self::Award => &[
                "m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526",
                "M18 8a6 6 0 1 1-12 0 6 6 0 0 1 12 0Z",
            ],
            Self::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
        }
    }
}

/// Renders an inline SVG icon.
///
/// # Props
///
/// * `kind` - which icon to draw
/// * `size` - width and height in pixels (default: 24)
/// * `class` - CSS classes for colour and hover effects (default: "icon")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon kind=IconKind::ArrowRight size=20 class="icon icon-nudge" /> }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw
    kind: IconKind,
    /// Width and height in pixels
    #[prop(default = 24)]
    size: u32,
    /// CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let size = size.to_string();
    let paths = kind
        .paths()
        .iter()
        .map(|&d| view! { <path d=d></path> })
        .collect::<Vec<_>>();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_one_path_per_segment() {
        let html = view! { <Icon kind=IconKind::XCircle /> }.to_html();
        assert_eq!(html.matches("<path").count(), IconKind::XCircle.paths().len());
    }

    #[test]
    fn size_and_class_are_parameters() {
        let html = view! { <Icon kind=IconKind::Bot size=28 class="icon icon-on-accent" /> }.to_html();
        assert!(html.contains(r#"width="28""#));
        assert!(html.contains(r#"height="28""#));
        assert!(html.contains(r#"class="icon icon-on-accent""#));
    }

    #[test]
    fn defaults_to_24px() {
        let html = view! { <Icon kind=IconKind::Zap /> }.to_html();
        assert!(html.contains(r#"width="24""#));
        assert!(html.contains(r#"class="icon""#));
    }
}
