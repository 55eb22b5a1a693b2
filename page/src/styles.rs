//! CSS for the sales page.
//!
//! One stylesheet, inlined into the exported document and injected by the
//! browser app. Component classes map one-to-one onto rules here; button
//! variants use the fixed `btn-primary` / `btn-secondary` / `btn-accent`
//! sets returned by [`crate::components::ButtonVariant::class`].
//!
//! The stylesheet is emitted as element text, so it avoids characters that
//! HTML would escape (no child combinators, no ampersands).

/// Complete stylesheet - light sky/amber theme, serif headings.
pub const PAGE_CSS: &str = r#"
:root {
    --sky-50: #f0f9ff;
    --sky-100: #e0f2fe;
    --sky-200: #bae6fd;
    --sky-500: #0ea5e9;
    --sky-600: #0284c7;
    --sky-700: #0369a1;
    --sky-800: #075985;
    --sky-900: #0c4a6e;
    --amber-100: #fef3c7;
    --amber-200: #fde68a;
    --amber-500: #f59e0b;
    --amber-600: #d97706;
    --slate-50: #f8fafc;
    --slate-100: #f1f5f9;
    --slate-200: #e2e8f0;
    --slate-300: #cbd5e1;
    --slate-400: #94a3b8;
    --slate-500: #64748b;
    --slate-600: #475569;
    --slate-700: #334155;
    --slate-800: #1e293b;
    --slate-900: #0f172a;
    --slate-950: #020617;
    --red-50: #fef2f2;
    --red-500: #ef4444;
    --red-600: #dc2626;
    --green-100: #dcfce7;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --font-serif: 'Playfair Display', Georgia, serif;
    --ease: cubic-bezier(0.4, 0, 0.2, 1);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--slate-900);
    background: #fff;
    -webkit-font-smoothing: antialiased;
}

::selection {
    background: var(--amber-100);
    color: #78350f;
}

img {
    max-width: 100%;
    display: block;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    width: 100%;
    margin: 0 auto;
    padding: 0 16px;
    max-width: 1280px;
}

.container-lg { max-width: 1152px; }
.container-md { max-width: 1024px; }
.container-sm { max-width: 896px; }
.container-xs { max-width: 768px; }

.raised {
    position: relative;
    z-index: 10;
}

.glass {
    background: rgba(255, 255, 255, 0.75);
    backdrop-filter: blur(16px);
    -webkit-backdrop-filter: blur(16px);
    border: 1px solid rgba(255, 255, 255, 0.6);
}

.accent-italic {
    color: var(--sky-700);
    font-style: italic;
}

.eyebrow {
    color: var(--sky-600);
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    font-size: 12px;
}

.pill {
    display: inline-block;
    background: var(--sky-100);
    color: var(--sky-700);
    padding: 6px 16px;
    border-radius: 999px;
    font-size: 12px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    margin-bottom: 24px;
}

/* Icons */
.icon { flex-shrink: 0; }
.icon-white { color: #fff; }
.icon-sky { color: var(--sky-600); }
.icon-green { color: var(--green-500); }
.icon-red { color: var(--red-500); }
.icon-quote { color: var(--sky-200); position: absolute; top: 0; left: 0; }
.icon-nudge { transition: transform 0.3s var(--ease); }
.btn:hover .icon-nudge { transform: translateX(4px); }

/* Buttons */
.btn {
    position: relative;
    overflow: hidden;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    padding: 16px 32px;
    border: 0;
    border-radius: 16px;
    font: inherit;
    font-size: 18px;
    font-weight: 700;
    cursor: pointer;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    transition: transform 0.5s var(--ease), background-color 0.5s var(--ease);
}

.btn:hover { transform: scale(1.03); }
.btn:active { transform: scale(0.95); }

.btn-label {
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 8px;
}

.btn-shine {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.1), transparent);
    transform: translateX(-100%);
    transition: transform 1s ease-in-out;
}

.btn:hover .btn-shine { transform: translateX(100%); }

.btn-primary {
    background: var(--amber-600);
    color: #fff;
    box-shadow: 0 20px 25px -5px var(--amber-200);
}
.btn-primary:hover { background: var(--amber-500); }

.btn-secondary {
    background: var(--sky-700);
    color: #fff;
    box-shadow: 0 20px 25px -5px var(--sky-200);
}
.btn-secondary:hover { background: var(--sky-600); }

.btn-accent {
    background: #fff;
    color: var(--sky-900);
    border: 1px solid var(--sky-100);
    box-shadow: none;
}
.btn-accent:hover { background: var(--sky-50); }

.btn-sm { padding: 10px 24px; font-size: 14px; border-radius: 12px; }
.btn-lg { padding: 24px 48px; font-size: 20px; }
.btn-block { width: 100%; border-radius: 16px; }
.btn-rounded { border-radius: 12px; padding: 16px 40px; }
.btn-wide { padding: 16px 64px; }

/* Nav */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 16px 0;
}

.nav-inner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 24px;
    border-radius: 24px;
    box-shadow: 0 25px 50px -12px rgba(226, 232, 240, 0.5);
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.nav-logo {
    background: var(--sky-600);
    padding: 8px;
    border-radius: 12px;
    display: flex;
}

.nav-title {
    font-weight: 800;
    color: var(--slate-800);
    letter-spacing: -0.05em;
    font-size: 20px;
}

.nav-actions {
    display: flex;
    align-items: center;
    gap: 24px;
}

.nav-link {
    background: none;
    border: 0;
    cursor: pointer;
    font: inherit;
    color: var(--slate-600);
    font-weight: 700;
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    transition: color 0.3s;
}
.nav-link:hover { color: var(--sky-600); }

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
    padding: 176px 16px 24px;
    background-image:
        linear-gradient(rgba(14, 165, 233, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(14, 165, 233, 0.05) 1px, transparent 1px);
    background-size: 40px 40px;
}

.hero-glow {
    position: absolute;
    top: 0;
    left: 50%;
    width: 1000px;
    height: 600px;
    transform: translateX(-50%);
    background: rgba(224, 242, 254, 0.3);
    filter: blur(120px);
    border-radius: 999px;
    z-index: -1;
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.hero-inner {
    max-width: 1152px;
    text-align: center;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 32px;
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    background: var(--sky-50);
    color: var(--sky-700);
    padding: 8px 20px;
    border-radius: 999px;
    border: 1px solid var(--sky-100);
    font-size: 12px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    animation: fade-in 0.8s ease-out both;
}

.hero-title {
    margin: 0;
    font-family: var(--font-serif);
    font-weight: 400;
    font-size: clamp(36px, 6vw, 72px);
    line-height: 1.1;
    letter-spacing: -0.05em;
    color: var(--slate-950);
}

.hero-description {
    margin: 0;
    max-width: 768px;
    font-size: clamp(20px, 2.4vw, 24px);
    line-height: 1.6;
    font-weight: 500;
    color: var(--slate-600);
}

.hero-media {
    max-width: 896px;
    overflow: hidden;
    border-radius: 32px;
    border: 12px solid #fff;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.hero-actions {
    padding-top: 32px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 24px;
}

.hero-trust {
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: 14px;
    font-weight: 700;
    color: var(--slate-400);
}

.trust-item {
    display: flex;
    align-items: center;
    gap: 6px;
}

.trust-dot {
    width: 4px;
    height: 4px;
    border-radius: 999px;
    background: var(--slate-300);
}

/* Sections */
.section {
    position: relative;
    overflow: hidden;
    padding: 80px 16px;
}

.section-white { background: #fff; }
.section-mist { background: var(--slate-50); }

.section-dark {
    background: var(--slate-950);
    color: #fff;
}

.section-glow {
    position: absolute;
    top: 50%;
    left: 50%;
    width: 800px;
    height: 800px;
    transform: translate(-50%, -50%);
    background: rgba(14, 165, 233, 0.1);
    filter: blur(150px);
    border-radius: 999px;
}

#pain-points { padding-top: 24px; }

.section-heading {
    margin-bottom: 48px;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.section-heading.centered { text-align: center; align-items: center; }
.section-heading.left { text-align: left; align-items: flex-start; }

.section-title {
    margin: 0;
    font-family: var(--font-serif);
    font-weight: 400;
    font-size: clamp(30px, 5vw, 60px);
    line-height: 1.1;
    letter-spacing: -0.025em;
}

.section-subtitle {
    margin: 0;
    max-width: 768px;
    font-size: clamp(18px, 2vw, 20px);
    font-weight: 500;
    opacity: 0.8;
}

.section-heading.dark .section-title { color: var(--slate-900); }
.section-heading.dark .section-subtitle { color: var(--slate-600); }
.section-heading.light .section-title { color: #fff; }
.section-heading.light .section-subtitle { color: var(--sky-100); }

.section-rule {
    height: 6px;
    width: 96px;
    background: var(--sky-500);
    border-radius: 999px;
}

.grid {
    display: grid;
    gap: 32px;
}

.grid-tight { gap: 24px; }

@media (min-width: 768px) {
    .grid-2 { grid-template-columns: repeat(2, 1fr); }
    .grid-3 { grid-template-columns: repeat(3, 1fr); }
}

/* Pain cards */
.pain-card {
    display: flex;
    align-items: flex-start;
    gap: 16px;
    padding: 32px;
    background: var(--slate-50);
    border: 1px solid transparent;
    border-radius: 32px;
    transition: all 0.5s var(--ease);
}

.pain-card:hover {
    background: #fff;
    border-color: var(--slate-100);
    transform: translateY(-4px);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.pain-icon {
    width: 48px;
    height: 48px;
    flex-shrink: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--red-50);
    border-radius: 16px;
    transition: background-color 0.5s;
}

.pain-card:hover .pain-icon { background: var(--red-500); }
.pain-card:hover .icon-red { color: #fff; }

.pain-text {
    margin: 0;
    color: var(--slate-700);
    font-weight: 700;
    font-size: 18px;
    line-height: 1.4;
}

/* Benefit cards */
.benefit-card {
    height: 100%;
    padding: 40px;
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(24px);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 40px;
    transition: border-color 0.5s;
}

.benefit-card:hover { border-color: rgba(56, 189, 248, 0.5); }

.benefit-icon {
    width: 56px;
    height: 56px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 32px;
    background: var(--sky-500);
    border-radius: 16px;
    box-shadow: 0 10px 15px -3px rgba(14, 165, 233, 0.2);
    transition: transform 0.5s var(--ease);
}

.benefit-card:hover .benefit-icon { transform: scale(1.1) rotate(3deg); }

.benefit-title {
    margin: 0 0 16px;
    font-size: 24px;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.benefit-text {
    margin: 0;
    color: rgba(224, 242, 254, 0.7);
    font-weight: 500;
    line-height: 1.6;
}

/* Author */
.author-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 64px;
    padding: 32px;
    background: var(--slate-50);
    border: 1px solid var(--slate-100);
    border-radius: 48px;
}

@media (min-width: 768px) {
    .author-card { flex-direction: row; padding: 48px; }
    .author-media { width: 45%; }
    .author-body { width: 55%; }
}

.author-portrait {
    overflow: hidden;
    border-radius: 32px;
    transform: rotate(1deg);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.author-body {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.author-intro {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.author-name {
    margin: 0;
    font-family: var(--font-serif);
    font-weight: 400;
    font-size: clamp(36px, 5vw, 60px);
    line-height: 1.2;
    color: var(--slate-900);
}

.author-role {
    margin: 0;
    font-size: 20px;
    font-weight: 700;
    color: var(--sky-800);
}

.author-story {
    display: flex;
    flex-direction: column;
    gap: 24px;
    color: var(--slate-600);
    font-size: 18px;
    font-weight: 500;
    line-height: 1.6;
}

.author-story p { margin: 0; }

.author-quote {
    position: relative;
    margin: 0;
    padding-left: 40px;
    font-style: italic;
    color: var(--slate-700);
}

/* Deliverable cards */
.deliverable-card {
    padding: 32px;
    background: #fff;
    border: 1px solid var(--slate-100);
    border-radius: 32px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 0.5s var(--ease);
}

.deliverable-card:hover { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }

.deliverable-icon {
    width: 56px;
    height: 56px;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 24px;
    background: var(--sky-50);
    border-radius: 16px;
    transition: background-color 0.5s;
}

.deliverable-card:hover .deliverable-icon { background: var(--sky-600); }
.deliverable-card:hover .icon-sky { color: #fff; }

.deliverable-title {
    margin: 0 0 8px;
    font-size: 20px;
    font-weight: 800;
    letter-spacing: -0.025em;
    color: var(--slate-900);
}

.deliverable-text {
    margin: 0;
    font-size: 14px;
    font-weight: 500;
    line-height: 1.6;
    color: var(--slate-500);
}

/* Offer */
.offer-grid-bg {
    position: absolute;
    inset: 0;
    opacity: 0.4;
    z-index: -1;
    background-image:
        linear-gradient(rgba(14, 165, 233, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(14, 165, 233, 0.05) 1px, transparent 1px);
    background-size: 40px 40px;
}

.offer-card {
    display: flex;
    flex-direction: column;
    overflow: hidden;
    background: #fff;
    border: 1px solid var(--slate-100);
    border-radius: 56px;
    box-shadow: 0 50px 100px -20px rgba(0, 0, 0, 0.1);
}

@media (min-width: 1024px) {
    .offer-card { flex-direction: row; }
    .offer-package, .offer-checkout { width: 50%; }
}

.offer-package {
    padding: 40px;
    background: rgba(248, 250, 252, 0.5);
}

.price-anchors {
    display: flex;
    flex-direction: column;
    gap: 12px;
    margin-bottom: 32px;
    padding-bottom: 32px;
    border-bottom: 1px solid var(--slate-200);
}

.price-line {
    display: flex;
    justify-content: space-between;
    font-size: 14px;
    color: var(--slate-400);
}

.struck { text-decoration: line-through; }

.price-total {
    padding-top: 8px;
    font-size: 16px;
    font-weight: 900;
    color: var(--sky-700);
}

.perks {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.perk {
    display: flex;
    align-items: center;
    gap: 16px;
}

.perk-icon {
    display: flex;
    padding: 6px;
    background: var(--green-100);
    border-radius: 999px;
}

.perk .icon-green { color: var(--green-600); }

.perk-text {
    font-weight: 700;
    color: var(--slate-700);
}

.offer-checkout {
    padding: 40px;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    border-left: 1px solid var(--slate-50);
}

.offer-eyebrow {
    margin: 0 0 8px;
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--slate-400);
}

.offer-price {
    display: flex;
    align-items: baseline;
    justify-content: center;
    gap: 4px;
    margin-bottom: 32px;
    font-weight: 900;
}

.offer-currency { font-size: 30px; color: var(--slate-900); }
.offer-whole { font-size: 128px; line-height: 1; letter-spacing: -0.05em; color: var(--sky-700); }
.offer-cents { font-size: 24px; color: var(--slate-400); }

.offer-secure {
    margin-top: 32px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 16px;
}

.secure-badge { height: 40px; opacity: 0.6; }

.secure-note {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 10px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--slate-400);
}

.guarantee {
    margin-top: 48px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 32px;
    padding: 40px 32px;
    border-radius: 40px;
    border-color: var(--sky-100);
    text-align: center;
}

@media (min-width: 768px) {
    .guarantee { flex-direction: row; text-align: left; }
}

.guarantee-icon {
    display: flex;
    padding: 20px;
    background: var(--amber-500);
    border-radius: 24px;
    box-shadow: 0 20px 25px -5px var(--amber-200);
}

.guarantee-title {
    margin: 0;
    font-size: 24px;
    font-weight: 900;
    letter-spacing: -0.025em;
    color: var(--slate-900);
}

.guarantee-text {
    margin: 0;
    max-width: 448px;
    font-weight: 500;
    color: var(--slate-500);
}

/* Comparison */
#comparison { text-align: center; }

.compare-grid {
    text-align: left;
    margin-bottom: 48px;
}

.compare-card {
    padding: 32px;
    border: 1px solid var(--slate-100);
    border-radius: 32px;
    background: rgba(248, 250, 252, 0.5);
}

.compare-card.recommended {
    border: 2px solid var(--sky-100);
    background: var(--sky-50);
    box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
}

.compare-label {
    margin: 0 0 16px;
    font-size: 12px;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--red-600);
}

.compare-card.recommended .compare-label { color: var(--sky-700); }

.compare-text {
    margin: 0;
    font-weight: 500;
    color: var(--slate-600);
}

.compare-card.recommended .compare-text {
    font-weight: 700;
    color: var(--slate-900);
}

/* Footer */
.footer {
    position: relative;
    overflow: hidden;
    padding: 64px 16px;
    background: var(--slate-950);
    color: var(--slate-400);
    text-align: center;
}

.footer-stripe {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: linear-gradient(90deg, var(--sky-500), var(--amber-500), var(--sky-500));
}

.footer-brand {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 12px;
    margin-bottom: 32px;
}

.footer-logo {
    display: flex;
    padding: 8px;
    background: rgba(14, 165, 233, 0.1);
    border-radius: 12px;
}

.footer-title {
    color: #fff;
    font-weight: 900;
    font-size: 30px;
    letter-spacing: -0.05em;
}

.footer-mission {
    max-width: 672px;
    margin: 0 auto 48px;
    font-size: 18px;
    line-height: 1.6;
    opacity: 0.6;
}

.footer-bottom {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 32px;
    padding-top: 48px;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
}

@media (min-width: 768px) {
    .footer-bottom { flex-direction: row; }
}

.footer-copyright {
    margin: 0;
    font-size: 14px;
    font-weight: 500;
}

.footer-links {
    display: flex;
    gap: 32px;
    font-size: 14px;
    font-weight: 900;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.footer-link { transition: color 0.3s; }
.footer-link:hover { color: #38bdf8; }

@media (max-width: 767px) {
    .nav-link { display: none; }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

@media (prefers-reduced-motion: reduce) {
    .hero-glow,
    .hero-badge { animation: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ButtonVariant;

    #[test]
    fn every_variant_has_a_rule() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Accent] {
            let modifier = variant.class().rsplit(' ').next().unwrap_or_default();
            assert!(
                PAGE_CSS.contains(&format!(".{} {{", modifier)),
                "no rule for {modifier}"
            );
        }
    }

    #[test]
    fn animations_have_keyframes() {
        for (rule, name) in [(".hero-glow {", "pulse"), (".hero-badge {", "fade-in")] {
            let start = PAGE_CSS.find(rule).unwrap_or_else(|| panic!("no rule {rule}"));
            let body = &PAGE_CSS[start..start + PAGE_CSS[start..].find('}').unwrap()];

            assert!(body.contains(&format!("animation: {name} ")), "{rule} is not animated");
            assert!(PAGE_CSS.contains(&format!("@keyframes {name} {{")), "no keyframes {name}");
        }
    }

    #[test]
    fn stylesheet_survives_text_escaping() {
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('>'));
        assert!(!PAGE_CSS.contains('&'));
    }
}
