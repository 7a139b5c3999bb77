use super::{BrandMark, Icon, IconKind};
use leptos::prelude::*;

const SECTION_LINKS: [(&str, &str); 4] = [
    ("#features", "Features"),
    ("#tests", "Tests"),
    ("#ai", "AI Detection"),
    ("#analytics", "Analytics"),
];

/// Fixed top bar: brand, in-page links and the two calls to action.
#[component]
pub fn Navbar(
    /// Product name next to the mark
    #[prop(into)]
    brand: String,
) -> impl IntoView {
    view! {
        <header class="navbar" data-section="navbar">
            <div class="container">
                <div class="navbar-shell">
                    <div class="navbar-inner">
                        <a href="#" class="navbar-brand">
                            <BrandMark />
                            <span class="navbar-brand-name">{brand}</span>
                        </a>
                        <nav class="navbar-links">
                            {SECTION_LINKS
                                .iter()
                                .map(|&(href, label)| {
                                    view! { <a href=href class="navbar-link">{label}</a> }
                                })
                                .collect_view()}
                        </nav>
                        <div class="navbar-actions">
                            <a href="#demo" class="navbar-demo">
                                <Icon kind=IconKind::PlayCircle />
                                "Demo"
                            </a>
                            <a href="#get-started" class="btn btn-primary btn-compact">
                                "Get Started"
                                <Icon kind=IconKind::ArrowRight />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}
