use super::{AiSection, Analytics, Features, Footer, Hero, Navbar, Tests};
use crate::SiteConfig;
use leptos::prelude::*;

/// The whole page, sections in their fixed order.
#[component]
pub fn App(
    /// Site-level settings
    config: SiteConfig,
) -> impl IntoView {
    let year = config.year();
    let SiteConfig {
        brand,
        scene_url,
        tagline,
        ..
    } = config;

    view! {
        <div class="page">
            <Navbar brand=brand.clone() />
            <main>
                <Hero scene_url=scene_url />
                <Features />
                <Tests />
                <AiSection />
                <Analytics />
            </main>
            <Footer brand=brand tagline=tagline year=year />
        </div>
    }
}
