// EduVerify Landing Page — Leptos 0.8 CSR entry
// Developed by The EduVerify Team (c)2025

mod error;
mod head;
mod logging;
mod reveal;

use eduverify_page::components::App;
use eduverify_page::styles::PAGE_CSS;
use eduverify_page::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();

    let config = SiteConfig::default();
    if let Err(err) = head::apply(&config) {
        tracing::warn!(%err, "document head not updated");
    }

    leptos::mount::mount_to_body(move || view! { <Shell config=config /> });
    tracing::info!("landing page mounted");

    // Without the observer nothing is ever hidden, so a failure here only
    // costs the animation.
    if let Err(err) = reveal::install() {
        tracing::warn!(%err, "scroll reveal unavailable");
    }
}

#[component]
fn Shell(config: SiteConfig) -> impl IntoView {
    view! {
        <style>{PAGE_CSS}</style>
        <App config=config />
    }
}
