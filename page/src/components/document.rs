//! Root document component for the static export.

use super::App;
use crate::styles::PAGE_CSS;
use crate::SiteConfig;
use leptos::prelude::*;

/// The complete HTML document: head with stylesheet and scene viewer, body with the app.
#[component]
pub fn PageDocument(
    /// Site-level settings
    config: SiteConfig,
) -> impl IntoView {
    let title = config.title.clone();
    let viewer_script = config.scene_viewer_script.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
                <script type="module" src=viewer_script></script>
            </head>
            <body>
                <App config=config />
            </body>
        </html>
    }
}
