//! Document head for the browser build.
//!
//! `index.html` only carries the trunk link; the title and the scene viewer
//! script come from [`SiteConfig`] so the static export and the browser build
//! cannot drift apart.

use eduverify_page::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::error::{LandingError, Result};

/// Set `<title>` and append the scene viewer `<script type="module">`.
pub fn apply(config: &SiteConfig) -> Result<()> {
    let document = web_sys::window()
        .ok_or(LandingError::NoWindow)?
        .document()
        .ok_or(LandingError::NoDocument)?;

    document.set_title(&config.title);

    let head = document
        .head()
        .ok_or(LandingError::NoHead)?;
    let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_type("module");
    script.set_src(&config.scene_viewer_script);
    head.append_child(&script)?;

    tracing::debug!(src = %config.scene_viewer_script, "scene viewer script requested");
    Ok(())
}
