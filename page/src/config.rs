//! Site-level settings shared by the page sections.

use chrono::Datelike;

/// Remote 3D scene rendered behind the hero.
pub const DEFAULT_SCENE_URL: &str = "https://prod.spline.design/EF7JOSsHLk16Tlw9/scene.splinecode";

/// ES module providing the `<spline-viewer>` custom element.
pub const DEFAULT_SCENE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer/build/spline-viewer.js";

/// Settings the page displays but does not compute.
///
/// Everything else on the page is literal copy living next to the section
/// that shows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Product name used in the navbar, footer and document title
    pub brand: String,
    /// Document `<title>`
    pub title: String,
    /// URL of the hero's 3D scene asset
    pub scene_url: String,
    /// URL of the script that defines `<spline-viewer>`
    pub scene_viewer_script: String,
    /// Footer tagline
    pub tagline: String,
    /// Year shown in the footer; `None` means the year at render time
    pub pinned_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "EduVerify".into(),
            title: "EduVerify | Smart, Verified Classrooms".into(),
            scene_url: DEFAULT_SCENE_URL.into(),
            scene_viewer_script: DEFAULT_SCENE_VIEWER_SCRIPT.into(),
            tagline: "Built for authentic learning • Privacy-first • Teacher-approved".into(),
            pinned_year: None,
        }
    }
}

impl SiteConfig {
    /// Year for the copyright line.
    pub fn year(&self) -> i32 {
        self.pinned_year.unwrap_or_else(current_year)
    }
}

/// Calendar year in the viewer's local time zone.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_year_wins() {
        let config = SiteConfig {
            pinned_year: Some(2025),
            ..SiteConfig::default()
        };
        assert_eq!(config.year(), 2025);
    }

    #[test]
    fn unpinned_year_follows_clock() {
        assert_eq!(SiteConfig::default().year(), chrono::Local::now().year());
    }
}
