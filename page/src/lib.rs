//! # eduverify-page
//!
//! Leptos components for the EduVerify landing page, plus a static HTML
//! export of the whole page. The export needs the default `ssr` feature;
//! the browser build depends on this crate with default features off.
//!
//! The same component tree is mounted in the browser by `eduverify-landing`
//! and rendered to a string here with Leptos' `RenderHtml`, which is how the
//! page gets prerendered and how its structure is tested.
//!
//! ## Quick Start
//!
//! ```rust
//! use eduverify_page::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("EduVerify"));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - one Leptos component per page section, plus shared pieces
//! - [`reveal`] - entrance animation parameters and the one-way reveal state
//! - [`config`] - site-level settings (brand, scene asset, pinned year)
//! - [`styles`] - the page stylesheet
//!
//! Developed by The EduVerify Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod reveal;
pub mod styles;

pub use config::SiteConfig;

#[cfg(feature = "ssr")]
use components::PageDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as a static HTML document.
///
/// The document inlines the stylesheet and references the scene viewer
/// script, so it can be served as a single file. Reveal animations stay
/// dormant until the browser entry marks `<body>` as `reveal-ready`, which
/// means a prerendered page is fully visible on its own.
///
/// # Example
///
/// ```rust
/// use eduverify_page::{render_page, SiteConfig};
///
/// let config = SiteConfig {
///     pinned_year: Some(2025),
///     ..SiteConfig::default()
/// };
/// let html = render_page(&config);
/// assert!(html.contains("EduVerify © 2025"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(config: &SiteConfig) -> String {
    let doc = view! { <PageDocument config=config.clone() /> };
    let html = doc.to_html();

    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    /// Text content as it appears in rendered HTML.
    fn escaped(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn pinned(year: i32) -> SiteConfig {
        SiteConfig {
            pinned_year: Some(year),
            ..SiteConfig::default()
        }
    }

    /// Values of `data-section` markers, in document order.
    fn section_markers(html: &str) -> Vec<String> {
        html.split("data-section=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(str::to_string)
            .collect()
    }

    /// Slice of `html` belonging to the section with the given marker.
    fn section<'a>(html: &'a str, name: &str) -> &'a str {
        let marker = format!("data-section=\"{}\"", name);
        let start = html.find(&marker).expect("section marker present");
        let rest = &html[start + marker.len()..];
        let end = rest.find("data-section=\"").unwrap_or(rest.len());
        &rest[..end]
    }

    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut cursor = 0;
        for needle in needles {
            let needle = escaped(needle);
            let found = haystack[cursor..]
                .find(&needle)
                .unwrap_or_else(|| panic!("`{}` missing or out of order", needle));
            cursor += found + needle.len();
        }
    }

    #[test]
    fn renders_complete_document() {
        let html = render_page(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>EduVerify"));
        assert!(html.contains("--reveal-duration"));
    }

    #[test]
    fn sections_render_once_in_fixed_order() {
        let html = render_page(&SiteConfig::default());

        assert_eq!(
            section_markers(&html),
            vec!["navbar", "hero", "features", "tests", "ai", "analytics", "footer"]
        );
    }

    #[test]
    fn navbar_links_to_every_anchor() {
        let html = render_page(&SiteConfig::default());
        let navbar = section(&html, "navbar");

        for anchor in [
            "#features",
            "#tests",
            "#ai",
            "#analytics",
            "#demo",
            "#get-started",
        ] {
            assert!(
                navbar.contains(&format!("href=\"{}\"", anchor)),
                "navbar is missing {}",
                anchor
            );
        }
    }

    #[test]
    fn anchors_resolve_to_sections() {
        let html = render_page(&SiteConfig::default());

        for id in ["features", "tests", "ai", "analytics"] {
            assert_eq!(html.matches(&format!("id=\"{}\"", id)).count(), 1);
        }
    }

    #[test]
    fn hero_embeds_scene_and_badges() {
        let config = SiteConfig::default();
        let html = render_page(&config);
        let hero = section(&html, "hero");

        assert!(hero.contains("<spline-viewer"));
        assert!(hero.contains(&config.scene_url));
        assert_in_order(
            hero,
            &[
                "1:1 & Group Classes",
                "Verified Submissions",
                "AI-Use Detection",
                "Actionable Insights",
            ],
        );
    }

    #[test]
    fn features_render_three_cards_in_order() {
        let html = render_page(&SiteConfig::default());
        let features = section(&html, "features");

        assert_eq!(features.matches("class=\"feature-card").count(), 3);
        assert_in_order(
            features,
            &[
                "Live, Verified Classrooms",
                "Role-based access for teachers and students",
                "Internal Plagiarism Check",
                "Cross-class & lifetime duplicates",
                "AI Use Detection",
                "Privacy-first, on-region processing",
            ],
        );
    }

    #[test]
    fn test_modes_list_their_bullets() {
        let html = render_page(&SiteConfig::default());
        let tests = section(&html, "tests");

        assert_in_order(
            tests,
            &[
                "Proctored Exam",
                "Camera & mic optional policies",
                "Randomized question pools",
                "Live proctor dashboard",
                "Open Assignment",
                "Template-based rubrics",
                "Similarity clusters across cohort",
                "Versioned submissions & feedback",
            ],
        );
        assert_eq!(tests.matches("class=\"mode-bullet\"").count(), 6);
    }

    #[test]
    fn analytics_tiles_show_literal_values() {
        let html = render_page(&SiteConfig::default());
        let analytics = section(&html, "analytics");

        assert_in_order(
            analytics,
            &[
                "Cohort Overview",
                "32 Students",
                "Flags & Similarities",
                "6 Alerts",
                "Average Score",
                "86%",
                "Plagiarism Network Graph",
            ],
        );
    }

    #[test]
    fn ai_section_shows_sample_metrics() {
        let html = render_page(&SiteConfig::default());
        let ai = section(&html, "ai");

        assert_in_order(
            ai,
            &[
                "Explainable signals",
                "Calibrated scoring",
                "Privacy-first",
                "Human-in-the-loop",
                "Sample Essay Snippet",
                "+12%",
                "-7%",
                "89%",
                "Medium",
            ],
        );
    }

    #[test]
    fn footer_shows_pinned_year() {
        let html = render_page(&pinned(2025));
        let footer = section(&html, "footer");

        assert!(footer.contains("EduVerify © 2025"));
        assert!(footer.contains("Built for authentic learning • Privacy-first • Teacher-approved"));
    }

    #[test]
    fn footer_defaults_to_current_year() {
        let html = render_page(&SiteConfig::default());
        let year = chrono::Local::now().year();

        assert!(section(&html, "footer").contains(&format!("EduVerify © {}", year)));
    }

    #[test]
    fn section_copy_renders_verbatim() {
        let html = render_page(&SiteConfig::default());

        let copy = [
            (
                "hero",
                "Live collaboration, secure assessments, AI authenticity checks and internal plagiarism detection — all in one modern learning hub.",
            ),
            (
                "features",
                "Built for modern education: verified assessments, transparent progress, and AI-assisted insights that enhance—not replace—learning.",
            ),
            (
                "tests",
                "Choose between flexible assignments and secure proctored exams—both with deep analysis for teachers.",
            ),
            (
                "ai",
                "Balanced detection that explains its reasoning, highlights risky segments, and gives teachers review controls to avoid over-flagging genuine work.",
            ),
        ];
        for (name, text) in copy {
            assert!(
                section(&html, name).contains(&escaped(text)),
                "{} copy missing: {}",
                name,
                text
            );
        }
    }

    #[test]
    fn embeds_one_scene_and_loads_its_viewer() {
        let config = SiteConfig::default();
        let html = render_page(&config);
        let (head, body) = html.split_at(html.find("<body").expect("body present"));

        assert_eq!(body.matches("<spline-viewer").count(), 1);
        assert!(body.contains(&format!(
            "<spline-viewer url=\"{}\" loading-anim-type=\"none\">",
            config.scene_url
        )));
        assert_eq!(html.matches("<script").count(), 1);
        assert!(head.contains(&format!(
            "<script type=\"module\" src=\"{}\"></script>",
            config.scene_viewer_script
        )));
    }

    #[test]
    fn reveal_targets_start_without_revealed_class() {
        let html = render_page(&SiteConfig::default());
        let body = &html[html.find("<body").expect("body present")..];

        assert!(body.matches("data-reveal=").count() > 10);
        assert!(!body.contains(reveal::REVEALED_CLASS));
        assert!(!body.contains(reveal::READY_CLASS));
    }
}
