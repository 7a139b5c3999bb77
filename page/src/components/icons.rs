//! Inline SVG icons (Lucide outline style, 24px grid).

use leptos::prelude::*;

/// Icons used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    /// Brand mark
    GraduationCap,
    /// People / classes
    Users,
    /// Verification / security
    ShieldCheck,
    /// AI
    Brain,
    /// Charts / insights
    BarChart,
    /// Bullet check mark
    CheckCircle,
    /// Eyebrow sparkle
    Sparkles,
    /// Call-to-action arrow
    ArrowRight,
    /// Demo link
    PlayCircle,
}

const CIRCLE: &str = "M12 22c5.523 0 10-4.477 10-10S17.523 2 12 2 2 6.477 2 12s4.477 10 10 10z";

impl IconKind {
    /// SVG path data (`d` attributes), drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::GraduationCap => &[
                "M22 10 12 5 2 10l10 5 10-5z",
                "M6 12v5c3 3 9 3 12 0v-5",
                "M22 10v6",
            ],
            IconKind::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconKind::ShieldCheck => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
                "m9 12 2 2 4-4",
            ],
            IconKind::Brain => &[
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18z",
                "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18z",
                "M12 5v13",
            ],
            IconKind::BarChart => &["M18 20V10", "M12 20V4", "M6 20v-6"],
            IconKind::CheckCircle => &[CIRCLE, "m9 12 2 2 4-4"],
            IconKind::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3z",
                "M5 3v4",
                "M3 5h4",
                "M19 17v4",
                "M17 19h4",
            ],
            IconKind::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconKind::PlayCircle => &[CIRCLE, "m10 8 6 4-6 4z"],
        }
    }
}

/// Renders an inline SVG icon.
///
/// `size` is one of the `icon-*` size classes from the stylesheet.
#[component]
pub fn Icon(
    /// Which icon to draw
    kind: IconKind,
    /// Size class (`icon-xs`, `icon-sm`, `icon-md`, `icon-lg`)
    #[prop(default = "icon-sm")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=format!("icon {}", size)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {kind.paths().iter().copied().map(|d| view! { <path d=d></path> }).collect_view()}
        </svg>
    }
}

/// Gradient tile with the graduation cap, shared by navbar and footer.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="brand-mark">
            <Icon kind=IconKind::GraduationCap size="icon-md" />
        </div>
    }
}
