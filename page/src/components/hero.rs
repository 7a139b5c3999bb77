use super::{Icon, IconKind, Reveal};
use leptos::prelude::*;

const BADGES: [(IconKind, &str); 4] = [
    (IconKind::Users, "1:1 & Group Classes"),
    (IconKind::ShieldCheck, "Verified Submissions"),
    (IconKind::Brain, "AI-Use Detection"),
    (IconKind::BarChart, "Actionable Insights"),
];

/// Full-viewport intro over the 3D scene.
#[component]
pub fn Hero(
    /// 3D scene asset shown behind the copy
    #[prop(into)]
    scene_url: String,
) -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <SceneEmbed url=scene_url />
            <div class="hero-glow"></div>

            <div class="hero-content">
                <div class="container">
                    <Reveal class="hero-eyebrow">
                        <Icon kind=IconKind::Sparkles size="icon-xs" />
                        "Cyber-classrooms for the future"
                    </Reveal>

                    <Reveal delay=0.1>
                        <h1 class="hero-title">
                            "Connect Students & Teachers in a Smart, Verified Classroom"
                        </h1>
                    </Reveal>

                    <Reveal delay=0.2>
                        <p class="hero-subtitle">
                            "Live collaboration, secure assessments, AI authenticity checks and internal plagiarism detection — all in one modern learning hub."
                        </p>
                    </Reveal>

                    <Reveal delay=0.3 class="hero-actions">
                        <a href="#get-started" class="btn btn-primary">
                            "Launch Your Classroom"
                            <Icon kind=IconKind::ArrowRight />
                        </a>
                        <a href="#demo" class="btn btn-ghost">
                            "Watch Demo"
                            <Icon kind=IconKind::PlayCircle />
                        </a>
                    </Reveal>

                    <Reveal delay=0.35 class="hero-badges">
                        {BADGES
                            .iter()
                            .map(|&(icon, label)| {
                                view! {
                                    <div class="hero-badge">
                                        <Icon kind=icon />
                                        <span>{label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>

            <div class="hero-fade"></div>
        </section>
    }
}

/// Background scene. Loading and load failures belong to `<spline-viewer>`;
/// the page renders the same either way.
#[component]
fn SceneEmbed(url: String) -> impl IntoView {
    view! {
        <div class="hero-scene">
            <spline-viewer url=url loading-anim-type="none"></spline-viewer>
        </div>
    }
}
