use super::{CheckList, Icon, IconKind, Reveal};
use leptos::prelude::*;

struct TestMode {
    title: &'static str,
    summary: &'static str,
    icon: IconKind,
    tile: &'static str,
    tint: &'static str,
    bullets: [&'static str; 3],
    delay: f32,
}

static MODES: [TestMode; 2] = [
    TestMode {
        title: "Proctored Exam",
        summary: "Lockdown mode, tab-switch detection, identity verification, and timed sections.",
        icon: IconKind::ShieldCheck,
        tile: "icon-tile",
        tint: "mode-tint proctored",
        bullets: [
            "Camera & mic optional policies",
            "Randomized question pools",
            "Live proctor dashboard",
        ],
        delay: 0.05,
    },
    TestMode {
        title: "Open Assignment",
        summary: "Flexible uploads for essays, code, slides or media with internal plagiarism checks.",
        icon: IconKind::Users,
        tile: "icon-tile indigo",
        tint: "mode-tint assignment",
        bullets: [
            "Template-based rubrics",
            "Similarity clusters across cohort",
            "Versioned submissions & feedback",
        ],
        delay: 0.1,
    },
];

/// The two test modes side by side.
#[component]
pub fn Tests() -> impl IntoView {
    view! {
        <section id="tests" class="section section-tests" data-section="tests">
            <div class="container">
                <Reveal class="section-header split">
                    <div>
                        <h2 class="section-title">"Two Powerful Test Modes"</h2>
                        <p class="section-description">
                            "Choose between flexible assignments and secure proctored exams—both with deep analysis for teachers."
                        </p>
                    </div>
                    <a href="#get-started" class="btn btn-ghost btn-compact">
                        "Try it now"
                        <Icon kind=IconKind::ArrowRight />
                    </a>
                </Reveal>

                <div class="grid grid-modes">
                    {MODES.iter().map(|mode| view! { <ModePanel mode=mode /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModePanel(mode: &'static TestMode) -> impl IntoView {
    view! {
        <Reveal delay=mode.delay class="mode-panel">
            <div class=mode.tint></div>
            <div class="mode-body">
                <div class="mode-heading">
                    <div class=mode.tile>
                        <Icon kind=mode.icon size="icon-md" />
                    </div>
                    <h3 class="mode-title">{mode.title}</h3>
                </div>
                <p class="mode-summary">{mode.summary}</p>
                <CheckList items=mode.bullets.to_vec() item_class="mode-bullet" />
            </div>
        </Reveal>
    }
}
