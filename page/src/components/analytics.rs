use super::{Glow, Icon, IconKind, Reveal};
use leptos::prelude::*;

const TILES: [(&str, &str, Glow); 3] = [
    ("Cohort Overview", "32 Students", Glow::Violet),
    ("Flags & Similarities", "6 Alerts", Glow::Fuchsia),
    ("Average Score", "86%", Glow::Indigo),
];

/// Teacher dashboard mockup: three summary tiles and the network graph panel.
#[component]
pub fn Analytics() -> impl IntoView {
    view! {
        <section id="analytics" class="section section-analytics" data-section="analytics">
            <div class="container">
                <Reveal class="section-header centered">
                    <h2 class="section-title">"Deep Analysis for Teachers"</h2>
                    <p class="section-description">
                        "Track cohorts, spot plagiarism clusters, and understand performance trends with clarity."
                    </p>
                </Reveal>

                <div class="grid grid-stats">
                    {TILES
                        .iter()
                        .enumerate()
                        .map(|(i, &(title, value, glow))| {
                            view! {
                                <Reveal delay={0.05 * i as f32} class=format!("stat-tile {}", glow.class())>
                                    <div class="card-glow"></div>
                                    <div class="stat-body">
                                        <div class="stat-label">{title}</div>
                                        <div class="stat-value">{value}</div>
                                        <div class="stat-chart"></div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <Reveal delay=0.2 class="network-panel">
                    <div class="network-header">
                        <div class="network-heading">
                            <div class="icon-tile">
                                <Icon kind=IconKind::BarChart size="icon-md" />
                            </div>
                            <div>
                                <div class="network-title">"Plagiarism Network Graph"</div>
                                <div class="network-caption">
                                    "Visualize clusters of similar work within and across classes."
                                </div>
                            </div>
                        </div>
                        <a href="#get-started" class="btn btn-ghost btn-compact">
                            "Explore"
                            <Icon kind=IconKind::ArrowRight />
                        </a>
                    </div>
                    // Placeholder canvas; no graph is drawn.
                    <div class="network-canvas"></div>
                </Reveal>
            </div>
        </section>
    }
}
