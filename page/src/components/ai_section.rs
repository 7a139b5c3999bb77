//! AI detection showcase.
//!
//! Everything here is illustrative copy: the essay snippet, the flagged
//! segment and the metric values are fixed text, not detector output.

use super::{Icon, IconKind, Reveal};
use leptos::prelude::*;

const SIGNALS: [(&str, IconKind); 4] = [
    ("Explainable signals", IconKind::Brain),
    ("Calibrated scoring", IconKind::BarChart),
    ("Privacy-first", IconKind::ShieldCheck),
    ("Human-in-the-loop", IconKind::Users),
];

const SAMPLE_METRICS: [(&str, &str); 4] = [
    ("Perplexity Drift", "+12%"),
    ("Burstiness", "-7%"),
    ("Style Match", "89%"),
    ("Confidence", "Medium"),
];

/// Two columns: signal badges and a mock annotated essay sample.
#[component]
pub fn AiSection() -> impl IntoView {
    view! {
        <section id="ai" class="section section-ai" data-section="ai">
            <div class="container">
                <div class="ai-grid">
                    <Reveal>
                        <h2 class="section-title">"AI Detection, Done Right"</h2>
                        <p class="section-description">
                            "Balanced detection that explains its reasoning, highlights risky segments, and gives teachers review controls to avoid over-flagging genuine work."
                        </p>
                        <div class="ai-signals">
                            {SIGNALS
                                .iter()
                                .enumerate()
                                .map(|(i, &(title, icon))| {
                                    view! {
                                        <Reveal delay={0.05 * i as f32} class="ai-signal">
                                            <div class="icon-tile small">
                                                <Icon kind=icon />
                                            </div>
                                            <span>{title}</span>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay=0.15>
                        <SamplePanel />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SamplePanel() -> impl IntoView {
    view! {
        <div class="sample-panel">
            <div class="card-glow"></div>
            <div class="sample-body">
                <div class="sample-label">"Sample Essay Snippet"</div>
                <div class="sample-text">
                    <p class="sample-plain">
                        "The exploration of celestial bodies has catalyzed unprecedented advancements in human knowledge..."
                    </p>
                    <p class="sample-flagged">
                        "Potential AI-style segment: high predictability, low variance."
                    </p>
                    <p class="sample-plain">
                        "However, intrinsic uncertainty drives innovation as hypotheses compete for empirical validation..."
                    </p>
                    <div class="sample-metrics">
                        {SAMPLE_METRICS
                            .iter()
                            .map(|&(label, value)| {
                                view! {
                                    <div class="sample-metric">
                                        {format!("{}: ", label)}
                                        <span class="sample-metric-value">{value}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
