use super::{FeatureCard, Glow, IconKind, Reveal};
use leptos::prelude::*;

/// "A Classroom that Verifies Learning": the three product pillars.
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-features" data-section="features">
            <div class="section-backdrop"></div>
            <div class="container section-inner">
                <Reveal>
                    <h2 class="section-title">"A Classroom that Verifies Learning"</h2>
                </Reveal>
                <Reveal delay=0.1>
                    <p class="section-description">
                        "Built for modern education: verified assessments, transparent progress, and AI-assisted insights that enhance—not replace—learning."
                    </p>
                </Reveal>

                <div class="grid grid-features">
                    <FeatureCard
                        icon=IconKind::Users
                        title="Live, Verified Classrooms"
                        description="Create sessions, invite students, manage attendance, and keep everything secure and organized."
                        bullets=vec![
                            "Role-based access for teachers and students",
                            "Secure file submissions",
                            "Comments and feedback loops",
                        ]
                    />
                    <FeatureCard
                        icon=IconKind::ShieldCheck
                        title="Internal Plagiarism Check"
                        description="Catch similarities across your own cohort with internal corpus matching."
                        bullets=vec![
                            "Cross-class & lifetime duplicates",
                            "Granular similarity highlights",
                            "Citation guidance for students",
                        ]
                        glow=Glow::Indigo
                    />
                    <FeatureCard
                        icon=IconKind::Brain
                        title="AI Use Detection"
                        description="Detect signatures of AI-generated content while minimizing false positives."
                        bullets=vec![
                            "Multi-signal scoring (style, perplexity, drift)",
                            "Explainable markers for review",
                            "Privacy-first, on-region processing",
                        ]
                        glow=Glow::Fuchsia
                    />
                </div>
            </div>
        </section>
    }
}
