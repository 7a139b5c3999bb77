use super::{CheckList, Icon, IconKind, Reveal};
use leptos::prelude::*;

/// Theme-color tag: which gradient tint a card glows with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glow {
    /// Violet tint
    #[default]
    Violet,
    /// Indigo tint
    Indigo,
    /// Fuchsia tint
    Fuchsia,
}

impl Glow {
    /// Stylesheet class selecting the tint.
    pub fn class(self) -> &'static str {
        match self {
            Glow::Violet => "glow-violet",
            Glow::Indigo => "glow-indigo",
            Glow::Fuchsia => "glow-fuchsia",
        }
    }
}

/// Icon, title, description and optional bullets on a tinted glass card.
#[component]
pub fn FeatureCard(
    /// Icon in the gradient tile
    icon: IconKind,
    /// Card heading
    title: &'static str,
    /// One-line summary under the heading
    description: &'static str,
    /// Bullet points, shown in order; no list when absent
    #[prop(optional)]
    bullets: Option<Vec<&'static str>>,
    /// Gradient tint
    #[prop(optional)]
    glow: Glow,
) -> impl IntoView {
    view! {
        <Reveal delay=0.05 class=format!("feature-card {}", glow.class())>
            <div class="card-glow"></div>
            <div class="card-body">
                <div class="icon-tile large">
                    <Icon kind=icon size="icon-lg" />
                </div>
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{description}</p>
                {bullets.map(|items| view! { <CheckList items=items item_class="card-bullet" /> })}
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn bullet_texts(html: &str) -> Vec<String> {
        html.split("<span class=\"check-text\">")
            .skip(1)
            .filter_map(|rest| rest.split("</span>").next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn renders_bullets_exactly_in_order() {
        let html = view! {
            <FeatureCard
                icon=IconKind::Users
                title="Live, Verified Classrooms"
                description="Sessions and attendance"
                bullets=vec!["Secure file submissions", "Comments and feedback loops", "Secure file submissions"]
            />
        }
        .to_html();

        assert_eq!(
            bullet_texts(&html),
            vec![
                "Secure file submissions",
                "Comments and feedback loops",
                "Secure file submissions",
            ]
        );
        assert_eq!(html.matches("<li class=\"card-bullet\"").count(), 3);
        assert!(html.contains("Live, Verified Classrooms"));
    }

    #[test]
    fn omits_list_without_bullets() {
        let html = view! {
            <FeatureCard icon=IconKind::Brain title="Plain" description="No bullets here" />
        }
        .to_html();

        assert!(!html.contains("<ul"));
        assert!(bullet_texts(&html).is_empty());
    }

    #[test]
    fn defaults_to_violet_glow() {
        let html = view! {
            <FeatureCard icon=IconKind::Brain title="Plain" description="Tinted" />
        }
        .to_html();

        assert!(html.contains("class=\"feature-card glow-violet\""));
    }

    #[test]
    fn applies_selected_glow() {
        let html = view! {
            <FeatureCard
                icon=IconKind::ShieldCheck
                title="Internal Plagiarism Check"
                description="Cohort matching"
                glow=Glow::Fuchsia
            />
        }
        .to_html();

        assert!(html.contains("glow-fuchsia"));
        assert!(!html.contains("glow-violet"));
    }
}
