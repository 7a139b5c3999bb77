use crate::reveal::FadeIn;
use leptos::prelude::*;

/// Wraps children in a reveal target with a fade-up entrance.
#[component]
pub fn Reveal(
    /// Seconds to wait after the element enters the viewport
    #[prop(default = 0.0)]
    delay: f32,
    /// Classes on the wrapper
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let fade = FadeIn::delayed(delay);
    view! {
        <div class=class data-reveal="fade-up" style=fade.style()>
            {children()}
        </div>
    }
}
