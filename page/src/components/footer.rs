use super::BrandMark;
use leptos::prelude::*;

/// Brand, copyright line and tagline.
#[component]
pub fn Footer(
    /// Product name in the copyright line
    #[prop(into)]
    brand: String,
    /// Static tagline on the right
    #[prop(into)]
    tagline: String,
    /// Copyright year
    year: i32,
) -> impl IntoView {
    let copyright = format!("{} © {}", brand, year);
    view! {
        <footer class="footer" data-section="footer">
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <BrandMark />
                        <span class="footer-copyright">{copyright}</span>
                    </div>
                    <div class="footer-tagline">{tagline}</div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn shows_year_it_was_given() {
        let html = view! { <Footer brand="EduVerify" tagline="Privacy-first" year=2025 /> }.to_html();

        assert!(html.contains("<span class=\"footer-copyright\">EduVerify © 2025</span>"));
        assert!(html.contains("Privacy-first"));
    }
}
