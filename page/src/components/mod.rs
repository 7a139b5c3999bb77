//! Leptos components for the landing page.
//!
//! Every section is a `#[component]` with no runtime state; the only inputs
//! are the [`crate::SiteConfig`] values a section displays.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── App
//!     ├── Navbar
//!     ├── Hero
//!     │   └── SceneEmbed
//!     ├── Features
//!     │   └── FeatureCard ×3
//!     ├── Tests
//!     ├── AiSection
//!     ├── Analytics
//!     └── Footer
//! ```
//!
//! Animated elements are wrapped in [`Reveal`], which only emits markup; the
//! browser entry drives the actual reveal.

mod ai_section;
mod analytics;
mod app;
mod check_list;
#[cfg(feature = "ssr")]
mod document;
mod feature_card;
mod features;
mod footer;
mod hero;
mod icons;
mod navbar;
mod reveal;
mod test_modes;

pub use ai_section::AiSection;
pub use analytics::Analytics;
pub use app::App;
pub use check_list::CheckList;
#[cfg(feature = "ssr")]
pub use document::PageDocument;
pub use feature_card::{FeatureCard, Glow};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::{BrandMark, Icon, IconKind};
pub use navbar::Navbar;
pub use reveal::Reveal;
pub use test_modes::Tests;
