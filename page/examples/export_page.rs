//! Static export of the landing page.
//!
//! Run with: `cargo run -p eduverify-page --example export_page`

use eduverify_page::{render_page, SiteConfig};

fn main() {
    let html = render_page(&SiteConfig::default());

    let output_path = "eduverify.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
