//! CSS for the landing page.
//!
//! Dark violet/fuchsia theme, glass panels over radial glows. Reveal targets
//! are only hidden while `<body>` carries `reveal-ready`, so markup rendered
//! without the browser entry is always readable.

/// Complete stylesheet, inlined into the document head (static export) or
/// mounted next to the app (browser entry).
pub const PAGE_CSS: &str = r#"
:root {
    --bg-deep: #0b0f1a;
    --bg-night: #0a0a1a;
    --bg-ink: #0a0d18;
    --text-strong: #ffffff;
    --text-body: rgba(255, 255, 255, 0.8);
    --text-dim: rgba(255, 255, 255, 0.7);
    --text-faint: rgba(255, 255, 255, 0.6);
    --glass: rgba(255, 255, 255, 0.05);
    --glass-soft: rgba(255, 255, 255, 0.03);
    --border-glass: rgba(255, 255, 255, 0.1);
    --violet: #8b5cf6;
    --fuchsia: #d946ef;
    --indigo: #6366f1;
    --emerald: #34d399;
    --amber: #f59e0b;
    --rose: #f43f5e;
    --tint-violet: rgba(139, 92, 246, 0.2);
    --tint-fuchsia: rgba(217, 70, 239, 0.2);
    --tint-indigo: rgba(99, 102, 241, 0.2);
    --gradient-brand: linear-gradient(to top right, var(--violet), var(--fuchsia));
    --radius-lg: 16px;
    --radius-md: 12px;
    --container-max: 1280px;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

body {
    min-height: 100vh;
    background: #000;
    color: var(--text-strong);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; text-decoration: none; }
ul { list-style: none; }

.page { min-height: 100vh; width: 100%; background: #000; }

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.icon { flex-shrink: 0; }
.icon-xs { width: 14px; height: 14px; }
.icon-sm { width: 16px; height: 16px; }
.icon-md { width: 20px; height: 20px; }
.icon-lg { width: 24px; height: 24px; }

.brand-mark {
    display: grid;
    place-items: center;
    width: 36px;
    height: 36px;
    border-radius: var(--radius-md);
    background: var(--gradient-brand);
}

.icon-tile {
    display: grid;
    place-items: center;
    width: 40px;
    height: 40px;
    border-radius: 10px;
    background: var(--gradient-brand);
    color: var(--text-strong);
}

.icon-tile.indigo { background: linear-gradient(to top right, var(--indigo), var(--violet)); }
.icon-tile.small { width: 36px; height: 36px; }
.icon-tile.large { width: 48px; height: 48px; border-radius: var(--radius-md); box-shadow: 0 10px 24px rgba(76, 29, 149, 0.2); }

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 20px;
    border-radius: var(--radius-md);
    font-weight: 600;
    transition: opacity 0.2s, background 0.2s, color 0.2s;
}

.btn-primary {
    background: var(--gradient-brand);
    color: var(--text-strong);
    box-shadow: 0 10px 24px rgba(76, 29, 149, 0.3);
}

.btn-primary:hover { opacity: 0.95; }

.btn-ghost {
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: var(--glass);
    color: rgba(255, 255, 255, 0.9);
    font-weight: 500;
}

.btn-ghost:hover { background: var(--border-glass); color: var(--text-strong); }
.btn-compact { padding: 8px 16px; font-weight: 500; }

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
}

.navbar-shell {
    margin-top: 24px;
    backdrop-filter: blur(24px);
    background: var(--glass);
    border: 1px solid var(--border-glass);
    border-radius: var(--radius-lg);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 20px;
}

.navbar-brand { display: flex; align-items: center; gap: 12px; }
.navbar-brand-name { font-size: 18px; font-weight: 600; letter-spacing: 0.025em; }

.navbar-links { display: none; align-items: center; gap: 24px; font-size: 14px; }
.navbar-link { color: var(--text-body); transition: color 0.2s; }
.navbar-link:hover { color: var(--text-strong); }

.navbar-actions { display: flex; align-items: center; gap: 12px; }
.navbar-demo { display: none; align-items: center; gap: 8px; padding: 8px 16px; color: rgba(255, 255, 255, 0.9); }

/* Hero */
.hero {
    position: relative;
    min-height: 110vh;
    width: 100%;
    overflow: hidden;
    background: linear-gradient(to bottom, var(--bg-deep), var(--bg-night), var(--bg-deep));
}

.hero-scene { position: absolute; inset: 0; }
.hero-scene spline-viewer { display: block; width: 100%; height: 100%; }

.hero-glow {
    pointer-events: none;
    position: absolute;
    inset: 0;
    background:
        radial-gradient(ellipse at top, rgba(124, 58, 237, 0.15), transparent 50%),
        radial-gradient(ellipse at bottom, rgba(236, 72, 153, 0.15), transparent 50%);
}

.hero-content { position: relative; z-index: 10; padding-top: 160px; }

.hero-eyebrow {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 12px;
    border-radius: 999px;
    background: var(--border-glass);
    border: 1px solid var(--border-glass);
    color: var(--text-body);
    font-size: 12px;
    backdrop-filter: blur(8px);
}

.hero-eyebrow .icon { color: #f0abfc; }

.hero-title {
    margin-top: 24px;
    font-size: 36px;
    font-weight: 900;
    line-height: 1.1;
    letter-spacing: -0.025em;
}

.hero-subtitle {
    margin-top: 24px;
    max-width: 672px;
    font-size: 16px;
    color: var(--text-dim);
}

.hero-actions { margin-top: 32px; display: flex; flex-wrap: wrap; align-items: center; gap: 12px; }

.hero-badges {
    margin-top: 48px;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 16px;
    color: var(--text-dim);
}

.hero-badge {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 8px 12px;
    background: var(--glass);
    border: 1px solid var(--border-glass);
    border-radius: var(--radius-md);
    font-size: 14px;
    backdrop-filter: blur(8px);
}

.hero-badge .icon { color: #c4b5fd; }

.hero-fade {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    height: 192px;
    background: linear-gradient(to top, var(--bg-deep), transparent);
}

/* Sections */
.section { position: relative; padding: 80px 0; }
.section-features { background: var(--bg-deep); }
.section-tests { background: linear-gradient(to bottom, var(--bg-deep), var(--bg-ink)); }
.section-ai { background: var(--bg-ink); }
.section-analytics { background: linear-gradient(to bottom, var(--bg-ink), #0a0a17, var(--bg-deep)); }

.section-backdrop {
    position: absolute;
    inset: 0;
    opacity: 0.6;
    background: radial-gradient(ellipse at center, rgba(124, 58, 237, 0.15), transparent 60%);
}

.section-inner { position: relative; }
.section-title { font-size: 30px; font-weight: 700; }
.section-description { margin-top: 12px; max-width: 672px; color: var(--text-dim); }
.section-header.centered { text-align: center; }
.section-header.centered .section-description { margin-left: auto; margin-right: auto; }

.section-header.split {
    display: flex;
    flex-wrap: wrap;
    align-items: flex-end;
    justify-content: space-between;
    gap: 16px;
}

.grid { margin-top: 40px; display: grid; gap: 24px; }

/* Feature cards */
.feature-card {
    position: relative;
    overflow: hidden;
    padding: 24px;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-glass);
    background: var(--glass-soft);
    backdrop-filter: blur(8px);
}

.card-glow {
    pointer-events: none;
    position: absolute;
    inset: -4px;
    opacity: 0.4;
    background: linear-gradient(to bottom right, var(--glow-tint), transparent 50%, transparent);
}

.glow-violet { --glow-tint: var(--tint-violet); }
.glow-indigo { --glow-tint: var(--tint-indigo); }
.glow-fuchsia { --glow-tint: var(--tint-fuchsia); }

.card-body { position: relative; z-index: 10; }
.card-title { margin-top: 20px; font-size: 20px; font-weight: 600; }
.card-description { margin-top: 8px; font-size: 14px; color: var(--text-dim); }

.check-list { margin-top: 16px; display: grid; gap: 8px; font-size: 14px; color: var(--text-body); }
.check-list li { display: flex; align-items: flex-start; gap: 8px; }
.check-list .icon { color: var(--emerald); margin-top: 2px; }

/* Test modes */
.mode-panel {
    position: relative;
    overflow: hidden;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-glass);
    background: var(--glass);
    backdrop-filter: blur(8px);
}

.mode-tint {
    position: absolute;
    inset: 0;
    opacity: 0.6;
    background: linear-gradient(to top right, var(--mode-from), transparent, var(--mode-to));
}

.mode-tint.proctored { --mode-from: rgba(139, 92, 246, 0.1); --mode-to: rgba(217, 70, 239, 0.1); }
.mode-tint.assignment { --mode-from: rgba(99, 102, 241, 0.1); --mode-to: rgba(139, 92, 246, 0.1); }

.mode-body { position: relative; padding: 24px; }
.mode-heading { display: flex; align-items: center; gap: 12px; }
.mode-title { font-size: 24px; font-weight: 600; }
.mode-summary { margin-top: 12px; color: var(--text-body); }

/* AI section */
.ai-grid { display: grid; gap: 40px; align-items: center; }
.ai-signals { margin-top: 24px; display: grid; gap: 16px; }

.ai-signal {
    display: flex;
    align-items: center;
    gap: 12px;
    padding: 12px;
    border-radius: var(--radius-md);
    border: 1px solid var(--border-glass);
    background: var(--glass);
    color: rgba(255, 255, 255, 0.9);
}

.sample-panel {
    position: relative;
    overflow: hidden;
    padding: 24px;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-glass);
    background: rgba(255, 255, 255, 0.04);
}

.sample-panel .card-glow { opacity: 1; --glow-tint: var(--tint-fuchsia); }
.sample-body { position: relative; }
.sample-label { font-family: var(--font-mono); font-size: 14px; color: rgba(255, 255, 255, 0.9); }
.sample-text { margin-top: 12px; display: grid; gap: 12px; font-size: 14px; line-height: 1.6; }
.sample-plain { color: var(--text-body); }

.sample-flagged {
    padding: 12px;
    border-radius: 8px;
    border: 1px solid rgba(245, 158, 11, 0.3);
    background: linear-gradient(to right, rgba(245, 158, 11, 0.2), rgba(244, 63, 94, 0.2));
    color: #fef3c7;
}

.sample-metrics {
    margin-top: 16px;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 12px;
    font-size: 12px;
}

.sample-metric {
    padding: 12px;
    border-radius: 8px;
    border: 1px solid var(--border-glass);
    background: var(--glass);
    color: var(--text-body);
}

.sample-metric-value { color: var(--text-strong); }

/* Analytics */
.stat-tile {
    position: relative;
    overflow: hidden;
    padding: 24px;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-glass);
    background: var(--glass);
}

.stat-tile .card-glow { opacity: 0.5; }
.stat-body { position: relative; }
.stat-label { font-size: 14px; color: var(--text-dim); }
.stat-value { margin-top: 8px; font-size: 30px; font-weight: 600; }

.stat-chart {
    margin-top: 16px;
    height: 96px;
    border-radius: 8px;
    border: 1px solid var(--border-glass);
    background: var(--glass);
}

.network-panel {
    margin-top: 40px;
    padding: 24px;
    border-radius: var(--radius-lg);
    border: 1px solid var(--border-glass);
    background: var(--glass-soft);
}

.network-header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 16px; }
.network-heading { display: flex; align-items: center; gap: 12px; }
.network-title { font-weight: 600; }
.network-caption { font-size: 14px; color: var(--text-dim); }

.network-canvas {
    margin-top: 24px;
    height: 224px;
    border-radius: var(--radius-md);
    border: 1px solid var(--border-glass);
    background: radial-gradient(circle at center, rgba(236, 72, 153, 0.25), transparent 60%);
}

/* Footer */
.footer { position: relative; background: var(--bg-deep); padding: 48px 0; }

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
}

.footer-brand { display: flex; align-items: center; gap: 12px; }
.footer-copyright { color: var(--text-body); }
.footer-tagline { font-size: 14px; color: var(--text-faint); }

/* Reveal on scroll */
.reveal-ready [data-reveal] {
    opacity: var(--reveal-from-opacity, 0);
    transform: translateY(var(--reveal-offset, 20px));
}

.reveal-ready [data-reveal].is-revealed {
    opacity: var(--reveal-to-opacity, 1);
    transform: translateY(var(--reveal-to-offset, 0px));
    transition:
        opacity var(--reveal-duration, 0.8s) ease-out var(--reveal-delay, 0s),
        transform var(--reveal-duration, 0.8s) ease-out var(--reveal-delay, 0s);
}

@media (prefers-reduced-motion: reduce) {
    .reveal-ready [data-reveal] { opacity: 1; transform: none; transition: none; }
}

/* Responsive */
@media (min-width: 640px) {
    .navbar-demo { display: inline-flex; }
    .hero-badges { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    .ai-signals { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .grid-features { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 768px) {
    .navbar-links { display: flex; }
    .hero-content { padding-top: 176px; }
    .hero-eyebrow { font-size: 14px; }
    .hero-title { font-size: 60px; }
    .hero-subtitle { font-size: 18px; }
    .section { padding: 112px 0; }
    .section-title { font-size: 48px; }
    .feature-card { padding: 28px; }
    .card-title { font-size: 24px; }
    .card-description { font-size: 16px; }
    .mode-body { padding: 32px; }
    .grid-modes { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .grid-stats { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .footer-inner { flex-direction: row; }
}

@media (min-width: 1024px) {
    .hero-title { font-size: 72px; }
    .grid-features { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .ai-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{READY_CLASS, REVEALED_CLASS, REVEAL_ATTR};

    #[test]
    fn hidden_state_is_gated_on_ready_class() {
        let gate = format!(".{} [{}]", READY_CLASS, REVEAL_ATTR);
        assert!(PAGE_CSS.contains(&gate));
        assert!(PAGE_CSS.contains(&format!("{}.{}", gate, REVEALED_CLASS)));
    }

    #[test]
    fn css_is_safe_to_inline() {
        // Inlined into <style>; keep it free of characters HTML would escape.
        assert!(!PAGE_CSS.contains('<'));
        assert!(!PAGE_CSS.contains('&'));
    }
}
