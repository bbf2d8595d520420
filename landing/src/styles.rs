//! CSS for the landing page.
//!
//! Rendered inline by [`crate::App`]. Panel opacity and transform are not
//! here: they are written per frame from the progress value.

/// Dark, centered stage with stacked absolutely positioned panels.
pub const LANDING_CSS: &str = r#"
:root {
    --accent: #E66B7A;
    --accent-soft: rgba(230, 107, 122, 0.4);
    --bg: #000;
    --fg: #fff;
}

html, body {
    margin: 0;
    background: var(--bg);
    color: var(--fg);
    font-family: "Instrument Serif", Georgia, serif;
    font-weight: 400;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

.sequence {
    position: relative;
    padding: 0 24px;
}

.sequence-track,
.sequence-viewport {
    position: relative;
    height: 100vh;
}

.sequence-viewport {
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.sequence-stage {
    position: relative;
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
}

.panel {
    position: absolute;
    text-align: center;
    pointer-events: none;
    will-change: opacity, transform;
}

.accent {
    color: var(--accent);
}

.panel-hero {
    max-width: 48rem;
}

.hero-title {
    margin: 0;
    font-size: 45px;
    font-weight: 400;
    line-height: 1.25;
    letter-spacing: -0.025em;
}

.hero-rule {
    margin: 32px auto 0;
    height: 1px;
    width: 96px;
    background: var(--accent-soft);
}

.panel-line-1,
.panel-line-2,
.panel-line-3,
.panel-line-4 {
    max-width: 36rem;
}

.line-text {
    margin: 0;
    font-size: 38px;
}

.reveal {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 24px;
}

.reveal-brand {
    margin: 0;
    font-size: 42px;
    font-weight: 400;
    letter-spacing: 0.025em;
}

.reveal-tagline {
    margin: 0;
    max-width: 28rem;
    font-size: 38px;
    opacity: 0.75;
}

.reveal-status {
    margin-top: 40px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 24px;
}

.reveal-soon {
    margin: 0;
    font-size: 18px;
    opacity: 0.7;
}

.reveal-footer {
    margin-top: 48px;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    font-size: 12px;
    opacity: 0.45;
}

.reveal-footer p {
    margin: 0;
}

@media (min-width: 768px) {
    .hero-title { font-size: 64px; }
    .line-text { font-size: 30px; }
    .reveal-soon { font-size: 20px; }
    .reveal-footer { font-size: 14px; }
}
"#;
