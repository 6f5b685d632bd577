pub const GLOBAL_CSS: &str = r#"
:root {
    --color-bg-deep: #05080f;
    --color-bg-dark: #0b1020;
    --color-primary: #00d4ff;
    --color-accent-purple: #a855f7;
    --color-text-primary: #f5f7fb;
    --color-text-secondary: rgba(245, 247, 251, 0.72);
    --color-text-muted: rgba(245, 247, 251, 0.5);
    --glass-border: rgba(255, 255, 255, 0.08);
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    background: var(--color-bg-deep);
    color: var(--color-text-primary);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.6;
}
body.no-scroll { overflow: hidden; }
a { color: inherit; text-decoration: none; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 760px; }
.section { padding: 6rem 0; }
.page { padding-top: 5rem; }
.section-header { text-align: center; margin-bottom: 3rem; }
.section-header h2, .section-header h1 { font-size: 2.5rem; margin: 1rem 0; }
.section-header p { color: var(--color-text-secondary); max-width: 640px; margin: 0 auto; }
.gradient-text {
    background: linear-gradient(45deg, var(--color-primary), var(--color-accent-purple));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.glass-card {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid var(--glass-border);
    border-radius: 16px;
    backdrop-filter: blur(10px);
    padding: 1.75rem;
}
.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.4rem 1rem;
    border-radius: 999px;
    border: 1px solid var(--glass-border);
    color: var(--color-primary);
    font-size: 0.875rem;
}
.badge-dot { width: 8px; height: 8px; border-radius: 50%; background: #4ade80; }
.btn-primary, .btn-secondary {
    display: inline-block;
    padding: 0.9rem 2rem;
    border-radius: 12px;
    font-weight: 600;
    cursor: pointer;
    border: none;
    transition: transform 0.2s ease;
}
.btn-primary { background: linear-gradient(45deg, var(--color-primary), var(--color-accent-purple)); color: #fff; }
.btn-secondary { background: transparent; color: var(--color-text-primary); border: 1px solid var(--glass-border); }
.btn-primary:hover, .btn-secondary:hover { transform: translateY(-2px); }

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1.25rem 0;
    transition: background 0.3s ease, padding 0.3s ease;
}
.navbar.scrolled {
    background: rgba(5, 8, 15, 0.9);
    backdrop-filter: blur(12px);
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--glass-border);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo { font-weight: 700; font-size: 1.25rem; }
.nav-menu { display: flex; gap: 2rem; list-style: none; }
.nav-link { color: var(--color-text-secondary); }
.nav-link:hover { color: var(--color-text-primary); }
.nav-toggle { display: none; background: none; border: none; cursor: pointer; }
.nav-toggle span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
@media (max-width: 768px) {
    .nav-toggle { display: block; }
    .nav-menu {
        position: fixed;
        top: 0;
        right: 0;
        height: 100vh;
        width: 75%;
        flex-direction: column;
        padding: 6rem 2rem;
        background: var(--color-bg-dark);
        transform: translateX(100%);
        transition: transform 0.3s ease;
    }
    .nav-menu.active { transform: translateX(0); }
    .section-header h2, .section-header h1 { font-size: 1.9rem; }
}

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    text-align: center;
    overflow: hidden;
    padding-top: 5rem;
}
.hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); line-height: 1.1; margin: 2rem 0 1.5rem; }
.hero-sub { color: var(--color-text-secondary); max-width: 720px; margin: 0 auto 2.5rem; font-size: 1.15rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; margin-bottom: 3rem; }
.hero-glow { position: absolute; width: 24rem; height: 24rem; border-radius: 50%; filter: blur(100px); opacity: 0.15; }
.hero-glow-left { top: 20%; left: 15%; background: var(--color-primary); }
.hero-glow-right { bottom: 20%; right: 15%; background: var(--color-accent-purple); }
.stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.25rem; }
.stat-value { font-size: 1.75rem; font-weight: 700; }
.stat-label { color: var(--color-text-muted); font-size: 0.875rem; }
@media (max-width: 768px) { .stat-grid { grid-template-columns: repeat(2, 1fr); } }

.bento-grid { display: grid; grid-template-columns: repeat(12, 1fr); gap: 1.25rem; }
.bento-large { grid-column: span 8; grid-row: span 2; }
.bento-medium { grid-column: span 4; grid-row: span 2; }
.bento-small { grid-column: span 4; }
.bento-stat { display: inline-block; margin-top: 1rem; color: var(--color-primary); font-weight: 600; }
.value-grid, .portfolio-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.25rem; }
.value-accent { width: 40px; height: 4px; border-radius: 2px; margin-bottom: 1rem; }
.value-card ul { margin-top: 1rem; padding-left: 1.1rem; color: var(--color-text-secondary); }
@media (max-width: 768px) { .bento-large, .bento-medium, .bento-small { grid-column: span 12; } }

.portfolio-item {
    cursor: pointer;
    padding: 1.5rem;
    border-radius: 16px;
    border: 1px solid var(--glass-border);
    transition: transform 0.2s ease;
}
.portfolio-item.pressed { transform: scale(0.98); }
.portfolio-category { color: var(--color-primary); font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.08em; }

.cta-banner {
    text-align: center;
    padding: 4rem 2rem;
    border-radius: 24px;
    border: 1px solid rgba(0, 212, 255, 0.2);
    background: linear-gradient(135deg, rgba(0, 212, 255, 0.12), var(--color-bg-dark), rgba(168, 85, 247, 0.12));
}
.cta-banner h2 { font-size: 2.25rem; margin: 1.25rem 0; }
.cta-banner p { color: var(--color-text-secondary); max-width: 640px; margin: 0 auto 2rem; }

.contact-card { max-width: 760px; margin: 0 auto; }
.contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.form-field { display: flex; flex-direction: column; gap: 0.4rem; font-size: 0.9rem; color: var(--color-text-secondary); }
.form-field input, .form-field textarea {
    padding: 0.8rem 1rem;
    border-radius: 10px;
    border: 1px solid var(--glass-border);
    background: rgba(255, 255, 255, 0.04);
    color: var(--color-text-primary);
    font: inherit;
}
.form-message {
    padding: 1rem;
    border-radius: 8px;
    font-size: 0.875rem;
    text-align: center;
}
.form-message-success { background: rgba(0, 128, 0, 0.2); color: #90ee90; border: 1px solid rgba(0, 128, 0, 0.4); }
.form-message-error { background: rgba(128, 0, 0, 0.2); color: #ff6b6b; border: 1px solid rgba(128, 0, 0, 0.4); }
@media (max-width: 768px) { .form-row { grid-template-columns: 1fr; } }

.reveal-fade-up {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.reveal-fade-up.revealed { opacity: 1; transform: translateY(0); }
@media (prefers-reduced-motion: reduce) {
    .reveal-fade-up { transition: none; }
}

.site-footer {
    padding: 2.5rem 0;
    border-top: 1px solid var(--glass-border);
    color: var(--color-text-muted);
    font-size: 0.875rem;
    text-align: center;
}
"#;
