use log::{debug, error};
use stylist::GlobalStyle;

/// Palette and base typography shared by every section.
const BASE_CSS: &str = r#"
    :root {
        --background: #f7f8ff;
        --foreground: #0f172a;
        --foreground-muted: rgba(15, 23, 42, 0.7);
        --foreground-soft: rgba(15, 23, 42, 0.6);
        --primary: #4566ff;
        --accent: #9b5cff;
        --card: #ffffff;
        --border: rgba(15, 23, 42, 0.1);
    }

    html {
        scroll-behavior: smooth;
    }

    body {
        margin: 0;
        min-height: 100vh;
        background: linear-gradient(135deg, var(--background), #eef0ff, var(--background));
        color: var(--foreground);
        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    h1, h2, h3, h4 {
        margin: 0;
        text-wrap: balance;
    }

    a {
        color: inherit;
    }

    .icon {
        flex-shrink: 0;
    }

    .tone-primary {
        color: var(--primary);
    }

    .tone-accent {
        color: var(--accent);
    }
"#;

/// Registers the base stylesheet. Failure leaves the page unstyled but usable.
pub fn install() {
    match GlobalStyle::new(BASE_CSS) {
        Ok(_) => debug!("Registered global style"),
        Err(e) => error!("Failed to register global style: {}", e),
    }
}
