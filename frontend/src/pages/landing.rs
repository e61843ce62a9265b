use chrono::Datelike;
use yew::prelude::*;

use crate::components::motion_card::{CardVariant, MotionCard, MotionCardStyles};
use crate::config;
use crate::content::{
    Highlight, AUDIENCES, FEATURES, FOOTER_COLUMNS, LEGAL_LINKS, MISSION, SERVICES, WHY_US,
};
use crate::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_contact: Callback<()>,
}

fn contact_click(on_contact: &Callback<()>) -> Callback<MouseEvent> {
    let on_contact = on_contact.clone();
    Callback::from(move |_: MouseEvent| on_contact.emit(()))
}

#[function_component(Landing)]
pub fn landing(props: &ContactProps) -> Html {
    html! {
        <div class="landing-page">
            <Hero on_contact={props.on_contact.clone()} />
            <About />
            <WhoWeServe />
            <FeatureGrid />
            <ServiceGrid />
            <WhyUs />
            <CallToAction on_contact={props.on_contact.clone()} />
            <Footer />
            <MotionCardStyles />
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        z-index: 10;
                    }
                    .section {
                        padding: 5rem 2rem;
                    }
                    .section.tinted {
                        background: rgba(69, 102, 255, 0.03);
                    }
                    .section-inner {
                        margin: 0 auto;
                        max-width: 64rem;
                    }
                    .section-inner.wide {
                        max-width: 72rem;
                    }
                    .section-inner.narrow {
                        max-width: 56rem;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .section-subtitle {
                        text-align: center;
                        font-size: 1.125rem;
                        color: var(--foreground-soft);
                        margin-bottom: 4rem;
                    }
                    .grid-2, .grid-3 {
                        display: grid;
                        gap: 1.5rem;
                    }
                    @media (min-width: 768px) {
                        .grid-2, .grid-3 {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .grid-3 {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                    .contact-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        padding: 1rem 2.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #fff;
                        background: var(--primary);
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-button:hover {
                        transform: scale(1.05);
                        box-shadow: 0 25px 50px rgba(69, 102, 255, 0.5);
                    }
                    .contact-button .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.2s ease;
                    }
                    .contact-button:hover .icon {
                        transform: translateX(4px);
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(Hero)]
fn hero(props: &ContactProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <div class="hero-badge fade-in-up">
                    <span class="hero-badge-dot"></span>
                    <span>{"India's Premier Compliance Marketplace"}</span>
                </div>
                <h1 class="fade-in-up">
                    {"Connecting Businesses with Verified Accounting & "}
                    <span class="gradient-text">{"Compliance Experts"}</span>
                </h1>
                <p class="hero-subtitle fade-in-up">
                    {"Simplify compliance, taxation, and financial management with India's first marketplace that connects you to trusted CA and compliance firms – all in one platform."}
                </p>
                <div class="hero-cta-group fade-in-up">
                    <button class="contact-button" onclick={contact_click(&props.on_contact)}>
                        {"Contact Us"}
                        { Icon::ChevronRight.render("") }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-content {
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(69, 102, 255, 0.1);
                        border: 1px solid rgba(69, 102, 255, 0.3);
                        color: var(--primary);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-badge-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: var(--primary);
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        line-height: 1.2;
                        margin-bottom: 1.5rem;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, var(--primary), var(--accent), var(--primary));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        line-height: 1.7;
                        color: var(--foreground-soft);
                        margin-bottom: 2rem;
                    }
                    .fade-in-up {
                        animation: fadeInUp 0.8s ease-out both;
                    }
                    @keyframes fadeInUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes pulse {
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
        </section>
    }
}

fn highlight_row(highlight: &Highlight) -> Html {
    html! {
        <div class="mission-point">
            <div class="mission-icon">{ highlight.icon.render("tone-primary") }</div>
            <div>
                <h4>{highlight.title}</h4>
                <p>{highlight.text}</p>
            </div>
        </div>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section tinted">
            <div class="section-inner narrow">
                <h2 class="section-title">{"About ComplySphere"}</h2>
                <p class="about-text">
                    {"At ComplySphere, we bridge the gap between businesses seeking reliable financial services and professional firms offering expert compliance solutions."}
                </p>
                <p class="about-text">
                    {"Whether you're a startup, SME, or enterprise, ComplySphere helps you find verified accounting and compliance partners with transparent pricing and smart automation tools."}
                </p>
                <div class="mission-box">
                    <h3>{"Our Mission"}</h3>
                    <p class="about-text">{"To make compliance effortless and accessible through:"}</p>
                    <div class="grid-2">
                        { for MISSION.iter().map(highlight_row) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .about-text {
                        text-align: center;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        color: var(--foreground-muted);
                        margin-bottom: 2rem;
                    }
                    .mission-box {
                        margin-top: 3rem;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, rgba(69, 102, 255, 0.1), rgba(155, 92, 255, 0.1));
                        border: 1px solid rgba(69, 102, 255, 0.2);
                    }
                    .mission-box h3 {
                        text-align: center;
                        font-size: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .mission-point {
                        display: flex;
                        gap: 1rem;
                    }
                    .mission-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 2.5rem;
                        width: 2.5rem;
                        flex-shrink: 0;
                        border-radius: 0.5rem;
                        background: rgba(69, 102, 255, 0.2);
                    }
                    .mission-icon .icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mission-point h4 {
                        margin-bottom: 0.25rem;
                    }
                    .mission-point p {
                        margin: 0;
                        font-size: 0.875rem;
                        color: var(--foreground-soft);
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(WhoWeServe)]
fn who_we_serve() -> Html {
    html! {
        <section class="section">
            <div class="section-inner">
                <h2 class="section-title audience-title">{"Who We Serve"}</h2>
                <div class="grid-2">
                    { for AUDIENCES.iter().map(|audience| html! {
                        <div class={classes!("audience-card", audience.tone.class())}>
                            <h3>{audience.title}</h3>
                            <ul>
                                { for audience.points.iter().map(|point| html! {
                                    <li>
                                        { Icon::Check.render(audience.tone.class()) }
                                        <span>{*point}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .audience-title {
                        margin-bottom: 4rem;
                    }
                    .audience-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid currentColor;
                        background: linear-gradient(135deg, rgba(69, 102, 255, 0.1), transparent);
                    }
                    .audience-card.tone-accent {
                        background: linear-gradient(135deg, rgba(155, 92, 255, 0.1), transparent);
                    }
                    .audience-card h3 {
                        color: var(--foreground);
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .audience-card ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .audience-card li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .audience-card li .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        margin-top: 0.25rem;
                    }
                    .audience-card li span {
                        color: var(--foreground-muted);
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(FeatureGrid)]
fn feature_grid() -> Html {
    html! {
        <section id="features" class="section">
            <div class="section-inner wide">
                <h2 class="section-title">{"Key Features"}</h2>
                <p class="section-subtitle">{"Powerful tools designed for seamless compliance"}</p>
                <div class="grid-3">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <MotionCard
                            key={index}
                            variant={CardVariant::Feature}
                            {index}
                            title={feature.title}
                            icon={Some((feature.icon, feature.tone))}
                            items={feature.items}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ServiceGrid)]
fn service_grid() -> Html {
    html! {
        <section id="services" class="section">
            <div class="section-inner">
                <h2 class="section-title">{"Services Covered"}</h2>
                <p class="section-subtitle">{"Comprehensive compliance solutions for every stage"}</p>
                <div class="grid-2">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <MotionCard
                            key={index}
                            variant={CardVariant::Service}
                            {index}
                            title={service.title}
                            items={service.items}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyUs)]
fn why_us() -> Html {
    html! {
        <section id="why" class="section tinted">
            <div class="section-inner">
                <h2 class="section-title why-title">{"Why Choose ComplySphere?"}</h2>
                <div class="grid-2">
                    { for WHY_US.iter().map(|reason| html! {
                        <div class="why-card">
                            <div class="why-icon">{ reason.icon.render("tone-primary") }</div>
                            <h3>{reason.title}</h3>
                            <p>{reason.text}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .why-title {
                        margin-bottom: 4rem;
                    }
                    .why-card {
                        padding: 2rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, var(--card), rgba(255, 255, 255, 0.5));
                        border: 1px solid var(--border);
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .why-card:hover {
                        border-color: rgba(69, 102, 255, 0.5);
                        box-shadow: 0 25px 50px rgba(69, 102, 255, 0.1);
                    }
                    .why-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        margin-bottom: 1.5rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, rgba(69, 102, 255, 0.2), rgba(155, 92, 255, 0.2));
                        transition: transform 0.3s ease;
                    }
                    .why-card:hover .why-icon {
                        transform: scale(1.1);
                    }
                    .why-icon .icon {
                        width: 1.75rem;
                        height: 1.75rem;
                    }
                    .why-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }
                    .why-card p {
                        margin: 0;
                        color: var(--foreground-soft);
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action(props: &ContactProps) -> Html {
    html! {
        <section class="section">
            <div class="section-inner narrow">
                <div class="cta-box">
                    <h2 class="section-title">{"Ready to Start Your Global Compliance Journey?"}</h2>
                    <p>
                        {"Join hundreds of startups and businesses already leveraging our platform for seamless international compliance."}
                    </p>
                    <button class="contact-button cta-gradient" onclick={contact_click(&props.on_contact)}>
                        {"Contact Us"}
                        { Icon::ChevronRight.render("") }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .cta-box {
                        text-align: center;
                        padding: 4rem 3rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, rgba(69, 102, 255, 0.1), rgba(155, 92, 255, 0.1));
                        border: 1px solid rgba(69, 102, 255, 0.2);
                    }
                    .cta-box .section-title {
                        margin-bottom: 2rem;
                    }
                    .cta-box p {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        font-size: 1.125rem;
                        line-height: 1.7;
                        color: var(--foreground-muted);
                    }
                    .cta-gradient {
                        background: linear-gradient(90deg, var(--primary), var(--accent));
                    }
                "#}
            </style>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src={config::LOGO_PATH} alt={config::BRAND_NAME} width="32" height="32" />
                            <span>{config::BRAND_NAME}</span>
                        </div>
                        <p class="footer-tagline">
                            {"Bridging global businesses with Indian compliance experts."}
                        </p>
                    </div>
                    { for FOOTER_COLUMNS.iter().map(|column| html! {
                        <div>
                            <h4>{column.heading}</h4>
                            <ul>
                                { for column.links.iter().map(|(label, href)| html! {
                                    <li><a href={*href}>{*label}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|(label, href)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid var(--border);
                        background: rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(8px);
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    @media (min-width: 768px) {
                        .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .footer-tagline, .site-footer ul, .footer-bottom {
                        font-size: 0.875rem;
                        color: var(--foreground-soft);
                    }
                    .site-footer h4 {
                        margin-bottom: 1rem;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .site-footer li {
                        margin-bottom: 0.5rem;
                    }
                    .site-footer a {
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .site-footer a:hover {
                        color: var(--primary);
                    }
                    .footer-bottom {
                        border-top: 1px solid var(--border);
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }
                    .legal-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_page() -> String {
        ServerRenderer::<Landing>::with_props(|| ContactProps {
            on_contact: Callback::noop(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn one_card_per_catalogue_entry() {
        let html = render_page().await;
        assert_eq!(html.matches("motion-card feature-card").count(), FEATURES.len());
        assert_eq!(html.matches("motion-card service-card").count(), SERVICES.len());
    }

    #[tokio::test]
    async fn anchored_sections_exist() {
        let html = render_page().await;
        for id in ["about", "features", "services", "why"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
    }

    #[tokio::test]
    async fn hero_and_cta_both_offer_contact() {
        let html = render_page().await;
        assert_eq!(html.matches("class=\"contact-button").count(), 2);
    }

    #[tokio::test]
    async fn footer_shows_current_year() {
        let html = render_page().await;
        let year = chrono::Utc::now().year();
        assert!(html.contains(&format!("© {} ComplySphere. All rights reserved.", year)));
    }
}
