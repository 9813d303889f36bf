use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    contact::Contact, faq::Faq, nomination_form::NominationForm, timeline::Timeline,
};
use crate::content::{Icon, FEATURES, TERMS};
use crate::dom::{scroll_to_section, NOMINATION_FORM_ID};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub applications_open: bool,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let apply = Callback::from(|_: MouseEvent| scroll_to_section(NOMINATION_FORM_ID));

    html! {
        <main class="home-page">
            <section class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <div class="coming-soon">
                        <span class="pulse-dot"></span>
                        {"Coming Soon"}
                    </div>
                    <h1>{"Aarambh 1.0"}</h1>
                    <h2>
                        {"India's First "}
                        <span class="brand-text">{"Execution-Based"}</span>
                        {" Startup Event"}
                    </h2>
                    <p class="hero-lead">
                        {"Let's take your idea to a "}
                        <span class="strong">{"working prototype"}</span>
                        {" within 7 days"}
                    </p>
                    <p class="hero-sub">
                        {"Turn ideas into validated prototypes with mentorship, resources, and investor access."}
                    </p>
                    if props.applications_open {
                        <button class="primary-button pill large" onclick={apply}>
                            {"Apply / Nominate Yourself "}{Icon::ArrowRight.glyph()}
                        </button>
                    }
                </div>
            </section>

            <Timeline />

            <section class="features-section">
                <div class="section-inner wide">
                    <h2 class="section-title">{"What You'll Get"}</h2>
                    <p class="section-subtitle">{"Everything you need to turn your idea into reality"}</p>
                    <div class="feature-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div key={feature.title} class="card feature-card">
                                <div class="feature-icon">{feature.icon.glyph()}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            if props.applications_open {
                <NominationForm />
            }

            <Faq />

            <section class="terms-section">
                <div class="section-inner narrow">
                    <h2 class="section-title">{"Terms & Conditions"}</h2>
                    <ul class="terms-list">
                        { for TERMS.iter().map(|term| html! {
                            <li key={*term}>
                                <span class="bullet">{"•"}</span>
                                <span>{*term}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </section>

            <Contact />

            <footer class="page-footer">
                <p>{"© 2026 FounderSmith. All rights reserved."}</p>
            </footer>

            <style>
                {r#"
                :root {
                    --brand: #78038a;
                    --brand-hover: #9b0baf;
                    --background: #ffffff;
                    --background-translucent: rgba(255, 255, 255, 0.95);
                    --foreground: #0a0a0a;
                    --muted-foreground: #737373;
                    --card: #ffffff;
                    --secondary: #f5f5f5;
                    --border: #e5e5e5;
                }

                html.dark {
                    --background: #0a0a0a;
                    --background-translucent: rgba(10, 10, 10, 0.95);
                    --foreground: #fafafa;
                    --muted-foreground: #a3a3a3;
                    --card: #141414;
                    --secondary: #262626;
                    --border: #262626;
                }

                body {
                    margin: 0;
                    min-height: 100vh;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                }

                .section-inner {
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                }

                .section-inner.narrow {
                    max-width: 48rem;
                }

                .section-inner.wide {
                    max-width: 64rem;
                }

                .section-title {
                    margin: 0 0 1rem;
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .section-subtitle {
                    margin: 0 0 3rem;
                    text-align: center;
                    color: var(--muted-foreground);
                }

                .timeline-section .section-subtitle {
                    margin-bottom: 4rem;
                }

                .card {
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    background: var(--card);
                    padding: 1.5rem;
                }

                input, textarea, select {
                    box-sizing: border-box;
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid var(--border);
                    border-radius: 6px;
                    background: var(--background);
                    color: var(--foreground);
                    font: inherit;
                    resize: none;
                }

                input:focus, textarea:focus, select:focus {
                    outline: none;
                    border-color: var(--brand);
                }

                .primary-button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--brand);
                    color: #fff;
                    font: inherit;
                    cursor: pointer;
                    transition: background 0.2s;
                }

                .primary-button:hover {
                    background: var(--brand-hover);
                }

                .primary-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .primary-button.pill {
                    border-radius: 9999px;
                }

                .primary-button.large {
                    padding: 1.25rem 2rem;
                    font-size: 1.125rem;
                }

                .primary-button.full-width {
                    width: 100%;
                }

                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1.5rem;
                    text-align: center;
                }

                .hero-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(120, 3, 138, 0.1), transparent);
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .coming-soon {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(120, 3, 138, 0.3);
                    border-radius: 9999px;
                    background: rgba(120, 3, 138, 0.1);
                    color: var(--brand);
                    font-size: 0.875rem;
                }

                .pulse-dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: var(--brand);
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                .hero h1 {
                    margin: 0 0 1rem;
                    font-size: 4.5rem;
                    line-height: 1.1;
                    color: var(--brand);
                }

                .hero h2 {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 600;
                }

                .brand-text {
                    color: var(--brand);
                }

                .hero-lead {
                    margin: 0 0 0.5rem;
                    color: var(--muted-foreground);
                }

                .hero-lead .strong {
                    font-weight: 600;
                    color: var(--foreground);
                }

                .hero-sub {
                    margin: 0 0 2rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .feature-card {
                    transition: border-color 0.2s;
                }

                .feature-card:hover {
                    border-color: rgba(120, 3, 138, 0.3);
                }

                .feature-icon {
                    display: flex;
                    width: 40px;
                    height: 40px;
                    margin-bottom: 1rem;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid rgba(120, 3, 138, 0.3);
                    border-radius: 8px;
                    background: rgba(120, 3, 138, 0.1);
                }

                .feature-card h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1rem;
                }

                .feature-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }

                .terms-list {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }

                .terms-list li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                    color: var(--muted-foreground);
                }

                .terms-list .bullet {
                    flex-shrink: 0;
                    color: var(--brand);
                }

                .page-footer {
                    padding: 2rem 1.5rem;
                    border-top: 1px solid var(--border);
                    background: var(--card);
                    text-align: center;
                }

                .page-footer p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }

                @media (max-width: 768px) {
                    .feature-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero h2 {
                        font-size: 1.5rem;
                    }

                    .section-title {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
