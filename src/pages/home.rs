use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::effects::{particles, reveal, scroll, tilt};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub glyph: String,
    pub title: String,
    pub blurb: String,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with_deps(
            move |_| {
                let tilt_handle = card_ref.cast::<HtmlElement>().map(tilt::mount);
                move || drop(tilt_handle)
            },
            (),
        );
    }

    html! {
        <div class="service-card reveal-up" ref={card_ref}>
            <div class="card-glyph">{ props.glyph.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.blurb.clone() }</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let canvas_ref = use_node_ref();

    // Wire the document-level effects once the page is in the DOM; the
    // cleanup drops the handles, which detach their listeners and loops.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let reveal_targets = document.as_ref().and_then(reveal::mount);
                let anchor_scroll = document.as_ref().map(scroll::mount);
                let backdrop = canvas_ref.cast::<HtmlCanvasElement>().and_then(particles::mount);
                move || {
                    drop(reveal_targets);
                    drop(anchor_scroll);
                    drop(backdrop);
                }
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <header id="hero" class="hero">
                <canvas id="hero-canvas" ref={canvas_ref}></canvas>
                <div class="hero-content">
                    <p class="hero-kicker">{"Kyanite Studio"}</p>
                    <h1 class="hero-title">
                        {"Interfaces with a pulse."}
                    </h1>
                    <p class="hero-subtitle">
                        {"We design and build product sites, brand experiences and \
                          interactive tools that feel alive without getting in the way."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#services" class="hero-cta">{"See what we do"}</a>
                        <a href="#contact" class="hero-link">{"Talk to us"}</a>
                    </div>
                </div>
            </header>

            <section id="services" class="services">
                <div class="section-head reveal-up">
                    <h2>{"What we do"}</h2>
                    <p>{"Small team, narrow focus: the layer your users actually touch."}</p>
                </div>
                <div class="services-grid">
                    <ServiceCard
                        glyph="◈"
                        title="Product sites"
                        blurb="Marketing pages that load fast, read well and move just enough."
                    />
                    <ServiceCard
                        glyph="◇"
                        title="Interaction design"
                        blurb="Hover, scroll and motion states designed as one system, not garnish."
                    />
                    <ServiceCard
                        glyph="▣"
                        title="Design systems"
                        blurb="Tokens, components and docs your team can extend without us."
                    />
                    <ServiceCard
                        glyph="◎"
                        title="Creative canvases"
                        blurb="Generative backdrops and data-driven visuals tuned to stay subtle."
                    />
                    <ServiceCard
                        glyph="△"
                        title="Performance passes"
                        blurb="We profile the jank out of pages other studios shipped."
                    />
                    <ServiceCard
                        glyph="✦"
                        title="Prototypes"
                        blurb="Clickable proofs in days, honest enough to kill bad ideas early."
                    />
                </div>
            </section>

            <section id="studio" class="studio">
                <div class="section-head reveal-up">
                    <h2>{"The studio"}</h2>
                </div>
                <div class="studio-body reveal-up">
                    <p>
                        {"Kyanite is four people in two time zones. We take on a handful \
                          of projects a year and stay close to the work: the people you \
                          meet in the first call are the people pushing commits in the \
                          last week."}
                    </p>
                    <p>
                        {"Every engagement ends with a handover your own engineers sign \
                          off on. If it cannot be maintained without us, we consider it \
                          unfinished."}
                    </p>
                </div>
                <div class="studio-stats">
                    <div class="stat reveal-up">
                        <span class="stat-number">{"9"}</span>
                        <span class="stat-label">{"years running"}</span>
                    </div>
                    <div class="stat reveal-up">
                        <span class="stat-number">{"60+"}</span>
                        <span class="stat-label">{"sites shipped"}</span>
                    </div>
                    <div class="stat reveal-up">
                        <span class="stat-number">{"4"}</span>
                        <span class="stat-label">{"people, no handoffs"}</span>
                    </div>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="section-head reveal-up">
                    <h2>{"Start a project"}</h2>
                    <p>
                        {"Tell us what you are building and where it is stuck. \
                          We reply within two working days."}
                    </p>
                    <a class="contact-mail" href="mailto:hello@kyanite.studio">
                        {"hello@kyanite.studio"}
                    </a>
                </div>
            </section>

            <footer class="footer">
                <span>{"© 2026 Kyanite Studio"}</span>
                <a href="#hero" class="footer-top">{"Back to top"}</a>
            </footer>

            <style>{ STYLE }</style>
        </div>
    }
}

const STYLE: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: auto;
}

body {
    background: #060b14;
    color: #e8f1f5;
    font-family: system-ui, sans-serif;
    line-height: 1.6;
}

/* Navbar */

.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 10;
    padding: 1.2rem 0;
    background: transparent;
    transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
}

.navbar.scrolled {
    padding: 0.7rem 0;
    background: rgba(6, 11, 20, 0.88);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 0 rgba(0, 240, 255, 0.12);
}

.nav-content {
    max-width: 1100px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    color: #00f0ff;
    font-weight: 700;
    font-size: 1.2rem;
    letter-spacing: 0.12em;
    text-decoration: none;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 1.8rem;
}

.nav-link {
    color: #a9bcc6;
    text-decoration: none;
    font-size: 0.95rem;
    transition: color 0.2s ease;
}

.nav-link:hover {
    color: #e8f1f5;
}

.nav-cta {
    color: #041016;
    background: #00f0ff;
    padding: 0.5rem 1.1rem;
    border-radius: 999px;
    text-decoration: none;
    font-size: 0.9rem;
    font-weight: 600;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-menu span {
    width: 22px;
    height: 2px;
    background: #e8f1f5;
}

@media (max-width: 760px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 1rem;
        padding: 1.2rem 1.5rem;
        background: rgba(6, 11, 20, 0.96);
    }
}

/* Hero */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

#hero-canvas {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
}

.hero-content {
    position: relative;
    z-index: 1;
    max-width: 760px;
    padding: 0 1.5rem;
    text-align: center;
}

.hero-kicker {
    color: #00ffdd;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    font-size: 0.8rem;
    margin-bottom: 1rem;
}

.hero-title {
    font-size: clamp(2.4rem, 6vw, 4rem);
    line-height: 1.1;
    margin-bottom: 1.2rem;
}

.hero-subtitle {
    color: #a9bcc6;
    font-size: 1.1rem;
    margin-bottom: 2rem;
}

.hero-cta-group {
    display: flex;
    gap: 1.4rem;
    justify-content: center;
    align-items: center;
}

.hero-cta {
    background: #00f0ff;
    color: #041016;
    padding: 0.8rem 1.8rem;
    border-radius: 999px;
    text-decoration: none;
    font-weight: 600;
}

.hero-link {
    color: #a9bcc6;
    text-decoration: none;
    border-bottom: 1px solid rgba(169, 188, 198, 0.4);
}

/* Reveal targets */

.reveal-up {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.reveal-up.active {
    opacity: 1;
    transform: none;
}

/* Sections */

section {
    max-width: 1100px;
    margin: 0 auto;
    padding: 6rem 1.5rem;
}

.section-head h2 {
    font-size: 2rem;
    margin-bottom: 0.6rem;
}

.section-head p {
    color: #a9bcc6;
}

/* Services */

.services-grid {
    margin-top: 3rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 1.5rem;
}

.service-card {
    background: rgba(14, 24, 38, 0.8);
    border: 1px solid rgba(0, 240, 255, 0.12);
    border-radius: 14px;
    padding: 2rem 1.6rem;
    transform-style: preserve-3d;
    will-change: transform;
}

.card-glyph {
    color: #00f0ff;
    font-size: 1.6rem;
    margin-bottom: 1rem;
}

.service-card h3 {
    margin-bottom: 0.6rem;
    font-size: 1.15rem;
}

.service-card p {
    color: #a9bcc6;
    font-size: 0.95rem;
}

/* Studio */

.studio-body {
    max-width: 640px;
    margin-top: 2rem;
    display: grid;
    gap: 1.2rem;
    color: #c4d3db;
}

.studio-stats {
    margin-top: 3rem;
    display: flex;
    flex-wrap: wrap;
    gap: 3rem;
}

.stat {
    display: flex;
    flex-direction: column;
}

.stat-number {
    color: #00ffdd;
    font-size: 2.2rem;
    font-weight: 700;
}

.stat-label {
    color: #a9bcc6;
    font-size: 0.9rem;
}

/* Contact & footer */

.contact {
    text-align: center;
}

.contact-mail {
    display: inline-block;
    margin-top: 1.6rem;
    color: #00f0ff;
    font-size: 1.4rem;
    text-decoration: none;
    border-bottom: 1px solid rgba(0, 240, 255, 0.4);
}

.footer {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem 1.5rem;
    display: flex;
    justify-content: space-between;
    color: #5e7280;
    font-size: 0.85rem;
    border-top: 1px solid rgba(169, 188, 198, 0.12);
}

.footer-top {
    color: #5e7280;
    text-decoration: none;
}
"#;
