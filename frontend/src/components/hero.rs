use yew::prelude::*;

use crate::anchor::Anchor;
use crate::components::navigation::scroll_link;
use crate::content::{self, Icon};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={Anchor::Home.id()} class="hero">
            <div class="hero-gradient"></div>
            <div class="hero-grid">
                <div class="hero-content animate-fade-in">
                    <span class="hero-badge">{"Welcome to my Portfolio"}</span>
                    <h1 class="hero-title">
                        {"Hi, I'm "}
                        <span class="text-gradient">{content::OWNER_NAME}</span>
                    </h1>
                    <p class="hero-tagline">{content::TAGLINE}</p>
                    <p class="hero-bio">{content::BIO}</p>

                    <div class="hero-actions">
                        <button class="btn btn-cta" onclick={scroll_link(Anchor::Portfolio, None)}>
                            {"View My Work"}
                            <span class="btn-arrow">{"→"}</span>
                        </button>
                        // the CV is requested through the contact form
                        <button class="btn btn-outline" onclick={scroll_link(Anchor::Contact, None)}>
                            {"Download CV"}
                        </button>
                    </div>

                    <div class="hero-social">
                        <a href={content::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            {Icon::Github.glyph()}
                        </a>
                        <a href={content::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            {Icon::Linkedin.glyph()}
                        </a>
                    </div>

                    <div class="hero-skills">
                        { for content::HERO_SKILLS.iter().map(|skill| html! {
                            <span key={*skill} class="pill">{*skill}</span>
                        }) }
                    </div>
                </div>

                <div class="hero-portrait">
                    <img
                        src="/assets/hero-portrait.jpg"
                        alt={format!("{} - {}", content::OWNER_NAME, content::JOB_TITLE)}
                    />
                    <span class="floating floating-top">{"🚀"}</span>
                    <span class="floating floating-bottom">{"💻"}</span>
                </div>
            </div>
        </section>
    }
}
