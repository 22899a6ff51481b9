use log::warn;
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, navigation::Navigation,
    portfolio::Portfolio, services::Services,
};
use crate::structured_data::person_json_ld;

const PAGE_CSS: &str = r#"
    :root {
        --primary: #1e3a8a;
        --secondary: #0ea5e9;
        --accent: #f97316;
        --muted: #64748b;
        --section-bg: #f8fafc;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #0f172a;
        scroll-behavior: smooth;
    }
    @keyframes fadeIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .animate-fade-in {
        animation: fadeIn 0.7s ease-out both;
    }
    .reveal-hidden {
        opacity: 0;
    }
    .text-gradient {
        background: linear-gradient(45deg, var(--primary), var(--secondary));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .muted { color: var(--muted); }
    .section { padding: 5rem 0; position: relative; }
    .section-muted { background: var(--section-bg); }
    .section-inner { max-width: 80rem; margin: 0 auto; padding: 0 2rem; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2 { font-size: 2.25rem; margin-bottom: 1rem; }
    .card {
        background: #fff;
        border-radius: 12px;
        padding: 1.5rem;
        box-shadow: 0 4px 16px rgba(15, 23, 42, 0.06);
        transition: transform 0.5s ease, box-shadow 0.5s ease;
    }
    .card:hover {
        transform: translateY(-4px);
        box-shadow: 0 12px 32px rgba(30, 58, 138, 0.15);
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        gap: 2rem;
    }
    .badge {
        display: inline-block;
        padding: 0.15rem 0.6rem;
        border-radius: 999px;
        font-size: 0.75rem;
        border: 1px solid rgba(30, 58, 138, 0.2);
    }
    .badge-secondary { background: #e2e8f0; border-color: transparent; }
    .badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        padding: 0.6rem 1.25rem;
        border-radius: 8px;
        border: 1px solid transparent;
        cursor: pointer;
        text-decoration: none;
        font-weight: 500;
    }
    .btn-cta { background: linear-gradient(45deg, var(--primary), var(--secondary)); color: #fff; }
    .btn-outline { background: transparent; border-color: #cbd5e1; color: inherit; }
    .btn-ghost { background: transparent; width: 100%; justify-content: space-between; }
    .btn-block { width: 100%; }
    .btn:disabled { opacity: 0.6; cursor: not-allowed; }
    .filter-bar { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 3rem; }
    .field { display: flex; flex-direction: column; gap: 0.4rem; margin-bottom: 1rem; }
    .field-label.focused { color: var(--primary); }
    .field input, .field textarea {
        padding: 0.6rem 0.8rem;
        border: 1px solid #cbd5e1;
        border-radius: 8px;
        font: inherit;
        resize: none;
    }
    .form-error { color: #dc2626; }
    @keyframes spin { to { transform: rotate(360deg); } }
    .spinner {
        width: 1rem;
        height: 1rem;
        border: 2px solid rgba(255,255,255,0.3);
        border-top-color: #fff;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    .footer { background: var(--primary); color: #fff; padding: 3rem 2rem; }
    .footer a { color: inherit; }
"#;

#[function_component(Index)]
pub fn index() -> Html {
    let json_ld = match person_json_ld() {
        Ok(json) => Some(json),
        Err(err) => {
            warn!("structured data skipped: {}", err);
            None
        }
    };

    html! {
        <div class="page">
            <style>{PAGE_CSS}</style>
            if let Some(json_ld) = json_ld {
                <script type="application/ld+json">{json_ld}</script>
            }

            <Navigation />
            <main>
                <Hero />
                <About />
                <Services />
                <Portfolio />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
