use chrono::{Datelike, Utc};
use log::warn;
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::components::navigation::scroll_link;
use crate::content::{self, QuickLink, FOOTER_LINKS, QUICK_LINKS};

fn quick_link(link: &QuickLink) -> Html {
    let onclick = match Anchor::from_href(link.href) {
        Some(anchor) => scroll_link(anchor, None),
        None => {
            warn!("quick link {} points at no section", link.href);
            Callback::noop()
        }
    };
    html! {
        <li key={link.href}>
            <a href={link.href} onclick={onclick}>{link.name}</a>
        </li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <h3>{content::OWNER_NAME}</h3>
                    <p>
                        {"Data Analyst and Software Developer passionate about transforming \
                          data into insights and building scalable web solutions."}
                    </p>
                    <div class="footer-social">
                        { for FOOTER_LINKS.iter().map(|link| html! {
                            <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer" aria-label={link.label}>
                                {link.icon.glyph()}
                            </a>
                        }) }
                    </div>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { for QUICK_LINKS.iter().map(quick_link) }
                    </ul>
                </div>

                <div>
                    <h4>{"Get In Touch"}</h4>
                    <p>{content::EMAIL}</p>
                    <p>{content::PHONE}</p>
                    <p>{"Kanpur, UP, India"}</p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", current_year, content::OWNER_NAME)}</p>
                <p>{"Made with ❤ using Rust & Yew"}</p>
            </div>
        </footer>
    }
}
