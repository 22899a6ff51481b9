use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config;
use crate::content::OWNER_NAME;
use crate::dom::scroll_to_anchor;

/// Click handler that smooth-scrolls to `anchor` instead of following the href.
pub fn scroll_link(anchor: Anchor, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Err(err) = scroll_to_anchor(anchor) {
            warn!("cannot scroll to {}: {}", anchor.href(), err);
        }
        if let Some(after) = &after {
            after.emit(());
        }
    })
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(scroll_y as i32 > config::NAV_SCROLL_THRESHOLD);
                        }
                    }
                });

                if let Err(err) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("scroll listener not attached: {:?}", err);
                }

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };

            move || destructor()
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 12px rgba(0,0,0,0.08);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        text-decoration: none;
                        color: inherit;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        text-decoration: none;
                        color: inherit;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: currentColor;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem 2rem;
                            background: #fff;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href={Anchor::Home.href()} class="nav-logo" onclick={scroll_link(Anchor::Home, Some(close_menu.clone()))}>
                    {OWNER_NAME}
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for Anchor::ALL.into_iter().map(|anchor| html! {
                        <a
                            key={anchor.id()}
                            href={anchor.href()}
                            class="nav-link"
                            onclick={scroll_link(anchor, Some(close_menu.clone()))}
                        >
                            {anchor.label()}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
