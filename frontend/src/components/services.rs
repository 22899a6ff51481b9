use yew::prelude::*;

use crate::anchor::Anchor;
use crate::content::SERVICES;
use crate::hooks::reveal::use_reveal;

fn card_id(index: usize) -> String {
    format!("service-{}", index)
}

#[function_component(Services)]
pub fn services() -> Html {
    let visible = use_reveal(Anchor::Services, ());
    let hovered = use_state(|| None::<usize>);

    html! {
        <section id={Anchor::Services.id()} class="section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"My "}<span class="text-gradient">{"Services"}</span></h2>
                    <p>
                        {"Comprehensive solutions combining data science expertise with full-stack development \
                          to deliver impactful results for your business."}
                    </p>
                </div>

                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let mark = visible.mark(card_id(index));
                        let on_enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let on_leave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        let is_hovered = *hovered == Some(index);

                        html! {
                            <div
                                key={index}
                                class={classes!("card", "service-card", mark.class)}
                                style={format!("animation-delay: {}ms", index * 150)}
                                data-reveal={mark.id}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                <div class={classes!("service-icon", service.accent)}>
                                    {service.icon.glyph()}
                                </div>
                                <h3>{service.title}</h3>
                                <p class="muted">{service.description}</p>
                                <ul class="feature-list">
                                    { for service.features.iter().enumerate().map(|(feature_index, feature)| {
                                        let shift = if is_hovered { feature_index * 2 } else { 0 };
                                        html! {
                                            <li
                                                key={*feature}
                                                style={format!(
                                                    "transform: translateX({}px); transition-delay: {}ms",
                                                    shift,
                                                    feature_index * 50
                                                )}
                                            >
                                                <span class="dot"></span>
                                                {*feature}
                                            </li>
                                        }
                                    }) }
                                </ul>
                                <button class="btn btn-ghost">
                                    <span>{"Learn More"}</span>
                                    <span class="btn-arrow">{"→"}</span>
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
