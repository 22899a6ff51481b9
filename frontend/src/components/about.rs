use yew::prelude::*;

use crate::anchor::Anchor;
use crate::content::{self, Icon};
use crate::hooks::reveal::use_reveal;

#[function_component(About)]
pub fn about() -> Html {
    let visible = use_reveal(Anchor::About, ());

    html! {
        <section id={Anchor::About.id()} class="section section-muted">
            <div class="section-inner">
                <div class={classes!("section-header", visible.reveal_class("about-header"))} data-reveal="about-header">
                    <h2>{"About "}<span class="text-gradient">{"Me"}</span></h2>
                    <p>
                        {"Passionate about innovation and research, I combine academic excellence \
                          with practical experience to solve real-world problems through data and technology."}
                    </p>
                </div>

                <div class="about-columns">
                    <div class={classes!("about-column", visible.reveal_class("about-education"))} data-reveal="about-education">
                        <h3>{Icon::GraduationCap.glyph()}{" Education"}</h3>
                        { for content::EDUCATION.iter().enumerate().map(|(index, edu)| {
                            let mark = visible.mark(format!("education-{}", index));
                            html! {
                                <div key={index} class={classes!("card", "card-primary", mark.class)} data-reveal={mark.id}>
                                    <span class="card-icon">{Icon::GraduationCap.glyph()}</span>
                                    <div>
                                        <h4>{edu.degree}</h4>
                                        if let Some(specialization) = edu.specialization {
                                            <p class="text-gradient">{specialization}</p>
                                        }
                                        <p class="muted">{edu.institution}</p>
                                        <span class="badge">{edu.year}</span>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>

                    <div class={classes!("about-column", visible.reveal_class("about-achievements"))} data-reveal="about-achievements">
                        <h3>{Icon::Award.glyph()}{" Key Achievements"}</h3>
                        { for content::ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| {
                            let mark = visible.mark(format!("achievement-{}", index));
                            html! {
                                <div key={index} class={classes!("card", "card-secondary", mark.class)} data-reveal={mark.id}>
                                    <span class="card-icon">{achievement.icon.glyph()}</span>
                                    <div>
                                        <h4>{achievement.title}</h4>
                                        <p class="muted">{achievement.description}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>

                <div class={classes!("skills", visible.reveal_class("about-skills"))} data-reveal="about-skills">
                    <h3>{Icon::Code.glyph()}{" Technical Skills"}</h3>
                    <div class="skills-grid">
                        { for content::SKILL_GROUPS.iter().enumerate().map(|(index, group)| {
                            let mark = visible.mark(format!("skills-{}", index));
                            html! {
                                <div
                                    key={group.category}
                                    class={classes!("card", mark.class)}
                                    style={format!("animation-delay: {}ms", index * 100)}
                                    data-reveal={mark.id}
                                >
                                    <h4>{group.category}</h4>
                                    <div class="badges">
                                        { for group.skills.iter().map(|skill| html! {
                                            <span key={*skill} class="badge badge-secondary">{*skill}</span>
                                        }) }
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
