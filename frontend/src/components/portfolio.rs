use yew::prelude::*;

use crate::anchor::Anchor;
use crate::content::{Project, PROJECTS};
use crate::hooks::reveal::use_reveal;
use crate::state::filter::{ProjectFilter, CATEGORIES};

/// How many features a card lists before it is cut off.
const FEATURES_SHOWN: usize = 3;

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    position: usize,
    reveal_class: &'static str,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <div
            class={classes!("card", "project-card", props.reveal_class)}
            style={format!("animation-delay: {}ms", props.position * 200)}
            data-reveal={project.id}
        >
            <div class="project-image">
                <img src={project.image} alt={project.title} />
                <div class="project-overlay">
                    <a href={project.github} target="_blank" rel="noopener noreferrer" aria-label="Source code">{"🐙"}</a>
                    <a href={project.demo} target="_blank" rel="noopener noreferrer" aria-label="Live demo">{"👁"}</a>
                </div>
            </div>

            <div class="project-header">
                <span class="badge badge-outline">{project.category}</span>
                <span class="featured">{"⭐ Featured"}</span>
            </div>
            <h3>{project.title}</h3>
            <p class="muted">{project.description}</p>

            <h4 class="text-gradient">{"Key Features:"}</h4>
            <ul class="feature-list">
                { for project.features.iter().take(FEATURES_SHOWN).map(|feature| html! {
                    <li key={*feature}><span class="dot"></span>{*feature}</li>
                }) }
            </ul>

            <span class="tech-label">{"Tech Stack"}</span>
            <div class="badges">
                { for project.tech.iter().map(|tech| html! {
                    <span key={*tech} class="badge badge-secondary">{*tech}</span>
                }) }
            </div>

            <div class="project-actions">
                <a class="btn btn-outline" href={project.github} target="_blank" rel="noopener noreferrer">{"Code"}</a>
                <a class="btn btn-secondary" href={project.demo} target="_blank" rel="noopener noreferrer">{"Live Demo"}</a>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(ProjectFilter::new);
    // New cards appear when the filter changes and need observing too.
    let visible = use_reveal(Anchor::Portfolio, filter.selected().to_string());

    html! {
        <section id={Anchor::Portfolio.id()} class="section section-muted">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"My "}<span class="text-gradient">{"Portfolio"}</span></h2>
                    <p>
                        {"A showcase of my projects spanning data analytics, web development, \
                          and machine learning solutions that solve real-world problems."}
                    </p>
                </div>

                <div class="filter-bar">
                    { for CATEGORIES.iter().enumerate().map(|(index, &category)| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*filter).clone();
                                next.select_category(category);
                                filter.set(next);
                            })
                        };
                        let variant = if filter.is_active(category) { "btn-cta" } else { "btn-outline" };
                        html! {
                            <button
                                key={category}
                                class={classes!("btn", variant)}
                                style={format!("animation-delay: {}ms", index * 100)}
                                onclick={onclick}
                            >
                                {category}
                            </button>
                        }
                    }) }
                </div>

                <div class="card-grid">
                    { for filter.visible_projects(PROJECTS).into_iter().enumerate().map(|(position, project)| html! {
                        <ProjectCard
                            key={project.id}
                            project={project}
                            position={position}
                            reveal_class={visible.reveal_class(project.id)}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
