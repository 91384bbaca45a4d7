//! Content blocks for each page section.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are rendered inside `<section id=...>` wrappers by the portfolio
//! page; the wrapper ids are what the scroll-spy measures.

use leptos::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::content::{GITHUB_PROFILE_URL, OWNER_HANDLE, PROJECTS, Project, SKILL_GROUPS};

/// Landing hero with the owner's handle.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">
                <AnimatedText text=OWNER_HANDLE/>
            </h1>
            <p class="hero__subtitle reveal">
                "Développeur passionné & futur ingénieur en cybersécurité."
                <br/>
                "Bienvenue sur mon portfolio."
            </p>
        </div>
    }
}

#[component]
pub fn Objective() -> impl IntoView {
    view! {
        <div class="page-block objective">
            <h2 class="section-title">
                <AnimatedText text="Mon Objectif Professionnel"/>
            </h2>
            <p class="reveal">
                "Je suis actuellement en quête de devenir "
                <strong>"Ingénieur en Cybersécurité"</strong>
                ". Ma passion ne se limite pas à la programmation ; elle s'étend à la protection des systèmes, \
                 à la compréhension des menaces et à la création d'un environnement numérique plus sûr."
            </p>
            <p class="reveal">
                "Mon objectif est de combiner mes compétences en développement (Rust, Python, C#) avec une \
                 expertise pointue en sécurité des réseaux et des applications pour travailler activement dans \
                 la cyberdéfense, l'analyse de menaces ou le pentesting."
            </p>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="page-block">
            <h2 class="section-title">
                <AnimatedText text="Mes Compétences"/>
            </h2>
            <div class="skills-grid">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skill-category">
                                <h3 class="skill-category__title">{group.title}</h3>
                                <ul class="skill-list">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| view! { <li class="skill-tag">{*item}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Project cards. AI projects get a button that opens the agent chat.
#[component]
pub fn Projects(on_try_agent: Callback<()>) -> impl IntoView {
    view! {
        <div class="page-block">
            <h2 class="section-title">
                <AnimatedText text="Mes Projets"/>
            </h2>
            <div class="projects-grid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project={*project} on_try_agent=on_try_agent/> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, on_try_agent: Callback<()>) -> impl IntoView {
    view! {
        <div class="project-card">
            <div>
                <h3 class="project-card__name">{project.name}</h3>
                <p>{project.description}</p>
                <div class="project-card__tags">
                    {project.tags.iter().map(|tag| view! { <span class="project-tag">{*tag}</span> }).collect_view()}
                </div>
            </div>
            <div class="project-card__links">
                <a class="btn" href=project.github_url target="_blank" rel="noopener noreferrer">
                    "Voir sur GitHub"
                </a>
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a class="btn" href=url>
                                "Voir en ligne"
                            </a>
                        }
                    })}
                {project
                    .has_agent_demo()
                    .then(|| {
                        view! {
                            <button class="btn btn--accent" on:click=move |_| on_try_agent.run(())>
                                "Tester l'IA"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <div class="page-block">
            <h2 class="section-title">
                <AnimatedText text="Expérience"/>
            </h2>
            <p class="reveal">
                "Je suis actuellement étudiant et je concentre mes efforts sur des projets personnels et \
                 académiques pour bâtir mon expérience pratique."
            </p>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="page-block contact">
            <h2 class="section-title">
                <AnimatedText text="Me Contacter"/>
            </h2>
            <p class="reveal contact__lead">
                "Un projet, une question ou juste envie de discuter ? Retrouvez-moi sur GitHub."
            </p>
            <div class="contact__links">
                <a class="btn" href=GITHUB_PROFILE_URL target="_blank" rel="noopener noreferrer">
                    {format!("github.com/{OWNER_HANDLE}")}
                </a>
            </div>
        </div>
    }
}
